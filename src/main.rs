use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use clap::builder::TypedValueParser;
use pool_quiz::{DEFAULT_OPTIONS_COUNT, OptionSynthesizer, Quiz};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,

    /// JSON file mapping categories to answer entries
    #[arg(short, long, default_value = "answers.json")]
    answers: PathBuf,

    /// Number of choices shown per question
    #[arg(short, long, default_value_t = DEFAULT_OPTIONS_COUNT,
          value_parser = clap::value_parser!(u8).range(1..=26).map(usize::from))]
    options: usize,

    /// Print the synthesized options as JSON lines instead of starting the UI
    #[arg(long)]
    dump: bool,

    /// Write logs to this file (the terminal UI never logs to the screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &args.log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init();
    } else if args.dump {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    let synthesizer = OptionSynthesizer::new(args.options);
    let quiz = match Quiz::from_json(&args.questions, &args.answers, synthesizer) {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!(%e, "could not load quiz data");
            eprintln!("Error loading quiz data: {}", e);
            std::process::exit(1);
        }
    };

    let result = if args.dump {
        quiz.dump(io::stdout().lock())
    } else {
        quiz.run()
    };

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults_and_options_range() {
        let args = Args::try_parse_from(["pool-quiz"]).unwrap();
        assert_eq!(args.questions, PathBuf::from("questions.json"));
        assert_eq!(args.answers, PathBuf::from("answers.json"));
        assert_eq!(args.options, DEFAULT_OPTIONS_COUNT);
        assert!(!args.dump);

        let args = Args::try_parse_from(["pool-quiz", "--options", "6", "--dump"]).unwrap();
        assert_eq!(args.options, 6);
        assert!(args.dump);

        assert!(Args::try_parse_from(["pool-quiz", "--options", "0"]).is_err());
        assert!(Args::try_parse_from(["pool-quiz", "--options", "27"]).is_err());
    }
}
