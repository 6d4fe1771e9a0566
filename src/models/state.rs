/// Screen currently shown by the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Quiz,
    Result,
}
