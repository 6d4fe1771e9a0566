use rand::Rng;

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec!['x'];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, ['x']);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut first_seen = [0usize; 3];

        for _ in 0..3000 {
            let mut items = [0, 1, 2];
            shuffle(&mut items, &mut rng);
            first_seen[items[0]] += 1;
        }

        // Each element should lead roughly a third of the time.
        for count in first_seen {
            assert!((800..1200).contains(&count), "skewed count {}", count);
        }
    }
}
