//! Fisher-Yates shuffle over an injected random source.
//!
//! Every random decision in the engine goes through a caller-supplied
//! `Rng`, so tests can pass a seeded `StdRng` and get repeatable quizzes.

use rand::Rng;

/// Shuffle `items` in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `items` and keep the first `n`.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle(&mut shuffled, rng);
    shuffled.truncate(n);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut a: Vec<u32> = (0..10).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(42));
        shuffle(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn sample_truncates_without_replacement() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample(&[1, 2, 3, 4, 5], 3, &mut rng);
        assert_eq!(picked.len(), 3);

        let mut dedup = picked.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn sample_larger_than_input_returns_all() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample(&[1, 2], 10, &mut rng).len(), 2);
    }
}
