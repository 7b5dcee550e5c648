//! Tournament selection.
//!
//! Each tournament draws `k` **distinct** members uniformly at random and
//! returns the fittest. Two tournaments run for every offspring and are
//! independent of each other, so both may pick the same individual.
//!
//! Fitness here is maximized (higher is better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

/// Runs one tournament over `fitnesses` and returns the winner's index.
///
/// Ties go to the competitor drawn first.
///
/// # Panics
/// Panics if `fitnesses` is empty or `k > fitnesses.len()`. Engine
/// configuration validation rules both out.
pub fn tournament<R: Rng + ?Sized>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let k = k.max(1);
    let mut competitors = index::sample(rng, fitnesses.len(), k).into_iter();
    let mut best = competitors
        .next()
        .expect("tournament draws at least one competitor");
    for idx in competitors {
        if fitnesses[idx] > fitnesses[best] {
            best = idx;
        }
    }
    best
}

/// Selects two parents with independent tournaments.
pub fn select_parents<R: Rng + ?Sized>(
    fitnesses: &[f64],
    k: usize,
    rng: &mut R,
) -> (usize, usize) {
    let first = tournament(fitnesses, k, rng);
    let second = tournament(fitnesses, k, rng);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_full_tournament_always_picks_best() {
        // k == n without replacement sees every member.
        let fits = [0.1, 0.5, 0.9, 0.3];
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert_eq!(tournament(&fits, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_worst_never_wins_with_k_two() {
        let fits = [0.1, 0.5, 0.9, 0.3];
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert_ne!(tournament(&fits, 2, &mut rng), 0);
        }
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let fits = [0.1, 0.5, 0.9, 0.3];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&fits, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_fitter() {
        let fits = [0.1, 0.5, 0.9, 0.3, 0.2, 0.4];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 6];
        for _ in 0..10000 {
            counts[tournament(&fits, 3, &mut rng)] += 1;
        }
        // P(best in a 3-of-6 draw) = 1/2
        assert!(counts[2] > 4500, "got {counts:?}");
        assert_eq!(counts[0], 0, "two fitter rivals always exist");
    }

    #[test]
    fn test_equal_fitness_first_drawn_wins() {
        let fits = [0.5; 4];
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&fits, 3, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_select_parents_in_range() {
        let fits = [0.2, 0.4, 0.6];
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let (a, b) = select_parents(&fits, 3, &mut rng);
            assert_eq!(a, 2);
            assert_eq!(b, 2);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(tournament(&[0.7], 1, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[], 3, &mut rng);
    }
}
