//! Bitstring genetic operators.
//!
//! - [`uniform_crossover`]: each child bit comes from either parent with
//!   probability 0.5, position by position.
//! - [`bit_flip_mutation`]: each bit flips independently with the mutation
//!   rate.
//!
//! Both return freshly allocated genomes and never touch their inputs.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::types::Genome;
use rand::Rng;

/// Uniform crossover of two equal-length parents.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn uniform_crossover<R: Rng + ?Sized>(parent1: &[bool], parent2: &[bool], rng: &mut R) -> Genome {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have the same length"
    );

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Bit-flip mutation: returns a copy with each bit flipped with probability `rate`.
///
/// `rate` must lie in `[0, 1]`.
pub fn bit_flip_mutation<R: Rng + ?Sized>(genome: &[bool], rate: f64, rng: &mut R) -> Genome {
    genome
        .iter()
        .map(|&bit| if rng.random_bool(rate) { !bit } else { bit })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_crossover_bits_come_from_parents() {
        let mut rng = create_rng(42);
        let p1 = vec![true, true, false, false, true, false];
        let p2 = vec![true, false, true, false, false, true];
        for _ in 0..100 {
            let child = uniform_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), p1.len());
            for i in 0..child.len() {
                assert!(child[i] == p1[i] || child[i] == p2[i]);
            }
            // Positions where parents agree are fixed.
            assert!(child[0]);
            assert!(!child[3]);
        }
    }

    #[test]
    fn test_crossover_mixes_roughly_evenly() {
        let mut rng = create_rng(42);
        let p1 = vec![true; 1000];
        let p2 = vec![false; 1000];
        let child = uniform_crossover(&p1, &p2, &mut rng);
        let from_p1 = child.iter().filter(|&&b| b).count();
        assert!((400..600).contains(&from_p1), "got {from_p1}");
    }

    #[test]
    #[should_panic(expected = "parents must have the same length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(42);
        uniform_crossover(&[true], &[true, false], &mut rng);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let g = vec![true, false, true, true, false];
        assert_eq!(bit_flip_mutation(&g, 0.0, &mut rng), g);
    }

    #[test]
    fn test_mutation_rate_one_inverts() {
        let mut rng = create_rng(42);
        let g = vec![true, false, true, true, false];
        let inverted: Vec<bool> = g.iter().map(|b| !b).collect();
        assert_eq!(bit_flip_mutation(&g, 1.0, &mut rng), inverted);
    }

    #[test]
    fn test_mutation_leaves_input_untouched() {
        let mut rng = create_rng(42);
        let g = vec![false; 64];
        let mutated = bit_flip_mutation(&g, 0.5, &mut rng);
        assert!(g.iter().all(|&b| !b));
        assert!(mutated.iter().any(|&b| b));
    }
}
