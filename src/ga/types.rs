//! Problem model for the target-sum GA.
//!
//! An [`Item`] carries a positive value; a [`Genome`] selects a subset of
//! items by position. Items are owned by the caller's instance and only
//! borrowed by the engine.

use crate::error::{invalid, Result};

/// A candidate subset: `genome[i]` is `true` when item `i` is included.
///
/// Genomes are always owned; operators produce fresh vectors so that no two
/// population members share storage.
pub type Genome = Vec<bool>;

/// An item with a positive integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    value: u64,
}

impl Item {
    /// Creates an item.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` when `value` is zero.
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(invalid("item value must be positive"));
        }
        Ok(Self { value })
    }

    /// The item's value.
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Sum of the values of the items included by `genome`.
///
/// Positions past the end of either slice are ignored.
pub fn sum_of(items: &[Item], genome: &[bool]) -> u64 {
    items
        .iter()
        .zip(genome)
        .filter(|(_, included)| **included)
        .map(|(item, _)| item.value)
        .sum()
}

/// Target-sum fitness: `1 / (1 + |target - sum|)`.
///
/// Always in `(0, 1]`, and exactly `1.0` iff the sum hits the target.
pub fn fitness(items: &[Item], target: f64, genome: &[bool]) -> f64 {
    let deviation = (target - sum_of(items, genome) as f64).abs();
    1.0 / (1.0 + deviation)
}

/// Evaluates every genome of a population.
#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate_population(items: &[Item], target: f64, population: &[Genome]) -> Vec<f64> {
    population
        .iter()
        .map(|genome| fitness(items, target, genome))
        .collect()
}

/// Evaluates every genome of a population with rayon.
#[cfg(feature = "parallel")]
pub(crate) fn evaluate_population(items: &[Item], target: f64, population: &[Genome]) -> Vec<f64> {
    use rayon::prelude::*;

    population
        .par_iter()
        .map(|genome| fitness(items, target, genome))
        .collect()
}
