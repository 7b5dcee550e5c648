//! Random item-set generation.

use super::types::Item;
use crate::error::{invalid, Result};
use rand::seq::index;
use rand::Rng;

/// Bounds for generating an item set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemSetConfig {
    /// Number of items to generate.
    pub num_items: usize,

    /// Smallest item value (inclusive, at least 1).
    pub min_value: u64,

    /// Largest item value (inclusive).
    pub max_value: u64,

    /// Target sum as a fraction of the total value (0.0–1.0).
    pub target_fraction: f64,
}

impl Default for ItemSetConfig {
    fn default() -> Self {
        Self {
            num_items: 100,
            min_value: 128,
            max_value: 2048,
            target_fraction: 0.7,
        }
    }
}

impl ItemSetConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_value_range(mut self, min: u64, max: u64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_target_fraction(mut self, fraction: f64) -> Self {
        self.target_fraction = fraction;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_items == 0 {
            return Err(invalid("num_items must be at least 1"));
        }
        if self.min_value == 0 {
            return Err(invalid("min_value must be positive"));
        }
        if self.min_value > self.max_value {
            return Err(invalid(format!(
                "min_value ({}) exceeds max_value ({})",
                self.min_value, self.max_value
            )));
        }
        let span = self.max_value - self.min_value;
        if span < self.num_items as u64 - 1 {
            return Err(invalid(format!(
                "value range [{}, {}] cannot hold {} distinct items",
                self.min_value, self.max_value, self.num_items
            )));
        }
        if !(0.0..=1.0).contains(&self.target_fraction) {
            return Err(invalid(format!(
                "target_fraction must be in [0, 1], got {}",
                self.target_fraction
            )));
        }
        Ok(())
    }
}

/// A generated problem instance: items plus the fraction used for the target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    items: Vec<Item>,
    target_fraction: f64,
}

impl ItemSet {
    /// Generates items with pairwise-distinct values drawn uniformly from
    /// `[min_value, max_value]`.
    pub fn generate<R: Rng + ?Sized>(config: &ItemSetConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let span = usize::try_from(config.max_value - config.min_value)
            .ok()
            .and_then(|s| s.checked_add(1))
            .ok_or_else(|| invalid("value range too wide for this platform"))?;

        let items = index::sample(rng, span, config.num_items)
            .into_iter()
            .map(|offset| Item::new(config.min_value + offset as u64))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            target_fraction: config.target_fraction,
        })
    }

    /// The generated items, in generation order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(Item::value).sum()
    }

    /// Target sum: `total_value * target_fraction`.
    pub fn target(&self) -> f64 {
        self.total_value() as f64 * self.target_fraction
    }
}
