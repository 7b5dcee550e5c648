//! Random city generation.

use super::types::City;
use crate::error::{invalid, Result};
use rand::Rng;

/// Bounds of the rectangle cities are scattered over.
///
/// Cities land uniformly in `[padding, width - padding] x [padding, height - padding]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CityFieldConfig {
    pub num_cities: usize,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for CityFieldConfig {
    fn default() -> Self {
        Self {
            num_cities: 25,
            width: 1280.0,
            height: 720.0,
            padding: 50.0,
        }
    }
}

impl CityFieldConfig {
    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    pub fn with_field(mut self, width: f64, height: f64, padding: f64) -> Self {
        self.width = width;
        self.height = height;
        self.padding = padding;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_cities == 0 {
            return Err(invalid("num_cities must be at least 1"));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(invalid("padding must be finite and non-negative"));
        }
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(invalid("field dimensions must be finite"));
        }
        if self.width < 2.0 * self.padding || self.height < 2.0 * self.padding {
            return Err(invalid(format!(
                "field {}x{} too small for padding {}",
                self.width, self.height, self.padding
            )));
        }
        Ok(())
    }
}

/// Scatters `num_cities` cities with indices `0..num_cities`.
pub fn generate_cities<R: Rng + ?Sized>(config: &CityFieldConfig, rng: &mut R) -> Result<Vec<City>> {
    config.validate()?;

    let (x_lo, x_hi) = (config.padding, config.width - config.padding);
    let (y_lo, y_hi) = (config.padding, config.height - config.padding);

    Ok((0..config.num_cities)
        .map(|index| {
            let x = rng.random_range(x_lo..=x_hi);
            let y = rng.random_range(y_lo..=y_hi);
            City::new(x, y, index)
        })
        .collect())
}
