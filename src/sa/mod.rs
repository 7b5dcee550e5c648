//! Simulated Annealing for closed tours (TSP).
//!
//! Keeps one current tour and the best tour seen. Each step swaps two random
//! positions, accepts the result by the Metropolis criterion and cools the
//! temperature geometrically. Tour lengths come from a pairwise distance
//! table built once per instance.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod engine;
mod instance;
mod runner;
mod types;

pub use config::SaConfig;
pub use engine::{acceptance_probability, SaEngine};
pub use instance::{generate_cities, CityFieldConfig};
pub use runner::{SaResult, SaRunner};
pub use types::{is_permutation, City, DistanceMatrix, Tour};
