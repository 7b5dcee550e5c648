//! Step-driven stochastic optimization engines.
//!
//! Two independent engines, each a synchronous state machine advanced one
//! step at a time by an external driver:
//!
//! - **Genetic Algorithm ([`ga`])**: evolves bitstring subsets of an item
//!   list toward a target sum, with tournament selection, uniform crossover,
//!   bit-flip mutation and elitism.
//! - **Simulated Annealing ([`sa`])**: shortens a closed tour over 2D cities
//!   with random pairwise swaps, Metropolis acceptance and geometric cooling.
//!
//! Engines borrow or copy their problem instance, own all derived state, and
//! draw every random number from an injectable RNG, so a seeded run is fully
//! reproducible. Stopping is the caller's decision; [`ga::GaRunner`] and
//! [`sa::SaRunner`] implement the standard policies.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configs and instance types.
//! - `parallel`: evaluate GA population fitness with rayon.

pub mod error;
pub mod ga;
pub mod random;
pub mod sa;

pub use error::{EngineError, Result};
