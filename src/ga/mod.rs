//! Target-sum Genetic Algorithm.
//!
//! Approximates a subset of items whose values sum to a target. Candidate
//! subsets are bitstrings ([`Genome`]); a generation is bred with tournament
//! selection, uniform crossover, bit-flip mutation and elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elites)
//! - [`GaEngine`]: Step-driven state machine, one generation per step
//! - [`GaRunner`]: Drives an engine until an exact match or the cap
//! - [`ItemSet`]: Random problem-instance generator
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and bit-flip mutation
//! - [`selection`]: Tournament selection without replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
mod instance;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use engine::{GaEngine, GaPhase, GaStep};
pub use instance::{ItemSet, ItemSetConfig};
pub use runner::{GaResult, GaRunner};
pub use types::{fitness, sum_of, Genome, Item};
