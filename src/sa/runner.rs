//! Headless driver for the SA engine.

use super::config::SaConfig;
use super::engine::SaEngine;
use super::types::{City, Tour};
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Length of the best tour.
    pub best_distance: f64,

    /// Total number of annealing steps.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best distance before the first step and after every step.
    pub distance_history: Vec<f64>,
}

/// Drives an [`SaEngine`] until it freezes.
pub struct SaRunner;

impl SaRunner {
    /// Anneals while `temperature > min_temperature` (and within
    /// `max_iterations` when set).
    pub fn run(cities: &[City], config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs SA with an optional cancellation token.
    pub fn run_with_cancel(
        cities: &[City],
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        let mut engine = SaEngine::new(cities, config)?;

        info!(
            event = "sa_start",
            cities = cities.len(),
            initial_distance = engine.best_distance(),
            temperature = engine.temperature(),
            expected_steps = config.cooling_steps(),
        );

        let mut distance_history = Vec::with_capacity(config.cooling_steps() + 1);
        distance_history.push(engine.best_distance());
        let mut cancelled = false;

        while !engine.is_frozen(config.min_temperature) {
            if config.max_iterations > 0 && engine.iterations() >= config.max_iterations {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            engine.anneal();
            distance_history.push(engine.best_distance());
        }

        info!(
            event = "sa_end",
            iterations = engine.iterations(),
            best_distance = engine.best_distance(),
            final_temperature = engine.temperature(),
            accepted_moves = engine.accepted_moves(),
            cancelled = cancelled,
        );

        Ok(SaResult {
            best: engine.best_solution().to_vec(),
            best_distance: engine.best_distance(),
            iterations: engine.iterations(),
            final_temperature: engine.temperature(),
            accepted_moves: engine.accepted_moves(),
            improving_moves: engine.improving_moves(),
            cancelled,
            distance_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::sa::types::is_permutation;
    use crate::sa::{generate_cities, CityFieldConfig, DistanceMatrix};

    fn field(n: usize, seed: u64) -> Vec<City> {
        let mut rng = create_rng(seed);
        generate_cities(&CityFieldConfig::default().with_num_cities(n), &mut rng).unwrap()
    }

    #[test]
    fn test_full_cooling_run() {
        let cities = field(25, 42);
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run(&cities, &config).unwrap();

        assert_eq!(result.iterations, config.cooling_steps());
        assert!(result.final_temperature <= 1.0);
        assert!(!result.cancelled);
        assert!(is_permutation(&result.best, 25));

        let matrix = DistanceMatrix::new(&cities);
        assert!((matrix.tour_length(&result.best) - result.best_distance).abs() < 1e-9);
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_improves_on_initial_tour() {
        let cities = field(25, 3);
        let config = SaConfig::default().with_seed(3);
        let result = SaRunner::run(&cities, &config).unwrap();
        assert!(result.best_distance < result.distance_history[0]);
    }

    #[test]
    fn test_history_non_increasing() {
        let cities = field(20, 5);
        let config = SaConfig::default().with_seed(5);
        let result = SaRunner::run(&cities, &config).unwrap();

        assert_eq!(result.distance_history.len(), result.iterations + 1);
        for window in result.distance_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best distance history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_max_iterations_limit() {
        let cities = field(10, 6);
        let config = SaConfig::default().with_max_iterations(100).with_seed(6);
        let result = SaRunner::run(&cities, &config).unwrap();
        assert_eq!(result.iterations, 100);
        assert!(result.final_temperature > 1.0);
    }

    #[test]
    fn test_cancellation() {
        let cities = field(10, 7);
        let config = SaConfig::default().with_seed(7);

        // Set before running so cancellation is deterministic.
        let cancel = Arc::new(AtomicBool::new(true));
        let result = SaRunner::run_with_cancel(&cities, &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.final_temperature, config.initial_temperature);
    }
}
