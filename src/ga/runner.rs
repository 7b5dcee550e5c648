//! Headless driver for the GA engine.
//!
//! [`GaRunner`] applies the usual caller policy: step until the reported
//! genome hits the target exactly or the generation cap is reached.

use super::config::GaConfig;
use super::engine::GaEngine;
use super::types::{Genome, Item};
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best genome reported by the last step.
    pub best_genome: Genome,

    /// Sum of the items included by `best_genome`.
    pub best_sum: u64,

    /// Fitness of `best_genome`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether `best_sum` equals the target exactly.
    pub exact_match: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Reported best fitness after each generation.
    pub fitness_history: Vec<f64>,
}

/// Drives a [`GaEngine`] to termination.
///
/// # Usage
///
/// ```
/// use u_stepopt::ga::{GaConfig, GaRunner, Item};
///
/// let items: Vec<Item> = [10, 20, 30, 40]
///     .iter()
///     .map(|&v| Item::new(v).unwrap())
///     .collect();
/// let config = GaConfig::default().with_max_generations(200).with_seed(42);
/// let result = GaRunner::run(&items, 50.0, &config).unwrap();
/// assert!(result.generations <= 200);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until an exact match or the generation cap.
    pub fn run(items: &[Item], target: f64, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(items, target, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the last reported genome.
    pub fn run_with_cancel(
        items: &[Item],
        target: f64,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let mut engine = GaEngine::new(items, target, config)?;
        engine.initialize();

        info!(
            event = "ga_start",
            items = items.len(),
            target = target,
            population_size = config.population_size,
            max_generations = config.max_generations,
        );

        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut cancelled = false;
        let mut last = None;

        while engine.generation() < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let report = engine.step();
            fitness_history.push(report.best_fitness);
            let exact = engine.is_exact(&report.best_genome);
            last = Some(report);
            if exact {
                break;
            }
        }

        let (best_genome, best_sum, best_fitness) = match last {
            Some(report) => (report.best_genome, report.best_sum, report.best_fitness),
            None => {
                // Cancelled before the first generation: report the best initial genome.
                let best = engine
                    .population()
                    .iter()
                    .max_by(|a, b| {
                        engine
                            .fitness(a)
                            .partial_cmp(&engine.fitness(b))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .cloned()
                    .unwrap_or_default();
                let sum = engine.sum_of(&best);
                let fit = engine.fitness(&best);
                (best, sum, fit)
            }
        };
        let exact_match = engine.is_exact(&best_genome);

        info!(
            event = "ga_end",
            generations = engine.generation(),
            best_sum = best_sum,
            best_fitness = best_fitness,
            exact_match = exact_match,
            cancelled = cancelled,
        );

        Ok(GaResult {
            best_genome,
            best_sum,
            best_fitness,
            generations: engine.generation(),
            exact_match,
            cancelled,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
