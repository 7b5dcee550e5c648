//! Step-driven tour annealer.

use super::config::SaConfig;
use super::types::{City, DistanceMatrix, Tour};
use crate::error::{EngineError, Result};
use crate::random::{rng_from_seed, shuffle};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// Metropolis acceptance probability of moving from `current` to
/// `candidate` at `temperature`.
///
/// Improvements return exactly `1.0`. Otherwise returns
/// `exp((current - candidate) / temperature)`, which is in `(0, 1]` because
/// the exponent is never positive; equal costs also give exactly `1.0`.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        1.0
    } else {
        ((current - candidate) / temperature).exp()
    }
}

/// Copies `tour` and swaps two distinct positions drawn uniformly.
fn swap_two<R: Rng + ?Sized>(tour: &[usize], rng: &mut R) -> Tour {
    let mut swapped = tour.to_vec();
    let n = swapped.len();
    if n < 2 {
        return swapped;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    swapped.swap(i, j);
    swapped
}

/// Simulated annealing over closed tours.
///
/// Holds one current tour and the best tour seen so far. Each
/// [`anneal`](SaEngine::anneal) proposes a random pairwise swap, accepts it
/// by the Metropolis criterion and cools the temperature geometrically.
/// The engine never stops on its own; see
/// [`SaRunner`](super::SaRunner) for the standard stopping rule.
///
/// # Examples
///
/// ```
/// use u_stepopt::sa::{City, SaConfig, SaEngine};
///
/// let cities = vec![
///     City::new(0.0, 0.0, 0),
///     City::new(10.0, 0.0, 1),
///     City::new(10.0, 10.0, 2),
///     City::new(0.0, 10.0, 3),
/// ];
/// let config = SaConfig::default().with_seed(42);
/// let mut sa = SaEngine::new(&cities, &config).unwrap();
/// while sa.temperature() > config.min_temperature {
///     sa.anneal();
/// }
/// assert!((sa.best_distance() - 40.0).abs() < 1e-9);
/// ```
pub struct SaEngine<R: Rng = StdRng> {
    distances: DistanceMatrix,
    rng: R,
    temperature: f64,
    cooling_rate: f64,
    current_solution: Tour,
    current_distance: f64,
    best_solution: Tour,
    best_distance: f64,
    iterations: usize,
    accepted_moves: usize,
    improving_moves: usize,
}

impl SaEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`.
    ///
    /// # Errors
    /// `EmptyInstance` when `cities` is empty; `InvalidConfiguration` for a
    /// bad config.
    pub fn new(cities: &[City], config: &SaConfig) -> Result<Self> {
        Self::with_rng(cities, config, rng_from_seed(config.seed))
    }
}

impl<R: Rng> SaEngine<R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// Builds the distance matrix and starts from a uniformly random tour.
    pub fn with_rng(cities: &[City], config: &SaConfig, mut rng: R) -> Result<Self> {
        if cities.is_empty() {
            return Err(EngineError::EmptyInstance("cities"));
        }
        config.validate()?;

        let distances = DistanceMatrix::new(cities);
        let mut current_solution: Tour = (0..cities.len()).collect();
        shuffle(&mut current_solution, &mut rng);
        let current_distance = distances.tour_length(&current_solution);

        debug!(
            event = "annealer_initialized",
            cities = cities.len(),
            initial_distance = current_distance,
            temperature = config.initial_temperature,
        );

        Ok(Self {
            distances,
            rng,
            temperature: config.initial_temperature,
            cooling_rate: config.cooling_rate,
            best_solution: current_solution.clone(),
            best_distance: current_distance,
            current_solution,
            current_distance,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
        })
    }

    /// Length of `tour` as a closed cycle.
    pub fn calculate_total_distance(&self, tour: &[usize]) -> f64 {
        self.distances.tour_length(tour)
    }

    /// Returns a copy of `tour` with two distinct random positions swapped.
    ///
    /// Tours shorter than two cities are returned unchanged.
    pub fn swap_cities(&mut self, tour: &[usize]) -> Tour {
        swap_two(tour, &mut self.rng)
    }

    /// One annealing step.
    ///
    /// Proposes a swap neighbor, accepts it iff a uniform draw in `[0, 1)`
    /// falls below the acceptance probability, then cools by `cooling_rate`.
    pub fn anneal(&mut self) {
        let candidate = swap_two(&self.current_solution, &mut self.rng);
        let candidate_distance = self.calculate_total_distance(&candidate);
        let probability =
            acceptance_probability(self.current_distance, candidate_distance, self.temperature);

        let accepted = self.rng.random::<f64>() < probability;
        if accepted {
            if candidate_distance < self.current_distance {
                self.improving_moves += 1;
            }
            self.current_solution = candidate;
            self.current_distance = candidate_distance;
            self.accepted_moves += 1;

            if self.current_distance < self.best_distance {
                self.best_distance = self.current_distance;
                self.best_solution = self.current_solution.clone();
            }
        }

        self.temperature *= self.cooling_rate;
        self.iterations += 1;

        trace!(
            event = "step",
            iteration = self.iterations,
            temperature = self.temperature,
            candidate_distance = candidate_distance,
            accepted = accepted,
            best_distance = self.best_distance,
        );
    }

    /// Whether the temperature has reached `min_temperature`.
    pub fn is_frozen(&self, min_temperature: f64) -> bool {
        self.temperature <= min_temperature
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current_solution(&self) -> &[usize] {
        &self.current_solution
    }

    pub fn current_distance(&self) -> f64 {
        self.current_distance
    }

    pub fn best_solution(&self) -> &[usize] {
        &self.best_solution
    }

    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Number of completed steps.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Accepted candidates, improving or not.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    /// Accepted candidates strictly shorter than the tour they replaced.
    pub fn improving_moves(&self) -> usize {
        self.improving_moves
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
