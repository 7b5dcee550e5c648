//! Step-driven GA engine.
//!
//! [`GaEngine`] owns a population of genomes and advances it one generation
//! per [`step`](GaEngine::step). It never decides when to stop: the caller
//! inspects the reported genome and generation counter and stops calling.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, uniform_crossover};
use super::selection::select_parents;
use super::types::{evaluate_population, fitness, sum_of, Genome, Item};
use crate::error::{invalid, EngineError, Result};
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaPhase {
    /// Constructed, population not yet generated.
    Uninitialized,
    /// Population present; every step evolves it.
    Ready,
}

/// What one [`GaEngine::step`] reports back to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct GaStep {
    /// Best genome of the population *before* this step's evolution.
    pub best_genome: Genome,
    /// Generation counter after the step (1 after the first step).
    pub generation: usize,
    /// Sum of the items included by `best_genome`.
    pub best_sum: u64,
    /// Fitness of `best_genome`.
    pub best_fitness: f64,
}

/// Genetic algorithm approximating a target sum over a borrowed item list.
///
/// # Reported best lags one generation
///
/// `step` sorts the current population, breeds the next one, and reports the
/// top of the *sorted pre-evolution* population. The freshly bred generation
/// is only ranked on the following step. Since the top genomes are carried
/// forward as elites, the reported genome is always still present in the
/// live population when `elitism_count > 0`.
///
/// # Examples
///
/// ```
/// use u_stepopt::ga::{GaConfig, GaEngine, Item};
///
/// let items: Vec<Item> = [10, 20, 30, 40]
///     .iter()
///     .map(|&v| Item::new(v).unwrap())
///     .collect();
/// let config = GaConfig::default().with_max_generations(200).with_seed(7);
/// let mut ga = GaEngine::new(&items, 50.0, &config).unwrap();
///
/// let report = ga.step();
/// assert_eq!(report.generation, 1);
/// assert_eq!(ga.population().len(), config.population_size);
/// ```
pub struct GaEngine<'a, R: Rng = StdRng> {
    items: &'a [Item],
    target: f64,
    config: GaConfig,
    rng: R,
    phase: GaPhase,
    population: Vec<Genome>,
    generation: usize,
    best_genome: Option<Genome>,
}

impl<'a> GaEngine<'a, StdRng> {
    /// Creates an engine seeded from `config.seed`.
    ///
    /// # Errors
    /// `EmptyInstance` for an empty item list; `InvalidConfiguration` for a
    /// bad config or a negative / non-finite target.
    pub fn new(items: &'a [Item], target: f64, config: &GaConfig) -> Result<Self> {
        Self::with_rng(items, target, config, rng_from_seed(config.seed))
    }
}

impl<'a, R: Rng> GaEngine<'a, R> {
    /// Creates an engine drawing all randomness from `rng`.
    pub fn with_rng(items: &'a [Item], target: f64, config: &GaConfig, rng: R) -> Result<Self> {
        if items.is_empty() {
            return Err(EngineError::EmptyInstance("items"));
        }
        if !target.is_finite() || target < 0.0 {
            return Err(invalid(format!(
                "target must be a finite non-negative number, got {target}"
            )));
        }
        config.validate()?;

        Ok(Self {
            items,
            target,
            config: config.clone(),
            rng,
            phase: GaPhase::Uninitialized,
            population: Vec::new(),
            generation: 0,
            best_genome: None,
        })
    }

    /// Fitness of `genome` against this engine's target, in `(0, 1]`.
    pub fn fitness(&self, genome: &[bool]) -> f64 {
        fitness(self.items, self.target, genome)
    }

    /// Sum of the values of the items `genome` includes.
    pub fn sum_of(&self, genome: &[bool]) -> u64 {
        sum_of(self.items, genome)
    }

    /// Whether `genome` hits the target exactly.
    pub fn is_exact(&self, genome: &[bool]) -> bool {
        self.sum_of(genome) as f64 == self.target
    }

    /// Generates the initial population, each bit `true` with probability
    /// `inclusion_bias`.
    ///
    /// Does nothing once the engine is [`GaPhase::Ready`].
    pub fn initialize(&mut self) {
        if self.phase == GaPhase::Ready {
            return;
        }

        let len = self.items.len();
        let bias = self.config.inclusion_bias;
        let rng = &mut self.rng;
        self.population = (0..self.config.population_size)
            .map(|_| (0..len).map(|_| rng.random_bool(bias)).collect::<Genome>())
            .collect();
        self.phase = GaPhase::Ready;

        debug!(
            event = "population_initialized",
            population_size = self.population.len(),
            genome_length = len,
            target = self.target,
        );
    }

    /// Advances one generation.
    ///
    /// Initializes the population first if needed, then evolves it and
    /// increments the generation counter.
    pub fn step(&mut self) -> GaStep {
        self.initialize();
        self.evolve_population();
        self.generation += 1;

        let best_genome = self
            .best_genome
            .clone()
            .unwrap_or_else(|| self.population[0].clone());
        let best_sum = self.sum_of(&best_genome);
        let best_fitness = self.fitness(&best_genome);

        trace!(
            event = "generation",
            generation = self.generation,
            best_sum = best_sum,
            best_fitness = best_fitness,
        );

        GaStep {
            best_genome,
            generation: self.generation,
            best_sum,
            best_fitness,
        }
    }

    /// Breeds the next generation from the current one.
    ///
    /// Ranks by fitness (stable, best first), copies the top
    /// `elitism_count` unchanged, fills the rest with mutated uniform
    /// crossovers of tournament winners, and records the ranked top as the
    /// best genome.
    fn evolve_population(&mut self) {
        let fitnesses = evaluate_population(self.items, self.target, &self.population);

        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.sort_by(|&a, &b| {
            fitnesses[b]
                .partial_cmp(&fitnesses[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut current = std::mem::take(&mut self.population);
        let mut ranked: Vec<Genome> = Vec::with_capacity(current.len());
        let mut ranked_fitness: Vec<f64> = Vec::with_capacity(current.len());
        for &idx in &order {
            ranked.push(std::mem::take(&mut current[idx]));
            ranked_fitness.push(fitnesses[idx]);
        }

        let size = self.config.population_size;
        let mut next_gen: Vec<Genome> = Vec::with_capacity(size);
        next_gen.extend(ranked[..self.config.elitism_count].iter().cloned());

        while next_gen.len() < size {
            let (p1, p2) =
                select_parents(&ranked_fitness, self.config.tournament_size, &mut self.rng);
            let child = uniform_crossover(&ranked[p1], &ranked[p2], &mut self.rng);
            let child = bit_flip_mutation(&child, self.config.mutation_rate, &mut self.rng);
            next_gen.push(child);
        }

        self.population = next_gen;
        self.best_genome = ranked.into_iter().next();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GaPhase {
        self.phase
    }

    /// Number of completed steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best genome reported by the last step, if any.
    pub fn best_genome(&self) -> Option<&[bool]> {
        self.best_genome.as_deref()
    }

    /// The live population (empty until initialized).
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Target sum being approximated.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The item list this engine evaluates against.
    pub fn items(&self) -> &'a [Item] {
        self.items
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}
