//! Generational search loop.
//!
//! Each generation is evaluated, parents are drawn by roulette wheel,
//! paired into offspring, and the next population is the parents followed
//! by the offspring. A perfect schedule ends the run only after that
//! replacement:
//!
//! ```text
//! Initialized → Evaluating → Selecting → Recombining → Mutating → Replacing
//!                   ↑                                                  │
//!                   └───────────────────── (not perfect) ──────────────┤
//!                                                                      ↓
//!                                         Terminated (perfect schedule)
//! ```
//!
//! The generation limit is checked before each evaluation.
//!
//! The next population is not trimmed. With a configured size `n`, every
//! generation after the first holds `k + k / 2` candidates where
//! `k = 2n / 3`.

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::chromosome::initial_population;
use super::fitness::evaluate_population;
use super::operators::GeneticOperators;
use super::selection::roulette_select;
use crate::error::TimetableError;
use crate::models::{Domain, Timetable};

/// Search parameters.
///
/// # Example
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert_eq!(config.parent_count(), 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Configured population size; parents drawn per generation are two thirds of it.
    pub population_size: usize,
    /// Generation budget.
    pub max_generations: usize,
    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,
    /// Probability that a parent pair is recombined.
    pub crossover_rate: f64,
    /// Seed for a reproducible run. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Evaluate fitness on the rayon thread pool.
    pub parallel: bool,
    /// Log best fitness every this many generations.
    pub report_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 1000,
            mutation_rate: 0.3,
            crossover_rate: 0.8,
            seed: None,
            parallel: false,
            report_interval: 100,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    /// Parents drawn each generation.
    pub fn parent_count(&self) -> usize {
        self.population_size * 2 / 3
    }

    /// Checks parameter ranges.
    ///
    /// The population must yield at least one parent pair, rates must be
    /// probabilities, and the report interval must be positive.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.parent_count() < 2 {
            return Err(TimetableError::InvalidConfig(format!(
                "population_size must be at least 3 (got {})",
                self.population_size
            )));
        }
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(TimetableError::InvalidConfig(format!(
                    "{name} must be within [0, 1] (got {rate})"
                )));
            }
        }
        if self.report_interval == 0 {
            return Err(TimetableError::InvalidConfig(
                "report_interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A generation contained a timetable with fitness exactly 1.
    PerfectSchedule { generation: usize },
    /// The generation budget ran out.
    GenerationLimit,
}

/// Outcome of a search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Final population: the parents and offspring bred from the last
    /// evaluated generation, or the initial population if none was evaluated.
    /// It need not contain `best`.
    pub population: Vec<Timetable>,
    /// Best timetable evaluated during the run.
    pub best: Option<Timetable>,
    /// Fitness of `best` (0.0 if nothing was evaluated).
    pub best_fitness: f64,
    /// Number of generations evaluated.
    pub generations: usize,
    pub termination: Termination,
}

impl GaResult {
    pub fn is_perfect(&self) -> bool {
        matches!(self.termination, Termination::PerfectSchedule { .. })
    }
}

/// Runs the genetic search.
pub struct GaRunner;

impl GaRunner {
    /// Runs with a [`SmallRng`] seeded from `config.seed`, or from the OS.
    pub fn run(domain: &Domain, config: &GaConfig) -> Result<GaResult, TimetableError> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(domain, config, &mut rng)
    }

    /// Runs with a caller-supplied generator. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        domain: &Domain,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, TimetableError> {
        config.validate()?;
        let operators = GeneticOperators::new(config.crossover_rate, config.mutation_rate);

        info!(
            "Initializing population of size {} ({})",
            config.population_size,
            domain.shape()
        );
        let mut population = initial_population(domain, config.population_size, rng);
        let mut best: Option<Timetable> = None;
        let mut best_fitness = 0.0;
        let mut generation = 0;

        let termination = loop {
            if generation >= config.max_generations {
                break Termination::GenerationLimit;
            }

            let scores = evaluate_population(domain, &population, config.parallel);
            let (leader, generation_best) = scores.iter().copied().enumerate().fold(
                (0, f64::NEG_INFINITY),
                |acc, (i, f)| if f > acc.1 { (i, f) } else { acc },
            );
            if generation_best > best_fitness {
                best_fitness = generation_best;
                best = Some(population[leader].clone());
            }

            debug!(
                "Gen {}: best={:.6} population={}",
                generation,
                generation_best,
                population.len()
            );
            if generation % config.report_interval == 0 {
                info!("Generation {} - Best fitness: {:.6}", generation, best_fitness);
            }

            let picks = roulette_select(&scores, config.parent_count(), rng)?;
            let parents: Vec<Timetable> = picks.into_iter().map(|i| population[i].clone()).collect();
            let offspring = operators.breed(&parents, domain, rng)?;

            population = parents;
            population.extend(offspring);

            // The generation that held the perfect schedule is still replaced.
            if generation_best == 1.0 {
                info!("Perfect schedule found on generation {}", generation);
                break Termination::PerfectSchedule { generation };
            }
            generation += 1;
        };

        let generations = match termination {
            Termination::PerfectSchedule { generation } => generation + 1,
            Termination::GenerationLimit => generation,
        };
        match termination {
            Termination::PerfectSchedule { .. } => info!(
                "Search finished after {} generations: best fitness {:.6}",
                generations, best_fitness
            ),
            Termination::GenerationLimit => warn!(
                "No perfect schedule within {} generations: best fitness {:.6}",
                generations, best_fitness
            ),
        }

        Ok(GaResult {
            population,
            best,
            best_fitness,
            generations,
            termination,
        })
    }
}

/// Runs the search and returns the final population.
///
/// Ranking and rendering the result is left to the caller (see
/// [`report`](crate::report)).
pub fn run_search(config: &GaConfig, domain: &Domain) -> Result<Vec<Timetable>, TimetableError> {
    GaRunner::run(domain, config).map(|result| result.population)
}
