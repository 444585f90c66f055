//! Probabilistic recombination and mutation for timetable breeding.
//!
//! [`GeneticOperators`] applies [`slot_crossover`] and [`point_mutation`]
//! with the configured rates to a list of selected parents.
//!
//! # Usage
//!
//! ```
//! use u_timetable::ga::operators::GeneticOperators;
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_rate, 0.8);
//! assert_eq!(ops.mutation_rate, 0.3);
//! ```

use rand::Rng;

use super::chromosome::{point_mutation, slot_crossover};
use crate::error::TimetableError;
use crate::models::{Domain, Timetable};

/// Crossover and mutation rates for breeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticOperators {
    /// Probability that a parent pair is recombined instead of copied.
    pub crossover_rate: f64,
    /// Probability that an offspring receives a point mutation.
    pub mutation_rate: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.3,
        }
    }
}

impl GeneticOperators {
    pub fn new(crossover_rate: f64, mutation_rate: f64) -> Self {
        Self {
            crossover_rate,
            mutation_rate,
        }
    }

    /// With probability `crossover_rate` returns the crossover child,
    /// otherwise a copy of `p1`.
    pub fn recombine<R: Rng>(
        &self,
        p1: &Timetable,
        p2: &Timetable,
        rng: &mut R,
    ) -> Result<Timetable, TimetableError> {
        if rng.random_bool(self.crossover_rate) {
            slot_crossover(p1, p2, rng)
        } else {
            Ok(p1.clone())
        }
    }

    /// With probability `mutation_rate` returns the point-mutated child,
    /// otherwise the child unchanged.
    pub fn mutate<R: Rng>(&self, child: Timetable, domain: &Domain, rng: &mut R) -> Timetable {
        if rng.random_bool(self.mutation_rate) {
            point_mutation(&child, domain, rng)
        } else {
            child
        }
    }

    /// Breeds one child per consecutive parent pair (0-1, 2-3, ...).
    ///
    /// A trailing unpaired parent yields nothing. All pairs are recombined
    /// before any child is mutated.
    pub fn breed<R: Rng>(
        &self,
        parents: &[Timetable],
        domain: &Domain,
        rng: &mut R,
    ) -> Result<Vec<Timetable>, TimetableError> {
        let offspring = parents
            .chunks_exact(2)
            .map(|pair| self.recombine(&pair[0], &pair[1], rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(offspring
            .into_iter()
            .map(|child| self.mutate(child, domain, rng))
            .collect())
    }
}
