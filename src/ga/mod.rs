//! Genetic search for class timetables.
//!
//! # Encoding
//!
//! A chromosome is a full [`Timetable`](crate::models::Timetable): one
//! (subject, teacher) gene per group, day and slot. Random genes draw a
//! uniform catalog entry and then a uniform qualified teacher.
//!
//! # Generation step
//!
//! 1. Evaluate every candidate ([`fitness`]).
//! 2. Draw two thirds of the configured population size as parents by
//!    roulette wheel ([`selection`]).
//! 3. Pair parents and recombine each pair with per-day one-point
//!    crossover, then mutate single cells ([`operators`]).
//! 4. Next population = parents ++ offspring ([`runner`]).
//!
//! The search stops on a timetable with fitness exactly 1 or when the
//! generation budget runs out.
//!
//! # Submodules
//!
//! - [`fitness`]: Constraint-violation penalty and fitness
//! - [`operators`]: Rate-driven crossover and mutation
//! - [`selection`]: Roulette-wheel parent selection
//! - [`runner`]: Configuration and the generational loop

mod chromosome;
pub mod fitness;
pub mod operators;
pub mod runner;
pub mod selection;

pub use chromosome::{initial_population, point_mutation, slot_crossover};
pub use fitness::{
    DOUBLE_BOOKING_PENALTY, FitnessEvaluator, PenaltyBreakdown, evaluate_population, fitness,
};
pub use operators::GeneticOperators;
pub use runner::{GaConfig, GaResult, GaRunner, Termination, run_search};
pub use selection::roulette_select;
