//! Class timetabling by genetic search.
//!
//! Assigns a subject and a teacher to every (group, day, slot) of a school
//! week so that each group receives its required hours per subject, no
//! teacher works beyond their total hours, and no teacher is booked by two
//! groups at once. The search is a best-effort evolutionary one: it stops on
//! a fully consistent timetable or after a fixed generation budget.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DomainConfig`, `Domain`, `Timetable`, `Assignment`
//! - **`validation`**: Configuration integrity checks (names, references, shape)
//! - **`ga`**: Fitness evaluation, roulette selection, crossover, mutation, runner
//! - **`report`**: Ranking and text rendering of results
//! - **`config`**: TOML loading for a complete search run
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::models::{Domain, DomainConfig, GroupConfig};
//!
//! let domain = Domain::from_config(
//!     &DomainConfig::new(1, 2)
//!         .with_subject("math", ["t1"])
//!         .with_free_period()
//!         .with_group(GroupConfig::new("1a").with_quota("math", 1))
//!         .with_teacher_quota("t1", 2),
//! )
//! .unwrap();
//!
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_max_generations(50)
//!     .with_seed(42);
//! let result = GaRunner::run(&domain, &config).unwrap();
//! assert!(result.best_fitness > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

pub use error::TimetableError;
