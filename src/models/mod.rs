//! Timetabling domain models.
//!
//! Provides the configuration-facing description of a timetabling instance
//! and the candidate representation the genetic search evolves.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | University | Training Center |
//! |-------------|--------|------------|-----------------|
//! | Group | Class | Study group | Cohort |
//! | Subject | Lesson | Course | Module |
//! | Teacher | Teacher | Lecturer | Trainer |
//! | Timetable | Weekly plan | Semester grid | Course calendar |

mod domain;
mod timetable;

pub use domain::{Domain, DomainConfig, GroupConfig, FREE_PERIOD};
pub use timetable::{Assignment, Timetable, TimetableShape};
