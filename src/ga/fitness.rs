//! Constraint-violation fitness for candidate timetables.
//!
//! # Penalty
//!
//! | Violation | Units |
//! |-----------|-------|
//! | Teacher booked by two groups in the same slot | 10 per extra booking |
//! | Group subject hours off target (short or surplus) | \|remainder\| |
//! | Teacher assigned beyond total hours | overage |
//!
//! Teachers below their total hours are not penalized.
//!
//! Fitness is `1 / (1 + penalty)`: exactly 1 for a consistent timetable,
//! strictly between 0 and 1 otherwise.

use rayon::prelude::*;
use std::fmt;

use crate::models::{Assignment, Domain, Timetable};

/// Penalty units added for each teacher double-booking.
pub const DOUBLE_BOOKING_PENALTY: i64 = 10;

/// Penalty split by violation type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyBreakdown {
    /// Lessons whose teacher was already claimed by another group in that slot.
    pub double_bookings: usize,
    /// Sum of |required - scheduled| over every group and subject.
    pub group_deviation: i64,
    /// Sum of hours scheduled beyond each teacher's total.
    pub teacher_overload: i64,
}

impl PenaltyBreakdown {
    /// Scalar penalty.
    pub fn total(&self) -> i64 {
        self.double_bookings as i64 * DOUBLE_BOOKING_PENALTY
            + self.group_deviation
            + self.teacher_overload
    }

    pub fn fitness(&self) -> f64 {
        1.0 / (1.0 + self.total() as f64)
    }
}

impl fmt::Display for PenaltyBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "penalty {} (double bookings: {}, quota deviation: {}, teacher overload: {})",
            self.total(),
            self.double_bookings,
            self.group_deviation,
            self.teacher_overload
        )
    }
}

/// Evaluates timetables against one domain.
///
/// Owns the per-evaluation working state (quota remainders, teacher
/// occupancy) and resets it from the domain on every call, so one evaluator
/// can score a whole population without reallocating. The domain itself is
/// only ever read.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    domain: &'a Domain,
    group_remaining: Vec<i64>,
    teacher_remaining: Vec<i64>,
    /// `teacher × day × slot` → group holding the teacher.
    occupancy: Vec<Option<usize>>,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(domain: &'a Domain) -> Self {
        let occupancy_len = domain.teacher_count() * domain.days() * domain.slots_per_day();
        Self {
            domain,
            group_remaining: domain.group_quota_table().to_vec(),
            teacher_remaining: domain.teacher_quotas().to_vec(),
            occupancy: vec![None; occupancy_len],
        }
    }

    /// Fitness in (0, 1].
    pub fn evaluate(&mut self, timetable: &Timetable) -> f64 {
        self.breakdown(timetable).fitness()
    }

    /// Scalar penalty.
    pub fn penalty(&mut self, timetable: &Timetable) -> i64 {
        self.breakdown(timetable).total()
    }

    /// Computes the penalty split by violation type.
    ///
    /// # Panics
    /// If `timetable` was not built for this evaluator's domain: its shape
    /// differs, or a lesson names a subject or teacher the domain lacks.
    pub fn breakdown(&mut self, timetable: &Timetable) -> PenaltyBreakdown {
        let domain = self.domain;
        assert_eq!(
            timetable.shape(),
            domain.shape(),
            "timetable shape does not match the domain"
        );

        self.group_remaining.copy_from_slice(domain.group_quota_table());
        self.teacher_remaining.copy_from_slice(domain.teacher_quotas());
        self.occupancy.fill(None);

        let days = domain.days();
        let slots = domain.slots_per_day();
        let subjects = domain.subject_count();
        let mut result = PenaltyBreakdown::default();

        for (group, day, slot, assignment) in timetable.iter() {
            let Assignment::Lesson { subject, teacher } = assignment else {
                continue;
            };
            assert!(
                subject < subjects && teacher < self.teacher_remaining.len(),
                "lesson ({subject}, {teacher}) is outside the domain"
            );
            let cell = (teacher * days + day) * slots + slot;
            match self.occupancy[cell] {
                Some(holder) if holder != group => result.double_bookings += 1,
                Some(_) => {}
                None => self.occupancy[cell] = Some(group),
            }
            self.group_remaining[group * subjects + subject] -= 1;
            self.teacher_remaining[teacher] -= 1;
        }

        result.group_deviation = self.group_remaining.iter().map(|r| r.abs()).sum();
        result.teacher_overload = self
            .teacher_remaining
            .iter()
            .filter(|&&r| r < 0)
            .map(|r| -r)
            .sum();
        result
    }
}

/// Fitness of a single timetable.
///
/// # Panics
/// Under the same conditions as [`FitnessEvaluator::breakdown`].
pub fn fitness(domain: &Domain, timetable: &Timetable) -> f64 {
    FitnessEvaluator::new(domain).evaluate(timetable)
}

/// Scores a whole population, keeping the result aligned with its order.
///
/// With `parallel`, each rayon worker owns its own evaluator buffers.
pub fn evaluate_population(domain: &Domain, population: &[Timetable], parallel: bool) -> Vec<f64> {
    if parallel {
        population
            .par_iter()
            .map_init(|| FitnessEvaluator::new(domain), |ev, t| ev.evaluate(t))
            .collect()
    } else {
        let mut evaluator = FitnessEvaluator::new(domain);
        population.iter().map(|t| evaluator.evaluate(t)).collect()
    }
}
