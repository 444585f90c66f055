//! Timetable encoding operators: random construction, crossover, mutation.
//!
//! # Encoding
//!
//! A chromosome is a [`Timetable`]: one gene per (group, day, slot), each
//! gene an [`Assignment`]. Genes are drawn uniformly from the subject
//! catalog (free period included) and, for real subjects, uniformly from
//! the qualified teachers. Nothing here enforces quotas or teacher
//! conflicts; those are left to fitness-driven selection.

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::error::TimetableError;
use crate::models::{Assignment, Domain, Timetable};

/// Draws one gene: a uniform catalog entry, then a uniform qualified teacher.
pub(crate) fn random_assignment<R: Rng>(domain: &Domain, rng: &mut R) -> Assignment {
    let choice = rng.random_range(0..domain.catalog_len());
    if choice >= domain.subject_count() {
        return Assignment::Free;
    }
    // Validation guarantees every real subject has a teacher.
    match domain.qualified_teachers(choice).choose(rng) {
        Some(&teacher) => Assignment::lesson(choice, teacher),
        None => Assignment::Free,
    }
}

impl Timetable {
    /// Creates a random timetable for every group of the domain.
    pub fn random<R: Rng>(domain: &Domain, rng: &mut R) -> Self {
        let shape = domain.shape();
        let cells = (0..shape.cell_count())
            .map(|_| random_assignment(domain, rng))
            .collect();
        Self::from_raw(shape, cells)
    }

    /// Checks shape and that every lesson is taught by a qualified teacher.
    pub fn is_valid(&self, domain: &Domain) -> bool {
        if self.shape() != domain.shape() {
            return false;
        }
        self.cells().iter().all(|a| match *a {
            Assignment::Free => true,
            Assignment::Lesson { subject, teacher } => {
                subject < domain.subject_count()
                    && domain.qualified_teachers(subject).contains(&teacher)
            }
        })
    }
}

/// Builds the starting population.
pub fn initial_population<R: Rng>(domain: &Domain, size: usize, rng: &mut R) -> Vec<Timetable> {
    (0..size).map(|_| Timetable::random(domain, rng)).collect()
}

/// Per-day one-point crossover.
///
/// For every (group, day) row a cut is drawn independently from
/// `0..=slots_per_day`; the child takes `p1[..cut]` followed by `p2[cut..]`.
///
/// # Errors
/// [`TimetableError::ShapeMismatch`] if the parents differ in shape.
pub fn slot_crossover<R: Rng>(
    p1: &Timetable,
    p2: &Timetable,
    rng: &mut R,
) -> Result<Timetable, TimetableError> {
    if p1.shape() != p2.shape() {
        return Err(TimetableError::ShapeMismatch {
            left: p1.shape(),
            right: p2.shape(),
        });
    }
    let shape = p1.shape();
    let mut cells = Vec::with_capacity(shape.cell_count());
    for (row1, row2) in p1.rows().zip(p2.rows()) {
        let cut = rng.random_range(0..=shape.slots_per_day);
        cells.extend_from_slice(&row1[..cut]);
        cells.extend_from_slice(&row2[cut..]);
    }
    Ok(Timetable::from_raw(shape, cells))
}

/// Point mutation: redraws the gene at one uniformly random cell.
///
/// Returns a new timetable; the input is left untouched. The redrawn gene
/// may coincide with the old one.
pub fn point_mutation<R: Rng>(timetable: &Timetable, domain: &Domain, rng: &mut R) -> Timetable {
    let shape = timetable.shape();
    let mut mutated = timetable.clone();
    if shape.cell_count() == 0 {
        return mutated;
    }
    let group = rng.random_range(0..shape.groups);
    let day = rng.random_range(0..shape.days);
    let slot = rng.random_range(0..shape.slots_per_day);
    mutated.set(group, day, slot, random_assignment(domain, rng));
    mutated
}
