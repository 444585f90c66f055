//! Candidate timetable representation.
//!
//! A [`Timetable`] holds one [`Assignment`] per (group, day, slot). Cells
//! are stored in a single owned vector in group-major order, so a clone is
//! always a deep, independent copy: editing a derived candidate can never
//! leak into its ancestors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimensions of a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimetableShape {
    pub groups: usize,
    pub days: usize,
    pub slots_per_day: usize,
}

impl TimetableShape {
    pub fn new(groups: usize, days: usize, slots_per_day: usize) -> Self {
        Self {
            groups,
            days,
            slots_per_day,
        }
    }

    /// Total number of (group, day, slot) cells.
    pub fn cell_count(&self) -> usize {
        self.groups * self.days * self.slots_per_day
    }
}

impl fmt::Display for TimetableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} groups x {} days x {} slots",
            self.groups, self.days, self.slots_per_day
        )
    }
}

/// What a group does in one slot.
///
/// A free period never carries a teacher. Indices refer to the
/// [`Domain`](super::Domain) the timetable was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Assignment {
    #[default]
    Free,
    Lesson { subject: usize, teacher: usize },
}

impl Assignment {
    pub fn lesson(subject: usize, teacher: usize) -> Self {
        Self::Lesson { subject, teacher }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn subject(&self) -> Option<usize> {
        match *self {
            Self::Lesson { subject, .. } => Some(subject),
            Self::Free => None,
        }
    }

    pub fn teacher(&self) -> Option<usize> {
        match *self {
            Self::Lesson { teacher, .. } => Some(teacher),
            Self::Free => None,
        }
    }
}

/// One complete candidate timetable for every group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    shape: TimetableShape,
    cells: Vec<Assignment>,
}

impl Timetable {
    /// Creates a timetable with every slot free.
    pub fn free(shape: TimetableShape) -> Self {
        Self {
            shape,
            cells: vec![Assignment::Free; shape.cell_count()],
        }
    }

    /// Builds a timetable from group-major cells.
    ///
    /// Returns `None` if the cell count does not match the shape.
    pub fn from_cells(shape: TimetableShape, cells: Vec<Assignment>) -> Option<Self> {
        (cells.len() == shape.cell_count()).then_some(Self { shape, cells })
    }

    pub(crate) fn from_raw(shape: TimetableShape, cells: Vec<Assignment>) -> Self {
        debug_assert_eq!(cells.len(), shape.cell_count());
        Self { shape, cells }
    }

    pub fn shape(&self) -> TimetableShape {
        self.shape
    }

    /// All cells in group-major, then day, then slot order.
    pub fn cells(&self) -> &[Assignment] {
        &self.cells
    }

    /// Assignment at (group, day, slot).
    ///
    /// # Panics
    /// If any coordinate is out of range.
    pub fn get(&self, group: usize, day: usize, slot: usize) -> Assignment {
        self.cells[self.index(group, day, slot)]
    }

    /// Replaces the assignment at (group, day, slot).
    ///
    /// # Panics
    /// If any coordinate is out of range.
    pub fn set(&mut self, group: usize, day: usize, slot: usize, assignment: Assignment) {
        let idx = self.index(group, day, slot);
        self.cells[idx] = assignment;
    }

    /// Slots of one group on one day.
    pub fn day(&self, group: usize, day: usize) -> &[Assignment] {
        let start = self.index(group, day, 0);
        &self.cells[start..start + self.shape.slots_per_day]
    }

    /// Iterates the (group, day) rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Assignment]> {
        // max(1) keeps chunks() valid for zero-slot shapes, which have no cells anyway.
        self.cells.chunks(self.shape.slots_per_day.max(1))
    }

    /// Iterates every cell with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize, Assignment)> + '_ {
        let TimetableShape {
            days,
            slots_per_day,
            ..
        } = self.shape;
        self.cells.iter().enumerate().map(move |(i, &a)| {
            let slot = i % slots_per_day;
            let day = (i / slots_per_day) % days;
            let group = i / (slots_per_day * days);
            (group, day, slot, a)
        })
    }

    /// Number of non-free cells.
    pub fn lesson_count(&self) -> usize {
        self.cells.iter().filter(|a| !a.is_free()).count()
    }

    fn index(&self, group: usize, day: usize, slot: usize) -> usize {
        assert!(
            group < self.shape.groups && day < self.shape.days && slot < self.shape.slots_per_day,
            "cell ({group}, {day}, {slot}) outside {}",
            self.shape
        );
        (group * self.shape.days + day) * self.shape.slots_per_day + slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_timetable() {
        let t = Timetable::free(TimetableShape::new(2, 3, 4));
        assert_eq!(t.cells().len(), 24);
        assert_eq!(t.lesson_count(), 0);
        assert!(t.get(1, 2, 3).is_free());
    }

    #[test]
    fn test_set_and_get() {
        let mut t = Timetable::free(TimetableShape::new(2, 2, 2));
        t.set(1, 0, 1, Assignment::lesson(3, 4));
        assert_eq!(t.get(1, 0, 1), Assignment::lesson(3, 4));
        assert_eq!(t.day(1, 0), &[Assignment::Free, Assignment::lesson(3, 4)]);
        assert_eq!(t.lesson_count(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Timetable::free(TimetableShape::new(1, 1, 2));
        let mut copy = original.clone();
        copy.set(0, 0, 0, Assignment::lesson(0, 0));
        assert!(original.get(0, 0, 0).is_free());
    }

    #[test]
    fn test_iter_coordinates() {
        let mut t = Timetable::free(TimetableShape::new(2, 2, 3));
        t.set(1, 1, 2, Assignment::lesson(0, 0));
        let hits: Vec<_> = t.iter().filter(|(_, _, _, a)| !a.is_free()).collect();
        assert_eq!(hits, vec![(1, 1, 2, Assignment::lesson(0, 0))]);
        assert_eq!(t.iter().count(), 12);
    }

    #[test]
    fn test_rows() {
        let t = Timetable::free(TimetableShape::new(2, 3, 4));
        assert_eq!(t.rows().count(), 6);
        assert!(t.rows().all(|r| r.len() == 4));
    }

    #[test]
    fn test_from_cells_checks_length() {
        let shape = TimetableShape::new(1, 1, 2);
        assert!(Timetable::from_cells(shape, vec![Assignment::Free]).is_none());
        assert!(Timetable::from_cells(shape, vec![Assignment::Free; 2]).is_some());
    }

    #[test]
    fn test_assignment_accessors() {
        let a = Assignment::lesson(2, 5);
        assert_eq!(a.subject(), Some(2));
        assert_eq!(a.teacher(), Some(5));
        assert_eq!(Assignment::Free.subject(), None);
        assert_eq!(Assignment::Free.teacher(), None);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let t = Timetable::free(TimetableShape::new(1, 1, 1));
        t.get(0, 1, 0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut t = Timetable::free(TimetableShape::new(1, 1, 2));
        t.set(0, 0, 1, Assignment::lesson(1, 0));
        let json = serde_json::to_string(&t).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
