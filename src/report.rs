//! Ranking and text rendering of search results.
//!
//! The search returns an unranked population; this module re-scores it,
//! keeps the top candidates and renders one as a day-by-day table listing
//! every group per slot:
//!
//! ```text
//! Day 1:
//!
//!   Slot 1: tk: linalg (teacher1), mi: free, ttp: db (teacher3)
//!   Slot 2: ...
//!
//! ----------------------------------------
//! ```

use std::cmp::Ordering;

use crate::ga::FitnessEvaluator;
use crate::models::{Assignment, Domain, Timetable};

/// A timetable with its fitness.
#[derive(Debug, Clone)]
pub struct RankedTimetable {
    pub timetable: Timetable,
    pub fitness: f64,
}

/// Scores a population and returns its `top_k` best, best first.
///
/// Ties keep population order.
pub fn rank_population(
    domain: &Domain,
    population: &[Timetable],
    top_k: usize,
) -> Vec<RankedTimetable> {
    let mut evaluator = FitnessEvaluator::new(domain);
    let mut ranked: Vec<RankedTimetable> = population
        .iter()
        .map(|t| RankedTimetable {
            fitness: evaluator.evaluate(t),
            timetable: t.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);
    ranked
}

/// Formats one cell as `subject (teacher)` or `free`.
pub fn describe_assignment(domain: &Domain, assignment: Assignment) -> String {
    match assignment {
        Assignment::Free => "free".to_string(),
        Assignment::Lesson { subject, teacher } => format!(
            "{} ({})",
            domain.subject_name(subject),
            domain.teacher_name(teacher)
        ),
    }
}

/// Renders a timetable day by day, slot by slot, all groups per line.
pub fn render_timetable(domain: &Domain, timetable: &Timetable) -> String {
    let shape = timetable.shape();
    let mut out = String::new();

    for day in 0..shape.days {
        out.push_str(&format!("Day {}:\n\n", day + 1));
        for slot in 0..shape.slots_per_day {
            let cells: Vec<String> = (0..shape.groups)
                .map(|group| {
                    format!(
                        "{}: {}",
                        domain.group_name(group),
                        describe_assignment(domain, timetable.get(group, day, slot))
                    )
                })
                .collect();
            out.push_str(&format!("  Slot {}: {}\n", slot + 1, cells.join(", ")));
        }
        out.push_str(&format!("\n{}\n\n", "-".repeat(40)));
    }
    out
}
