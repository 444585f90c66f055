//! Error type shared by the search engine and its configuration layer.

use thiserror::Error;

use crate::models::TimetableShape;
use crate::validation::ValidationError;

/// Errors produced while configuring or running a timetable search.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// All fitness values summed to zero, so roulette selection cannot normalize.
    #[error("fitness values sum to zero; population is degenerate")]
    ZeroFitnessSum,
    /// Weighted sampling rejected the fitness vector (NaN, negative, overflow).
    #[error("invalid fitness weights: {0}")]
    InvalidFitness(String),
    /// Crossover requires parents with identical group/day/slot counts.
    #[error("timetable shapes differ: {left} vs {right}")]
    ShapeMismatch {
        left: TimetableShape,
        right: TimetableShape,
    },
    /// A GA parameter is out of range.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
    /// The domain description failed validation.
    #[error("invalid domain: {}", format_validation(.0))]
    InvalidDomain(Vec<ValidationError>),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_domain_message_lists_all_errors() {
        let err = TimetableError::InvalidDomain(vec![
            ValidationError {
                kind: ValidationErrorKind::DuplicateName,
                message: "Duplicate group name: a".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::EmptyCatalog,
                message: "Subject catalog is empty".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid domain: Duplicate group name: a; Subject catalog is empty"
        );
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = TimetableError::ShapeMismatch {
            left: TimetableShape::new(1, 2, 3),
            right: TimetableShape::new(1, 2, 4),
        };
        assert_eq!(
            err.to_string(),
            "timetable shapes differ: 1 groups x 2 days x 3 slots vs 1 groups x 2 days x 4 slots"
        );
    }
}
