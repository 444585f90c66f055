//! Input validation for timetabling domains.
//!
//! Checks structural integrity of a [`DomainConfig`] before it is compiled
//! into a [`Domain`](crate::models::Domain). Detects:
//! - Duplicate subject, group and teacher names
//! - An empty subject catalog, zero days or zero slots, no groups
//! - References to subjects or teachers that do not exist
//! - Real subjects nobody is qualified to teach
//! - Quotas or teachers attached to the free period
//!
//! Qualification of an individual assignment is never checked during the
//! search. A bad subject/teacher pairing can only enter through
//! configuration.

use crate::models::{DomainConfig, FREE_PERIOD};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two subjects, groups or teachers share a name.
    DuplicateName,
    /// The subject catalog has no entries.
    EmptyCatalog,
    /// Zero days or zero slots per day.
    EmptyShape,
    /// No student groups were configured.
    NoGroups,
    /// A quota or teacher list names a subject missing from the catalog.
    UnknownSubject,
    /// A real subject has no qualified teacher.
    MissingTeachers,
    /// A qualified teacher has no hour quota.
    UnknownTeacher,
    /// The free period was given teachers or a quota.
    InvalidFreePeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a domain configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_domain(config: &DomainConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.days == 0 || config.slots_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyShape,
            format!(
                "Week layout must have at least one day and one slot (got {} days, {} slots)",
                config.days, config.slots_per_day
            ),
        ));
    }

    if config.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Subject catalog is empty",
        ));
    }

    let mut subjects = HashSet::new();
    for subject in &config.subjects {
        if !subjects.insert(subject.as_str()) {
            let label = if subject == FREE_PERIOD {
                "free period"
            } else {
                subject.as_str()
            };
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate subject in catalog: {label}"),
            ));
        }
    }

    // Teacher lists
    for (subject, teachers) in &config.subject_teachers {
        if subject == FREE_PERIOD {
            if !teachers.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidFreePeriod,
                    "Free period cannot have qualified teachers",
                ));
            }
            continue;
        }
        if !subjects.contains(subject.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSubject,
                format!("Teacher list given for unknown subject '{subject}'"),
            ));
        }
        let mut seen = HashSet::new();
        for teacher in teachers {
            if !seen.insert(teacher.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!("Teacher '{teacher}' listed twice for subject '{subject}'"),
                ));
            }
            if !config.teacher_quotas.contains_key(teacher) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeacher,
                    format!("Subject '{subject}' references teacher '{teacher}' with no hour quota"),
                ));
            }
        }
    }

    for subject in config.subjects.iter().filter(|s| s.as_str() != FREE_PERIOD) {
        let has_teacher = config
            .subject_teachers
            .get(subject)
            .is_some_and(|t| !t.is_empty());
        if !has_teacher {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTeachers,
                format!("Subject '{subject}' has no qualified teacher"),
            ));
        }
    }

    // Groups
    if config.groups.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoGroups,
            "No student groups configured",
        ));
    }

    let mut groups = HashSet::new();
    for group in &config.groups {
        if !groups.insert(group.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate group name: {}", group.name),
            ));
        }
        for subject in group.quotas.keys() {
            if subject == FREE_PERIOD {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidFreePeriod,
                    format!("Group '{}' has a quota for the free period", group.name),
                ));
            } else if !subjects.contains(subject.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!(
                        "Group '{}' has a quota for unknown subject '{subject}'",
                        group.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupConfig;

    fn sample_config() -> DomainConfig {
        DomainConfig::new(5, 5)
            .with_subject("linalg", ["teacher1", "teacher2"])
            .with_subject("db", ["teacher3"])
            .with_free_period()
            .with_group(GroupConfig::new("tk").with_quota("linalg", 5).with_quota("db", 5))
            .with_group(GroupConfig::new("mi").with_quota("linalg", 3))
            .with_teacher_quota("teacher1", 5)
            .with_teacher_quota("teacher2", 5)
            .with_teacher_quota("teacher3", 5)
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_domain(&sample_config()).is_ok());
    }

    #[test]
    fn test_empty_shape() {
        let mut config = sample_config();
        config.slots_per_day = 0;
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyShape));
    }

    #[test]
    fn test_empty_catalog() {
        let config = DomainConfig::new(1, 1).with_group(GroupConfig::new("g"));
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_subject() {
        let config = sample_config().with_subject("db", ["teacher3"]);
        let errors = validate_domain(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("db")));
    }

    #[test]
    fn test_duplicate_free_period() {
        let config = sample_config().with_free_period();
        let errors = validate_domain(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("free period")));
    }

    #[test]
    fn test_duplicate_group() {
        let config = sample_config().with_group(GroupConfig::new("tk"));
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_teacher_without_quota() {
        let config = sample_config().with_subject("ai", ["nobody"]);
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownTeacher));
    }

    #[test]
    fn test_subject_without_teacher() {
        let mut config = sample_config();
        config.subjects.push("stats".into());
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::MissingTeachers));
    }

    #[test]
    fn test_quota_for_unknown_subject() {
        let config = sample_config().with_group(GroupConfig::new("ttp").with_quota("history", 2));
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownSubject));
    }

    #[test]
    fn test_free_period_quota_rejected() {
        let config = sample_config().with_group(GroupConfig::new("ttp").with_quota(FREE_PERIOD, 2));
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidFreePeriod));
    }

    #[test]
    fn test_no_groups() {
        let mut config = sample_config();
        config.groups.clear();
        let errors = validate_domain(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NoGroups));
    }

    #[test]
    fn test_multiple_errors() {
        let config = DomainConfig::new(0, 0).with_subject("x", ["ghost"]);
        let errors = validate_domain(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
