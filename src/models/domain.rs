//! Timetabling domain: subjects, teachers, groups and their quotas.
//!
//! [`DomainConfig`] is the name-based description read from configuration.
//! [`Domain`] is its compiled, index-based form, immutable for the whole
//! search. Every operator and the fitness evaluator read from a shared
//! `&Domain`; nothing in the engine ever writes to it.
//!
//! # Free period
//!
//! The subject catalog may contain a distinguished empty entry, written as
//! `""` in configuration. Drawing it yields [`Assignment::Free`](super::Assignment),
//! which has no teacher and consumes no quota.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::TimetableShape;
use crate::error::TimetableError;
use crate::validation::validate_domain;

/// Name used for the free period in a subject catalog.
pub const FREE_PERIOD: &str = "";

/// Name-based description of a timetabling instance.
///
/// # Example
/// ```
/// use u_timetable::models::{Domain, DomainConfig, GroupConfig};
///
/// let config = DomainConfig::new(5, 4)
///     .with_subject("math", ["alice", "bob"])
///     .with_subject("english", ["carol"])
///     .with_free_period()
///     .with_group(GroupConfig::new("1a").with_quota("math", 6).with_quota("english", 4))
///     .with_teacher_quota("alice", 4)
///     .with_teacher_quota("bob", 4)
///     .with_teacher_quota("carol", 6);
///
/// let domain = Domain::from_config(&config).unwrap();
/// assert_eq!(domain.catalog_len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Number of school days.
    pub days: usize,
    /// Number of lesson slots per day.
    pub slots_per_day: usize,
    /// Subject catalog. `""` denotes the free period.
    pub subjects: Vec<String>,
    /// Subject → teachers qualified to teach it.
    #[serde(default)]
    pub subject_teachers: BTreeMap<String, Vec<String>>,
    /// Student groups with their subject-hour quotas.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    /// Teacher → total assignable hours.
    #[serde(default)]
    pub teacher_quotas: BTreeMap<String, u32>,
}

/// A student group and the hours it needs per subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    /// Subject → required hours. Missing subjects require zero hours.
    #[serde(default)]
    pub quotas: BTreeMap<String, u32>,
}

impl GroupConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quotas: BTreeMap::new(),
        }
    }

    /// Sets the required hours for a subject.
    pub fn with_quota(mut self, subject: impl Into<String>, hours: u32) -> Self {
        self.quotas.insert(subject.into(), hours);
        self
    }
}

impl DomainConfig {
    /// Creates an empty configuration with the given week layout.
    pub fn new(days: usize, slots_per_day: usize) -> Self {
        Self {
            days,
            slots_per_day,
            ..Self::default()
        }
    }

    /// Adds a subject to the catalog together with its qualified teachers.
    pub fn with_subject<I, T>(mut self, name: impl Into<String>, teachers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = name.into();
        self.subject_teachers
            .insert(name.clone(), teachers.into_iter().map(Into::into).collect());
        self.subjects.push(name);
        self
    }

    /// Adds the free period to the catalog.
    pub fn with_free_period(mut self) -> Self {
        self.subjects.push(FREE_PERIOD.to_string());
        self
    }

    pub fn with_group(mut self, group: GroupConfig) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_teacher_quota(mut self, teacher: impl Into<String>, hours: u32) -> Self {
        self.teacher_quotas.insert(teacher.into(), hours);
        self
    }
}

/// Compiled, immutable timetabling instance.
///
/// Subjects, teachers and groups are addressed by index. Subject indices
/// cover real subjects only; the free period is tracked as a flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    days: usize,
    slots_per_day: usize,
    subjects: Vec<String>,
    free_period: bool,
    qualified: Vec<Vec<usize>>,
    teachers: Vec<String>,
    teacher_quotas: Vec<i64>,
    groups: Vec<String>,
    /// Flat `group × subject` table of required hours.
    group_quotas: Vec<i64>,
}

impl Domain {
    /// Validates and compiles a configuration.
    ///
    /// # Errors
    /// [`TimetableError::InvalidDomain`] with every defect found.
    pub fn from_config(config: &DomainConfig) -> Result<Self, TimetableError> {
        validate_domain(config).map_err(TimetableError::InvalidDomain)?;

        let subjects: Vec<String> = config
            .subjects
            .iter()
            .filter(|s| s.as_str() != FREE_PERIOD)
            .cloned()
            .collect();
        let free_period = config.subjects.iter().any(|s| s == FREE_PERIOD);

        let teachers: Vec<String> = config.teacher_quotas.keys().cloned().collect();
        let teacher_quotas: Vec<i64> = config
            .teacher_quotas
            .values()
            .map(|&h| i64::from(h))
            .collect();
        let qualified: Vec<Vec<usize>> = {
            let teacher_index: HashMap<&str, usize> = teachers
                .iter()
                .enumerate()
                .map(|(i, t)| (t.as_str(), i))
                .collect();
            subjects
                .iter()
                .map(|subject| {
                    config
                        .subject_teachers
                        .get(subject)
                        .map(|names| {
                            names
                                .iter()
                                .filter_map(|n| teacher_index.get(n.as_str()).copied())
                                .collect::<Vec<usize>>()
                        })
                        .unwrap_or_default()
                })
                .collect()
        };

        let group_quotas = {
            let subject_index: HashMap<&str, usize> = subjects
                .iter()
                .enumerate()
                .map(|(i, s)| (s.as_str(), i))
                .collect();
            let mut table = vec![0i64; config.groups.len() * subjects.len()];
            for (g, group) in config.groups.iter().enumerate() {
                for (subject, &hours) in &group.quotas {
                    if let Some(&s) = subject_index.get(subject.as_str()) {
                        table[g * subjects.len() + s] = i64::from(hours);
                    }
                }
            }
            table
        };

        Ok(Self {
            days: config.days,
            slots_per_day: config.slots_per_day,
            free_period,
            qualified,
            teachers,
            teacher_quotas,
            groups: config.groups.iter().map(|g| g.name.clone()).collect(),
            group_quotas,
            subjects,
        })
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn slots_per_day(&self) -> usize {
        self.slots_per_day
    }

    /// Shape every candidate timetable of this domain must have.
    pub fn shape(&self) -> TimetableShape {
        TimetableShape::new(self.groups.len(), self.days, self.slots_per_day)
    }

    /// Number of real (non-free) subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog contains the free period.
    pub fn has_free_period(&self) -> bool {
        self.free_period
    }

    /// Number of entries a random draw chooses from, free period included.
    pub fn catalog_len(&self) -> usize {
        self.subjects.len() + usize::from(self.free_period)
    }

    pub fn subject_name(&self, subject: usize) -> &str {
        &self.subjects[subject]
    }

    pub fn teacher_name(&self, teacher: usize) -> &str {
        &self.teachers[teacher]
    }

    pub fn group_name(&self, group: usize) -> &str {
        &self.groups[group]
    }

    pub fn subject_index(&self, name: &str) -> Option<usize> {
        self.subjects.iter().position(|s| s == name)
    }

    pub fn teacher_index(&self, name: &str) -> Option<usize> {
        self.teachers.iter().position(|t| t == name)
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g == name)
    }

    /// Teachers qualified for a subject.
    pub fn qualified_teachers(&self, subject: usize) -> &[usize] {
        &self.qualified[subject]
    }

    /// Required hours per subject for one group, indexed by subject.
    pub fn group_quotas(&self, group: usize) -> &[i64] {
        let n = self.subjects.len();
        &self.group_quotas[group * n..(group + 1) * n]
    }

    /// Flat `group × subject` quota table.
    pub(crate) fn group_quota_table(&self) -> &[i64] {
        &self.group_quotas
    }

    /// Total assignable hours per teacher, indexed by teacher.
    pub fn teacher_quotas(&self) -> &[i64] {
        &self.teacher_quotas
    }

    /// Sum of all group quotas.
    pub fn total_group_hours(&self) -> i64 {
        self.group_quotas.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> DomainConfig {
        DomainConfig::new(2, 3)
            .with_subject("math", ["t1", "t2"])
            .with_free_period()
            .with_subject("art", ["t3"])
            .with_group(GroupConfig::new("g1").with_quota("math", 2).with_quota("art", 1))
            .with_group(GroupConfig::new("g2").with_quota("art", 3))
            .with_teacher_quota("t1", 2)
            .with_teacher_quota("t2", 1)
            .with_teacher_quota("t3", 4)
    }

    #[test]
    fn test_from_config_indexes() {
        let domain = Domain::from_config(&sample_config()).unwrap();
        assert_eq!(domain.subject_count(), 2);
        assert!(domain.has_free_period());
        assert_eq!(domain.catalog_len(), 3);
        assert_eq!(domain.subject_name(0), "math");
        assert_eq!(domain.subject_name(1), "art");
        assert_eq!(domain.teacher_count(), 3);
        assert_eq!(domain.group_count(), 2);
        assert_eq!(domain.shape(), TimetableShape::new(2, 2, 3));
    }

    #[test]
    fn test_qualified_teachers_resolved() {
        let domain = Domain::from_config(&sample_config()).unwrap();
        let math = domain.subject_index("math").unwrap();
        let names: Vec<&str> = domain
            .qualified_teachers(math)
            .iter()
            .map(|&t| domain.teacher_name(t))
            .collect();
        assert_eq!(names, vec!["t1", "t2"]);
    }

    #[test]
    fn test_group_quotas_default_to_zero() {
        let domain = Domain::from_config(&sample_config()).unwrap();
        let g2 = domain.group_index("g2").unwrap();
        assert_eq!(domain.group_quotas(g2), &[0, 3]);
        assert_eq!(domain.total_group_hours(), 6);
    }

    #[test]
    fn test_teacher_quotas() {
        let domain = Domain::from_config(&sample_config()).unwrap();
        let t3 = domain.teacher_index("t3").unwrap();
        assert_eq!(domain.teacher_quotas()[t3], 4);
    }

    #[test]
    fn test_without_free_period() {
        let config = DomainConfig::new(1, 1)
            .with_subject("math", ["t1"])
            .with_group(GroupConfig::new("g").with_quota("math", 1))
            .with_teacher_quota("t1", 1);
        let domain = Domain::from_config(&config).unwrap();
        assert!(!domain.has_free_period());
        assert_eq!(domain.catalog_len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DomainConfig::new(0, 2).with_subject("math", ["ghost"]);
        let err = Domain::from_config(&config).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidDomain(ref errors) if errors.len() >= 2));
    }

    #[test]
    fn test_config_deserializes_free_period() {
        let json = r#"{
            "days": 1,
            "slots_per_day": 2,
            "subjects": ["math", ""],
            "subject_teachers": {"math": ["t1"]},
            "groups": [{"name": "g", "quotas": {"math": 1}}],
            "teacher_quotas": {"t1": 3}
        }"#;
        let config: DomainConfig = serde_json::from_str(json).unwrap();
        let domain = Domain::from_config(&config).unwrap();
        assert!(domain.has_free_period());
        assert_eq!(domain.subject_count(), 1);
    }
}
