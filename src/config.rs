//! TOML configuration for a search run.
//!
//! ```toml
//! [ga]
//! population_size = 50
//! max_generations = 1000
//!
//! [report]
//! top_k = 10
//!
//! [domain]
//! days = 5
//! slots_per_day = 5
//! subjects = ["linalg", "db", ""]   # "" is the free period
//!
//! [domain.subject_teachers]
//! linalg = ["teacher1"]
//! db = ["teacher2"]
//!
//! [domain.teacher_quotas]
//! teacher1 = 10
//! teacher2 = 10
//!
//! [[domain.groups]]
//! name = "tk"
//! quotas = { linalg = 5, db = 5 }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::TimetableError;
use crate::ga::GaConfig;
use crate::models::{Domain, DomainConfig};

/// Everything a search run needs.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub ga: GaConfig,
    pub domain: DomainConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Result presentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How many top timetables to keep after ranking.
    pub top_k: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_k: 10 }
    }
}

impl SearchConfig {
    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self, TimetableError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TimetableError> {
        Ok(toml::from_str(content)?)
    }

    /// Validates every section and compiles the domain.
    pub fn prepare(&self) -> Result<Domain, TimetableError> {
        self.ga.validate()?;
        if self.report.top_k == 0 {
            return Err(TimetableError::InvalidConfig(
                "report.top_k must be positive".into(),
            ));
        }
        Domain::from_config(&self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../timetable.toml");

    #[test]
    fn test_sample_config_parses() {
        let config = SearchConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.ga.population_size, 50);
        assert_eq!(config.ga.max_generations, 1000);
        assert_eq!(config.ga.mutation_rate, 0.3);
        assert_eq!(config.ga.crossover_rate, 0.8);
        assert_eq!(config.report.top_k, 10);

        let domain = config.prepare().unwrap();
        assert_eq!(domain.group_count(), 3);
        assert_eq!(domain.subject_count(), 6);
        assert!(domain.has_free_period());
        assert_eq!(domain.teacher_count(), 6);
        assert_eq!(domain.days(), 5);
        assert_eq!(domain.slots_per_day(), 5);
        let mi = domain.group_index("mi").unwrap();
        let stats = domain.subject_index("stats").unwrap();
        assert_eq!(domain.group_quotas(mi)[stats], 5);
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = SearchConfig::from_toml_str(
            r#"
            [domain]
            days = 1
            slots_per_day = 2
            subjects = ["math", ""]
            subject_teachers = { math = ["t1"] }
            teacher_quotas = { t1 = 2 }
            groups = [{ name = "g", quotas = { math = 1 } }]
            "#,
        )
        .unwrap();
        assert_eq!(config.ga, GaConfig::default());
        assert_eq!(config.report.top_k, 10);
        assert!(config.prepare().is_ok());
    }

    #[test]
    fn test_partial_ga_section_keeps_defaults() {
        let config = SearchConfig::from_toml_str(
            r#"
            [ga]
            population_size = 12
            seed = 7

            [domain]
            days = 1
            slots_per_day = 1
            subjects = [""]
            groups = [{ name = "g" }]
            "#,
        )
        .unwrap();
        assert_eq!(config.ga.population_size, 12);
        assert_eq!(config.ga.seed, Some(7));
        assert_eq!(config.ga.mutation_rate, 0.3);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SearchConfig::from_toml_str("[domain\n").unwrap_err();
        assert!(matches!(err, TimetableError::Toml(_)));
    }

    #[test]
    fn test_prepare_rejects_bad_sections() {
        let mut config = SearchConfig::from_toml_str(SAMPLE).unwrap();
        config.report.top_k = 0;
        assert!(matches!(config.prepare(), Err(TimetableError::InvalidConfig(_))));

        let mut config = SearchConfig::from_toml_str(SAMPLE).unwrap();
        config.domain.groups.clear();
        assert!(matches!(config.prepare(), Err(TimetableError::InvalidDomain(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = SearchConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, TimetableError::Io(_)));
    }
}
