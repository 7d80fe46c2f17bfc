use consciencia_core::ScoringTables;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default question definitions file, relative to the working directory
pub const DEFAULT_QUESTIONS_FILE: &str = "perguntas.json";

/// Default segment list file, relative to the working directory
pub const DEFAULT_SEGMENTS_FILE: &str = "segmentos.json";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConscienciaConfig {
    #[serde(default)]
    pub questionnaire: RawQuestionnaireConfig,

    #[serde(default)]
    pub reports: RawReportsConfig,

    /// Full replacement for the built-in scoring tables
    #[serde(default)]
    pub scoring: Option<ScoringTables>,
}

/// Questionnaire file locations as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawQuestionnaireConfig {
    pub questions: Option<PathBuf>,
    pub segments: Option<PathBuf>,
}

/// Report storage as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawReportsConfig {
    pub dir: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConscienciaConfig {
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,

    #[serde(default)]
    pub reports: ReportsConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringTables>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireConfig {
    /// JSON array of `{"pergunta", "peso"}` objects
    pub questions: PathBuf,

    /// JSON array of segment labels
    pub segments: PathBuf,
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            segments: PathBuf::from(DEFAULT_SEGMENTS_FILE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Directory receiving `relatorio_<timestamp>.json` files
    pub dir: PathBuf,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: consciencia_paths::reports_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ConscienciaConfig::default();
        assert_eq!(
            config.questionnaire.questions,
            PathBuf::from(DEFAULT_QUESTIONS_FILE)
        );
        assert_eq!(
            config.questionnaire.segments,
            PathBuf::from(DEFAULT_SEGMENTS_FILE)
        );
        assert!(config.reports.dir.ends_with("relatorios"));
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConscienciaConfig {
            questionnaire: QuestionnaireConfig {
                questions: PathBuf::from("/srv/perguntas.json"),
                segments: PathBuf::from("/srv/segmentos.json"),
            },
            reports: ReportsConfig {
                dir: PathBuf::from("/srv/relatorios"),
            },
            scoring: Some(ScoringTables::default()),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConscienciaConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            parsed.questionnaire.questions,
            PathBuf::from("/srv/perguntas.json")
        );
        assert_eq!(parsed.reports.dir, PathBuf::from("/srv/relatorios"));
        assert_eq!(parsed.scoring, Some(ScoringTables::default()));
    }

    #[test]
    fn test_raw_config_partial_parsing() {
        let toml_str = r#"
[questionnaire]
questions = "custom.json"
"#;
        let raw: RawConscienciaConfig = toml::from_str(toml_str).unwrap();

        // Only questions was set
        assert_eq!(raw.questionnaire.questions, Some(PathBuf::from("custom.json")));
        assert!(raw.questionnaire.segments.is_none());
        assert!(raw.reports.dir.is_none());
        assert!(raw.scoring.is_none());
    }

    #[test]
    fn test_raw_config_empty_uses_none() {
        let raw: RawConscienciaConfig = toml::from_str("").unwrap();

        assert!(raw.questionnaire.questions.is_none());
        assert!(raw.reports.dir.is_none());
        assert!(raw.scoring.is_none());
    }
}
