use super::types::{
    ConscienciaConfig, QuestionnaireConfig, RawConscienciaConfig, RawQuestionnaireConfig,
    RawReportsConfig, ReportsConfig,
};
use anyhow::{Context, Result};
use consciencia_core::Scorer;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<ConscienciaConfig> {
        let mut raw = RawConscienciaConfig::default();

        // Layer 1: User config
        let user_path = Self::user_config_path();
        if user_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/consciencia/config.toml`)
    pub fn user_config_path() -> PathBuf {
        consciencia_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with CONSCIENCIA_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("CONSCIENCIA_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".consciencia/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<RawConscienciaConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawConscienciaConfig, overlay: RawConscienciaConfig) -> RawConscienciaConfig {
        RawConscienciaConfig {
            questionnaire: RawQuestionnaireConfig {
                questions: overlay
                    .questionnaire
                    .questions
                    .or(base.questionnaire.questions),
                segments: overlay.questionnaire.segments.or(base.questionnaire.segments),
            },
            reports: RawReportsConfig {
                dir: overlay.reports.dir.or(base.reports.dir),
            },
            scoring: overlay.scoring.or(base.scoring),
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawConscienciaConfig) -> ConscienciaConfig {
        let defaults = QuestionnaireConfig::default();
        ConscienciaConfig {
            questionnaire: QuestionnaireConfig {
                questions: raw.questionnaire.questions.unwrap_or(defaults.questions),
                segments: raw.questionnaire.segments.unwrap_or(defaults.segments),
            },
            reports: ReportsConfig {
                dir: raw.reports.dir.unwrap_or_else(|| ReportsConfig::default().dir),
            },
            scoring: raw.scoring,
        }
    }

    /// Build the scorer described by the config, validating custom tables
    pub fn scorer(config: &ConscienciaConfig) -> Result<Scorer> {
        match &config.scoring {
            Some(tables) => {
                Scorer::new(tables.clone()).context("Invalid [scoring] tables in configuration")
            }
            None => Ok(Scorer::default()),
        }
    }

    /// Load config from a specific path (for testing)
    #[cfg(test)]
    pub fn load_from_path(path: &Path) -> Result<ConscienciaConfig> {
        if path.exists() {
            Ok(Self::finalize(Self::read_raw(path)?))
        } else {
            Ok(ConscienciaConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consciencia_core::ScoringTables;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_from_path(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.questionnaire.questions, PathBuf::from("perguntas.json"));
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_load_from_valid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[questionnaire]
questions = "data/perguntas.json"
segments = "data/segmentos.json"

[reports]
dir = "/tmp/relatorios"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(
            config.questionnaire.questions,
            PathBuf::from("data/perguntas.json")
        );
        assert_eq!(
            config.questionnaire.segments,
            PathBuf::from("data/segmentos.json")
        );
        assert_eq!(config.reports.dir, PathBuf::from("/tmp/relatorios"));
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        assert!(ConfigLoader::load_from_path(&path).is_err());
    }

    #[test]
    fn test_merge_raw_overlay_overrides_base() {
        let base = RawConscienciaConfig {
            questionnaire: RawQuestionnaireConfig {
                questions: Some(PathBuf::from("base.json")),
                segments: Some(PathBuf::from("base-segments.json")),
            },
            reports: RawReportsConfig {
                dir: Some(PathBuf::from("/base")),
            },
            scoring: None,
        };
        let overlay = RawConscienciaConfig {
            questionnaire: RawQuestionnaireConfig {
                questions: Some(PathBuf::from("overlay.json")),
                segments: None,
            },
            reports: RawReportsConfig { dir: None },
            scoring: Some(ScoringTables::default()),
        };

        let merged = ConfigLoader::merge_raw(base, overlay);
        assert_eq!(
            merged.questionnaire.questions,
            Some(PathBuf::from("overlay.json"))
        );
        assert_eq!(
            merged.questionnaire.segments,
            Some(PathBuf::from("base-segments.json"))
        );
        assert_eq!(merged.reports.dir, Some(PathBuf::from("/base")));
        assert!(merged.scoring.is_some());
    }

    #[test]
    fn test_scorer_uses_custom_tables() {
        let mut tables = ScoringTables::default();
        tables.default_multiplier = 2.0;
        let config = ConscienciaConfig {
            scoring: Some(tables),
            ..ConscienciaConfig::default()
        };

        let scorer = ConfigLoader::scorer(&config).unwrap();
        assert_eq!(scorer.resolve_multiplier("Varejo"), 2.0);
    }

    #[test]
    fn test_scorer_rejects_invalid_tables() {
        let mut tables = ScoringTables::default();
        tables.recommendations.parcial.push("extra".to_string());
        let config = ConscienciaConfig {
            scoring: Some(tables),
            ..ConscienciaConfig::default()
        };

        let err = ConfigLoader::scorer(&config).unwrap_err();
        assert!(format!("{err:#}").contains("3 - Parcial"));
    }

    #[test]
    #[serial]
    fn test_project_config_path_respects_env() {
        unsafe {
            std::env::set_var("CONSCIENCIA_PROJECT_CONFIG_DIR", "/tmp/consciencia-e2e");
        }
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from("/tmp/consciencia-e2e/config.toml")
        );
        unsafe {
            std::env::remove_var("CONSCIENCIA_PROJECT_CONFIG_DIR");
        }
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from(".consciencia/config.toml")
        );
    }

    #[test]
    #[serial]
    fn test_user_config_path_ends_with_config_toml() {
        let path = ConfigLoader::user_config_path();
        assert!(path.ends_with("consciencia/config.toml"));
    }
}
