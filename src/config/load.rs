use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::log_info;

use super::{ConfigError, StudyConfig, CONFIG_ENV, DEFAULT_CONFIG_PATH};

impl StudyConfig {
    /// Load from `STUDYFLOW_CONFIG`, falling back to `./studyflow.yml`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from_path(&path)
    }

    /// A missing file yields defaults; anything else that goes wrong is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log_info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let config = Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;

        log_info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: StudyConfig = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StudyConfig::load_from_path(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.timer.duration_seconds, 1500);
        assert_eq!(config.selection.min_chars, 10);
        assert_eq!(config.seed.participants.len(), 5);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = StudyConfig::from_yaml("timer:\n  duration_seconds: 180\n").unwrap();
        assert_eq!(config.timer.duration_seconds, 180);
        assert_eq!(config.viewer.default_zoom_percent, 100);
        assert_eq!(config.assistant.reply_delay_ms, 1500);
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studyflow.yml");
        fs::write(&path, "timer: [not, a, map").unwrap();

        let err = StudyConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path.ends_with("studyflow.yml")));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = StudyConfig::from_yaml("timer:\n  duration_seconds: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "timer.duration_seconds", .. }));
    }
}
