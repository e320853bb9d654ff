// src/config/mod.rs

//! Read-only application configuration: timer, viewer, selection and
//! assistant settings plus the seed data shown in the sidebar.

mod load;
mod seed;
mod validate;

use serde::Deserialize;
use thiserror::Error;

pub use seed::{FocusRoom, Learner, Participant, SeedData};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "STUDYFLOW_CONFIG";
/// Config file looked up when the environment variable is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./studyflow.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub timer: TimerConfig,
    pub viewer: ViewerConfig,
    pub selection: SelectionConfig,
    pub assistant: AssistantConfig,
    pub seed: SeedData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub duration_seconds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { duration_seconds: 25 * 60 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub default_zoom_percent: u16,
    pub zoom_step_percent: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_zoom_percent: 100,
            zoom_step_percent: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// A selection opens the assistant only when it is longer than this.
    pub min_chars: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { min_chars: 10 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub responses: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            responses: vec![
                "This passage introduces a key idea. Try restating it in your own words before moving on.".to_string(),
                "Good catch. This section connects to the previous heading; compare the two definitions.".to_string(),
                "Consider turning this into a flashcard: what question would this sentence answer?".to_string(),
            ],
        }
    }
}
