use crate::document::view::{MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};

use super::{ConfigError, StudyConfig};

impl StudyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.duration_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "timer.duration_seconds",
                reason: "must be greater than zero".to_string(),
            });
        }

        let zoom = self.viewer.default_zoom_percent;
        if !(MIN_ZOOM_PERCENT..=MAX_ZOOM_PERCENT).contains(&zoom) {
            return Err(ConfigError::Invalid {
                field: "viewer.default_zoom_percent",
                reason: format!("{} is outside {}..={}", zoom, MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT),
            });
        }

        if self.viewer.zoom_step_percent == 0 {
            return Err(ConfigError::Invalid {
                field: "viewer.zoom_step_percent",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.assistant.responses.is_empty() {
            return Err(ConfigError::Invalid {
                field: "assistant.responses",
                reason: "at least one canned response is required".to_string(),
            });
        }

        Ok(())
    }
}
