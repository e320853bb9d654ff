use crate::config::ViewerConfig;

use super::{DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};

/// Zoom level in percent, always inside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: u16,
    step: u16,
}

impl Zoom {
    pub fn new(percent: u16, step: u16) -> Self {
        Self {
            percent: percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT),
            step: step.max(1),
        }
    }

    pub fn from_config(viewer: &ViewerConfig) -> Self {
        Self::new(viewer.default_zoom_percent, viewer.zoom_step_percent)
    }

    pub fn percent(&self) -> u16 {
        self.percent
    }

    pub fn scale(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }

    /// Returns true if the level changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set(self.percent.saturating_add(self.step))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set(self.percent.saturating_sub(self.step))
    }

    fn set(&mut self, percent: u16) -> bool {
        let clamped = percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
        let changed = clamped != self.percent;
        self.percent = clamped;
        changed
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_PERCENT, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_range() {
        let mut zoom = Zoom::new(190, 25);
        assert!(zoom.zoom_in());
        assert_eq!(zoom.percent(), MAX_ZOOM_PERCENT);
        assert!(!zoom.zoom_in());

        let mut zoom = Zoom::new(10, 10);
        assert_eq!(zoom.percent(), MIN_ZOOM_PERCENT);
        assert!(!zoom.zoom_out());
    }

    #[test]
    fn scale_follows_percent() {
        let mut zoom = Zoom::default();
        zoom.zoom_out();
        assert_eq!(zoom.percent(), 90);
        assert!((zoom.scale() - 0.9).abs() < f32::EPSILON);
    }
}
