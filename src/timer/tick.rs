use crate::log_info;

use super::{FocusTimer, TimerEvent, TimerPhase};

impl FocusTimer {
    /// Advance one second. Ticks outside Running are ignored, so a tick
    /// still queued after a pause does nothing.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.phase != TimerPhase::Running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        self.phase = TimerPhase::Expired;
        log_info!("Focus session of {}s complete", self.duration_seconds);
        Some(TimerEvent::SessionComplete)
    }
}
