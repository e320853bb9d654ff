use crate::log_debug;

use super::{FocusTimer, TimerPhase};

impl FocusTimer {
    /// Idle to Running. Returns false if nothing changed, which includes
    /// starting an expired timer before `reset`.
    pub fn start(&mut self) -> bool {
        if self.phase != TimerPhase::Idle {
            return false;
        }
        log_debug!("Focus timer started at {}", self.clock_label());
        self.phase = TimerPhase::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        log_debug!("Focus timer paused at {}", self.clock_label());
        self.phase = TimerPhase::Idle;
        true
    }

    pub fn toggle(&mut self) -> bool {
        match self.phase {
            TimerPhase::Running => self.pause(),
            TimerPhase::Idle => self.start(),
            TimerPhase::Expired => false,
        }
    }

    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_seconds = self.duration_seconds;
    }
}
