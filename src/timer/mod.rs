// src/timer/mod.rs

//! Focus countdown. [`FocusTimer`] is a plain state machine; [`TickDriver`]
//! feeds it one tick per second through the event channel while running.

mod tick;
mod tick_driver;
mod transitions;

pub use tick_driver::TickDriver;

use crate::config::TimerConfig;
use crate::util::string::StringUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    /// Reached zero. Only `reset` leaves this phase.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    SessionComplete,
}

#[derive(Debug, Clone)]
pub struct FocusTimer {
    duration_seconds: u32,
    remaining_seconds: u32,
    phase: TimerPhase,
}

impl FocusTimer {
    pub fn new(duration_seconds: u32) -> Self {
        let duration_seconds = duration_seconds.max(1);
        Self {
            duration_seconds,
            remaining_seconds: duration_seconds,
            phase: TimerPhase::Idle,
        }
    }

    pub fn from_config(config: &TimerConfig) -> Self {
        Self::new(config.duration_seconds)
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn progress_percent(&self) -> f64 {
        let elapsed = self.duration_seconds - self.remaining_seconds;
        f64::from(elapsed) / f64::from(self.duration_seconds) * 100.0
    }

    /// `MM:SS` of the remaining time.
    pub fn clock_label(&self) -> String {
        StringUtils::clock_label(self.remaining_seconds)
    }
}
