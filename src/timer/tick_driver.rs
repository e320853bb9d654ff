use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time::Instant};

use crate::event::{AppEvent, Event};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task emitting [`AppEvent::TimerTick`] once per period.
/// Stopping or dropping the driver aborts the task.
#[derive(Debug, Default)]
pub struct TickDriver {
    task: Option<JoinHandle<()>>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking; a driver that is already running is restarted.
    pub fn start(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.start_with_period(sender, TICK_PERIOD);
    }

    pub fn start_with_period(&mut self, sender: mpsc::UnboundedSender<Event>, period: Duration) {
        self.stop();
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sender.send(Event::App(AppEvent::TimerTick)).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
