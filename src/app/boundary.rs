use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use color_eyre::eyre::eyre;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::log_error;

use super::App;

impl App {
    /// Top-level failure boundary for event handling. An error replaces the
    /// document pane with a generic failure view; the app keeps running.
    pub fn contain(&mut self, outcome: color_eyre::Result<()>) {
        if let Err(e) = outcome {
            log_error!("Unexpected error while handling an event: {:?}", e);
            self.fault = Some(e.to_string());
            self.popup = None;
        }
    }

    /// Run `handler` inside the boundary. Errors and panics both end up in
    /// [`App::contain`].
    pub fn guarded(&mut self, handler: impl FnOnce(&mut App) -> color_eyre::Result<()>) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(&mut *self)));
        self.contain(flatten(outcome));
    }

    /// Draw one frame inside the boundary. A panic while drawing is
    /// contained and the frame is drawn again with the failure view.
    pub fn draw_guarded(&mut self, area: Rect, buf: &mut Buffer, draw: impl Fn(&App, Rect, &mut Buffer)) {
        let first = panic::catch_unwind(AssertUnwindSafe(|| draw(&*self, area, &mut *buf)));
        let Err(payload) = first else {
            return;
        };
        self.contain(Err(panic_report(payload)));

        buf.reset();
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| draw(&*self, area, &mut *buf))) {
            log_error!("Failure view did not render: {}", panic_text(payload.as_ref()));
        }
    }

    pub fn dismiss_fault(&mut self) {
        self.fault = None;
    }
}

/// Turn a caught panic into an ordinary error.
pub(super) fn flatten(outcome: std::thread::Result<color_eyre::Result<()>>) -> color_eyre::Result<()> {
    outcome.unwrap_or_else(|payload| Err(panic_report(payload)))
}

fn panic_report(payload: Box<dyn Any + Send>) -> color_eyre::Report {
    eyre!("panicked: {}", panic_text(payload.as_ref()))
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text.to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}
