use std::panic::AssertUnwindSafe;

use color_eyre::Result;
use futures::FutureExt;
use ratatui::{
    backend::Backend,
    crossterm::event::{Event as CrosstermEvent, KeyEventKind},
    layout::Rect,
    widgets::Widget,
    DefaultTerminal, Terminal,
};

use crate::event::Event;
use crate::log_info;

use super::{boundary::flatten, App, MouseCapture};

impl App {
    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let _mouse = MouseCapture::enable()?;
        self.drive(&mut terminal).await
    }

    /// Event loop on any backend. [`App::shutdown`] runs however the loop
    /// ends, including early returns on terminal errors.
    pub async fn drive<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let outcome = self.event_loop(terminal).await;
        self.shutdown();
        outcome
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.viewport = Rect::new(0, 0, size.width, size.height);
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| {
                    let area = frame.area();
                    self.draw_guarded(area, frame.buffer_mut(), |app, area, buf| app.render(area, buf));
                })?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    needs_redraw = self.handle_event(event?).await;
                }
                Some(settled) = self.pipeline.recv() => {
                    self.guarded(|app| {
                        app.handle_pipeline_event(settled);
                        Ok(())
                    });
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Returns true if the screen needs redrawing.
    pub async fn handle_event(&mut self, event: Event) -> bool {
        match event {
            // Only animate while something is loading.
            Event::Tick => {
                if self.is_loading() {
                    self.spinner = self.spinner.wrapping_add(1);
                    true
                } else {
                    false
                }
            }
            Event::Crossterm(CrosstermEvent::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                self.guarded(|app| app.handle_key_events(key_event));
                true
            }
            Event::Crossterm(CrosstermEvent::Mouse(mouse_event)) => {
                self.guarded(|app| {
                    app.handle_mouse_events(mouse_event);
                    Ok(())
                });
                true
            }
            Event::Crossterm(CrosstermEvent::Resize(width, height)) => {
                // The popup is anchored to cells of the old layout.
                self.viewport = Rect::new(0, 0, width, height);
                self.popup = None;
                true
            }
            Event::Crossterm(_) => false,
            Event::App(app_event) => {
                let outcome = AssertUnwindSafe(self.handle_app_event(app_event)).catch_unwind().await;
                self.contain(flatten(outcome));
                true
            }
        }
    }

    /// Release everything the session holds.
    pub fn shutdown(&mut self) {
        self.tick_driver.stop();
        self.selection_subscription = None;
        self.popup = None;
        self.session.teardown();
        log_info!("StudyFlow shut down");
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, layout::Position};

    use super::*;
    use crate::config::StudyConfig;
    use crate::event::{AppEvent, EventHandler};
    use crate::selection::{AssistantPopup, SelectionPrompt};

    fn app() -> App {
        App::with_events(StudyConfig::default(), EventHandler::detached())
    }

    #[tokio::test]
    async fn leaving_the_loop_releases_everything() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        app.handle_app_event(AppEvent::ToggleTimer).await.unwrap();
        app.events.send(AppEvent::Quit);

        app.drive(&mut terminal).await.unwrap();

        assert!(!app.running);
        assert_eq!(app.viewport, Rect::new(0, 0, 100, 30));
        assert!(!app.tick_driver.is_running());
        assert!(app.selection_subscription.is_none());
    }

    #[tokio::test]
    async fn resize_closes_the_popup() {
        let mut app = app();
        let ticket = app.assistant.request("mitochondria", app.events.sender());
        let prompt = SelectionPrompt { excerpt: "mitochondria".to_string(), anchor: Position::new(10, 38) };
        app.popup = Some(AssistantPopup::open(prompt, ticket));

        app.handle_event(Event::Crossterm(CrosstermEvent::Resize(120, 20))).await;

        assert!(app.popup.is_none());
        assert_eq!(app.viewport, Rect::new(0, 0, 120, 20));
    }
}
