use ratatui::layout::Rect;

use crate::config::StudyConfig;
use crate::document::{DocumentSession, Zoom};
use crate::event::EventHandler;
use crate::selection::{ScriptedAssistant, SelectionWatcher};
use crate::timer::{FocusTimer, TickDriver};

use super::{App, AppMode};

impl App {
    /// Constructs a new instance of [`App`] reading terminal events.
    pub fn new(config: StudyConfig) -> Self {
        Self::with_events(config, EventHandler::new())
    }

    /// Used by tests to drive the app without a terminal.
    pub fn with_events(config: StudyConfig, events: EventHandler) -> Self {
        let (session, pipeline) = DocumentSession::new();
        let watcher = SelectionWatcher::from_config(&config.selection);
        let selection_subscription = Some(watcher.subscribe());
        let zoom = Zoom::from_config(&config.viewer);

        let mut app = Self {
            running: true,
            mode: AppMode::Reading,
            events,
            session,
            pipeline,
            zoom,
            scroll: 0,
            spinner: 0,
            timer: FocusTimer::from_config(&config.timer),
            tick_driver: TickDriver::new(),
            watcher,
            selection_subscription,
            assistant: ScriptedAssistant::from_config(&config.assistant),
            popup: None,
            status: None,
            fault: None,
            joined_room: None,
            viewport: Rect::new(0, 0, 120, 40),
            config,
        };
        app.session.set_pdf_scale(app.zoom.scale());
        app
    }
}
