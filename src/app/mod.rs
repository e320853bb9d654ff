// src/app/mod.rs

//! Terminal shell: owns every piece of state and mutates it only on the
//! event-loop task. Background work reports back through channels.

mod boundary;
mod handle_app_event;
mod handle_key_events;
mod handle_mouse_events;
mod handle_pipeline_event;
mod mouse_capture;
mod new;
mod run;
mod submit_upload;

pub use mouse_capture::MouseCapture;

use ratatui::layout::Rect;

use crate::config::StudyConfig;
use crate::document::{
    select_view, view::RenderedLine, DocumentSession, DocumentView, PipelineReceiver, Zoom,
};
use crate::event::EventHandler;
use crate::selection::{AssistantPopup, ScriptedAssistant, SelectionSubscription, SelectionWatcher};
use crate::timer::{FocusTimer, TickDriver};
use crate::ui::layout::ReadingLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Reading,
    UploadPrompt { input: String },
    Rooms { selected: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub mode: AppMode,
    pub config: StudyConfig,
    /// Event handler.
    pub events: EventHandler,

    pub session: DocumentSession,
    pub pipeline: PipelineReceiver,
    pub zoom: Zoom,
    /// First visible row of the document pane.
    pub scroll: usize,
    /// Animation frame for loading indicators.
    pub spinner: usize,

    pub timer: FocusTimer,
    pub tick_driver: TickDriver,

    pub watcher: SelectionWatcher,
    pub selection_subscription: Option<SelectionSubscription>,
    pub assistant: ScriptedAssistant,
    pub popup: Option<AssistantPopup>,

    pub status: Option<StatusMessage>,
    /// Set by the failure boundary; replaces the document pane until dismissed.
    pub fault: Option<String>,
    pub joined_room: Option<String>,
    /// Last known terminal area, used to map mouse positions.
    pub viewport: Rect,
}

impl App {
    pub fn current_view(&self) -> DocumentView {
        select_view(self.session.current(), self.zoom)
    }

    pub fn layout(&self) -> ReadingLayout {
        ReadingLayout::new(self.viewport)
    }

    /// Rows of the document pane exactly as drawn.
    pub fn document_lines(&self) -> Vec<RenderedLine> {
        self.current_view().lines(self.layout().document_content.width)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.current_view(), DocumentView::Loading { .. })
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage { text: text.into(), level: StatusLevel::Info });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage { text: text.into(), level: StatusLevel::Error });
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
