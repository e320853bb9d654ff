use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Position,
};

use crate::event::AppEvent;
use crate::selection::{AssistantPopup, SelectionSurface};

use super::{App, AppMode};

impl App {
    /// Pointer gestures over the document pane drive the selection watcher.
    pub fn handle_mouse_events(&mut self, mouse_event: MouseEvent) {
        if self.mode != AppMode::Reading || self.fault.is_some() {
            return;
        }
        let position = Position::new(mouse_event.column, mouse_event.row);
        let area = self.layout().document_content;

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.popup = None;
                self.watcher.pointer_down(position, area);
            }
            MouseEventKind::Drag(MouseButton::Left) => self.watcher.pointer_drag(position),
            MouseEventKind::Up(MouseButton::Left) => {
                let lines = self.document_lines();
                let surface = SelectionSurface { area, scroll: self.scroll, lines: &lines };
                if let Some(prompt) = self.watcher.pointer_release(position, surface) {
                    let ticket = self.assistant.request(&prompt.excerpt, self.events.sender());
                    self.popup = Some(AssistantPopup::open(prompt, ticket));
                }
            }
            MouseEventKind::ScrollUp if area.contains(position) => self.events.send(AppEvent::ScrollUp(3)),
            MouseEventKind::ScrollDown if area.contains(position) => self.events.send(AppEvent::ScrollDown(3)),
            _ => {}
        }
    }
}
