pub mod components;
pub mod layout;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::{App, AppMode};
use crate::ui::screens::{reading::render_reading, rooms::render_rooms, upload::render_upload_prompt};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.mode {
            AppMode::Rooms { selected } => render_rooms(self, *selected, area, buf),
            AppMode::Reading => render_reading(self, area, buf),
            AppMode::UploadPrompt { input } => {
                render_reading(self, area, buf);
                render_upload_prompt(input, area, buf);
            }
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    use crate::config::StudyConfig;
    use crate::event::EventHandler;
    use crate::selection::{AssistantPopup, SelectionPrompt};

    fn render(app: &App) -> String {
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn reading_screen_shows_upload_hint_and_sidebar() {
        let app = App::with_events(StudyConfig::default(), EventHandler::detached());
        let screen = render(&app);
        assert!(screen.contains("Press o to upload"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("5 students studying now"));
        assert!(screen.contains("Alex Kim"));
    }

    #[tokio::test]
    async fn failure_boundary_replaces_the_document_pane() {
        let mut app = App::with_events(StudyConfig::default(), EventHandler::detached());
        app.fault = Some("boom".to_string());
        let screen = render(&app);
        assert!(screen.contains("Something went wrong"));
        assert!(!screen.contains("Press o to upload"));
    }

    #[tokio::test]
    async fn popup_anchored_past_a_shrunken_screen_still_renders() {
        let mut app = App::with_events(StudyConfig::default(), EventHandler::detached());
        let ticket = app.assistant.request("chlorophyll absorbs light", app.events.sender());
        let prompt = SelectionPrompt {
            excerpt: "chlorophyll absorbs light".to_string(),
            anchor: Position::new(10, 38),
        };
        app.popup = Some(AssistantPopup::open(prompt, ticket));

        let area = Rect::new(0, 0, 120, 20);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        let screen: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Study Assistant"));
    }

    #[tokio::test]
    async fn rooms_screen_marks_locked_rooms() {
        let mut app = App::with_events(StudyConfig::default(), EventHandler::detached());
        app.mode = AppMode::Rooms { selected: 0 };
        let screen = render(&app);
        assert!(screen.contains("Focus Room 1"));
        assert!(screen.contains("Requires sign up"));
    }
}
