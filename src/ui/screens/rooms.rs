use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::{components::UiComponent, style::ACCENT};

pub fn render_rooms(app: &App, selected: usize, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    Paragraph::new(Line::from("🏫 Focus Rooms").bold().fg(ACCENT).centered())
        .block(Block::bordered().border_type(BorderType::Rounded))
        .render(rows[0], buf);

    let rooms = &app.config.seed.focus_rooms;
    if rooms.is_empty() {
        UiComponent::empty_message(" Rooms ", "No focus rooms are open right now.", Some(Color::DarkGray))
            .render(rows[1], buf);
    } else {
        let mut lines = Vec::new();
        for (i, room) in rooms.iter().enumerate() {
            let is_selected = i == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut title = vec![Span::styled(format!("{}{}", marker, room.name), name_style)];
            if room.is_locked {
                title.push(Span::from("  🔒 Requires sign up").fg(Color::Yellow));
            }
            lines.push(Line::from(title));
            lines.push(Line::from(format!("    {} · {} online", room.description, room.participants)).fg(Color::Gray));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .block(Block::bordered().border_type(BorderType::Rounded).title(" Choose a room "))
            .wrap(Wrap { trim: false })
            .render(rows[1], buf);
    }

    UiComponent::help("↑↓ choose · Enter join · Esc back · q quit").render(rows[2], buf);
}
