use ratatui::style::{Color, Modifier, Style, Stylize};

use crate::app::StatusLevel;
use crate::document::view::LineStyle;

pub const ACCENT: Color = Color::Cyan;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn line_style(style: LineStyle) -> Style {
    match style {
        LineStyle::Heading => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        LineStyle::Body => Style::default(),
        LineStyle::ListItem => Style::default().fg(Color::White),
        LineStyle::TableRow => Style::default().fg(Color::Gray),
        LineStyle::Muted => Style::default().fg(Color::DarkGray).italic(),
    }
}

pub fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Green,
        StatusLevel::Error => Color::Red,
    }
}
