use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::ui::{components::UiComponent, layout::ReadingLayout, style::ACCENT};

pub mod document_pane;
pub mod popup;
pub mod sidebar;

const HELP: &str = "o upload · space start/pause · r reset · +/- zoom · ↑↓ scroll · f rooms · q quit";

pub fn render_reading(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = ReadingLayout::new(area);

    render_header(app, layout.header, buf);
    document_pane::render_document_pane(app, &layout, buf);
    sidebar::render_sidebar(app, layout.sidebar, buf);

    match &app.status {
        Some(status) => UiComponent::status(status).render(layout.footer, buf),
        None => UiComponent::help(HELP).render(layout.footer, buf),
    }

    if let Some(popup) = &app.popup {
        popup::render_assistant_popup(popup, app.spinner, area, buf);
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![Span::from("📚 StudyFlow").bold().fg(ACCENT)];
    if let Some(room) = &app.joined_room {
        spans.push(Span::from(format!("  ·  {}", room)).fg(Color::Green));
    }
    if let Some(document) = app.session.current() {
        spans.push(Span::from(format!("  ·  {} ({}, {})", document.title, document.kind(), document.size_label)).fg(Color::Gray));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::bordered().border_type(BorderType::Rounded))
        .alignment(Alignment::Left)
        .render(area, buf);
}
