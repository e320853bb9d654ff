use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::selection::AssistantPopup;
use crate::ui::style::ACCENT;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 9;
const EXCERPT_CHARS: usize = 80;

/// Place the popup at `anchor`, or above the selection when it would run
/// off the bottom of the screen. The result always lies inside `screen`.
pub fn popup_area(anchor_x: u16, anchor_y: u16, screen: Rect) -> Rect {
    let width = POPUP_WIDTH.min(screen.width);
    let height = POPUP_HEIGHT.min(screen.height);
    let max_x = screen.right().saturating_sub(width);
    let max_y = screen.bottom().saturating_sub(height);
    let x = anchor_x.clamp(screen.x, max_x.max(screen.x));
    let y = if anchor_y.saturating_add(height) <= screen.bottom() {
        anchor_y
    } else {
        anchor_y.saturating_sub(height + 1)
    };
    Rect::new(x, y.clamp(screen.y, max_y.max(screen.y)), width, height)
}

pub fn render_assistant_popup(popup: &AssistantPopup, spinner: usize, screen: Rect, buf: &mut Buffer) {
    let area = popup_area(popup.anchor.x, popup.anchor.y, screen);

    let mut excerpt: String = popup.excerpt.replace('\n', " ").chars().take(EXCERPT_CHARS).collect();
    if popup.excerpt.chars().count() > EXCERPT_CHARS {
        excerpt.push('…');
    }

    let reply = match &popup.reply {
        Some(reply) => Line::from(reply.as_str()),
        None => Line::from(format!("Thinking{}", ".".repeat(spinner / 10 % 4))).italic().fg(Color::Gray),
    };

    let text = Text::from(vec![
        Line::from(format!("\u{201c}{}\u{201d}", excerpt)).fg(Color::DarkGray),
        Line::from(""),
        reply,
    ]);

    Clear.render(area, buf);
    Paragraph::new(text)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT))
                .title(" 🤖 Study Assistant ")
                .title_bottom(Line::from(" Esc to close ").right_aligned()),
        )
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
