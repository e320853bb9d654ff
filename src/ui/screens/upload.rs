use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::document::classifier::{ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES};
use crate::ui::{centered_rect, style::ACCENT};
use crate::util::string::StringUtils;

pub fn render_upload_prompt(input: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(60, 30, area);

    let accepted: Vec<String> = ACCEPTED_EXTENSIONS.iter().map(|ext| format!(".{}", ext)).collect();
    let text = Text::from(vec![
        Line::from(format!("Path: {}▏", input)),
        Line::from(""),
        Line::from(format!(
            "Accepted: {} up to {}",
            accepted.join(" "),
            StringUtils::size_label(MAX_UPLOAD_BYTES)
        ))
        .fg(Color::Gray),
        Line::from("Enter open · Esc cancel").fg(Color::DarkGray),
    ]);

    Clear.render(popup, buf);
    Paragraph::new(text)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT))
                .title(" Upload document "),
        )
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}
