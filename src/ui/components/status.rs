use ratatui::{
    layout::Alignment,
    prelude::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::StatusMessage;
use crate::ui::style::status_color;

use super::UiComponent;

impl UiComponent {
    pub fn status(status: &StatusMessage) -> Paragraph {
        let color = status_color(status.level);
        Paragraph::new(status.text.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(" Status ")
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
    }
}
