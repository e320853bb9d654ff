use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::UiComponent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl UiComponent {
    pub fn loading(message: &str, frame: usize) -> Paragraph {
        let text = format!("{} {}", SPINNER[frame % SPINNER.len()], message);

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue))
                    .padding(Padding::vertical(1))
            )
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
    }
}
