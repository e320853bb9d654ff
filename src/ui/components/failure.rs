use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Generic view shown by the failure boundary. Details go to the log.
    pub fn failure() -> Paragraph<'static> {
        let text = Text::from(vec![
            Line::from("Something went wrong").style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from("The document view hit an unexpected error."),
            Line::from("Press Esc to dismiss, or q to quit."),
        ]);

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red))
                    .padding(Padding::vertical(2))
            )
            .style(Style::default().fg(Color::LightRed))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
