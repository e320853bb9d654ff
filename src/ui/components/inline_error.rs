use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// A document that could not be decoded. Scoped to the document pane.
    pub fn inline_error<'a>(title: &'a str, message: &'a str) -> Paragraph<'a> {
        let text = Text::from(vec![
            Line::from(format!("Could not open \"{}\"", title)),
            Line::from(""),
            Line::from(message),
            Line::from(""),
            Line::from("Press o to try another file."),
        ]);

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error ")
                    .padding(Padding::symmetric(2, 1))
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
