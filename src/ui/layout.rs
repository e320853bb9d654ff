use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Areas of the reading screen. Shared by the renderer and the mouse
/// handler so pointer positions map onto what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingLayout {
    pub header: Rect,
    pub document: Rect,
    /// Inside the document pane's border.
    pub document_content: Rect,
    pub sidebar: Rect,
    pub footer: Rect,
}

impl ReadingLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[1]);

        Self {
            header: rows[0],
            document: columns[0],
            document_content: columns[0].inner(Margin::new(1, 1)),
            sidebar: columns[1],
            footer: rows[2],
        }
    }
}
