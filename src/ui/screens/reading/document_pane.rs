use ratatui::{
    buffer::Buffer,
    layout::Position,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::document::DocumentView;
use crate::ui::{components::UiComponent, layout::ReadingLayout, style::line_style};

pub fn render_document_pane(app: &App, layout: &ReadingLayout, buf: &mut Buffer) {
    if app.fault.is_some() {
        UiComponent::failure().render(layout.document, buf);
        return;
    }

    let view = app.current_view();
    match &view {
        DocumentView::Empty => {
            UiComponent::empty_message(
                " Document ",
                "No document loaded.\n\nPress o to upload a PDF, DOCX or TXT file (max 10 MB).",
                Some(Color::DarkGray),
            )
            .render(layout.document, buf);
        }
        DocumentView::Loading { message, .. } => {
            UiComponent::loading(message, app.spinner).render(layout.document, buf);
        }
        DocumentView::Failed { title, message } => {
            UiComponent::inline_error(title, message).render(layout.document, buf);
        }
        DocumentView::Pdf { .. } | DocumentView::RichText { .. } | DocumentView::Preformatted { .. } => {
            render_content(app, &view, layout, buf);
        }
    }
}

fn render_content(app: &App, view: &DocumentView, layout: &ReadingLayout, buf: &mut Buffer) {
    let content = layout.document_content;
    let lines = view.lines(content.width);
    let visible: Vec<Line> = lines
        .iter()
        .skip(app.scroll)
        .take(usize::from(content.height))
        .map(|l| Line::styled(l.text.clone(), line_style(l.style)))
        .collect();

    let footer = match view {
        DocumentView::Pdf { page_count, .. } => {
            format!(" {} pages · {}% ", page_count, app.zoom.percent())
        }
        DocumentView::RichText { warnings, .. } if !warnings.is_empty() => {
            format!(" {} conversion warnings ", warnings.len())
        }
        _ => format!(" {}/{} ", (app.scroll + 1).min(lines.len()), lines.len()),
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", view.title().unwrap_or_default()))
        .title_bottom(Line::from(footer).right_aligned());
    block.render(layout.document, buf);
    Paragraph::new(Text::from(visible)).render(content, buf);

    highlight_selection(app, layout, buf);
}

/// Reverse the cells under the drag in progress.
fn highlight_selection(app: &App, layout: &ReadingLayout, buf: &mut Buffer) {
    let Some((first, last)) = app.watcher.range() else {
        return;
    };
    let area = layout.document_content;
    let right = area.x + area.width.saturating_sub(1);

    for y in first.y.max(area.y)..=last.y.min(area.y + area.height.saturating_sub(1)) {
        let from = if y == first.y { first.x.max(area.x) } else { area.x };
        let to = if y == last.y { last.x.min(right) } else { right };
        for x in from..=to {
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}
