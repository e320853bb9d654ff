use crate::util::string::StringUtils;

use super::{page_width, BlockKind, DocumentView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
    ListItem,
    TableRow,
    Muted,
}

/// One terminal row of document content. Selection offsets index into
/// these rows, so the UI must draw them without re-wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub style: LineStyle,
}

impl RenderedLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self { text: text.into(), style }
    }
}

fn push_wrapped(out: &mut Vec<RenderedLine>, text: &str, width: usize, style: LineStyle) {
    out.extend(
        StringUtils::wrap(text, width)
            .into_iter()
            .map(|row| RenderedLine::new(row, style)),
    );
}

impl DocumentView {
    /// Content rows for a pane `width` cells wide. Views without content
    /// (empty, loading, failed) have no rows.
    pub fn lines(&self, width: u16) -> Vec<RenderedLine> {
        let mut out = Vec::new();
        match self {
            DocumentView::Empty | DocumentView::Loading { .. } | DocumentView::Failed { .. } => {}
            DocumentView::Pdf { text_layer, scale, .. } => {
                let column = usize::from(page_width(width, *scale));
                if text_layer.trim().is_empty() {
                    out.push(RenderedLine::new("(This PDF has no text layer)", LineStyle::Muted));
                } else {
                    let text = text_layer.replace('\u{c}', "\n");
                    push_wrapped(&mut out, text.trim_end(), column, LineStyle::Body);
                }
            }
            DocumentView::RichText { blocks, .. } => {
                let width = usize::from(width);
                for (i, block) in blocks.iter().enumerate() {
                    let separate = i > 0
                        && !(block.kind == BlockKind::ListItem && blocks[i - 1].kind == BlockKind::ListItem)
                        && !(block.kind == BlockKind::TableRow && blocks[i - 1].kind == BlockKind::TableRow);
                    if separate {
                        out.push(RenderedLine::new("", LineStyle::Body));
                    }
                    match block.kind {
                        BlockKind::Heading(_) => push_wrapped(&mut out, &block.text, width, LineStyle::Heading),
                        BlockKind::Paragraph => push_wrapped(&mut out, &block.text, width, LineStyle::Body),
                        BlockKind::ListItem => {
                            let item = format!("• {}", block.text);
                            push_wrapped(&mut out, &item, width, LineStyle::ListItem)
                        }
                        BlockKind::TableRow => push_wrapped(&mut out, &block.text, width, LineStyle::TableRow),
                    }
                }
            }
            DocumentView::Preformatted { text, .. } => {
                push_wrapped(&mut out, text, usize::from(width), LineStyle::Body);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::view::Block;

    #[test]
    fn preformatted_keeps_line_breaks() {
        let view = DocumentView::Preformatted { title: "t".to_string(), text: "hello\nworld".to_string() };
        let rows: Vec<String> = view.lines(40).into_iter().map(|l| l.text).collect();
        assert_eq!(rows, vec!["hello", "world"]);
    }

    #[test]
    fn list_items_are_not_separated() {
        let view = DocumentView::RichText {
            title: "t".to_string(),
            blocks: vec![
                Block { kind: BlockKind::Heading(1), text: "Topic".to_string() },
                Block { kind: BlockKind::ListItem, text: "a".to_string() },
                Block { kind: BlockKind::ListItem, text: "b".to_string() },
            ],
            warnings: vec![],
        };
        let rows: Vec<String> = view.lines(40).into_iter().map(|l| l.text).collect();
        assert_eq!(rows, vec!["Topic", "", "• a", "• b"]);
    }

    #[test]
    fn wide_text_fits_the_pane() {
        let view = DocumentView::Preformatted { title: "t".to_string(), text: "漢字".repeat(10) };
        let rows = view.lines(20);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "漢字".repeat(5));
    }

    #[test]
    fn pdf_without_text_says_so() {
        let view = DocumentView::Pdf { title: "t".to_string(), page_count: 2, text_layer: " ".to_string(), scale: 1.0 };
        assert_eq!(view.lines(80)[0].style, LineStyle::Muted);
    }
}
