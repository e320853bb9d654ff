//! Just enough HTML reading to lay converted Word content out as terminal
//! blocks. Input is the converter's own output, not arbitrary web pages.

use std::mem;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::log_warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    ListItem,
    TableRow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// True if `content` contains at least one element tag.
pub fn looks_like_markup(content: &str) -> bool {
    let mut reader = Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if is_element_name(e.name().as_ref()) => return true,
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
    }
}

fn is_element_name(name: &[u8]) -> bool {
    name.first().is_some_and(|c| c.is_ascii_alphabetic())
}

fn heading_level(name: &[u8]) -> Option<u8> {
    match name {
        [b'h', n @ b'1'..=b'6'] => Some(n - b'0'),
        _ => None,
    }
}

fn flush(blocks: &mut Vec<Block>, kind: BlockKind, text: &mut String) {
    let taken = mem::take(text);
    let trimmed = taken.trim();
    if !trimmed.is_empty() {
        blocks.push(Block {
            kind,
            text: trimmed.to_string(),
        });
    }
}

#[derive(Debug, Default)]
struct BlockReader {
    blocks: Vec<Block>,
    kind: Option<BlockKind>,
    text: String,
    cells: Vec<String>,
    in_row: bool,
}

impl BlockReader {
    fn kind(&self) -> BlockKind {
        self.kind.unwrap_or(BlockKind::Paragraph)
    }

    fn open(&mut self, name: &[u8]) {
        match name {
            b"tr" => {
                let kind = self.kind();
                flush(&mut self.blocks, kind, &mut self.text);
                self.in_row = true;
                self.cells.clear();
            }
            _ if self.in_row => {}
            b"p" | b"li" => {
                let kind = self.kind();
                flush(&mut self.blocks, kind, &mut self.text);
                self.kind = Some(if name == b"li" { BlockKind::ListItem } else { BlockKind::Paragraph });
            }
            other => {
                if let Some(level) = heading_level(other) {
                    let kind = self.kind();
                    flush(&mut self.blocks, kind, &mut self.text);
                    self.kind = Some(BlockKind::Heading(level));
                }
            }
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"tr" => {
                self.blocks.push(Block {
                    kind: BlockKind::TableRow,
                    text: self.cells.join(" | "),
                });
                self.cells.clear();
                self.in_row = false;
            }
            b"td" | b"th" if self.in_row => self.cells.push(mem::take(&mut self.text).trim().to_string()),
            _ if self.in_row => {}
            b"p" | b"li" => {
                let kind = self.kind();
                flush(&mut self.blocks, kind, &mut self.text);
                self.kind = None;
            }
            other if heading_level(other).is_some() => {
                let kind = self.kind();
                flush(&mut self.blocks, kind, &mut self.text);
                self.kind = None;
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        let kind = self.kind();
        flush(&mut self.blocks, kind, &mut self.text);
        self.blocks
    }
}

/// Split converter HTML into terminal blocks. Reading stops at the first
/// malformed tag; everything before it is kept.
pub fn parse_blocks(html: &str) -> Vec<Block> {
    let mut reader = Reader::from_str(html);
    reader.trim_text(false);
    let mut blocks = BlockReader::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => blocks.open(e.name().as_ref()),
            Ok(Event::End(e)) => blocks.close(e.name().as_ref()),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"br" => blocks.text.push('\n'),
            Ok(Event::Text(t)) => match t.unescape() {
                Ok(text) => blocks.text.push_str(&text),
                Err(e) => {
                    log_warn!("Skipping undecodable text in converted document: {}", e);
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                log_warn!("Stopped reading converted document at byte {}: {}", reader.buffer_position(), e);
                break;
            }
        }
    }

    blocks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_markup() {
        assert!(looks_like_markup("<p>hi</p>"));
        assert!(!looks_like_markup("a < b and c > d"));
        assert!(!looks_like_markup("plain text"));
    }

    #[test]
    fn splits_converter_output_into_blocks() {
        let blocks = parse_blocks(
            "<h1>Title</h1><p>Intro <strong>bold</strong> &amp; more</p><ul><li>one</li><li>two</li></ul>",
        );
        assert_eq!(
            blocks,
            vec![
                Block { kind: BlockKind::Heading(1), text: "Title".to_string() },
                Block { kind: BlockKind::Paragraph, text: "Intro bold & more".to_string() },
                Block { kind: BlockKind::ListItem, text: "one".to_string() },
                Block { kind: BlockKind::ListItem, text: "two".to_string() },
            ]
        );
    }

    #[test]
    fn table_rows_join_cells() {
        let blocks = parse_blocks("<table><tr><td><p>a</p></td><td><p>b</p></td></tr></table>");
        assert_eq!(blocks, vec![Block { kind: BlockKind::TableRow, text: "a | b".to_string() }]);
    }

    #[test]
    fn line_breaks_and_escaped_text_survive() {
        let blocks = parse_blocks("<p>a &lt; b<br />c &#38; d</p>");
        assert_eq!(blocks, vec![Block { kind: BlockKind::Paragraph, text: "a < b\nc & d".to_string() }]);
    }

    #[test]
    fn reads_the_docx_converter_output() {
        let converted = crate::document::docx::DocxConverter::convert_to_html(
            &crate::document::docx::test_support::docx_with_body(concat!(
                r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Osmosis</w:t></w:r></w:p>"#,
                r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Water</w:t></w:r><w:r><w:t xml:space="preserve"> moves &amp; diffuses</w:t></w:r></w:p>"#,
            )),
        )
        .unwrap();
        assert!(looks_like_markup(&converted.content));
        assert_eq!(
            parse_blocks(&converted.content),
            vec![
                Block { kind: BlockKind::Heading(2), text: "Osmosis".to_string() },
                Block { kind: BlockKind::Paragraph, text: "Water moves & diffuses".to_string() },
            ]
        );
    }

    #[test]
    fn malformed_tail_keeps_earlier_blocks() {
        let blocks = parse_blocks("<p>kept</p><p>broken</span>");
        assert_eq!(blocks[0], Block { kind: BlockKind::Paragraph, text: "kept".to_string() });
    }
}
