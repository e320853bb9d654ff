use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{ConversionResult, DocxConverter, DocxError};

#[derive(Debug, Default, Clone, Copy)]
struct RunStyle {
    bold: bool,
    italic: bool,
    underline: bool,
}

#[derive(Debug, Default)]
struct Paragraph {
    style: Option<String>,
    numbered: bool,
    html: String,
}

/// One open container: the document body, a table, a row or a cell.
#[derive(Debug, Default)]
struct Frame {
    html: String,
    list_open: bool,
}

impl Frame {
    fn close_list(&mut self) {
        if self.list_open {
            self.html.push_str("</ul>");
            self.list_open = false;
        }
    }

    fn push_block(&mut self, block: &str) {
        self.close_list();
        self.html.push_str(block);
    }

    fn push_list_item(&mut self, item: &str) {
        if !self.list_open {
            self.html.push_str("<ul>");
            self.list_open = true;
        }
        self.html.push_str("<li>");
        self.html.push_str(item);
        self.html.push_str("</li>");
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

#[derive(Debug, Default)]
struct HtmlWriter {
    frames: Vec<Frame>,
    paragraph: Option<Paragraph>,
    run: Option<(RunStyle, String)>,
    in_paragraph_props: bool,
    in_text: bool,
    warnings: Vec<String>,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
            ..Self::default()
        }
    }

    fn top(&mut self) -> &mut Frame {
        if self.frames.is_empty() {
            self.frames.push(Frame::default());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn warn_once(&mut self, warning: String) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    fn heading_level(&mut self, style: &str) -> Option<u8> {
        match style {
            "Title" => Some(1),
            "Subtitle" => Some(2),
            "Normal" | "ListParagraph" | "BodyText" => None,
            _ => {
                let level = style
                    .strip_prefix("Heading")
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| (1..=6).contains(n));
                if level.is_none() {
                    self.warn_once(format!("Unrecognised paragraph style: '{}'", style));
                }
                level
            }
        }
    }

    /// Properties arrive as empty elements (`<w:b/>`) or, rarely, as
    /// start/end pairs; both go through here.
    fn apply_property(&mut self, element: &BytesStart) -> Result<(), DocxError> {
        let value = match element
            .try_get_attribute("w:val")
            .map_err(quick_xml::Error::from)?
        {
            Some(attr) => Some(attr.unescape_value()?.to_string()),
            None => None,
        };
        let enabled = !matches!(value.as_deref(), Some("false") | Some("0") | Some("none"));

        match element.name().as_ref() {
            b"w:pStyle" => {
                if let (Some(paragraph), Some(style)) = (self.paragraph.as_mut(), value) {
                    paragraph.style = Some(style);
                }
            }
            b"w:numPr" | b"w:numId" => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.numbered = true;
                }
            }
            b"w:b" | b"w:i" | b"w:u" if !self.in_paragraph_props => {
                if let Some((style, _)) = self.run.as_mut() {
                    match element.name().as_ref() {
                        b"w:b" => style.bold = enabled,
                        b"w:i" => style.italic = enabled,
                        _ => style.underline = enabled,
                    }
                }
            }
            b"w:tab" if !self.in_paragraph_props => self.push_run_text("\t"),
            b"w:br" => {
                if let Some((_, text)) = self.run.as_mut() {
                    text.push_str("<br />");
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn push_run_text(&mut self, raw: &str) {
        if let Some((_, text)) = self.run.as_mut() {
            text.push_str(&html_escape::encode_text(raw));
        }
    }

    fn end_run(&mut self) {
        let Some((style, text)) = self.run.take() else {
            return;
        };
        if text.is_empty() {
            return;
        }

        let mut html = text;
        if style.underline {
            html = format!("<u>{}</u>", html);
        }
        if style.italic {
            html = format!("<em>{}</em>", html);
        }
        if style.bold {
            html = format!("<strong>{}</strong>", html);
        }

        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.html.push_str(&html);
        }
    }

    fn end_paragraph(&mut self) {
        self.end_run();
        let Some(paragraph) = self.paragraph.take() else {
            return;
        };
        if paragraph.html.is_empty() {
            return;
        }

        let level = match paragraph.style.as_deref() {
            Some(style) => self.heading_level(style),
            None => None,
        };

        let frame = self.top();
        match level {
            Some(n) => frame.push_block(&format!("<h{n}>{}</h{n}>", paragraph.html)),
            None if paragraph.numbered => frame.push_list_item(&paragraph.html),
            None => frame.push_block(&format!("<p>{}</p>", paragraph.html)),
        }
    }

    fn end_frame(&mut self, tag: &str) {
        if self.frames.len() <= 1 {
            return;
        }
        let inner = self.frames.pop().map(Frame::finish).unwrap_or_default();
        let html = format!("<{tag}>{inner}</{tag}>");
        let parent = self.top();
        if tag == "table" {
            parent.push_block(&html);
        } else {
            parent.html.push_str(&html);
        }
    }

    fn finish(mut self) -> ConversionResult {
        self.end_paragraph();
        while self.frames.len() > 1 {
            self.end_frame("div");
        }
        let content = self.frames.pop().map(Frame::finish).unwrap_or_default();
        ConversionResult {
            content,
            warnings: self.warnings,
        }
    }
}

impl DocxConverter {
    /// Convert the document body to HTML. Malformed XML is an error here;
    /// see [`DocxConverter::extract_raw_text`] for the lenient path.
    pub fn convert_to_html(bytes: &[u8]) -> Result<ConversionResult, DocxError> {
        let xml = Self::read_document_xml(bytes)?;
        Self::xml_to_html(&xml)
    }

    pub(super) fn xml_to_html(xml: &str) -> Result<ConversionResult, DocxError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut writer = HtmlWriter::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:p" => {
                        writer.end_paragraph();
                        writer.paragraph = Some(Paragraph::default());
                    }
                    b"w:pPr" => writer.in_paragraph_props = true,
                    b"w:r" => {
                        writer.end_run();
                        writer.run = Some((RunStyle::default(), String::new()));
                    }
                    b"w:t" => writer.in_text = true,
                    b"w:tbl" | b"w:tr" | b"w:tc" => writer.frames.push(Frame::default()),
                    _ => writer.apply_property(&e)?,
                },
                Event::Empty(e) => writer.apply_property(&e)?,
                Event::Text(t) if writer.in_text => {
                    let text = t.unescape()?;
                    writer.push_run_text(&text);
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => writer.in_text = false,
                    b"w:r" => writer.end_run(),
                    b"w:pPr" => writer.in_paragraph_props = false,
                    b"w:p" => writer.end_paragraph(),
                    b"w:tc" => {
                        writer.end_paragraph();
                        writer.end_frame("td");
                    }
                    b"w:tr" => writer.end_frame("tr"),
                    b"w:tbl" => writer.end_frame("table"),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::docx::test_support::docx_with_body;

    fn html(body: &str) -> ConversionResult {
        DocxConverter::convert_to_html(&docx_with_body(body)).unwrap()
    }

    #[test]
    fn headings_and_paragraphs() {
        let result = html(concat!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Quantum Physics</w:t></w:r></w:p>"#,
            r#"<w:p><w:r><w:t xml:space="preserve">Waves &amp; particles </w:t></w:r></w:p>"#,
        ));
        assert_eq!(result.content, "<h1>Quantum Physics</h1><p>Waves &amp; particles </p>");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn emphasis_runs() {
        let result = html(concat!(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>bold</w:t></w:r>"#,
            r#"<w:r><w:rPr><w:i/><w:u w:val="single"/></w:rPr><w:t>fancy</w:t></w:r>"#,
            r#"<w:r><w:rPr><w:b w:val="0"/></w:rPr><w:t>plain</w:t></w:r></w:p>"#,
        ));
        assert_eq!(result.content, "<p><strong>bold</strong><em><u>fancy</u></em>plain</p>");
    }

    #[test]
    fn numbered_paragraphs_become_a_list() {
        let item = |text: &str| {
            format!(
                r#"<w:p><w:pPr><w:pStyle w:val="ListParagraph"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>"#,
                text
            )
        };
        let body = format!("{}{}<w:p><w:r><w:t>after</w:t></w:r></w:p>", item("one"), item("two"));
        assert_eq!(html(&body).content, "<ul><li>one</li><li>two</li></ul><p>after</p>");
    }

    #[test]
    fn tables_keep_cells() {
        let result = html(concat!(
            "<w:tbl><w:tr>",
            "<w:tc><w:p><w:r><w:t>a</w:t></w:r></w:p></w:tc>",
            "<w:tc><w:p><w:r><w:t>b</w:t></w:r></w:p></w:tc>",
            "</w:tr></w:tbl>",
        ));
        assert_eq!(result.content, "<table><tr><td><p>a</p></td><td><p>b</p></td></tr></table>");
    }

    #[test]
    fn unknown_style_is_a_warning_not_a_failure() {
        let result = html(concat!(
            r#"<w:p><w:pPr><w:pStyle w:val="FancyQuote"/></w:pPr><w:r><w:t>quoted</w:t></w:r></w:p>"#,
            r#"<w:p><w:pPr><w:pStyle w:val="FancyQuote"/></w:pPr><w:r><w:t>again</w:t></w:r></w:p>"#,
        ));
        assert_eq!(result.content, "<p>quoted</p><p>again</p>");
        assert_eq!(result.warnings, vec!["Unrecognised paragraph style: 'FancyQuote'".to_string()]);
    }

    #[test]
    fn tabs_breaks_and_empty_paragraphs() {
        let result = html(concat!(
            "<w:p></w:p>",
            "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>",
        ));
        assert_eq!(result.content, "<p>a\tb<br />c</p>");
    }

    #[test]
    fn mismatched_tags_fail() {
        let bytes = docx_with_body("<w:p><w:r><w:t>x</w:t></w:run></w:p>");
        assert!(matches!(DocxConverter::convert_to_html(&bytes), Err(DocxError::Xml(_))));
    }
}
