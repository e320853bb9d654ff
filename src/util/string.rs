use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct StringUtils {}

impl StringUtils {
    pub fn maybe_pluralize((singular, plural): (&str, &str), qty: usize) -> String {
        format!("{}", if qty == 1 { singular } else { plural })
    }

    pub fn maybe_pluralize_count(count: usize, (singular, plural): (&str, &str)) -> String {
        format!("{} {}", count, Self::maybe_pluralize((singular, plural), count))
    }

    /// Human readable byte size, computed once per upload.
    pub fn size_label(bytes: u64) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = 1024.0 * 1024.0;

        let size = bytes as f64;
        if size < KB {
            format!("{} B", bytes)
        } else if size < MB {
            format!("{:.1} KB", size / KB)
        } else {
            format!("{:.2} MB", size / MB)
        }
    }

    /// `MM:SS` clock label for the focus timer.
    pub fn clock_label(seconds: u32) -> String {
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }

    /// Greedy word wrap measured in terminal cells. Existing line breaks
    /// are kept; words wider than `width` are split between glyphs.
    /// Returns one entry per rendered row.
    pub fn wrap(text: &str, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut rows = Vec::new();

        for line in text.split('\n') {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                rows.push(String::new());
                continue;
            }

            let mut current = String::new();
            let mut current_width = 0usize;

            for word in line.split(' ') {
                let word_width = word.width();
                let needed = if current_width == 0 { word_width } else { current_width + 1 + word_width };
                if needed <= width {
                    if current_width > 0 {
                        current.push(' ');
                        current_width += 1;
                    }
                    current.push_str(word);
                    current_width += word_width;
                    continue;
                }

                if current_width > 0 {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }

                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width > 0 && current_width + ch_width > width {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }

            rows.push(current);
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_labels() {
        assert_eq!(StringUtils::size_label(512), "512 B");
        assert_eq!(StringUtils::size_label(2048), "2.0 KB");
        assert_eq!(StringUtils::size_label(5 * 1024 * 1024 / 2), "2.50 MB");
    }

    #[test]
    fn clock_label_pads() {
        assert_eq!(StringUtils::clock_label(1500), "25:00");
        assert_eq!(StringUtils::clock_label(65), "01:05");
        assert_eq!(StringUtils::clock_label(0), "00:00");
    }

    #[test]
    fn pluralize() {
        assert_eq!(StringUtils::maybe_pluralize_count(1, ("student", "students")), "1 student");
        assert_eq!(StringUtils::maybe_pluralize_count(5, ("student", "students")), "5 students");
    }

    #[test]
    fn wrap_keeps_breaks_and_splits_long_words() {
        let rows = StringUtils::wrap("hello world\n\nabcdefghij", 5);
        assert_eq!(rows, vec!["hello", "world", "", "abcde", "fghij"]);
    }

    #[test]
    fn wrap_measures_wide_glyphs_in_cells() {
        let rows = StringUtils::wrap(&"漢字".repeat(10), 20);
        assert_eq!(rows, vec!["漢字".repeat(5), "漢字".repeat(5)]);
        assert!(rows.iter().all(|row| row.width() <= 20));

        let rows = StringUtils::wrap("漢字 漢字", 5);
        assert_eq!(rows, vec!["漢字", "漢字"]);
    }
}
