use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

use crate::config::SelectionConfig;
use crate::document::view::RenderedLine;
use crate::log_debug;

use super::SelectionSubscription;

/// What the pointer was released over: the pane area, how far it is
/// scrolled and the rows it shows.
#[derive(Debug, Clone, Copy)]
pub struct SelectionSurface<'a> {
    pub area: Rect,
    pub scroll: usize,
    pub lines: &'a [RenderedLine],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPrompt {
    pub excerpt: String,
    /// Screen cell just below the selection's bounding box.
    pub anchor: Position,
}

#[derive(Debug)]
pub struct SelectionWatcher {
    min_chars: usize,
    active: Arc<AtomicBool>,
    start: Option<Position>,
    cursor: Option<Position>,
}

impl SelectionWatcher {
    pub fn new(min_chars: usize) -> Self {
        Self {
            min_chars,
            active: Arc::new(AtomicBool::new(false)),
            start: None,
            cursor: None,
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.min_chars)
    }

    /// Start listening. Events are ignored again once the returned guard
    /// is dropped.
    pub fn subscribe(&self) -> SelectionSubscription {
        SelectionSubscription::new(Arc::clone(&self.active))
    }

    fn listening(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn pointer_down(&mut self, position: Position, area: Rect) {
        self.cursor = None;
        self.start = None;
        if self.listening() && area.contains(position) {
            self.start = Some(position);
            self.cursor = Some(position);
        }
    }

    pub fn pointer_drag(&mut self, position: Position) {
        if self.start.is_some() && self.listening() {
            self.cursor = Some(position);
        }
    }

    /// Ordered (first, last) cells of the selection in progress.
    pub fn range(&self) -> Option<(Position, Position)> {
        let (a, b) = (self.start?, self.cursor?);
        if (a.y, a.x) <= (b.y, b.x) {
            Some((a, b))
        } else {
            Some((b, a))
        }
    }

    /// Finish the gesture. A prompt is produced only when the trimmed
    /// selection is longer than the configured minimum.
    pub fn pointer_release(&mut self, position: Position, surface: SelectionSurface<'_>) -> Option<SelectionPrompt> {
        if !self.listening() {
            self.start = None;
            self.cursor = None;
            return None;
        }
        self.pointer_drag(position);
        let range = self.range();
        self.start = None;
        self.cursor = None;

        let (first, last) = range?;
        let (first, last) = (clamp_to(first, surface.area), clamp_to(last, surface.area));
        let text = selected_text(first, last, surface);
        let excerpt = text.trim();
        let count = excerpt.chars().count();
        if count <= self.min_chars {
            log_debug!("Ignoring selection of {} chars", count);
            return None;
        }

        let left = if first.y == last.y { first.x.min(last.x) } else { surface.area.x };
        Some(SelectionPrompt {
            excerpt: excerpt.to_string(),
            anchor: Position::new(left, last.y.saturating_add(1)),
        })
    }
}

fn clamp_to(position: Position, area: Rect) -> Position {
    let max_x = area.x + area.width.saturating_sub(1);
    let max_y = area.y + area.height.saturating_sub(1);
    Position::new(position.x.clamp(area.x, max_x), position.y.clamp(area.y, max_y))
}

/// Text under the cells from `first` to `last` inclusive, one line per row.
fn selected_text(first: Position, last: Position, surface: SelectionSurface<'_>) -> String {
    let to_row = |p: Position| surface.scroll + usize::from(p.y - surface.area.y);
    let to_col = |p: Position| usize::from(p.x - surface.area.x);
    let (first_row, last_row) = (to_row(first), to_row(last));

    let mut rows: Vec<String> = Vec::new();
    for row in first_row..=last_row {
        let Some(line) = surface.lines.get(row) else {
            break;
        };
        let from = if row == first_row { to_col(first) } else { 0 };
        let to = if row == last_row { to_col(last) } else { usize::MAX };
        let (start, end) = char_range(&line.text, from, to);
        rows.push(line.text.chars().skip(start).take(end - start).collect());
    }
    rows.join("\n")
}

/// Chars of `line` drawn on cells `from..=to`. A wide glyph counts when
/// any of its cells is covered; zero-width marks go with their base char.
fn char_range(line: &str, from: usize, to: usize) -> (usize, usize) {
    let mut start = None;
    let mut end = 0;
    let mut cell = 0;
    let mut base = 0;

    for (i, ch) in line.chars().enumerate() {
        let width = ch.width().unwrap_or(0);
        let at = if width == 0 { base } else { cell };
        if at + width.max(1) > from && at <= to {
            start.get_or_insert(i);
            end = i + 1;
        }
        if width > 0 {
            base = cell;
        }
        cell += width;
    }
    (start.unwrap_or(end), end)
}
