/// Widest page column, in terminal cells, at 100% zoom.
pub const MAX_PAGE_COLUMNS: f32 = 120.0;

/// `min(container * 0.9, 120) * scale`, kept inside the container.
pub fn page_width(container: u16, scale: f32) -> u16 {
    let base = (f32::from(container) * 0.9).min(MAX_PAGE_COLUMNS);
    let scaled = (base * scale).round();
    (scaled as u16).clamp(1, container.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_pane_uses_ninety_percent() {
        assert_eq!(page_width(80, 1.0), 72);
        assert_eq!(page_width(80, 0.5), 36);
    }

    #[test]
    fn wide_pane_caps_the_column() {
        assert_eq!(page_width(300, 1.0), 120);
        assert_eq!(page_width(300, 2.0), 240);
    }

    #[test]
    fn zooming_in_never_overflows_the_pane() {
        assert_eq!(page_width(80, 2.0), 80);
        assert_eq!(page_width(0, 1.0), 1);
    }
}
