//! Per-record presentation: color, wrapped lines and box size.

use crate::Message;
use crate::config::{BoxMetrics, LayoutConfig};

/// Splits `text` into chunks of at most `width` characters.
///
/// Breaks fall wherever the count lands, including mid-word. Empty text
/// yields a single empty line so every box has a body row. A `width` of 0
/// is treated as 1.
///
/// ```
/// use chatheart::layout::wrap_text;
///
/// assert_eq!(wrap_text("abcdefg", 3), vec!["abc", "def", "g"]);
/// assert_eq!(wrap_text("", 80), vec![""]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Box `(width, height)` for the given wrapped lines.
pub fn box_size(lines: &[String], metrics: &BoxMetrics) -> (f64, f64) {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (longest as f64 * metrics.char_width + metrics.padding).max(metrics.min_width);
    let height = metrics.header_height + lines.len() as f64 * metrics.line_height + metrics.padding;
    (width, height)
}

/// Color for `message` under the configured marker and palette.
pub fn record_color<'a>(message: &Message, config: &'a LayoutConfig) -> &'a str {
    if message.sender_contains(&config.highlight_marker) {
        &config.palette.highlight
    } else {
        &config.palette.default
    }
}

/// Wrapped lines and box size of one message, before placement.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Measured {
    pub lines: Vec<String>,
    pub width: f64,
    pub height: f64,
}

pub(crate) fn measure(message: &Message, config: &LayoutConfig) -> Measured {
    let lines = wrap_text(&message.text, config.wrap_width);
    let (width, height) = box_size(&lines, &config.metrics);
    Measured {
        lines,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_exact_multiple() {
        let lines = wrap_text(&"a".repeat(160), 80);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.chars().count() == 80));
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let lines = wrap_text("ñññññ", 2);
        assert_eq!(lines, vec!["ññ", "ññ", "ñ"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_box_size_minimum_width() {
        let metrics = BoxMetrics::default();
        let (w, h) = box_size(&["hi".to_string()], &metrics);
        assert_eq!(w, 200.0);
        assert_eq!(h, 48.0 + 20.0 + 16.0);
    }

    #[test]
    fn test_box_size_grows() {
        let metrics = BoxMetrics::default();
        let short = box_size(&wrap_text(&"x".repeat(40), 80), &metrics);
        let wide = box_size(&wrap_text(&"x".repeat(80), 80), &metrics);
        let tall = box_size(&wrap_text(&"x".repeat(400), 80), &metrics);

        assert_eq!(wide.0, 80.0 * 7.0 + 16.0);
        assert!(wide.0 > short.0);
        assert!(tall.1 > wide.1);
        assert_eq!(tall.0, wide.0);
    }

    #[test]
    fn test_record_color() {
        let config = LayoutConfig::default();
        let andrea = Message::new("1/1/24", "09:00", "Andrea", "hi");
        let david = Message::new("1/1/24", "09:00", "David", "hi");
        assert_eq!(record_color(&andrea, &config), "#FF69B4");
        assert_eq!(record_color(&david, &config), "#1E90FF");

        let config = config.with_highlight_marker("DAVID");
        assert_eq!(record_color(&david, &config), "#FF69B4");
        assert_eq!(record_color(&andrea, &config), "#1E90FF");
    }

    #[test]
    fn test_measure() {
        let config = LayoutConfig::default().with_wrap_width(5);
        let m = measure(&Message::new("1/1/24", "09:00", "A", "hello world"), &config);
        assert_eq!(m.lines, vec!["hello", " worl", "d"]);
        assert_eq!(m.height, 48.0 + 3.0 * 20.0 + 16.0);
    }
}
