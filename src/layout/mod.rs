//! Layout engine: assigns a box and a position to every selected message.
//!
//! [`layout_messages`] is a pure function of its inputs. Each
//! [`DrawingStyle`] produces box centers (heart styles) or top-left corners
//! (timeline), and every record keeps the wrapped text and color computed in
//! [`metrics`].
//!
//! # Example
//!
//! ```
//! use chatheart::Message;
//! use chatheart::config::{DrawingStyle, LayoutConfig};
//! use chatheart::layout::layout_messages;
//!
//! let messages = vec![
//!     Message::new("1/1/24", "09:00", "Andrea", "hi"),
//!     Message::new("1/1/24", "09:05", "David", "hello there"),
//! ];
//! let config = LayoutConfig::new().with_style(DrawingStyle::Timeline);
//! let records = layout_messages(&messages, &config);
//!
//! assert_eq!(records.len(), 2);
//! assert!(records[0].x < records[1].x);
//! ```

pub mod heart;
pub mod metrics;
pub mod polygon;
pub mod timeline;

pub use heart::{HeartCurve, fill_centers, interior_points};
pub use metrics::{box_size, record_color, wrap_text};
pub use polygon::{Point, Polygon, Rect};
pub use timeline::{timeline_margin, timeline_origins};

use tracing::debug;

use crate::Message;
use crate::config::{DrawingStyle, LayoutConfig};
use crate::core::models::PositionedRecord;
use metrics::{Measured, measure};

/// Places `selected` according to `config.style`.
///
/// Record `i` gets id `"i"`. An empty selection yields no records.
pub fn layout_messages(selected: &[Message], config: &LayoutConfig) -> Vec<PositionedRecord> {
    if selected.is_empty() {
        return Vec::new();
    }

    let measured: Vec<Measured> = selected.iter().map(|m| measure(m, config)).collect();
    let curve = HeartCurve::new(config.center, config.scale);

    let origins: Vec<Point> = match config.style {
        DrawingStyle::HeartOutline => centered(&curve.sample(selected.len()), &measured),
        DrawingStyle::HeartFill => {
            let centers = fill_centers(
                &curve,
                selected.len(),
                config.outline_fraction,
                config.grid_factor,
                config.polygon_steps,
            );
            centered(&centers, &measured)
        }
        DrawingStyle::Timeline => {
            let widths: Vec<f64> = measured.iter().map(|m| m.width).collect();
            timeline_origins(&widths, config.scale, config.center.y)
        }
    };

    debug!(style = %config.style, count = selected.len(), "laid out messages");

    selected
        .iter()
        .zip(measured)
        .zip(origins)
        .enumerate()
        .map(|(i, ((message, m), origin))| PositionedRecord {
            id: i.to_string(),
            message: message.clone(),
            x: origin.x,
            y: origin.y,
            width: m.width,
            height: m.height,
            color: record_color(message, config).to_string(),
            lines: m.lines,
        })
        .collect()
}

/// Top-left corners of boxes centered on `centers`.
fn centered(centers: &[Point], measured: &[Measured]) -> Vec<Point> {
    centers
        .iter()
        .zip(measured)
        .map(|(c, m)| Point::new(c.x - m.width / 2.0, c.y - m.height / 2.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                let sender = if i % 2 == 0 { "Andrea" } else { "David" };
                Message::new("1/1/24", "09:00", sender, format!("message {i}"))
            })
            .collect()
    }

    #[test]
    fn test_empty_selection() {
        for style in [DrawingStyle::HeartOutline, DrawingStyle::HeartFill, DrawingStyle::Timeline] {
            let config = LayoutConfig::new().with_style(style);
            assert!(layout_messages(&[], &config).is_empty());
        }
    }

    #[test]
    fn test_ids_and_colors() {
        let records = layout_messages(&messages(4), &LayoutConfig::new());
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3"]);
        assert_eq!(records[0].color, "#FF69B4");
        assert_eq!(records[1].color, "#1E90FF");
    }

    #[test]
    fn test_heart_outline_centers_on_curve() {
        let config = LayoutConfig::new();
        let records = layout_messages(&messages(8), &config);
        let curve = HeartCurve::new(config.center, config.scale);
        for (record, point) in records.iter().zip(curve.sample(8)) {
            assert!(record.center().distance(point) < 1e-9);
        }
        // t = 0 is the top dip, straight above the center.
        assert!((records[0].center().x - 800.0).abs() < 1e-9);
        assert!((records[0].center().y - (600.0 - 5.0 * 75.0)).abs() < 1e-9);
    }

    #[test]
    fn test_heart_fill_interior_inside() {
        let config = LayoutConfig::new().with_style(DrawingStyle::HeartFill);
        let records = layout_messages(&messages(20), &config);
        let polygon = HeartCurve::new(config.center, config.scale).polygon(config.polygon_steps);
        assert_eq!(records.len(), 20);
        for record in &records[6..] {
            assert!(polygon.contains(record.center()));
        }
    }

    #[test]
    fn test_timeline_strictly_increasing() {
        let config = LayoutConfig::new().with_style(DrawingStyle::Timeline);
        let records = layout_messages(&messages(5), &config);
        assert_eq!(records[0].x, 50.0);
        for pair in records.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + pair[0].width + 50.0);
            assert_eq!(pair[0].y, pair[1].y);
        }
    }

    #[test]
    fn test_wrapped_lines_kept() {
        let long = Message::new("1/1/24", "09:00", "David", "x".repeat(170));
        let records = layout_messages(&[long], &LayoutConfig::new());
        assert_eq!(records[0].lines.len(), 3);
        assert_eq!(records[0].height, 48.0 + 3.0 * 20.0 + 16.0);
    }
}
