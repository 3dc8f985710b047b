//! Left-to-right timeline placement.

use super::polygon::Point;

/// Gap unit of the timeline: 50px at the default scale of 75.
pub fn timeline_margin(scale: f64) -> f64 {
    50.0 * (scale / 75.0)
}

/// Top-left corners for boxes of the given widths.
///
/// Every box sits at `y`; the first left edge is one margin from the origin
/// and each following one is a box width plus a margin further right.
pub fn timeline_origins(widths: &[f64], scale: f64, y: f64) -> Vec<Point> {
    let margin = timeline_margin(scale);
    let mut cursor = margin;
    widths
        .iter()
        .map(|width| {
            let origin = Point::new(cursor, y);
            cursor += width + margin;
            origin
        })
        .collect()
}
