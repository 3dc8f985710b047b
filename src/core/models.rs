//! Output data models: positioned records, edges and the diagram.
//!
//! These are everything a renderer needs. Coordinates are screen pixels
//! with y growing downward; `x`/`y` are the top-left corner of a box.

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::layout::{Point, Rect};

/// A message placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedRecord {
    /// Index within the current selection, stringified.
    pub id: String,
    /// The source message.
    #[serde(flatten)]
    pub message: Message,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Border and edge color.
    pub color: String,
    /// Message body split into display lines.
    pub lines: Vec<String>,
}

impl PositionedRecord {
    /// The box as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The box center.
    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

/// Connection between two records adjacent in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// `e{source}-{target}`.
    pub id: String,
    pub source: String,
    pub target: String,
    /// Inherited from the source record.
    pub color: String,
}

/// Records and edges of one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagram {
    pub records: Vec<PositionedRecord>,
    pub edges: Vec<Edge>,
}

impl Diagram {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rectangle enclosing every record, grown by `margin` on each side.
    ///
    /// Returns `None` for an empty diagram.
    pub fn bounds(&self, margin: f64) -> Option<Rect> {
        let mut iter = self.records.iter().map(PositionedRecord::rect);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, r| acc.union(&r)).grow(margin))
    }

    /// Looks up a record by id.
    pub fn record(&self, id: &str) -> Option<&PositionedRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, x: f64, y: f64) -> PositionedRecord {
        PositionedRecord {
            id: id.to_string(),
            message: Message::new("1/1/24", "09:00", "Andrea", "hi"),
            x,
            y,
            width: 200.0,
            height: 84.0,
            color: "#FF69B4".to_string(),
            lines: vec!["hi".to_string()],
        }
    }

    #[test]
    fn test_bounds() {
        let diagram = Diagram {
            records: vec![record(0, 0.0, 0.0), record(1, 300.0, 100.0)],
            edges: vec![],
        };
        let bounds = diagram.bounds(20.0).unwrap();
        assert_eq!(bounds, Rect::new(-20.0, -20.0, 540.0, 224.0));
        assert!(Diagram::default().bounds(20.0).is_none());
    }

    #[test]
    fn test_center_and_lookup() {
        let diagram = Diagram {
            records: vec![record(0, 0.0, 0.0), record(1, 300.0, 100.0)],
            edges: vec![],
        };
        assert_eq!(diagram.record("1").unwrap().center(), Point::new(400.0, 142.0));
        assert!(diagram.record("7").is_none());
    }

    #[test]
    fn test_record_serialization_flattens_message() {
        let json = serde_json::to_value(record(3, 1.5, 2.5)).unwrap();
        assert_eq!(json["id"], "3");
        assert_eq!(json["sender"], "Andrea");
        assert_eq!(json["date"], "1/1/24");
        assert_eq!(json["x"], 1.5);
        assert_eq!(json["lines"][0], "hi");
        assert!(json.get("message").is_none());
    }
}
