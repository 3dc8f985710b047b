//! Connects positioned records into a single path.

use super::models::{Edge, PositionedRecord};

/// One edge from each record to the next, colored like its source.
///
/// `n` records give `n - 1` edges; fewer than two records give none.
///
/// ```
/// use chatheart::Message;
/// use chatheart::config::LayoutConfig;
/// use chatheart::core::sequencer::connect;
/// use chatheart::layout::layout_messages;
///
/// let messages = vec![
///     Message::new("1/1/24", "09:00", "Andrea", "hi"),
///     Message::new("1/1/24", "09:05", "David", "hey"),
///     Message::new("1/1/24", "09:06", "David", "?"),
/// ];
/// let records = layout_messages(&messages, &LayoutConfig::new());
/// let edges = connect(&records);
///
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[0].id, "e0-1");
/// assert_eq!(edges[0].color, records[0].color);
/// ```
pub fn connect(records: &[PositionedRecord]) -> Vec<Edge> {
    records
        .windows(2)
        .map(|pair| Edge {
            id: format!("e{}-{}", pair[0].id, pair[1].id),
            source: pair[0].id.clone(),
            target: pair[1].id.clone(),
            color: pair[0].color.clone(),
        })
        .collect()
}
