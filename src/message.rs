//! The canonical chat record produced by the parser.
//!
//! A [`Message`] holds the four fields captured by the transcript grammar,
//! exactly as they appear in the export. Date and time stay free-form
//! strings; [`Message::timestamp`] interprets them on demand for
//! chronological ordering.
//!
//! # Examples
//!
//! ```
//! use chatheart::Message;
//!
//! let msg = Message::new("14/5/24", "20:31", "Andrea", "hola, ¿cómo estás?");
//! assert_eq!(msg.sender(), "Andrea");
//! assert_eq!(msg.text_len(), 18);
//! assert!(msg.timestamp().is_some());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::parse_chat_timestamp;

/// A single chat message as captured from one logical transcript entry.
///
/// | Field | Example | Notes |
/// |-------|---------|-------|
/// | `date` | `14/5/24` | day/month/year, 2 or 4 digit year |
/// | `time` | `20:31` | 24-hour `hour:minute` |
/// | `sender` | `Andrea` | everything before the first `": "` |
/// | `text` | `hola` | trimmed message body, continuation lines joined by spaces |
///
/// Messages are immutable once parsed; the layout engine copies them into
/// [`PositionedRecord`](crate::core::models::PositionedRecord)s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Date token as written in the export.
    pub date: String,

    /// Time token as written in the export.
    pub time: String,

    /// Display name of the author.
    pub sender: String,

    /// Message body.
    pub text: String,
}

impl Message {
    /// Creates a message from its four captured fields.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            text: text.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the date token.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the time token.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Interprets `date` and `time` as a calendar timestamp.
    ///
    /// Returns `None` when either token is malformed (e.g. `31/2/24`).
    ///
    /// ```
    /// use chatheart::Message;
    ///
    /// let msg = Message::new("1/1/24", "09:05", "David", "hi");
    /// let ts = msg.timestamp().unwrap();
    /// assert_eq!(ts.to_string(), "2024-01-01 09:05:00");
    /// ```
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_chat_timestamp(&self.date, &self.time)
    }

    /// Length of the body in characters (not bytes).
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the sender name contains `marker`, ignoring case.
    ///
    /// An empty marker matches nobody.
    pub fn sender_contains(&self, marker: &str) -> bool {
        if marker.is_empty() {
            return false;
        }
        self.sender.to_lowercase().contains(&marker.to_lowercase())
    }
}
