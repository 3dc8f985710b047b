//! Transcript parser: merge physical lines, then apply the entry grammar.
//!
//! # Example
//!
//! ```rust
//! use chatheart::parser::ChatParser;
//!
//! let text = "\
//! 14/5/24 a las 20:31 - Andrea: hola,
//! ¿cómo estás?
//! 14/5/24 a las 20:32 - Los mensajes están cifrados de extremo a extremo.
//! 14/5/24 a las 20:33 - David: bien, ¿y tú?";
//!
//! let transcript = ChatParser::new().parse_str(text);
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.unmatched, 1);
//! assert_eq!(transcript.messages[0].text, "hola, ¿cómo estás?");
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::processor::Transcript;
use crate::error::{ChatheartError, Result};
use crate::parsing::{merge_lines, parse_entry};

/// Parser for `d/m/yy a las hh:mm - Sender: text` chat exports.
///
/// Parsing is infallible: entries that don't match the grammar are dropped
/// and counted in [`Transcript::unmatched`]. Only reading a file can fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatParser;

impl ChatParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Human-readable parser name.
    pub fn name(&self) -> &'static str {
        "Chat TXT"
    }

    /// Parses an export held in memory.
    pub fn parse_str(&self, content: &str) -> Transcript {
        let entries = merge_lines(content);
        let entry_count = entries.len();

        let mut messages = Vec::with_capacity(entry_count);
        let mut unmatched = 0;
        for entry in &entries {
            match parse_entry(entry) {
                Some(message) => messages.push(message),
                None => {
                    unmatched += 1;
                    debug!(entry = %entry, "entry does not match the transcript grammar");
                }
            }
        }

        debug!(
            entries = entry_count,
            messages = messages.len(),
            unmatched,
            "parsed transcript"
        );

        Transcript {
            messages,
            entries: entry_count,
            unmatched,
        }
    }

    /// Reads and parses an export file.
    ///
    /// The file must be UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let content = fs::read_to_string(path).map_err(|e| ChatheartError::read(path, e))?;
        Ok(self.parse_str(&content))
    }
}
