//! Transcript parsing primitives.
//!
//! - [`merge`] joins physical lines into logical entries
//! - [`grammar`] turns one logical entry into a [`Message`](crate::Message)
//!
//! Most callers want [`ChatParser`](crate::parser::ChatParser), which runs
//! both stages and keeps diagnostic counts.

pub mod grammar;
pub mod merge;

pub use grammar::{parse_chat_timestamp, parse_entry};
pub use merge::{is_entry_start, merge_lines};
