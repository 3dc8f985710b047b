//! # Chatheart
//!
//! A Rust library for turning chat exports into drawings: every message
//! becomes a box, and the boxes are laid out on a heart outline, inside a
//! filled heart, or along a timeline, then connected in order.
//!
//! ## Overview
//!
//! The pipeline has five stages:
//!
//! 1. **Merge**: physical lines are joined into logical entries; a line that
//!    doesn't start with a date continues the previous entry
//! 2. **Parse**: each entry is matched against
//!    `d/m/yy a las hh:mm - Sender: text`; entries without a sender are
//!    counted and dropped
//! 3. **Select**: the corpus is ordered (none, length, date, random) and a
//!    window `[start, start + size)` is taken, clamped or wrapping
//! 4. **Lay out**: each message gets a color, wrapped lines, a box size and
//!    a position according to the [`DrawingStyle`](config::DrawingStyle)
//! 5. **Connect**: consecutive records are joined by edges
//!
//! ## Quick Start
//!
//! ```rust
//! use chatheart::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! 14/5/24 a las 20:31 - Andrea: hola
//! 14/5/24 a las 20:32 - David: ¿qué tal?
//! 14/5/24 a las 20:33 - Andrea: muy bien";
//!
//!     let config = LayoutConfig::new()
//!         .with_style(DrawingStyle::HeartFill)
//!         .with_order(OrderPolicy::Length);
//!     let diagram = layout(text, &config)?;
//!
//!     assert_eq!(diagram.records.len(), 3);
//!     assert_eq!(diagram.edges.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Reusing a Parse
//!
//! Merging and parsing don't depend on the layout configuration, so a
//! [`Transcript`](core::Transcript) can be laid out many times:
//!
//! ```rust
//! use chatheart::config::{DrawingStyle, LayoutConfig};
//! use chatheart::core::Transcript;
//!
//! let transcript = Transcript::parse("1/1/24 a las 09:00 - Andrea: hi");
//! for style in [DrawingStyle::HeartOutline, DrawingStyle::Timeline] {
//!     let diagram = transcript.layout(&LayoutConfig::new().with_style(style))?;
//!     assert_eq!(diagram.records.len(), 1);
//! }
//! # Ok::<(), chatheart::ChatheartError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Line merging and the entry grammar
//! - [`parser`] - [`ChatParser`](parser::ChatParser), file and string input
//! - [`config`] - [`LayoutConfig`](config::LayoutConfig) and its policies
//! - [`layout`] - Heart curve, polygon fill, timeline, box metrics
//! - [`core`] - Selection, sequencing, the pipeline and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`cli`] - CLI arguments (requires `cli` feature)
//! - [`error`] - Unified error types ([`ChatheartError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `json-output` | JSON writer | `serde_json` |
//! | `csv-output` | CSV writer | `csv` |
//! | `svg-output` | SVG writer | - |
//! | `cli` | Command-line binary | `clap`, `tracing-subscriber` |
//! | `full` | Everything above (default) | - |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod layout;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::processor::{layout, layout_with_rng};
pub use error::{ChatheartError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatheart::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatheartError, Result};

    // Parsing
    pub use crate::parser::ChatParser;
    pub use crate::parsing::{merge_lines, parse_entry};

    // Configuration
    pub use crate::config::{DrawingStyle, LayoutConfig, OrderPolicy, SelectionPolicy};

    // Pipeline and models
    pub use crate::core::{
        Diagram, Edge, PositionedRecord, ProcessingStats, Transcript, layout, layout_with_rng,
    };

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
