//! Core processing logic for chatheart.
//!
//! This module contains:
//! - [`models`] - Positioned records, edges and the diagram
//! - [`select`] - Corpus ordering and window selection
//! - [`sequencer`] - Edges between consecutive records
//! - [`processor`] - The full pipeline and the cached [`Transcript`]
//! - [`output`] - Format writers (JSON, CSV, SVG)
//!
//! # Quick Start
//!
//! ```rust
//! use chatheart::core::{Transcript, LayoutConfig};
//!
//! let transcript = Transcript::parse("1/1/24 a las 09:00 - Andrea: hi");
//! let diagram = transcript.layout(&LayoutConfig::new())?;
//! assert_eq!(diagram.records.len(), 1);
//! # Ok::<(), chatheart::ChatheartError>(())
//! ```

pub mod models;
pub mod output;
pub mod processor;
pub mod select;
pub mod sequencer;

// Re-export main types for convenience
pub use models::{Diagram, Edge, PositionedRecord};
pub use processor::{ProcessingStats, Transcript, layout, layout_with_rng};
pub use select::{order_messages, select_window};
pub use sequencer::connect;

pub use crate::Message;
pub use crate::config::LayoutConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
#[cfg(feature = "svg-output")]
pub use output::{to_svg, write_svg};
