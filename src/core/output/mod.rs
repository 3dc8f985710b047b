//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - records and edges as one JSON document - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - one row per record, semicolon delimiter - requires `csv-output` feature
//! - [`write_svg`] / [`to_svg`] - rendered picture - requires `svg-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output", feature = "svg-output"))]
//! # fn main() -> chatheart::Result<()> {
//! use chatheart::config::LayoutConfig;
//! use chatheart::core::output::{to_csv, write_json, write_svg};
//!
//! let config = LayoutConfig::new();
//! let diagram = chatheart::layout("1/1/24 a las 09:00 - Andrea: hi", &config)?;
//!
//! write_json(&diagram, "heart.json")?;
//! write_svg(&diagram, "heart.svg", &config.metrics)?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&diagram)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output", feature = "svg-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "svg-output")]
mod svg_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "svg-output")]
pub use svg_writer::{EXPORT_MARGIN, to_svg, write_svg};
