//! Output format types for the chatheart library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatheart::Result<()> {
//! use chatheart::config::LayoutConfig;
//! use chatheart::format::{OutputFormat, write_to_format};
//!
//! let config = LayoutConfig::new();
//! let diagram = chatheart::layout("1/1/24 a las 09:00 - Andrea: hi", &config)?;
//!
//! // Write using format enum
//! write_to_format(&diagram, "heart.csv", OutputFormat::Csv, &config)?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("heart.svg")?;
//! assert_eq!(format, OutputFormat::Svg);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::core::models::Diagram;
use crate::error::ChatheartError;

/// Output format for a laid-out diagram.
///
/// - [`Json`](OutputFormat::Json) - records and edges, for renderers and APIs
/// - [`Csv`](OutputFormat::Csv) - one row per record, for spreadsheets
/// - [`Svg`](OutputFormat::Svg) - the finished picture
///
/// # Example
///
/// ```rust
/// use chatheart::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("svg").unwrap();
/// assert_eq!(format, OutputFormat::Svg);
/// assert_eq!(format.extension(), "svg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON document (default)
    #[default]
    Json,

    /// CSV with semicolon delimiter
    Csv,

    /// Standalone SVG picture
    Svg,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatheart::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Svg.extension(), "svg");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Svg => "svg",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "svg"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv, OutputFormat::Svg]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Svg => "image/svg+xml",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatheart::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("out/heart.SVG").unwrap();
    /// assert_eq!(format, OutputFormat::Svg);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatheartError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(ChatheartError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Svg => write!(f, "SVG"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatheartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(ChatheartError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes a diagram to a file in the specified format.
///
/// `config` supplies the box metrics the SVG writer needs to place text.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    diagram: &Diagram,
    path: &str,
    format: OutputFormat,
    config: &LayoutConfig,
) -> Result<(), ChatheartError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(diagram, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(diagram, path),
        #[cfg(feature = "svg-output")]
        OutputFormat::Svg => crate::core::output::write_svg(diagram, path, &config.metrics),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a diagram to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "svg-output")]
/// # fn example() -> chatheart::Result<()> {
/// use chatheart::config::LayoutConfig;
/// use chatheart::format::{OutputFormat, to_format_string};
///
/// let config = LayoutConfig::new();
/// let diagram = chatheart::layout("1/1/24 a las 09:00 - Andrea: hi", &config)?;
/// let svg = to_format_string(&diagram, OutputFormat::Svg, &config)?;
/// assert!(svg.starts_with("<svg"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    diagram: &Diagram,
    format: OutputFormat,
    config: &LayoutConfig,
) -> Result<String, ChatheartError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(diagram),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(diagram),
        #[cfg(feature = "svg-output")]
        OutputFormat::Svg => crate::core::output::to_svg(diagram, &config.metrics),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatheartError {
    let feature = match format {
        OutputFormat::Json => "json-output",
        OutputFormat::Csv => "csv-output",
        OutputFormat::Svg => "svg-output",
    };
    ChatheartError::invalid_format(
        "output",
        format!("Output format {format} requires the '{feature}' feature to be enabled"),
    )
}
