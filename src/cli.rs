//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! Layout flags are all optional. Unset flags keep the value from
//! `--config` (or the library default), so the CLI and a stored JSON
//! configuration describe the same [`LayoutConfig`].
//!
//! ```rust
//! use clap::Parser;
//! use chatheart::cli::Args;
//! use chatheart::config::DrawingStyle;
//!
//! let args = Args::parse_from(["chatheart", "chat.txt", "--style", "timeline", "--size", "10"]);
//! let config = args.layout_config().unwrap();
//! assert_eq!(config.style, DrawingStyle::Timeline);
//! assert_eq!(config.sample_size, Some(10));
//! ```

use std::fs;
use std::path::Path;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DrawingStyle, LayoutConfig, OrderPolicy, SelectionPolicy};
use crate::error::{ChatheartError, Result};

/// Lay out a chat export as a heart or a timeline of message boxes.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatheart")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatheart chat.txt
    chatheart chat.txt -o heart.svg -f svg
    chatheart chat.txt --style heart-fill --size 60 --order random --seed 7
    chatheart chat.txt --style timeline --start 100 --size 20 -f csv
    chatheart chat.txt --config layout.json --highlight david")]
pub struct Args {
    /// Path to the chat export (.txt)
    pub input: String,

    /// Path to output file [default: heart.<format extension>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Load the layout configuration from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Corpus order before the window is taken
    #[arg(long, value_enum)]
    pub order: Option<OrderPolicy>,

    /// What happens when the window runs past the end
    #[arg(long, value_enum)]
    pub selection: Option<SelectionPolicy>,

    /// Index of the first selected message
    #[arg(long, value_name = "N")]
    pub start: Option<usize>,

    /// Number of messages to draw [default: all]
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Drawing style
    #[arg(long, value_enum)]
    pub style: Option<DrawingStyle>,

    /// Heart size in pixels per curve unit
    #[arg(long)]
    pub scale: Option<f64>,

    /// Interior grid density for heart-fill
    #[arg(long)]
    pub grid_factor: Option<f64>,

    /// Share of boxes placed on the outline in heart-fill
    #[arg(long)]
    pub outline_fraction: Option<f64>,

    /// Senders containing this name get the highlight color
    #[arg(long, value_name = "NAME")]
    pub highlight: Option<String>,

    /// Characters per line inside a box
    #[arg(long, value_name = "N")]
    pub wrap: Option<usize>,

    /// Seed for the random order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Output path, defaulting to `heart.<ext>` for the chosen format.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("heart.{}", self.format.extension()))
    }

    /// Builds the effective configuration: `--config` file (or defaults),
    /// then every flag that was given.
    ///
    /// The result is validated.
    pub fn layout_config(&self) -> Result<LayoutConfig> {
        let base = match &self.config {
            Some(path) => load_config(Path::new(path))?,
            None => LayoutConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    /// Overrides `config` with the flags that were given.
    pub fn apply(&self, mut config: LayoutConfig) -> LayoutConfig {
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(selection) = self.selection {
            config.selection = selection;
        }
        if let Some(start) = self.start {
            config.start_index = start;
        }
        if let Some(size) = self.size {
            config.sample_size = Some(size);
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(grid_factor) = self.grid_factor {
            config.grid_factor = grid_factor;
        }
        if let Some(fraction) = self.outline_fraction {
            config.outline_fraction = fraction;
        }
        if let Some(marker) = &self.highlight {
            config.highlight_marker.clone_from(marker);
        }
        if let Some(wrap) = self.wrap {
            config.wrap_width = wrap;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}

/// Reads a JSON [`LayoutConfig`]. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<LayoutConfig> {
    let content = fs::read_to_string(path).map_err(|e| ChatheartError::read(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatheart::cli::OutputFormat;
///
/// let format = OutputFormat::Svg;
/// println!("Extension: {}", format.extension()); // "svg"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Records and edges as JSON (default)
    #[default]
    Json,

    /// One row per record, semicolon delimiter
    Csv,

    /// Rendered picture
    Svg,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Svg => crate::format::OutputFormat::Svg,
        }
    }
}
