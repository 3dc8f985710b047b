//! Configuration types for a layout pass.
//!
//! Every knob that influences the output lives in [`LayoutConfig`]; nothing
//! is read from ambient state. Configurations are plain data and
//! (de)serialize with serde, so they can be stored next to an export as JSON.
//!
//! # Example
//!
//! ```rust
//! use chatheart::config::{DrawingStyle, LayoutConfig, OrderPolicy, SelectionPolicy};
//!
//! let config = LayoutConfig::new()
//!     .with_order(OrderPolicy::Date)
//!     .with_selection(SelectionPolicy::Wrap)
//!     .with_window(10, 40)
//!     .with_style(DrawingStyle::HeartFill)
//!     .with_grid_factor(1.5)
//!     .with_seed(7);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChatheartError, Result};
use crate::layout::Point;

/// Largest window [`SelectionPolicy::Wrap`] may produce.
///
/// Wrapped windows repeat messages, so their size isn't bounded by the
/// corpus; [`LayoutConfig::validate`] rejects anything above this.
pub const MAX_WRAP_SIZE: usize = 100_000;

/// Ordering applied to the parsed corpus before a window is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OrderPolicy {
    /// Keep parse order.
    #[default]
    None,
    /// Shortest message body first (stable).
    Length,
    /// Oldest first; unparseable dates go last (stable).
    Date,
    /// Uniform shuffle.
    Random,
}

/// How the `[start, start + size)` window is taken from the ordered corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Window is clipped at the end of the corpus.
    #[default]
    Clamped,
    /// Window cycles back to the start of the corpus.
    Wrap,
}

/// Geometric pattern the selected messages are laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DrawingStyle {
    /// Boxes spaced evenly along the heart curve.
    #[default]
    HeartOutline,
    /// Part of the boxes on the curve, the rest on a grid inside it.
    HeartFill,
    /// Boxes left to right on one horizontal line.
    Timeline,
}

macro_rules! impl_names {
    ($ty:ident { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            /// Returns all accepted names.
            pub fn all_names() -> &'static [&'static str] {
                &[$($name, $($alias,)*)+]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($ty::$variant => write!(f, $name),)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ChatheartError;

            fn from_str(s: &str) -> Result<Self> {
                match s.to_lowercase().as_str() {
                    $($name $(| $alias)* => Ok($ty::$variant),)+
                    _ => Err(ChatheartError::invalid_format(
                        stringify!($ty),
                        format!("unknown value '{}'. Expected one of: {}", s, $ty::all_names().join(", ")),
                    )),
                }
            }
        }
    };
}

impl_names!(OrderPolicy {
    None => "none" | "default",
    Length => "length" | "by-length",
    Date => "date" | "by-date",
    Random => "random",
});

impl_names!(SelectionPolicy {
    Clamped => "clamped",
    Wrap => "wrap",
});

impl_names!(DrawingStyle {
    HeartOutline => "heart-outline" | "heart",
    HeartFill => "heart-fill",
    Timeline => "timeline",
});

/// Two-color sender classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Color for senders matching the highlight marker.
    pub highlight: String,
    /// Color for everyone else.
    pub default: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight: "#FF69B4".to_string(),
            default: "#1E90FF".to_string(),
        }
    }
}

/// Pixel metrics used to size message boxes.
///
/// These are layout constants, not font measurements: wider text gives a
/// wider box and more lines give a taller one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxMetrics {
    /// Minimum box width.
    pub min_width: f64,
    /// Width of one character.
    pub char_width: f64,
    /// Height of one wrapped line.
    pub line_height: f64,
    /// Height of the date/time and sender rows.
    pub header_height: f64,
    /// Total padding added to both width and height.
    pub padding: f64,
}

impl Default for BoxMetrics {
    fn default() -> Self {
        Self {
            min_width: 200.0,
            char_width: 7.0,
            line_height: 20.0,
            header_height: 48.0,
            padding: 16.0,
        }
    }
}

/// Full configuration of one layout pass.
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `order` | [`OrderPolicy::None`] |
/// | `selection` | [`SelectionPolicy::Clamped`] |
/// | `start_index` | `0` |
/// | `sample_size` | `None` (whole corpus) |
/// | `style` | [`DrawingStyle::HeartOutline`] |
/// | `scale` | `75.0` |
/// | `grid_factor` | `1.0` |
/// | `outline_fraction` | `0.3` |
/// | `polygon_steps` | `100` |
/// | `center` | `(800, 600)` |
/// | `highlight_marker` | `"andrea"` |
/// | `wrap_width` | `80` |
/// | `seed` | `None` (non-reproducible shuffle) |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Corpus ordering.
    pub order: OrderPolicy,
    /// Window policy.
    pub selection: SelectionPolicy,
    /// First index of the window in the ordered corpus.
    pub start_index: usize,
    /// Window size; `None` selects everything.
    pub sample_size: Option<usize>,
    /// Layout pattern.
    pub style: DrawingStyle,
    /// Magnitude of the heart curve, and spacing unit of the timeline.
    pub scale: f64,
    /// Interior grid density multiplier (heart-fill only).
    pub grid_factor: f64,
    /// Share of records placed on the curve (heart-fill only).
    pub outline_fraction: f64,
    /// Vertices of the heart polygon (heart-fill only).
    pub polygon_steps: usize,
    /// Heart center; the timeline runs along `center.y`.
    pub center: Point,
    /// Case-insensitive substring selecting the highlight color.
    pub highlight_marker: String,
    /// Characters per wrapped line.
    pub wrap_width: usize,
    /// Record colors.
    pub palette: Palette,
    /// Box sizing.
    pub metrics: BoxMetrics,
    /// Seed for [`OrderPolicy::Random`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            order: OrderPolicy::default(),
            selection: SelectionPolicy::default(),
            start_index: 0,
            sample_size: None,
            style: DrawingStyle::default(),
            scale: 75.0,
            grid_factor: 1.0,
            outline_fraction: 0.3,
            polygon_steps: 100,
            center: Point::new(800.0, 600.0),
            highlight_marker: "andrea".to_string(),
            wrap_width: 80,
            palette: Palette::default(),
            metrics: BoxMetrics::default(),
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corpus ordering.
    #[must_use]
    pub fn with_order(mut self, order: OrderPolicy) -> Self {
        self.order = order;
        self
    }

    /// Sets the window policy.
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the window start and size.
    #[must_use]
    pub fn with_window(mut self, start_index: usize, sample_size: usize) -> Self {
        self.start_index = start_index;
        self.sample_size = Some(sample_size);
        self
    }

    /// Sets the layout pattern.
    #[must_use]
    pub fn with_style(mut self, style: DrawingStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the curve magnitude.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the interior grid density (heart-fill).
    #[must_use]
    pub fn with_grid_factor(mut self, grid_factor: f64) -> Self {
        self.grid_factor = grid_factor;
        self
    }

    /// Sets the share of records placed on the outline (heart-fill).
    #[must_use]
    pub fn with_outline_fraction(mut self, fraction: f64) -> Self {
        self.outline_fraction = fraction;
        self
    }

    /// Sets the layout center.
    #[must_use]
    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center = Point::new(x, y);
        self
    }

    /// Sets the highlight marker.
    #[must_use]
    pub fn with_highlight_marker(mut self, marker: impl Into<String>) -> Self {
        self.highlight_marker = marker.into();
        self
    }

    /// Sets the wrap width in characters.
    #[must_use]
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Sets the record colors.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the box metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: BoxMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Makes [`OrderPolicy::Random`] reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every numeric field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == Some(0) {
            return Err(ChatheartError::invalid_config(
                "sample_size",
                "must be at least 1",
            ));
        }
        if let (SelectionPolicy::Wrap, Some(size)) = (self.selection, self.sample_size) {
            if size > MAX_WRAP_SIZE {
                return Err(ChatheartError::invalid_config(
                    "sample_size",
                    format!("wrapped windows are limited to {MAX_WRAP_SIZE} messages, got {size}"),
                ));
            }
        }
        if self.wrap_width == 0 {
            return Err(ChatheartError::invalid_config(
                "wrap_width",
                "must be at least 1",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ChatheartError::invalid_config(
                "scale",
                format!("must be a positive number, got {}", self.scale),
            ));
        }
        if !self.grid_factor.is_finite() || self.grid_factor <= 0.0 {
            return Err(ChatheartError::invalid_config(
                "grid_factor",
                format!("must be a positive number, got {}", self.grid_factor),
            ));
        }
        if !(0.0..=1.0).contains(&self.outline_fraction) {
            return Err(ChatheartError::invalid_config(
                "outline_fraction",
                format!("must be within [0, 1], got {}", self.outline_fraction),
            ));
        }
        if self.polygon_steps < 3 {
            return Err(ChatheartError::invalid_config(
                "polygon_steps",
                "a polygon needs at least 3 vertices",
            ));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ChatheartError::invalid_config(
                "center",
                "coordinates must be finite",
            ));
        }
        Ok(())
    }
}
