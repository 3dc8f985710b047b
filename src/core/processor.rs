//! The full pipeline: merge → parse → order → select → layout → connect.
//!
//! Merging and parsing happen once per export ([`Transcript`]); ordering,
//! selection, layout and sequencing rerun for every configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::Diagram;
use super::select::{order_messages, select_window};
use super::sequencer::connect;
use crate::Message;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::layout_messages;
use crate::parser::ChatParser;

/// Parsed export, reusable across layout passes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// Messages in export order.
    pub messages: Vec<Message>,
    /// Logical entries produced by merging.
    pub entries: usize,
    /// Entries that didn't match the grammar.
    pub unmatched: usize,
}

impl Transcript {
    /// Parses an export held in memory.
    pub fn parse(text: &str) -> Self {
        ChatParser::new().parse_str(text)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Lays out the transcript. Randomness comes from `config.seed`, or the
    /// thread RNG when no seed is set.
    pub fn layout(&self, config: &LayoutConfig) -> Result<Diagram> {
        match config.seed {
            Some(seed) => self.layout_with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => self.layout_with_rng(config, &mut rand::thread_rng()),
        }
    }

    /// Lays out the transcript drawing randomness from `rng`.
    pub fn layout_with_rng<R: Rng + ?Sized>(
        &self,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Result<Diagram> {
        config.validate()?;

        let ordered = order_messages(&self.messages, config.order, rng);
        let size = config.sample_size.unwrap_or(ordered.len());
        let selected = select_window(&ordered, config.selection, config.start_index, size);
        let records = layout_messages(&selected, config);
        let edges = connect(&records);

        debug!(
            corpus = self.messages.len(),
            selected = records.len(),
            edges = edges.len(),
            "layout pass complete"
        );

        Ok(Diagram { records, edges })
    }

    /// Counts for reporting.
    pub fn stats(&self) -> ProcessingStats {
        ProcessingStats {
            entries: self.entries,
            messages: self.messages.len(),
            unmatched: self.unmatched,
        }
    }
}

/// Runs the whole pipeline on an export held in memory.
///
/// ```
/// use chatheart::config::{DrawingStyle, LayoutConfig};
///
/// let text = "1/1/24 a las 09:00 - Andrea: hi\n1/1/24 a las 09:05 - David: hello there";
/// let config = LayoutConfig::new().with_style(DrawingStyle::Timeline).with_window(0, 2);
/// let diagram = chatheart::layout(text, &config)?;
///
/// assert_eq!(diagram.records.len(), 2);
/// assert_eq!(diagram.edges.len(), 1);
/// # Ok::<(), chatheart::ChatheartError>(())
/// ```
pub fn layout(text: &str, config: &LayoutConfig) -> Result<Diagram> {
    Transcript::parse(text).layout(config)
}

/// [`layout`] with an explicit random source.
pub fn layout_with_rng<R: Rng + ?Sized>(
    text: &str,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<Diagram> {
    Transcript::parse(text).layout_with_rng(config, rng)
}

/// Statistics about a parsed transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingStats {
    pub entries: usize,
    pub messages: usize,
    pub unmatched: usize,
}

impl ProcessingStats {
    /// Share of entries that parsed, in percent.
    pub fn match_ratio(&self) -> f64 {
        if self.entries == 0 {
            return 0.0;
        }
        self.messages as f64 / self.entries as f64 * 100.0
    }
}
