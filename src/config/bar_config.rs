//! The resolved, immutable configuration of a single bar.

use super::builder::BarConfigBuilder;
use std::collections::BTreeMap;

/// Everything needed to render one bar.
///
/// A `BarConfig` can only be produced by [`BarConfigBuilder::build`], which
/// guarantees that `length >= 1` and that the transition sequence holds at
/// least one symbol. `done` may exceed `total`; clamping happens at the
/// segment level only.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub(crate) label: String,
    pub(crate) done: f64,
    pub(crate) total: f64,
    pub(crate) fill: String,
    pub(crate) empty: String,
    pub(crate) transition: Vec<String>,
    pub(crate) prefix: String,
    pub(crate) suffix: String,
    pub(crate) length: usize,
    pub(crate) label_hidden: bool,
    pub(crate) extra: BTreeMap<String, String>,
}

impl BarConfig {
    /// Start building a configuration from the built-in defaults.
    pub fn builder(label: impl Into<String>, done: f64, total: f64) -> BarConfigBuilder {
        BarConfigBuilder::new().label(label).ratio(done, total)
    }

    /// Display text of the bar.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Amount of progress made.
    pub fn done(&self) -> f64 {
        self.done
    }

    /// Amount of progress that counts as complete.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Symbol of a filled segment.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Symbol of an empty segment.
    pub fn empty(&self) -> &str {
        &self.empty
    }

    /// Boundary symbols, never empty.
    pub fn transition(&self) -> &[String] {
        &self.transition
    }

    /// Literal text before the segments.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Literal text after the segments.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Number of segments, at least one.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the label should be suppressed.
    pub fn label_hidden(&self) -> bool {
        self.label_hidden
    }

    /// Override lines whose key is not recognized, kept verbatim.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }
}
