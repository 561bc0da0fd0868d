//! Segment math and rendering.

use super::pictograph::is_pictographic;
use super::segment::Segment;
use crate::config::BarConfig;
use crate::progress::BarDisplay;
use std::fmt;
use tracing::trace;

impl BarConfig {
    /// `done / total`, or `NaN` when the total is zero.
    pub fn ratio(&self) -> f64 {
        if self.total == 0.0 {
            return f64::NAN;
        }
        self.done / self.total
    }

    /// Percentage of completion, never clamped: `20/10` is `200`.
    ///
    /// `NaN` when the total is zero.
    pub fn done_percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Position of the progress measured in segments.
    pub fn scaled_position(&self) -> f64 {
        self.ratio() * self.length as f64
    }

    /// Number of fully filled segments, capped at [`BarConfig::length`].
    ///
    /// An infinite scaled position (a `done` too large for `f64`) fills the
    /// bar; an undefined one yields no filled segments.
    pub fn done_parts(&self) -> usize {
        let scaled = self.scaled_position();
        if scaled == f64::INFINITY {
            return self.length;
        }
        if !scaled.is_finite() {
            return 0;
        }
        (scaled.floor().max(0.0) as usize).min(self.length)
    }

    /// Fractional occupancy of the boundary segment, in `[0, 1)`.
    ///
    /// `NaN` when the scaled position is not finite.
    pub fn remainder(&self) -> f64 {
        let scaled = self.scaled_position();
        if !scaled.is_finite() {
            return f64::NAN;
        }
        scaled % 1.0
    }
}

/// Select the boundary symbol for a fractional `remainder`.
///
/// The index is `floor(remainder * len)`, clamped to the last symbol so that
/// a remainder rounding up towards `1.0` stays in bounds. Returns `None` only
/// for an empty sequence.
pub fn pick_transition(remainder: f64, sequence: &[String]) -> Option<&str> {
    let last = sequence.len().checked_sub(1)?;
    let index = (remainder * sequence.len() as f64).floor().max(0.0) as usize;
    sequence.get(index.min(last)).map(String::as_str)
}

/// Compute the segments of a bar.
pub fn render(config: &BarConfig) -> RenderedBar {
    let length = config.length();
    let done_parts = config.done_parts();
    let remainder = config.remainder();
    trace!(
        label = config.label(),
        length,
        done_parts,
        remainder,
        "rendering bar"
    );

    let segments = (0..length)
        .map(|index| {
            if index < done_parts || done_parts == length {
                return Segment::Filled(config.fill().to_string());
            }
            if index == done_parts && remainder > 0.0 {
                if let Some(symbol) = pick_transition(remainder, config.transition()) {
                    return Segment::Transition(symbol.to_string());
                }
            }
            Segment::Empty(config.empty().to_string())
        })
        .collect();

    RenderedBar {
        label: config.label().to_string(),
        label_hidden: config.label_hidden(),
        prefix: config.prefix().to_string(),
        suffix: config.suffix().to_string(),
        segments,
        is_pictographic: is_pictographic(config.fill()),
        done_percent: config.done_percent(),
    }
}

/// The output of [`render`], ready to be mapped onto a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBar {
    label: String,
    label_hidden: bool,
    prefix: String,
    suffix: String,
    segments: Vec<Segment>,
    is_pictographic: bool,
    done_percent: f64,
}

impl RenderedBar {
    /// Display text of the bar.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the label should be suppressed.
    pub fn label_hidden(&self) -> bool {
        self.label_hidden
    }

    /// Literal text before the segments.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Literal text after the segments.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Exactly [`BarConfig::length`] segments, in display order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the fill symbol is pictographic; a sizing hint for renderers.
    pub fn is_pictographic(&self) -> bool {
        self.is_pictographic
    }

    /// The raw percentage, `NaN` when the ratio is undefined.
    pub fn done_percent(&self) -> f64 {
        self.done_percent
    }

    /// The percentage, or `None` when the ratio is undefined.
    ///
    /// An overflowing `done` is still a defined, unclamped percentage and
    /// comes back as `Some(f64::INFINITY)`.
    pub fn percent(&self) -> Option<f64> {
        (!self.done_percent.is_nan()).then_some(self.done_percent)
    }
}

impl fmt::Display for RenderedBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BarDisplay::plain().format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::SegmentKind;

    fn symbols(seq: &[&str]) -> Vec<String> {
        seq.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pick_transition_index() {
        let seq = symbols(&["a", "b", "c"]);
        assert_eq!(pick_transition(0.1, &seq), Some("a"));
        assert_eq!(pick_transition(0.34, &seq), Some("b"));
        assert_eq!(pick_transition(0.7, &seq), Some("c"));
        assert_eq!(pick_transition(0.999_999_9, &seq), Some("c"));
        assert_eq!(pick_transition(1.0, &seq), Some("c"));
    }

    #[test]
    fn test_pick_transition_empty_sequence() {
        assert_eq!(pick_transition(0.5, &[]), None);
    }

    #[test]
    fn test_transition_on_boundary_segment_only() {
        let config = BarConfig::builder("x", 1.0, 2.0)
            .length(4)
            .transition(["a", "b", "c"])
            .build();
        // scaled = 2, two filled parts and no boundary segment.
        assert_eq!(config.done_parts(), 2);
        assert_eq!(config.remainder(), 0.0);

        let config = BarConfig::builder("x", 1.0, 2.0)
            .length(3)
            .transition(["a", "b", "c"])
            .build();
        // scaled = 1.5, one filled part and a remainder of 0.5.
        let bar = render(&config);
        let kinds: Vec<_> = bar.segments().iter().map(Segment::kind).collect();
        assert_eq!(
            kinds,
            [
                SegmentKind::Filled,
                SegmentKind::Transition,
                SegmentKind::Empty
            ]
        );
        assert_eq!(bar.segments()[1].symbol(), "b");
    }

    #[test]
    fn test_zero_total_renders_empty() {
        let config = BarConfig::builder("", 0.0, 0.0).build();
        assert!(config.done_percent().is_nan());
        assert!(config.remainder().is_nan());
        assert_eq!(config.done_parts(), 0);

        let bar = render(&config);
        assert_eq!(bar.percent(), None);
        assert_eq!(bar.segments().len(), 1);
        assert_eq!(bar.segments()[0].kind(), SegmentKind::Empty);
    }

    #[test]
    fn test_positive_done_over_zero_total_is_undefined() {
        let config = BarConfig::builder("x", 5.0, 0.0).length(3).build();
        assert!(config.done_percent().is_nan());
        let bar = render(&config);
        assert!(bar
            .segments()
            .iter()
            .all(|s| s.kind() == SegmentKind::Empty));
    }

    #[test]
    fn test_overfull_renders_all_filled() {
        let config = BarConfig::builder("x", 20.0, 15.0).build();
        let bar = render(&config);
        assert_eq!(bar.segments().len(), 15);
        assert!(bar
            .segments()
            .iter()
            .all(|s| s.kind() == SegmentKind::Filled));
        assert_eq!(bar.percent(), Some(20.0 / 15.0 * 100.0));
    }
}
