//! Builder used to resolve a [`BarConfig`].

use super::bar_config::BarConfig;
use super::defaults::{parse_length, Defaults};
use super::key::SettingKey;
use std::collections::BTreeMap;
use std::num::ParseIntError;

/// Upper bound on the number of segments a bar may resolve to.
///
/// A block such as `x: 1/99999999` would otherwise ask for one segment per
/// unit of an enormous total.
pub const MAX_SEGMENTS: usize = 10_000;

/// A builder used to create a [`BarConfig`].
///
/// ```rust
/// use text_progress::config::BarConfigBuilder;
///
/// let config = BarConfigBuilder::new()
///     .label("Chapters")
///     .ratio(3.0, 12.0)
///     .length(6)
///     .fill("█")
///     .build();
/// assert_eq!(config.length(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BarConfigBuilder {
    label: String,
    done: f64,
    total: f64,
    style: Defaults,
    extra: BTreeMap<String, String>,
}

impl BarConfigBuilder {
    /// Creates a builder with the built-in defaults and a `0/0` ratio.
    pub fn new() -> Self {
        BarConfigBuilder::default()
    }

    /// Creates a builder seeded from host defaults.
    pub fn with_defaults(defaults: &Defaults) -> Self {
        Self {
            style: defaults.clone(),
            ..BarConfigBuilder::default()
        }
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the done/total ratio.
    pub fn ratio(mut self, done: f64, total: f64) -> Self {
        self.done = done;
        self.total = total;
        self
    }

    /// Set the filled segment symbol.
    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.style.fill = fill.into();
        self
    }

    /// Set the empty segment symbol.
    pub fn empty(mut self, empty: impl Into<String>) -> Self {
        self.style.empty = empty.into();
        self
    }

    /// Set the boundary symbols, ordered from least to most filled.
    pub fn transition<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style.transition = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the text printed before the segments.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.style.prefix = prefix.into();
        self
    }

    /// Set the text printed after the segments.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.style.suffix = suffix.into();
        self
    }

    /// Set the number of segments. `0` derives it from the total.
    pub fn length(mut self, length: usize) -> Self {
        self.style.length = length;
        self
    }

    /// Hide or show the label.
    pub fn label_hidden(mut self, hidden: bool) -> Self {
        self.style.label_hide = hidden;
        self
    }

    /// Keep an unrecognized setting for forward compatibility.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Apply one override line.
    ///
    /// An unparsable `length` leaves the length unset so that it falls back
    /// to the total, and the parse error is handed back for reporting.
    pub(crate) fn apply(&mut self, key: SettingKey, value: &str) -> Result<(), ParseIntError> {
        if key != SettingKey::Length {
            return self.style.apply(key, value);
        }
        match parse_length(value) {
            Ok(length) => {
                self.style.length = length;
                Ok(())
            }
            Err(err) => {
                self.style.length = 0;
                Err(err)
            }
        }
    }

    /// Resolve the configuration.
    pub fn build(self) -> BarConfig {
        self.resolve().0
    }

    /// Resolve the configuration, also returning the requested segment count
    /// when it had to be capped at [`MAX_SEGMENTS`].
    pub(crate) fn resolve(self) -> (BarConfig, Option<f64>) {
        let requested = match self.style.length {
            0 if self.total.is_finite() && self.total > 0.0 => self.total.ceil(),
            0 => 1.0,
            explicit => explicit as f64,
        };
        let (length, clamped) = if requested > MAX_SEGMENTS as f64 {
            (MAX_SEGMENTS, Some(requested))
        } else {
            (requested as usize, None)
        };

        let mut transition = self.style.transition;
        if transition.is_empty() {
            transition.push(String::new());
        }

        let config = BarConfig {
            label: self.label,
            done: self.done,
            total: self.total,
            fill: self.style.fill,
            empty: self.style.empty,
            transition,
            prefix: self.style.prefix,
            suffix: self.style.suffix,
            length,
            label_hidden: self.style.label_hide,
            extra: self.extra,
        };
        (config, clamped)
    }
}
