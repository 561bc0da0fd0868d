//! Parser for progress blocks.
//!
//! A block is plain text: the first line declares the label and ratio, every
//! further line overrides one setting.
//!
//! ```text
//! Books read: 5/10
//! fill:#
//! empty:-
//! prefix:[
//! suffix:]
//! ```
//!
//! Parsing never fails. Whatever cannot be understood is reported as a
//! [`Diagnostic`] and replaced with a defined fallback, so the caller always
//! gets a renderable [`BarConfig`].
//!
//! # Examples
//!
//! ```rust
//! use text_progress::config::Defaults;
//! use text_progress::parser::parse_block;
//!
//! let outcome = parse_block("Books read: 5/10\nfill:#\nlength:5", &Defaults::default());
//! assert!(outcome.diagnostics.is_empty());
//! assert_eq!(outcome.config.label(), "Books read");
//! assert_eq!(outcome.config.fill(), "#");
//! assert_eq!(outcome.config.length(), 5);
//! // Not overridden, so taken from the defaults.
//! assert_eq!(outcome.config.empty(), "🌑");
//! ```

pub(crate) mod diagnostic;
pub(crate) mod label;
pub(crate) mod overrides;

pub use diagnostic::Diagnostic;
pub use label::{parse_label_line, LabelLine};
pub use overrides::{parse_override_line, split_setting_line, Override};

use crate::config::{BarConfig, BarConfigBuilder, Defaults};
use tracing::debug;

/// A resolved configuration and everything noticed while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub config: BarConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// `true` when the block was read without any diagnostic.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a block and resolve it against `defaults`.
///
/// Override lines apply in order, so a repeated key keeps its last value.
pub fn parse_block(raw: &str, defaults: &Defaults) -> ParseOutcome {
    let mut diagnostics = Vec::new();
    let mut lines = raw
        .trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let first = lines.next().unwrap_or_default();
    let label_line = if first.is_empty() {
        diagnostics.push(Diagnostic::MissingLabel);
        LabelLine::zero()
    } else {
        parse_label_line(first).unwrap_or_else(|| {
            debug!("Label line {:?} does not match", first);
            diagnostics.push(Diagnostic::LabelFormat {
                line: first.to_string(),
            });
            LabelLine::zero()
        })
    };

    let mut builder = BarConfigBuilder::with_defaults(defaults)
        .label(label_line.label)
        .ratio(label_line.done, label_line.total);

    for line in lines {
        match parse_override_line(line) {
            Some(Override::Known { key, value }) => {
                if builder.apply(key, value).is_err() {
                    diagnostics.push(Diagnostic::InvalidLength {
                        value: value.to_string(),
                    });
                }
            }
            Some(Override::Unknown { key, value }) => {
                debug!("Keeping unknown setting {:?}", key);
                builder = builder.extra(key, value);
            }
            None => {}
        }
    }

    let (config, clamped) = builder.resolve();
    if let Some(requested) = clamped {
        diagnostics.push(Diagnostic::LengthClamped {
            requested,
            length: config.length(),
        });
    }

    ParseOutcome {
        config,
        diagnostics,
    }
}
