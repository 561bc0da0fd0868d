//! Non-fatal findings reported while parsing a block.

use std::fmt;

/// A parse-quality signal returned next to the resolved configuration.
///
/// Diagnostics never stop parsing. Their [`Display`](fmt::Display) output is
/// written as a short notice the host may show to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The block contained no lines at all.
    MissingLabel,
    /// The first line is not `<label>: <done>/<total>`.
    LabelFormat { line: String },
    /// A `length` override is not an integer; the length falls back to the
    /// total.
    InvalidLength { value: String },
    /// The bar asked for more than [`MAX_SEGMENTS`](crate::config::MAX_SEGMENTS)
    /// segments.
    LengthClamped { requested: f64, length: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingLabel => write!(f, "No progress bars found."),
            Diagnostic::LabelFormat { line } => {
                write!(f, "Could not find label in correct format: {line:?}")
            }
            Diagnostic::InvalidLength { value } => {
                write!(f, "Length {value:?} is not a whole number, using the total")
            }
            Diagnostic::LengthClamped { requested, length } => {
                write!(f, "Bar length {requested} is too long, using {length}")
            }
        }
    }
}
