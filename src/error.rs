//! Error handling for the text-progress library.
//!
//! Parsing a progress block never fails: problems with the block text are
//! reported as [`Diagnostic`](crate::parser::Diagnostic) values next to the
//! resolved configuration. The [`Error`] enum only covers the operations that
//! touch the outside world, such as loading and saving persisted defaults.

use std::io;
use thiserror::Error;

/// Errors that can happen when using text-progress.
#[derive(Error, Debug)]
pub enum Error {
    /// A setting value that cannot be persisted.
    ///
    /// Returned when saving defaults whose value would break the
    /// line-oriented `key:value` format, e.g. a symbol containing a newline.
    #[error("Invalid value for setting `{key}`: {reason}")]
    InvalidSetting {
        /// The offending setting key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// I/O Error.
    ///
    /// Wraps standard I/O errors raised while reading or writing a settings
    /// file.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a text-progress error.
pub type Result<T> = std::result::Result<T, Error>;
