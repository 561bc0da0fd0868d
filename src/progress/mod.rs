//! Symbol presets and text output for bars.
//!
//! - `style` - ready-made symbol sets ([`StylePreset`])
//! - `display` - formatting of a rendered bar as text ([`BarDisplay`])
//!
//! # Examples
//!
//! ```rust
//! use text_progress::parser::parse_block;
//! use text_progress::bar::render;
//! use text_progress::progress::{BarDisplay, StylePreset};
//!
//! let defaults = StylePreset::ASCII.to_defaults();
//! let outcome = parse_block("Pushups: 30/40\nlength:8", &defaults);
//! let line = BarDisplay::plain().format(&render(&outcome.config));
//! assert_eq!(line, "Pushups ######--");
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::BarDisplay;
pub use style::StylePreset;
