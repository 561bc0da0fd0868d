//! text-progress renders segmented text progress bars from a compact,
//! human-authored block.
//!
//! # Quick Start
//!
//! ```rust
//! use text_progress::{parse_block, render, Defaults};
//!
//! let block = "Books read: 5/10\nfill:#\nempty:-";
//! let outcome = parse_block(block, &Defaults::default());
//! for diagnostic in &outcome.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//!
//! let bar = render(&outcome.config);
//! assert_eq!(bar.to_string(), "Books read #####-----");
//! ```
//!
//! # Module Organization
//!
//! - [`config`] - Defaults, override keys and the resolved `BarConfig`
//! - [`parser`] - Parsing of a block's label/ratio line and override lines
//! - [`bar`] - The engine computing `Filled`/`Transition`/`Empty` segments
//! - [`progress`] - Symbol presets and text rendering of a bar
//! - [`settings`] - Loading and saving persisted defaults
//! - [`document`] - Finding and rendering progress blocks in markdown
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod bar;
pub mod config;
pub mod document;
pub mod error;
pub mod parser;
pub mod progress;
pub mod settings;

pub use bar::{is_pictographic, pick_transition, render, RenderedBar, Segment, SegmentKind};
pub use config::{BarConfig, BarConfigBuilder, Defaults, SettingKey};
pub use document::{find_blocks, render_document, Block, RenderedBlock};
pub use error::{Error, Result};
pub use parser::{parse_block, Diagnostic, ParseOutcome};
pub use progress::{BarDisplay, StylePreset};
