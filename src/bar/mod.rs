//! The progress bar engine.
//!
//! Turns a resolved [`BarConfig`](crate::config::BarConfig) into an ordered
//! list of [`Segment`]s. Rendering is a pure function of the configuration:
//! no presentation API is touched here, mapping segments to text, markup or
//! terminal output is left to the caller (see [`crate::progress`] for the
//! bundled text renderer).
//!
//! # Examples
//!
//! ```rust
//! use text_progress::bar::{render, SegmentKind};
//! use text_progress::config::BarConfig;
//!
//! let config = BarConfig::builder("Books read", 2.5, 5.0)
//!     .fill("#")
//!     .empty("-")
//!     .transition(["~"])
//!     .build();
//! let bar = render(&config);
//!
//! let kinds: Vec<_> = bar.segments().iter().map(|s| s.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         SegmentKind::Filled,
//!         SegmentKind::Filled,
//!         SegmentKind::Transition,
//!         SegmentKind::Empty,
//!         SegmentKind::Empty,
//!     ]
//! );
//! assert_eq!(bar.to_string(), "Books read ##~--");
//! ```
//!
//! # Undefined ratios
//!
//! A total of zero makes the ratio undefined. The percentage is then reported
//! as `NaN` ([`RenderedBar::percent`] returns `None`) and every segment is
//! rendered [`Segment::Empty`]. The same fallback applies to any ratio whose
//! scaled position is not finite.

pub(crate) mod engine;
pub(crate) mod pictograph;
pub(crate) mod segment;

pub use engine::{pick_transition, render, RenderedBar};
pub use pictograph::is_pictographic;
pub use segment::{Segment, SegmentKind};
