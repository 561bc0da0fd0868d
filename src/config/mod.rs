//! Bar configuration: defaults, overrides and the resolved [`BarConfig`].
//!
//! A progress block is resolved in three layers. The host supplies
//! [`Defaults`] (usually loaded through [`crate::settings`]), the block's
//! override lines are applied on top of them, and finally the label/ratio
//! line fills in the values that are specific to one bar. The result is an
//! immutable [`BarConfig`] whose derived values (segment count, transition
//! sequence) are computed exactly once, in [`BarConfigBuilder::build`].
//!
//! # Examples
//!
//! ## Building a configuration directly
//!
//! ```rust
//! use text_progress::config::BarConfig;
//!
//! let config = BarConfig::builder("Books read", 5.0, 10.0)
//!     .fill("#")
//!     .empty("-")
//!     .transition(["~"])
//!     .build();
//!
//! // No explicit length, so one segment per whole unit of the total.
//! assert_eq!(config.length(), 10);
//! ```
//!
//! ## Starting from persisted defaults
//!
//! ```rust
//! use text_progress::config::{BarConfigBuilder, Defaults};
//!
//! let defaults = Defaults {
//!     length: 20,
//!     ..Defaults::default()
//! };
//! let config = BarConfigBuilder::with_defaults(&defaults)
//!     .label("Pages")
//!     .ratio(120.0, 300.0)
//!     .build();
//! assert_eq!(config.length(), 20);
//! assert_eq!(config.fill(), "🌕");
//! ```

pub(crate) mod bar_config;
pub(crate) mod builder;
pub(crate) mod defaults;
pub(crate) mod key;

pub use bar_config::BarConfig;
pub use builder::{BarConfigBuilder, MAX_SEGMENTS};
pub use defaults::Defaults;
pub use key::{SettingKey, UnknownKey};
