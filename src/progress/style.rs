//! Ready-made symbol sets.
//!
//! Each preset is a set of [`Defaults`] with matching fill, transition and
//! empty symbols. Transition symbols are listed from the least to the most
//! filled.
//!
//! # Examples
//!
//! ```rust
//! use text_progress::progress::StylePreset;
//!
//! let defaults = StylePreset::FADE_IN.to_defaults();
//! assert_eq!(defaults.fill, "█");
//! assert_eq!(defaults.transition, vec!["░", "▒", "▓"]);
//! ```
//!
//! ## Looking a preset up by name
//!
//! ```rust
//! use text_progress::progress::StylePreset;
//!
//! let preset = StylePreset::by_name("line").unwrap();
//! assert_eq!(preset.fill, "━");
//! ```

use crate::config::Defaults;

/// A named symbol set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    /// Name used by [`StylePreset::by_name`].
    pub name: &'static str,
    /// Symbol of a filled segment.
    pub fill: &'static str,
    /// Boundary symbols, least filled first.
    pub transition: &'static [&'static str],
    /// Symbol of an empty segment.
    pub empty: &'static str,
}

impl Default for StylePreset {
    fn default() -> Self {
        StylePreset::MOON
    }
}

impl StylePreset {
    /// Moon phases: `🌕🌕🌓🌑🌑`. The built-in default.
    pub const MOON: StylePreset = StylePreset {
        name: "moon",
        fill: "🌕",
        transition: &["🌒", "🌓", "🌔"],
        empty: "🌑",
    };
    /// Increasing quarter blocks: `██▌  `.
    pub const BLOCKY: StylePreset = StylePreset {
        name: "blocky",
        fill: "█",
        transition: &["▖", "▌", "▛"],
        empty: " ",
    };
    /// Fade-in blocks: `██▒░░`.
    pub const FADE_IN: StylePreset = StylePreset {
        name: "fade-in",
        fill: "█",
        transition: &["░", "▒", "▓"],
        empty: "░",
    };
    /// Fine blocks: `██▌  `.
    pub const FINE: StylePreset = StylePreset {
        name: "fine",
        fill: "█",
        transition: &["▏", "▎", "▍", "▌", "▋", "▊", "▉"],
        empty: " ",
    };
    /// A line: `━━╾──`.
    pub const LINE: StylePreset = StylePreset {
        name: "line",
        fill: "━",
        transition: &["╴", "╾"],
        empty: "─",
    };
    /// Rough blocks: `██   `.
    pub const ROUGH: StylePreset = StylePreset {
        name: "rough",
        fill: "█",
        transition: &[" "],
        empty: " ",
    };
    /// Increasing height blocks: `██▅  `.
    pub const VERTICAL: StylePreset = StylePreset {
        name: "vertical",
        fill: "█",
        transition: &["▂", "▃", "▄", "▅", "▆", "▇"],
        empty: " ",
    };
    /// Plain ASCII: `##=--`.
    pub const ASCII: StylePreset = StylePreset {
        name: "ascii",
        fill: "#",
        transition: &["=", "="],
        empty: "-",
    };

    /// Every preset, default first.
    pub const ALL: [StylePreset; 8] = [
        StylePreset::MOON,
        StylePreset::BLOCKY,
        StylePreset::FADE_IN,
        StylePreset::FINE,
        StylePreset::LINE,
        StylePreset::ROUGH,
        StylePreset::VERTICAL,
        StylePreset::ASCII,
    ];

    /// Find a preset by its name.
    pub fn by_name(name: &str) -> Option<StylePreset> {
        StylePreset::ALL
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    /// Build [`Defaults`] that use this preset's symbols.
    pub fn to_defaults(self) -> Defaults {
        self.apply_to(Defaults::default())
    }

    /// Replace the symbols of `defaults`, keeping length, prefix, suffix and
    /// label visibility.
    pub fn apply_to(self, defaults: Defaults) -> Defaults {
        Defaults {
            fill: self.fill.into(),
            empty: self.empty.into(),
            transition: self.transition.iter().map(|s| s.to_string()).collect(),
            ..defaults
        }
    }
}
