//! The closed set of setting keys understood by overrides and settings files.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A recognized setting key.
///
/// Keys are matched exactly as written in a block (`labelHide`, not
/// `label_hide`). The legacy names `open` and `close` are accepted as aliases
/// for [`SettingKey::Prefix`] and [`SettingKey::Suffix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    /// Comma separated symbols for the boundary segment.
    Transition,
    /// Symbol of a filled segment.
    Fill,
    /// Symbol of an empty segment.
    Empty,
    /// Literal text before the segments.
    Prefix,
    /// Literal text after the segments.
    Suffix,
    /// Number of segments; zero or less means "one per unit of the total".
    Length,
    /// Hide the label when `true` (case-insensitive).
    LabelHide,
}

/// Returned by [`SettingKey::from_str`] for keys outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown setting key `{0}`")]
pub struct UnknownKey(pub String);

impl SettingKey {
    /// Every key, in the order settings files are written.
    pub const ALL: [SettingKey; 7] = [
        SettingKey::Transition,
        SettingKey::Fill,
        SettingKey::Empty,
        SettingKey::Prefix,
        SettingKey::Suffix,
        SettingKey::Length,
        SettingKey::LabelHide,
    ];

    /// The canonical spelling of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Transition => "transition",
            SettingKey::Fill => "fill",
            SettingKey::Empty => "empty",
            SettingKey::Prefix => "prefix",
            SettingKey::Suffix => "suffix",
            SettingKey::Length => "length",
            SettingKey::LabelHide => "labelHide",
        }
    }
}

impl FromStr for SettingKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transition" => Ok(SettingKey::Transition),
            "fill" => Ok(SettingKey::Fill),
            "empty" => Ok(SettingKey::Empty),
            "prefix" | "open" => Ok(SettingKey::Prefix),
            "suffix" | "close" => Ok(SettingKey::Suffix),
            "length" => Ok(SettingKey::Length),
            "labelHide" => Ok(SettingKey::LabelHide),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_their_spelling() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!("open".parse::<SettingKey>(), Ok(SettingKey::Prefix));
        assert_eq!("close".parse::<SettingKey>(), Ok(SettingKey::Suffix));
    }

    #[test]
    fn test_unknown_key_is_case_sensitive() {
        assert_eq!(
            "Fill".parse::<SettingKey>(),
            Err(UnknownKey("Fill".to_string()))
        );
        assert!("labelhide".parse::<SettingKey>().is_err());
    }
}
