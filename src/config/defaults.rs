//! Default bar settings supplied by the host environment.

use super::key::SettingKey;
use std::num::ParseIntError;

/// Settings every bar starts from before its own override lines apply.
///
/// The default value is the moon-phase style: `🌕` for filled segments,
/// `🌑` for empty ones and `🌒,🌓,🌔` for the boundary segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Boundary symbols ordered from "just started" to "nearly full".
    pub transition: Vec<String>,
    /// Symbol of a filled segment.
    pub fill: String,
    /// Symbol of an empty segment.
    pub empty: String,
    /// Literal text before the segments.
    pub prefix: String,
    /// Literal text after the segments.
    pub suffix: String,
    /// Number of segments, `0` to use one segment per unit of the total.
    pub length: usize,
    /// Hide the label.
    pub label_hide: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            transition: split_transition("🌒,🌓,🌔"),
            fill: "🌕".into(),
            empty: "🌑".into(),
            prefix: String::new(),
            suffix: String::new(),
            length: 0,
            label_hide: false,
        }
    }
}

impl Defaults {
    /// Apply one raw `key:value` pair.
    ///
    /// Only [`SettingKey::Length`] can reject its value; on error the
    /// settings are left untouched and the caller decides the fallback.
    pub fn apply(&mut self, key: SettingKey, value: &str) -> Result<(), ParseIntError> {
        match key {
            SettingKey::Transition => self.transition = split_transition(value),
            SettingKey::Fill => self.fill = value.to_string(),
            SettingKey::Empty => self.empty = value.to_string(),
            SettingKey::Prefix => self.prefix = value.to_string(),
            SettingKey::Suffix => self.suffix = value.to_string(),
            SettingKey::Length => self.length = parse_length(value)?,
            SettingKey::LabelHide => self.label_hide = parse_flag(value),
        }
        Ok(())
    }

    /// The raw value of `key`, in the form [`Defaults::apply`] accepts.
    pub fn value_of(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Transition => self.transition.join(","),
            SettingKey::Fill => self.fill.clone(),
            SettingKey::Empty => self.empty.clone(),
            SettingKey::Prefix => self.prefix.clone(),
            SettingKey::Suffix => self.suffix.clone(),
            SettingKey::Length => self.length.to_string(),
            SettingKey::LabelHide => self.label_hide.to_string(),
        }
    }
}

pub(crate) fn split_transition(value: &str) -> Vec<String> {
    value.split(',').map(String::from).collect()
}

/// Non-positive lengths mean "unset".
pub(crate) fn parse_length(value: &str) -> Result<usize, ParseIntError> {
    let length = value.trim().parse::<i64>()?;
    Ok(usize::try_from(length.max(0)).unwrap_or(usize::MAX))
}

pub(crate) fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_moon_phases() {
        let defaults = Defaults::default();
        assert_eq!(defaults.fill, "🌕");
        assert_eq!(defaults.empty, "🌑");
        assert_eq!(defaults.transition, vec!["🌒", "🌓", "🌔"]);
        assert_eq!(defaults.length, 0);
        assert!(!defaults.label_hide);
    }

    #[test]
    fn test_apply_length() {
        let mut defaults = Defaults::default();
        defaults.apply(SettingKey::Length, " 12 ").unwrap();
        assert_eq!(defaults.length, 12);

        defaults.apply(SettingKey::Length, "-4").unwrap();
        assert_eq!(defaults.length, 0);

        assert!(defaults.apply(SettingKey::Length, "ten").is_err());
        assert_eq!(defaults.length, 0);
    }

    #[test]
    fn test_apply_label_hide_is_case_insensitive() {
        let mut defaults = Defaults::default();
        defaults.apply(SettingKey::LabelHide, "TRUE").unwrap();
        assert!(defaults.label_hide);
        defaults.apply(SettingKey::LabelHide, "yes").unwrap();
        assert!(!defaults.label_hide);
    }

    #[test]
    fn test_value_of_inverts_apply() {
        let defaults = Defaults {
            transition: vec!["a".into(), "b".into()],
            length: 7,
            label_hide: true,
            ..Defaults::default()
        };
        let mut copy = Defaults::default();
        for key in SettingKey::ALL {
            copy.apply(key, &defaults.value_of(key)).unwrap();
        }
        assert_eq!(copy, defaults);
    }
}
