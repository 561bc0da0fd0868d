//! `key:value` override lines.

use crate::config::SettingKey;

/// One override line, classified by its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override<'a> {
    /// A key with a defined rendering effect.
    Known { key: SettingKey, value: &'a str },
    /// Any other key; kept but never interpreted.
    Unknown { key: &'a str, value: &'a str },
}

/// Split a line on its first colon.
///
/// The key is trimmed, the value is returned verbatim because whitespace can
/// be a meaningful symbol (`empty: ` draws blank segments). A line without a
/// colon is a key with an empty value.
///
/// ```rust
/// use text_progress::parser::split_setting_line;
///
/// assert_eq!(split_setting_line("prefix:a:b"), ("prefix", "a:b"));
/// assert_eq!(split_setting_line("empty: "), ("empty", " "));
/// assert_eq!(split_setting_line("labelHide"), ("labelHide", ""));
/// ```
pub fn split_setting_line(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key.trim(), value),
        None => (line.trim(), ""),
    }
}

/// Read an override line, or `None` for a blank line.
pub fn parse_override_line(line: &str) -> Option<Override<'_>> {
    if line.trim().is_empty() {
        return None;
    }
    let (key, value) = split_setting_line(line);
    Some(match key.parse::<SettingKey>() {
        Ok(key) => Override::Known { key, value },
        Err(_) => Override::Unknown { key, value },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        assert_eq!(
            parse_override_line("fill:🌑"),
            Some(Override::Known {
                key: SettingKey::Fill,
                value: "🌑"
            })
        );
    }

    #[test]
    fn test_key_is_trimmed_value_is_not() {
        assert_eq!(
            parse_override_line("  suffix : ]"),
            Some(Override::Known {
                key: SettingKey::Suffix,
                value: " ]"
            })
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_override_line("color:red:bold"),
            Some(Override::Unknown {
                key: "color",
                value: "red:bold"
            })
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_override_line("   "), None);
    }
}
