//! Persisted default settings.
//!
//! Defaults are stored as a plain `key:value` file, one setting per line,
//! using the same keys as a block's override lines:
//!
//! ```text
//! transition:🌒,🌓,🌔
//! fill:🌕
//! empty:🌑
//! prefix:
//! suffix:
//! length:0
//! labelHide:false
//! ```
//!
//! Missing keys keep their built-in value, so a settings file only needs the
//! lines it changes.
//!
//! # Examples
//!
//! ```rust
//! use text_progress::settings::parse_settings;
//!
//! let defaults = parse_settings("fill:#\nempty:-\nlength:12");
//! assert_eq!(defaults.fill, "#");
//! assert_eq!(defaults.length, 12);
//! assert_eq!(defaults.transition, vec!["🌒", "🌓", "🌔"]);
//! ```

use crate::config::{Defaults, SettingKey};
use crate::error::{Error, Result};
use crate::parser::split_setting_line;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read settings text, merging it over [`Defaults::default`].
///
/// Unknown keys and invalid lengths are skipped with a warning.
pub fn parse_settings(text: &str) -> Defaults {
    let mut defaults = Defaults::default();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = split_setting_line(line);
        match key.parse::<SettingKey>() {
            Ok(key) => {
                if let Err(err) = defaults.apply(key, value) {
                    warn!("Ignoring setting {}={:?}: {}", key, value, err);
                }
            }
            Err(err) => warn!("Ignoring setting: {}", err),
        }
    }
    defaults
}

/// Load settings from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Defaults> {
    let path = path.as_ref();
    debug!("Loading settings from {:?}", path);
    let text = fs::read_to_string(path)?;
    Ok(parse_settings(&text))
}

/// Render settings in the file format read by [`parse_settings`].
///
/// Fails if a value contains a line break, which the format cannot hold.
pub fn to_settings_string(defaults: &Defaults) -> Result<String> {
    let mut text = String::new();
    for key in SettingKey::ALL {
        let value = defaults.value_of(key);
        if value.contains(['\n', '\r']) {
            return Err(Error::InvalidSetting {
                key: key.to_string(),
                reason: "values cannot span multiple lines".into(),
            });
        }
        text.push_str(key.as_str());
        text.push(':');
        text.push_str(&value);
        text.push('\n');
    }
    Ok(text)
}

/// Save settings to a file, replacing it.
pub fn save(defaults: &Defaults, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = to_settings_string(defaults)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating settings directory {:?}", parent);
        fs::create_dir_all(parent)?;
    }
    debug!("Saving settings to {:?}", path);
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_invalid_lines_are_skipped() {
        let defaults = parse_settings("color:red\nlength:wide\nfill:*\n\n");
        assert_eq!(defaults.fill, "*");
        assert_eq!(defaults.length, 0);
    }

    #[test]
    fn test_legacy_open_close_keys() {
        let defaults = parse_settings("open:[\nclose:]");
        assert_eq!(defaults.prefix, "[");
        assert_eq!(defaults.suffix, "]");
    }

    #[test]
    fn test_multiline_value_is_rejected() {
        let defaults = Defaults {
            suffix: "a\nb".into(),
            ..Defaults::default()
        };
        let err = to_settings_string(&defaults).unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { ref key, .. } if key == "suffix"));
    }

    #[test]
    fn test_written_text_reads_back() {
        let defaults = Defaults {
            empty: " ".into(),
            label_hide: true,
            ..Defaults::default()
        };
        let text = to_settings_string(&defaults).unwrap();
        assert_eq!(parse_settings(&text), defaults);
    }
}
