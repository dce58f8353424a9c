//! Note form settings.
//!
//! Settings are read from the environment so a host can tweak the form
//! without recompiling. Every value has a default, so an empty environment
//! yields `FormSettings::default()`.

use std::env;

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;
use crate::{Error, Result};

const ENV_NEW_TAG_COLOR: &str = "QUILL_NEW_TAG_COLOR";
const ENV_BODY_ROWS: &str = "QUILL_BODY_ROWS";

/// Placeholder color given to tags built by the form
pub const DEFAULT_NEW_TAG_COLOR: &str = "blue";
/// Visible height of the body field, in rows
pub const DEFAULT_BODY_ROWS: u32 = 15;

/// Display and tagging settings for the note form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormSettings {
    /// Color assigned to newly created and re-synthesized tags
    pub new_tag_color: String,
    /// Number of visible rows in the body field
    pub body_rows: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            new_tag_color: DEFAULT_NEW_TAG_COLOR.to_string(),
            body_rows: DEFAULT_BODY_ROWS,
        }
    }
}

impl FormSettings {
    /// Load settings from environment variables.
    ///
    /// Unset or blank variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        parse_settings(|key| env::var(key).ok())
    }
}

fn parse_settings(lookup: impl Fn(&str) -> Option<String>) -> Result<FormSettings> {
    let mut settings = FormSettings::default();

    if let Some(color) = normalize_text_option(lookup(ENV_NEW_TAG_COLOR)) {
        settings.new_tag_color = color;
    }

    if let Some(rows) = normalize_text_option(lookup(ENV_BODY_ROWS)) {
        settings.body_rows = match rows.parse::<u32>() {
            Ok(rows) if rows > 0 => rows,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "{ENV_BODY_ROWS} must be a positive integer, got {rows:?}"
                )));
            }
        };
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_from_map(map: &HashMap<&str, &str>) -> Result<FormSettings> {
        parse_settings(|key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let settings = parse_from_map(&HashMap::new()).unwrap();
        assert_eq!(settings, FormSettings::default());
        assert_eq!(settings.new_tag_color, "blue");
        assert_eq!(settings.body_rows, 15);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let mut map = HashMap::new();
        map.insert(ENV_NEW_TAG_COLOR, "   ");
        map.insert(ENV_BODY_ROWS, "");
        assert_eq!(parse_from_map(&map).unwrap(), FormSettings::default());
    }

    #[test]
    fn reads_trimmed_overrides() {
        let mut map = HashMap::new();
        map.insert(ENV_NEW_TAG_COLOR, " teal ");
        map.insert(ENV_BODY_ROWS, "20");
        let settings = parse_from_map(&map).unwrap();
        assert_eq!(
            settings,
            FormSettings {
                new_tag_color: "teal".to_string(),
                body_rows: 20,
            }
        );
    }

    #[test]
    fn rejects_invalid_body_rows() {
        for raw in ["abc", "0", "-3"] {
            let mut map = HashMap::new();
            map.insert(ENV_BODY_ROWS, raw);
            match parse_from_map(&map).unwrap_err() {
                Error::InvalidInput(message) => assert!(message.contains(ENV_BODY_ROWS)),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: FormSettings = serde_json::from_str(r#"{"body_rows": 8}"#).unwrap();
        assert_eq!(settings.body_rows, 8);
        assert_eq!(settings.new_tag_color, DEFAULT_NEW_TAG_COLOR);
    }
}
