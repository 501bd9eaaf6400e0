use serde::{Deserialize, Serialize};
use crate::errors::Result;

/// Settings every flattener starts from.
pub const DEFAULT_SETTINGS: Settings<'static> = Settings {
    separator: ":",
    delimiter: " ",
    format: true,
};

/// Partial flattener configuration.
///
/// Unset fields fall through to the next layer when merged: per-call config
/// over the config baked in by [`configure`](crate::configure), over
/// [`DEFAULT_SETTINGS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Placed between the breakpoint and each class, `md` + `:` + `px-2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Splits a breakpoint's class string into individual classes.
    /// An empty delimiter splits into single characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    /// Collapse whitespace in the base string and in each class string before
    /// splitting it, dropping empty classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<bool>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = Some(format);
        self
    }

    /// Parse a partial configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve against [`DEFAULT_SETTINGS`].
    pub fn resolve(&self) -> Settings<'_> {
        DEFAULT_SETTINGS.overlay(self)
    }
}

/// Fully resolved configuration, borrowed from the layers it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings<'a> {
    pub separator: &'a str,
    pub delimiter: &'a str,
    pub format: bool,
}

impl<'a> Settings<'a> {
    /// Apply the set fields of `config` on top of these settings.
    pub fn overlay(self, config: &'a Config) -> Settings<'a> {
        Settings {
            separator: config.separator.as_deref().unwrap_or(self.separator),
            delimiter: config.delimiter.as_deref().unwrap_or(self.delimiter),
            format: config.format.unwrap_or(self.format),
        }
    }
}

impl Default for Settings<'static> {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TwclsxError;

    #[test]
    fn test_default_config_resolves_to_defaults() {
        let config = Config::default();
        let settings = config.resolve();
        assert_eq!(settings.separator, ":");
        assert_eq!(settings.delimiter, " ");
        assert!(settings.format);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::new().with_separator("::");
        let settings = config.resolve();
        assert_eq!(settings.separator, "::");
        assert_eq!(settings.delimiter, " ");
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        let config = Config::new().with_separator("").with_delimiter("");
        let settings = config.resolve();
        assert_eq!(settings.separator, "");
        assert_eq!(settings.delimiter, "");
    }

    #[test]
    fn test_overlay_layers() {
        let baked = Config::new().with_separator("|").with_delimiter(",");
        let per_call = Config::new().with_separator("_");

        let settings = baked.resolve().overlay(&per_call);
        assert_eq!(settings.separator, "_");
        assert_eq!(settings.delimiter, ",");
        assert!(settings.format);

        let raw = Config::new().with_format(false);
        let settings = settings.overlay(&raw);
        assert_eq!(settings.separator, "_");
        assert!(!settings.format);
    }

    #[test]
    fn test_json_config_loading() {
        let config = Config::from_json_str(r#"{ "separator": "::", "format": false }"#).unwrap();
        assert_eq!(config.separator.as_deref(), Some("::"));
        assert_eq!(config.delimiter, None);
        assert_eq!(config.format, Some(false));

        let empty = Config::from_json_str("{}").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_json_config_rejects_unknown_fields() {
        let result = Config::from_json_str(r#"{ "seperator": "::" }"#);
        assert!(matches!(result, Err(TwclsxError::Json(_))));
    }

    #[test]
    fn test_json_config_serialization_skips_unset_fields() {
        let json = serde_json::to_string(&Config::new().with_delimiter("|")).unwrap();
        assert_eq!(json, r#"{"delimiter":"|"}"#);
    }
}
