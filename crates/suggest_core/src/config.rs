//! Autocomplete configuration
//!
//! Behaviour switches that a host would otherwise pass as props. Can be
//! built in code, through [`AutocompleteBuilder`](crate::AutocompleteBuilder)
//! setters, or loaded from TOML:
//!
//! ```toml
//! auto_highlight = true
//! select_on_blur = false
//! debug = true
//! debug_history = 5
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AutocompleteError, Result};

/// Number of debug snapshots retained by default
pub const DEFAULT_DEBUG_HISTORY: usize = 5;

/// Autocomplete behaviour configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Highlight the first selectable item whose display value starts with
    /// the query whenever the query or the item set changes
    pub auto_highlight: bool,
    /// Commit the highlighted item when the input genuinely loses focus
    pub select_on_blur: bool,
    /// Host-managed menu visibility; `None` lets the widget decide
    pub open: Option<bool>,
    /// Retain state snapshots for inspection
    pub debug: bool,
    /// How many snapshots to keep when `debug` is on
    pub debug_history: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            auto_highlight: true,
            select_on_blur: false,
            open: None,
            debug: false,
            debug_history: DEFAULT_DEBUG_HISTORY,
        }
    }
}

impl AutocompleteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.debug_history == 0 {
            return Err(AutocompleteError::InvalidConfig(
                "debug_history must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AutocompleteConfig::default();
        assert!(config.auto_highlight);
        assert!(!config.select_on_blur);
        assert_eq!(config.open, None);
        assert!(!config.debug);
        assert_eq!(config.debug_history, 5);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AutocompleteConfig::from_toml_str("select_on_blur = true\nopen = false\n")
            .expect("valid config");
        assert!(config.select_on_blur);
        assert_eq!(config.open, Some(false));
        // Unspecified fields keep their defaults
        assert!(config.auto_highlight);
    }

    #[test]
    fn test_from_toml_rejects_empty_history() {
        let err = AutocompleteConfig::from_toml_str("debug_history = 0").unwrap_err();
        assert!(matches!(err, AutocompleteError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = AutocompleteConfig::from_toml_str("auto_highlight = \"yes\"").unwrap_err();
        assert!(matches!(err, AutocompleteError::ConfigParse(_)));
    }
}
