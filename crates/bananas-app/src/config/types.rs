//! Configuration types
//!
//! Defines:
//! - `Settings` - contents of `config.toml`
//! - `TargetSettings` - where the frameworks run
//! - `DefaultSelection` - initial selection identifiers
//! - `Overrides` - values supplied on the command line

use serde::{Deserialize, Serialize};

use bananas_core::DEFAULT_HOST;

/// Settings from `config.toml`; every section is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub target: TargetSettings,

    #[serde(default)]
    pub defaults: DefaultSelection,
}

/// `[target]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetSettings {
    /// Host the framework servers listen on
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

/// `[defaults]` section: identifiers, not display names
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultSelection {
    #[serde(default)]
    pub framework: Option<String>,

    #[serde(default)]
    pub orm: Option<String>,

    /// Endpoint path, e.g. `/api/test/json`
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub host: Option<String>,
    pub framework: Option<String>,
    pub orm: Option<String>,
    pub endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.target.host, "localhost");
        assert!(settings.defaults.framework.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let settings: Settings = toml::from_str(
            r#"
[defaults]
orm = "pgx"
"#,
        )
        .unwrap();
        assert_eq!(settings.target.host, "localhost");
        assert_eq!(settings.defaults.orm.as_deref(), Some("pgx"));
        assert!(settings.defaults.endpoint.is_none());
    }

    #[test]
    fn test_empty_target_table_keeps_default_host() {
        let settings: Settings = toml::from_str("[target]\n").unwrap();
        assert_eq!(settings.target.host, "localhost");
    }
}
