//! Settings loader for `~/.config/bananas/config.toml`

use std::path::{Path, PathBuf};

use bananas_core::prelude::*;
use bananas_core::{Catalogs, Selection};

use super::types::{Overrides, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const BANANAS_DIR: &str = "bananas";

/// `<config_dir>/bananas/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(BANANAS_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load settings, apply command-line overrides and validate the result
///
/// An explicit `--config` path that does not exist is an error; the default
/// location is allowed to be missing.
pub fn resolve_settings(explicit: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) if !path.exists() => return Err(Error::config_not_found(path)),
        Some(path) => load_settings(path),
        None => default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default(),
    };

    settings.apply(overrides);
    settings.normalize();
    settings.validate()?;
    Ok(settings)
}

impl Settings {
    /// Overlay command-line values
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(host) = &overrides.host {
            self.target.host = host.clone();
        }
        if let Some(framework) = &overrides.framework {
            self.defaults.framework = Some(framework.clone());
        }
        if let Some(orm) = &overrides.orm {
            self.defaults.orm = Some(orm.clone());
        }
        if let Some(endpoint) = &overrides.endpoint {
            self.defaults.endpoint = Some(endpoint.clone());
        }
    }

    /// Strip whitespace picked up from the file or the command line
    pub fn normalize(&mut self) {
        let host = self.target.host.trim();
        if host.len() != self.target.host.len() {
            self.target.host = host.to_string();
        }
    }

    /// Reject a host that cannot form an `http://host:port/` URL
    pub fn validate(&self) -> Result<()> {
        let host = self.target.host.as_str();
        if host.trim().is_empty() {
            return Err(Error::config_invalid("target.host must not be empty"));
        }

        let parsed = url::Url::parse(&format!("http://{}:8081/", host)).map_err(|e| {
            Error::config_invalid(format!("target.host {:?} is not a valid host: {}", host, e))
        })?;

        match parsed.host_str() {
            Some(h) if h.eq_ignore_ascii_case(host) && host.trim() == host => Ok(()),
            _ => Err(Error::config_invalid(format!(
                "target.host {:?} is not a bare host name",
                host
            ))),
        }
    }

    /// Initial selection: configured identifiers where the catalog knows
    /// them, the first entry of each catalog otherwise
    pub fn initial_selection(&self, catalogs: &'static Catalogs) -> Selection {
        let mut selection = catalogs.default_selection();

        if let Some(value) = &self.defaults.framework {
            match catalogs.frameworks.lookup(value) {
                Some(framework) => selection = selection.with_framework(framework),
                None => warn!("Unknown default framework {:?}, ignoring", value),
            }
        }
        if let Some(value) = &self.defaults.orm {
            match catalogs.orms.lookup(value) {
                Some(orm) => selection = selection.with_orm(orm),
                None => warn!("Unknown default orm {:?}, ignoring", value),
            }
        }
        if let Some(path) = &self.defaults.endpoint {
            match catalogs.endpoints.lookup(path) {
                Some(endpoint) => selection = selection.with_endpoint(endpoint),
                None => warn!("Unknown default endpoint {:?}, ignoring", path),
            }
        }

        selection
    }
}
