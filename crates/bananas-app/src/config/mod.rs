//! Configuration file parsing
//!
//! Supports `~/.config/bananas/config.toml` (or an explicit `--config` path)
//! with a `[target]` host and `[defaults]` selection identifiers.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, resolve_settings};
pub use types::*;
