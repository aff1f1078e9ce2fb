//! Command-line arguments

use std::path::PathBuf;

use bananas_app::config::Overrides;
use clap::Parser;

/// Bananas - manual benchmarking client for the Go framework servers
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bananas")]
#[command(about = "Run ad-hoc requests against the Bananas framework servers", long_about = None)]
pub struct Args {
    /// Run in headless mode (NDJSON on stdout, commands on stdin)
    #[arg(long)]
    pub headless: bool,

    /// Run a single test with the configured selection, print it and exit
    #[arg(long)]
    pub once: bool,

    /// Config file (default: ~/.config/bananas/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host the framework servers listen on
    #[arg(long)]
    pub host: Option<String>,

    /// Initial framework identifier (standard, gin, fiber, echo, chi, gorilla)
    #[arg(long)]
    pub framework: Option<String>,

    /// Initial ORM identifier (sql, gorm, sqlx, pgx)
    #[arg(long)]
    pub orm: Option<String>,

    /// Initial endpoint path, e.g. /api/test/json
    #[arg(long, value_name = "PATH")]
    pub endpoint: Option<String>,
}

impl Args {
    /// Values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            framework: self.framework.clone(),
            orm: self.orm.clone(),
            endpoint: self.endpoint.clone(),
        }
    }

    /// Whether stdout carries NDJSON rather than the TUI
    pub fn is_headless(&self) -> bool {
        self.headless || self.once
    }
}
