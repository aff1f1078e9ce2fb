//! Bananas framework tester
//!
//! Manual benchmarking client for the Bananas Go framework servers. Pick a
//! framework, an ORM and an endpoint, fire one request, inspect the timing
//! and the decoded response. Runs as a TUI or, with `--headless`, as an
//! NDJSON stream driven by stdin.

pub mod cli;
pub mod headless;

use bananas_app::config::resolve_settings;
use bananas_core::logging;
use bananas_core::prelude::*;

pub use cli::Args;
pub use headless::{run_headless, run_once};

/// Main application entry point
///
/// Returns `Ok(false)` when a `--once` run completed with an error result.
pub async fn run(args: Args) -> Result<bool> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file: stdout belongs to the TUI or the NDJSON stream
    logging::init()?;

    let settings = match resolve_settings(args.config.as_deref(), &args.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            if args.is_headless() {
                headless::HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            return Err(e);
        }
    };
    info!("Target host: {}", settings.target.host);

    let result = if args.once {
        run_once(settings).await
    } else if args.headless {
        run_headless(settings).await.map(|()| true)
    } else {
        bananas_tui::run(settings).await.map(|()| true)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Bananas tester exiting");
    result
}
