//! Terminal setup and restoration

use bananas_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen.
///
/// The panic hook is installed first so a panic anywhere after this point
/// leaves the operator's shell usable.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen; failures are logged, not returned
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::try_restore();
        original_hook(panic_info);
    }));
}
