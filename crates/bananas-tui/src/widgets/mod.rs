//! Custom widget components

mod header;
mod results_panel;
mod run_button;
mod selector;
mod status_bar;

pub use header::{MainHeader, TITLE};
pub use results_panel::{ResultsPanel, ResultsView, PLACEHOLDER};
pub use run_button::{RunButton, RUNNING_LABEL, RUN_LABEL};
pub use selector::SelectorPanel;
pub use status_bar::StatusBar;
