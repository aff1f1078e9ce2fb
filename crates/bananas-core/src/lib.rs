//! # bananas-core - Core Domain Types
//!
//! Foundation crate for the Bananas framework tester. Provides the selection
//! catalogs, domain types, request construction, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Framework`] - A backend implementation under test, reachable on a fixed port
//! - [`Orm`] - A data-access strategy understood by the database probe
//! - [`Endpoint`] - An HTTP probe path exposed by every framework
//! - [`Selection`] - The (framework, orm, endpoint) triple driving the next run
//! - [`TestResult`] - Immutable outcome of a single run
//!
//! ### Registry (`registry`)
//! - [`Catalogs`] - The three fixed catalogs, see [`catalogs()`]
//! - [`Registry`] - Ordered catalog with identifier lookup
//!
//! ### Requests (`request`)
//! - [`ProbeRequest`] - URL plus the labels captured when a run starts
//! - [`build_url()`] - Compose the probe URL for a selection
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bananas_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod registry;
pub mod request;
pub mod types;

/// Prelude for common imports used throughout all Bananas crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use registry::{
    catalogs, CatalogEntry, Catalogs, Registry, ENDPOINTS, FRAMEWORKS, ORMS,
};
pub use request::{build_url, ProbeRequest, DEFAULT_HOST};
pub use types::{Endpoint, Framework, Orm, Selection, TestResult, UNKNOWN_ERROR};
