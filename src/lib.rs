//! Concurrent HTTP status checker
//!
//! Checks a batch of URLs in parallel under a shared deadline and reports
//! per-URL status codes, timings and transport errors.

// Core modules
pub mod checker;
pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items for convenience
pub use checker::{CheckReport, check_urls, check_urls_with_progress};
pub use config::{CliConfig, Config};
pub use crate::core::constants;
pub use crate::core::{CheckerError, ProbeError, ProbeOutcome, Result};
pub use discovery::resolve_urls;
pub use validation::{
    CheckContext, Dispatcher, HttpProbe, Probe, Summary, filter_only_errors, has_errors,
};
