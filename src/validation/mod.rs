//! URL checking engine
//!
//! This module issues the HTTP probes, fans them out concurrently
//! under a shared deadline, and filters and aggregates the outcomes.

pub mod context;
pub mod dispatcher;
pub mod filter;
pub mod probe;

// Re-export commonly used items
pub use context::{CancelReason, CheckContext};
pub use dispatcher::Dispatcher;
pub use filter::{Summary, apply_filter, filter_only_errors, has_errors};
pub use probe::{HttpProbe, Probe, build_client};
