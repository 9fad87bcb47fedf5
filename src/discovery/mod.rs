//! URL discovery
//!
//! This module resolves the list of URLs to check from either a
//! single configured URL or a line-oriented URL file.

pub mod source;

// Re-export commonly used items
pub use source::{parse_url_list, resolve_urls};
