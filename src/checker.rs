//! End-to-end check of a configured URL batch

use std::time::Duration;
use tokio::time::Instant;

use crate::config::Config;
use crate::core::{ProbeOutcome, Result};
use crate::discovery::resolve_urls;
use crate::reporting::logging;
use crate::ui::ProgressReporter;
use crate::validation::{Dispatcher, HttpProbe, Summary, apply_filter, has_errors};

/// Everything a caller needs to render results and pick an exit code.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Outcomes to show, in input order (only errors when filtering)
    pub results: Vec<ProbeOutcome>,
    /// Counts over the shown outcomes
    pub summary: Summary,
    /// Whether any checked URL failed or returned 4xx/5xx, before filtering
    pub has_errors: bool,
    /// Wall time of the whole batch
    pub elapsed: Duration,
}

impl CheckReport {
    pub fn new(results: Vec<ProbeOutcome>, only_errors: bool, elapsed: Duration) -> Self {
        let has_errors = has_errors(&results);
        let results = apply_filter(results, only_errors);
        Self {
            summary: Summary::from_results(&results),
            results,
            has_errors,
            elapsed,
        }
    }

    /// Conventional process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_errors)
    }
}

/// Resolve, check and filter the URLs described by `config`.
///
/// Configuration and I/O errors are returned before any request is sent.
/// Per-URL failures never surface here; they are inside the report.
pub async fn check_urls(config: &Config) -> Result<CheckReport> {
    check_urls_with_progress(config, None).await
}

pub async fn check_urls_with_progress(
    config: &Config,
    progress: Option<&mut ProgressReporter>,
) -> Result<CheckReport> {
    config.validate()?;
    let urls = resolve_urls(config)?;
    logging::log_url_source(config, urls.len());

    let dispatcher = Dispatcher::new(HttpProbe::from_config(config)?);
    let start = Instant::now();
    let results = dispatcher
        .check_with_timeout(&urls, config.timeout_duration(), progress)
        .await;

    let report = CheckReport::new(results, config.only_errors(), start.elapsed());
    logging::log_check_complete(&report.summary, report.elapsed.as_millis());
    Ok(report)
}
