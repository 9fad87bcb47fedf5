use crate::config::Config;
use crate::core::ProbeOutcome;
use crate::validation::Summary;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: timeout={}s, request_timeout={}s, only_errors={}",
        config.timeout_duration().as_secs(),
        config.request_timeout_duration().as_secs(),
        config.only_errors()
    );
    info!(
        "HTTP: user_agent={}, format={}",
        config.user_agent(),
        config.output_format()
    );
}

/// Log where the URL list came from
pub fn log_url_source(config: &Config, url_count: usize) {
    match (config.single_url(), config.file_path()) {
        (Some(url), _) => info!("Checking single URL {url}"),
        (None, Some(path)) => info!("Loaded {url_count} URL(s) from {path}"),
        (None, None) => warn!("No URL source configured"),
    }
}

/// Log dispatch start
pub fn log_dispatch_start(url_count: usize) {
    info!("Dispatching {url_count} concurrent probe(s)");
}

/// Log a single probe outcome for debugging
pub fn log_outcome(outcome: &ProbeOutcome) {
    let millis = outcome.duration.as_millis();
    match &outcome.error {
        Some(err) if err.is_cancellation() => {
            debug!("⏱ {} -> {err} ({millis}ms)", outcome.url)
        }
        Some(err) => debug!("✗ {} -> {err} ({millis}ms)", outcome.url),
        None if outcome.has_error() => {
            debug!("✗ {} -> {} ({millis}ms)", outcome.url, outcome.status_code)
        }
        None => debug!("✓ {} -> {} ({millis}ms)", outcome.url, outcome.status_code),
    }
}

/// Log batch completion
pub fn log_check_complete(summary: &Summary, duration_ms: u128) {
    if summary.all_successful() {
        info!(
            "✅ Check complete: {}/{} URLs successful ({}ms)",
            summary.successful, summary.total, duration_ms
        );
    } else {
        warn!(
            "❌ Check complete: {}/{} URLs successful, {} errors ({}ms)",
            summary.successful, summary.total, summary.errors, duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
