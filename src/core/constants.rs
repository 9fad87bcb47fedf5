/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, emoji-enhanced output with statistics
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one plain line per URL
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP status code boundaries used for classification
pub mod http_status {
    /// Lowest valid status code (1xx)
    pub const LOWER_BOUND: u16 = 100;
    /// HTTP 200 OK
    pub const OK: u16 = 200;
    /// First redirect status
    pub const REDIRECT_START: u16 = 300;
    /// First status that counts as an error (4xx and 5xx)
    pub const ERROR_THRESHOLD: u16 = 400;
    /// HTTP 404 Not Found
    pub const NOT_FOUND: u16 = 404;
    /// First server error status
    pub const SERVER_ERROR_START: u16 = 500;
    /// Upper bound (exclusive) of valid status codes
    pub const UPPER_BOUND: u16 = 600;
    /// Placeholder status for requests that never completed
    pub const NONE: u16 = 0;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default batch deadline in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Default per-request client timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
    /// Timeouts above this are rejected (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Idle pooled connections are closed after this many seconds
    pub const POOL_IDLE_TIMEOUT_SECONDS: u64 = 30;
    /// TCP keepalive interval in seconds
    pub const TCP_KEEPALIVE_SECONDS: u64 = 60;
}

/// HTTP client constants
pub mod client {
    /// Maximum redirects followed by the shared client (reqwest's default)
    pub const MAX_REDIRECTS: usize = 10;
    /// Default User-Agent header
    pub const DEFAULT_USER_AGENT: &str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Input file constants
pub mod files {
    /// Lines starting with this marker (after trimming) are comments
    pub const COMMENT_PREFIX: char = '#';
    /// Config file looked up in the working directory
    pub const DEFAULT_CONFIG_FILE: &str = ".http-status-checker.toml";
}

/// Error message constants
pub mod error_messages {
    /// Neither a single URL nor a file was configured
    pub const NO_URLS_PROVIDED: &str = "no URLs provided";
    /// Batch deadline elapsed before the request completed
    pub const DEADLINE_EXCEEDED: &str = "context deadline exceeded";
    /// Batch was cancelled explicitly
    pub const CANCELLED: &str = "context canceled";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for 2xx
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for 3xx
    pub const REDIRECT_EMOJI: &str = "🔄";
    /// Emoji for 404
    pub const NOT_FOUND_EMOJI: &str = "❌";
    /// Emoji for other 4xx
    pub const CLIENT_ERROR_EMOJI: &str = "⚠️";
    /// Emoji for 5xx
    pub const SERVER_ERROR_EMOJI: &str = "💥";
    /// Emoji for transport failures and anything else
    pub const UNKNOWN_EMOJI: &str = "❓";
    /// Color marker for 2xx
    pub const SUCCESS_MARKER: &str = "🟢";
    /// Color marker for 3xx
    pub const REDIRECT_MARKER: &str = "🔵";
    /// Color marker for 4xx
    pub const CLIENT_ERROR_MARKER: &str = "🟡";
    /// Color marker for 5xx
    pub const SERVER_ERROR_MARKER: &str = "🔴";
    /// Color marker for transport failures
    pub const UNKNOWN_MARKER: &str = "⚫";
}
