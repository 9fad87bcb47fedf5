use std::fmt;

/// Errors that abort a whole run before any URL is checked
#[derive(Debug)]
pub enum CheckerError {
    /// IO error (opening or reading the URL file)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// URL file not found
    FileNotFound(String),

    /// HTTP client could not be built
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Io(err) => write!(f, "IO error: {err}"),
            CheckerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CheckerError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CheckerError::Http(err) => write!(f, "HTTP error: {err}"),
            CheckerError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            CheckerError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Io(err) => Some(err),
            CheckerError::Http(err) => Some(err),
            CheckerError::TomlParsing(err) => Some(err),
            CheckerError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CheckerError {
    fn from(err: std::io::Error) -> Self {
        CheckerError::Io(err)
    }
}

impl From<reqwest::Error> for CheckerError {
    fn from(err: reqwest::Error) -> Self {
        CheckerError::Http(err)
    }
}

impl From<toml::de::Error> for CheckerError {
    fn from(err: toml::de::Error) -> Self {
        CheckerError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for CheckerError {
    fn from(err: serde_json::Error) -> Self {
        CheckerError::Json(err)
    }
}

/// Type alias for Results using CheckerError
pub type Result<T> = std::result::Result<T, CheckerError>;
