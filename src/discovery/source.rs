use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};

use crate::config::Config;
use crate::core::constants::{error_messages, files};
use crate::core::error::{CheckerError, Result};

/// Resolve the ordered list of URLs to check.
///
/// A single configured URL wins over a file. The URL is returned as-is,
/// without any syntax check.
pub fn resolve_urls(config: &Config) -> Result<Vec<String>> {
    if let Some(url) = config.single_url() {
        return Ok(vec![url.to_string()]);
    }

    let Some(path) = config.file_path() else {
        return Err(CheckerError::Config(
            error_messages::NO_URLS_PROVIDED.to_string(),
        ));
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CheckerError::FileNotFound(path.to_string()),
        _ => CheckerError::Io(e),
    })?;

    parse_url_list(BufReader::new(file))
}

/// Read one URL per line, skipping blank lines and `#` comments.
pub fn parse_url_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(url) = parse_line(&line) {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

fn parse_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(files::COMMENT_PREFIX) {
        None
    } else {
        Some(trimmed)
    }
}
