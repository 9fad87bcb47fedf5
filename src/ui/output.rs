//! Output formatting and display logic

use serde::Serialize;
use std::fmt::Write;

use crate::checker::CheckReport;
use crate::core::constants::{display, http_status, output_formats};
use crate::core::{ProbeError, ProbeOutcome, Result};
use crate::ui::color::{Colors, color_for, colorize};
use crate::validation::Summary;

/// Status emoji, following the status class of the outcome
pub fn status_emoji(outcome: &ProbeOutcome) -> &'static str {
    if outcome.error.is_some() {
        return display::UNKNOWN_EMOJI;
    }
    match outcome.status_code {
        c if (http_status::OK..http_status::REDIRECT_START).contains(&c) => display::SUCCESS_EMOJI,
        c if (http_status::REDIRECT_START..http_status::ERROR_THRESHOLD).contains(&c) => {
            display::REDIRECT_EMOJI
        }
        http_status::NOT_FOUND => display::NOT_FOUND_EMOJI,
        c if (http_status::ERROR_THRESHOLD..http_status::SERVER_ERROR_START).contains(&c) => {
            display::CLIENT_ERROR_EMOJI
        }
        c if (http_status::SERVER_ERROR_START..http_status::UPPER_BOUND).contains(&c) => {
            display::SERVER_ERROR_EMOJI
        }
        _ => display::UNKNOWN_EMOJI,
    }
}

/// Colored circle marker for the status class
pub fn status_marker(outcome: &ProbeOutcome) -> &'static str {
    if outcome.error.is_some() {
        return display::UNKNOWN_MARKER;
    }
    match outcome.status_code {
        c if (http_status::OK..http_status::REDIRECT_START).contains(&c) => display::SUCCESS_MARKER,
        c if (http_status::REDIRECT_START..http_status::ERROR_THRESHOLD).contains(&c) => {
            display::REDIRECT_MARKER
        }
        c if (http_status::ERROR_THRESHOLD..http_status::SERVER_ERROR_START).contains(&c) => {
            display::CLIENT_ERROR_MARKER
        }
        c if (http_status::SERVER_ERROR_START..http_status::UPPER_BOUND).contains(&c) => {
            display::SERVER_ERROR_MARKER
        }
        _ => display::UNKNOWN_MARKER,
    }
}

/// Human-readable status, e.g. `404 Not Found` or `Error: connection failed: ...`
pub fn status_text(outcome: &ProbeOutcome) -> String {
    if let Some(ref err) = outcome.error {
        return format!("Error: {err}");
    }
    match reqwest::StatusCode::from_u16(outcome.status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} {}", outcome.status_code, reason),
        None => outcome.status_code.to_string(),
    }
}

/// Render results as emoji-decorated text with a statistics block
pub fn render_text(report: &CheckReport, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        let _ = writeln!(
            out,
            "\n🚀 {} ({} URL{}):\n",
            colorize("Results", Colors::BOLD),
            report.results.len(),
            if report.results.len() == 1 { "" } else { "s" }
        );
    }

    for outcome in &report.results {
        let _ = writeln!(
            out,
            "{} {} {}",
            status_emoji(outcome),
            status_marker(outcome),
            colorize(&outcome.url, color_for(outcome))
        );
        let _ = writeln!(
            out,
            "   ↳ {} ({:.2} s)\n",
            status_text(outcome),
            outcome.duration.as_secs_f64()
        );
    }

    if !quiet {
        render_summary(&mut out, &report.summary);
    }
    out
}

fn render_summary(out: &mut String, summary: &Summary) {
    let _ = writeln!(out, "📊 {}:", colorize("Statistics", Colors::BOLD));
    let _ = writeln!(
        out,
        "   • Successful: {}",
        colorize(&summary.successful.to_string(), Colors::GREEN)
    );
    let _ = writeln!(
        out,
        "   • Errors: {}",
        colorize(&summary.errors.to_string(), Colors::RED)
    );
    let _ = writeln!(
        out,
        "   • Total: {}",
        colorize(&summary.total.to_string(), Colors::BRIGHT_WHITE)
    );
}

/// One plain line per outcome
pub fn render_minimal(report: &CheckReport) -> String {
    let mut out = String::new();
    for outcome in &report.results {
        let _ = match outcome.error {
            Some(ref err) => writeln!(out, "ERR {} {}", outcome.url, err),
            None => writeln!(out, "{} {}", outcome.status_code, outcome.url),
        };
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    checked_at: String,
    has_errors: bool,
    elapsed_ms: u64,
    summary: Summary,
    results: Vec<JsonOutcome<'a>>,
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    url: &'a str,
    status_code: Option<u16>,
    error: Option<&'a ProbeError>,
    duration_ms: u64,
}

impl<'a> From<&'a ProbeOutcome> for JsonOutcome<'a> {
    fn from(outcome: &'a ProbeOutcome) -> Self {
        Self {
            url: &outcome.url,
            status_code: outcome.error.is_none().then_some(outcome.status_code),
            error: outcome.error.as_ref(),
            duration_ms: outcome.duration.as_millis() as u64,
        }
    }
}

/// Structured report for automation
pub fn render_json(report: &CheckReport) -> Result<String> {
    let json = JsonReport {
        checked_at: chrono::Utc::now().to_rfc3339(),
        has_errors: report.has_errors,
        elapsed_ms: report.elapsed.as_millis() as u64,
        summary: report.summary,
        results: report.results.iter().map(JsonOutcome::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Render the report in `format` and print it to stdout
pub fn display_results(report: &CheckReport, format: &str, quiet: bool) -> Result<()> {
    let rendered = match format {
        output_formats::JSON => {
            let mut json = render_json(report)?;
            json.push('\n');
            json
        }
        output_formats::MINIMAL => render_minimal(report),
        _ => render_text(report, quiet),
    };
    print!("{rendered}");
    Ok(())
}
