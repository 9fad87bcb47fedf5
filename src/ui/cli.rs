// Command-line interface definitions and parsing for http-status-checker

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  http-status-checker --file urls.txt\n  http-status-checker --url https://example.com\n  http-status-checker --file urls.txt --only-errors"
)]
pub struct Cli {
    // URL Source
    /// Path to file with URLs, one per line
    #[arg(short = 'f', long, value_name = "PATH", help_heading = "URL Source")]
    pub file: Option<String>,

    /// Single URL to check (takes precedence over --file)
    #[arg(short = 'u', long, value_name = "URL", help_heading = "URL Source")]
    pub url: Option<String>,

    // Timing
    /// Deadline for the whole batch in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Timing"
    )]
    pub timeout: Option<u64>,

    /// Timeout for each individual request in seconds (default: 10)
    #[arg(
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Timing"
    )]
    pub request_timeout: Option<u64>,

    // Output & Verbosity
    /// Show only URLs with errors
    #[arg(long, help_heading = "Output & Verbosity")]
    pub only_errors: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Suppress progress output and summary banner
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        file: cli.file.clone(),
        url: cli.url.clone(),
        timeout: cli.timeout,
        request_timeout: cli.request_timeout,
        only_errors: cli.only_errors,
        output_format: cli.format.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        user_agent: cli.user_agent.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
