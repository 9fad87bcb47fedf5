use clap::{CommandFactory, Parser};
use http_status_checker::checker::check_urls_with_progress;
use http_status_checker::config::{CliConfig, Config};
use http_status_checker::core::constants::output_formats;
use http_status_checker::reporting::logging;
use http_status_checker::ui::{Cli, ProgressReporter, cli_to_config, display_results};

use std::io::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main check logic extracted from main() for testing
pub async fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    if !config.has_url_source() {
        Cli::command().print_help()?;
        eprintln!("\nError: must provide either --file or --url");
        return Ok(1);
    }

    let mut progress = create_progress_reporter(&cli_config, &config);
    let report = match check_urls_with_progress(&config, Some(&mut progress)).await {
        Ok(report) => report,
        Err(e) => {
            progress.finish_and_clear();
            logging::log_error("Check failed", Some(&e));
            return Err(e.into());
        }
    };
    progress.finish_checking(report.summary.successful, report.summary.total);

    display_results(&report, config.output_format(), cli_config.quiet)?;

    Ok(report.exit_code())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence over the config file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Progress bar only for interactive text output
fn create_progress_reporter(cli_config: &CliConfig, config: &Config) -> ProgressReporter {
    let enabled = !cli_config.quiet
        && config.output_format() == output_formats::TEXT
        && std::io::stderr().is_terminal();
    ProgressReporter::new(enabled)
}
