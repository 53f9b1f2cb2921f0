#![forbid(unsafe_code)]

mod config;
mod constants;
mod content;
mod gui;
mod i18n;
mod media;
mod overlay;
mod scroll;
mod section;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::Settings;
use content::{validate, Portfolio};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Bilingual portfolio viewer")]
struct Cli {
    /// Content document to show instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Directory that asset paths in the content are relative to
    #[arg(long, global = true, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check content for authoring mistakes and exit
    Check,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// CLI flag, then `LOG_LEVEL`, then the config file
fn resolve_level(cli: Option<&str>, env: Option<&str>, configured: &str) -> TraceLevel {
    parse_level(cli.or(env).unwrap_or(configured))
}

fn check(path: Option<&PathBuf>) -> Result<ExitCode> {
    let portfolio = match path {
        Some(path) => Portfolio::from_path(path)?,
        None => Portfolio::bundled()?,
    };

    let issues = validate(&portfolio);
    if issues.is_empty() {
        println!("content OK");
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        println!("{issue}");
    }
    println!("{} issue(s) found", issues.len());
    Ok(ExitCode::FAILURE)
}

fn run(cli: Cli, mut settings: Settings) -> Result<ExitCode> {
    if let Some(Command::Check) = cli.command {
        return check(cli.content.as_ref().or(settings.content_path.as_ref()));
    }

    if let Some(assets) = cli.assets {
        settings.asset_root = assets;
    }
    let content_path = cli.content.or_else(|| settings.content_path.clone());
    let portfolio = Portfolio::load(content_path.as_deref())?;

    info!(asset_root = ?settings.asset_root, "starting viewer");
    gui::run_gui(settings, portfolio)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = Settings::load();
    let configured_level = settings
        .as_ref()
        .map(|settings| settings.log_level.clone())
        .unwrap_or_else(|_| constants::defaults::LOG_LEVEL.to_string());
    let env_level = std::env::var(constants::env::LOG_LEVEL).ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(resolve_level(
            cli.log_level.as_deref(),
            env_level.as_deref(),
            &configured_level,
        ))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let settings = settings.unwrap_or_else(|err| {
        error!("Failed to load config, using defaults: {err:#}");
        Settings::default()
    });

    Ok(exit_code(run(cli, settings)))
}

/// Errors are reported once, through the log
fn exit_code(result: Result<ExitCode>) -> ExitCode {
    result.unwrap_or_else(|err| {
        error!("{err:#}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), TraceLevel::TRACE);
        assert_eq!(parse_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
    }

    #[test]
    fn test_level_precedence() {
        assert_eq!(resolve_level(Some("error"), Some("debug"), "warn"), TraceLevel::ERROR);
        assert_eq!(resolve_level(None, Some("debug"), "warn"), TraceLevel::DEBUG);
        assert_eq!(resolve_level(None, None, "warn"), TraceLevel::WARN);
    }

    #[test]
    fn test_cli_parses_check_subcommand() {
        let cli = Cli::try_parse_from(["folio", "check", "--content", "alt.json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check)));
        assert_eq!(cli.content, Some(PathBuf::from("alt.json")));
    }

    #[test]
    fn test_cli_assets_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "check", "--assets", "media"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check)));
        assert_eq!(cli.assets, Some(PathBuf::from("media")));
    }

    #[test]
    fn test_startup_error_becomes_failure_code() {
        let cli = Cli::try_parse_from(["folio", "--content", "/nonexistent/content.json"]).unwrap();
        assert_eq!(exit_code(run(cli, Settings::default())), ExitCode::FAILURE);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.content.is_none());
        assert!(cli.assets.is_none());
    }

    #[test]
    fn test_check_bundled_content_succeeds() {
        assert_eq!(check(None).unwrap(), ExitCode::SUCCESS);
    }
}
