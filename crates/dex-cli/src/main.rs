//! Dexview CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use dex_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use dex_cli::commands::{build_service, client_settings, run_list, run_show};
use dex_cli::logging::{LogConfig, LogFormat, init_logging};
use dex_cli::render::{print_habitats, print_list, print_regions, print_show, print_types};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

pub(crate) fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Regions => print_regions(),
        Command::Types => print_types(),
        Command::Habitats => print_habitats(),
        Command::List(args) => {
            let service = build_service(&settings(cli)?)?;
            let report = block_on(run_list(service, args))?;
            print_list(&report, args.format)?;
        }
        Command::Show(args) => {
            let service = build_service(&settings(cli)?)?;
            let report = block_on(run_show(service, args))?;
            print_show(&report, args.format)?;
        }
    }
    Ok(())
}

fn settings(cli: &Cli) -> Result<dex_client::ClientSettings> {
    client_settings(cli.config.as_deref(), cli.base_url.as_deref())
}

/// Runs a fallible `future` to completion on a single-threaded runtime.
fn block_on<T>(future: impl Future<Output = Result<T>>) -> Result<T> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime.block_on(future)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_static_listings() {
        for command in ["regions", "types", "habitats"] {
            let cli = Cli::try_parse_from(["dexview", command]).unwrap();
            run(&cli).unwrap();
        }
    }

    #[test]
    fn test_block_on_returns_inner_value() {
        let value = block_on(async { Ok::<_, anyhow::Error>(7) }).unwrap();
        assert_eq!(value, 7);

        let err = block_on(async { Err::<u8, _>(anyhow::anyhow!("listing failed")) })
            .unwrap_err();
        assert_eq!(err.to_string(), "listing failed");
    }

    #[test]
    fn test_log_level_flag_disables_env_filter() {
        let cli = Cli::try_parse_from(["dexview", "--log-level", "debug", "regions"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);

        let cli = Cli::try_parse_from(["dexview", "regions"]).unwrap();
        assert!(log_config_from_cli(&cli).use_env_filter);
    }
}
