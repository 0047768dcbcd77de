//! CLI argument definitions for the catalog viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dex_model::{KeyFilter, SortOrder, find_region, is_known_habitat, is_known_type};

#[derive(Parser)]
#[command(
    name = "dexview",
    version,
    about = "Dexview - Browse the creature catalog from the terminal",
    long_about = "Browse a PokeAPI-compatible creature catalog.\n\n\
                  Filter by name, region, type, habitat and legendary status,\n\
                  page through the results and inspect records with their\n\
                  evolution lineage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Client settings file (default: the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Data service root, overriding the settings file.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the records matching the given filters.
    List(ListArgs),

    /// Show one record with its stats and evolution lineage.
    Show(ShowArgs),

    /// List the known regions and their id ranges.
    Regions,

    /// List the known types.
    Types,

    /// List the known habitats.
    Habitats,
}

/// Filters shared by `list` and `show`.
#[derive(Args, Clone, Default)]
pub struct FilterArgs {
    /// Name substring or exact id.
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// Region key (see `dexview regions`).
    #[arg(long = "region", value_name = "KEY", value_parser = parse_region)]
    pub region: Option<KeyFilter>,

    /// Type key (see `dexview types`).
    #[arg(long = "type", value_name = "KEY", value_parser = parse_type)]
    pub type_key: Option<KeyFilter>,

    /// Habitat key (see `dexview habitats`).
    #[arg(long = "habitat", value_name = "KEY", value_parser = parse_habitat)]
    pub habitat: Option<KeyFilter>,

    /// Only legendary records.
    #[arg(long = "legendary")]
    pub legendary: bool,

    /// Result ordering.
    #[arg(long = "sort", value_enum, default_value = "id")]
    pub sort: SortArg,
}

#[derive(Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Number of pages to show (each "load more" adds one).
    #[arg(
        long = "pages",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pages: u32,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Record name or numeric id.
    #[arg(value_name = "NAME|ID")]
    pub record: String,

    /// Filters defining the list that previous/next walk through.
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Id,
    Name,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Id => Self::Id,
            SortArg::Name => Self::Name,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_key(value: &str, known: impl Fn(&str) -> bool, what: &str) -> Result<KeyFilter, String> {
    let key = value.trim().to_lowercase();
    if key == KeyFilter::ALL_KEY || known(&key) {
        Ok(KeyFilter::only(key))
    } else {
        Err(format!("unknown {what} '{value}'"))
    }
}

fn parse_region(value: &str) -> Result<KeyFilter, String> {
    parse_key(value, |key| find_region(key).is_some(), "region")
}

fn parse_type(value: &str) -> Result<KeyFilter, String> {
    parse_key(value, is_known_type, "type")
}

fn parse_habitat(value: &str) -> Result<KeyFilter, String> {
    parse_key(value, is_known_habitat, "habitat")
}
