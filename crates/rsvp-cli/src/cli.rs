//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rsvp",
    version,
    about = "Guest lookup and RSVP workflow over a flat roster",
    long_about = "Look guests up by typed name (typos tolerated), collect a\n\
                  per-member attendance and meal response for the whole\n\
                  household, and hand the finished payload to a submission\n\
                  sink."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// List every household parsed from the roster.
    Households(HouseholdsArgs),

    /// Resolve a typed name to its household.
    Lookup(LookupArgs),

    /// Run the full lookup -> form -> confirmation flow for one household.
    Respond(RespondArgs),

    /// List the configured meal options.
    Meals,
}

#[derive(Parser)]
pub struct HouseholdsArgs {
    /// Roster file; `.json` is treated as structured records, anything else
    /// as comma-separated text.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Roster file (see `households`).
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// The name as the guest typed it.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,
}

#[derive(Parser)]
pub struct RespondArgs {
    /// Roster file (see `households`).
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// The name as the guest typed it.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// One yes/no per household member, in household order.
    #[arg(
        long = "attending",
        value_enum,
        value_delimiter = ',',
        value_name = "YES|NO,..."
    )]
    pub attending: Vec<AttendanceArg>,

    /// Meal value per member, in household order; leave a slot empty for
    /// declining members (e.g. `fish,`).
    #[arg(long = "meal", value_delimiter = ',', value_name = "MEAL,...")]
    pub meals: Vec<String>,

    /// Free-text note for the couple.
    #[arg(long = "note", default_value = "")]
    pub note: String,

    /// Append the payload to this JSON-lines file instead of the dev
    /// logging sink.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AttendanceArg {
    Yes,
    No,
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
