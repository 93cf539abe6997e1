//! Clap derive structures for the `kkrp` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// kkrp -- control Daikin KKRP01A LAN adapters from the command line
#[derive(Debug, Parser)]
#[command(
    name = "kkrp",
    version,
    about = "Control Daikin KKRP01A LAN-attached AC units",
    long_about = "Talks to the KKRP01A online controller over plain local HTTP.\n\n\
        Units are addressed by named profile from the config file, or ad hoc\n\
        with --host.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'd', env = "KKRP_DEVICE", global = true)]
    pub device: Option<String>,

    /// Unit IP or hostname (overrides profile)
    #[arg(long, short = 'H', env = "KKRP_HOST", global = true)]
    pub host: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "KKRP_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "KKRP_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the unit's current state
    #[command(alias = "st")]
    Status,

    /// Poll the unit on an interval and print each state
    Watch(WatchArgs),

    /// Change one setting on the unit
    Set(SetArgs),

    /// List the modes and ranges the unit accepts
    Modes,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Poll interval (e.g. 30s, 2m)
    #[arg(long, short = 'i', default_value = "30s", value_parser = humantime::parse_duration)]
    pub interval: Duration,

    /// Stop after this many polls (default: run forever)
    #[arg(long, short = 'n')]
    pub count: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[command(subcommand)]
    pub setting: SetCommand,
}

#[derive(Debug, Subcommand)]
pub enum SetCommand {
    /// Target temperature in degrees C (18-30, truncated to whole degrees)
    Temp {
        degrees: f64,
    },
    /// Operating mode: auto, cool, heat, off
    Mode {
        mode: String,
    },
    /// Fan speed: auto, or 1-5 (also accepts |..|||||)
    Fan {
        speed: String,
    },
    /// Vertical swing: on or off
    Swing {
        state: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a starter config file
    Init,
}
