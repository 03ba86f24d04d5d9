use clap::{Args, Parser, Subcommand, ValueEnum};
use rnanav::engine::config::SweepAxis;
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "RNA-Navigator CLI - closed-form estimation of ribozyme catalytic efficiency under ionic, thermal and crowding conditions.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by parameter sweeps.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the kinetic profile of one sequence under one set of conditions.
    Simulate(SimulateArgs),
    /// Evaluate a sequence repeatedly while varying one environmental parameter.
    Sweep(SweepArgs),
}

/// Inputs shared by every command. Each flag overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConditionArgs {
    /// Nucleotide sequence over A, U, G, C (case-insensitive).
    #[arg(short, long, value_name = "SEQ")]
    pub sequence: Option<String>,

    /// Divalent-ion (Mg2+) concentration in mM.
    #[arg(short = 'm', long = "ion", value_name = "MM", allow_negative_numbers = true)]
    pub ion_concentration: Option<f64>,

    /// Temperature in degrees Celsius.
    #[arg(short, long, value_name = "CELSIUS", allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Macromolecular crowding index in percent.
    #[arg(long = "crowding", value_name = "PERCENT", allow_negative_numbers = true)]
    pub crowding_index: Option<f64>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S conditions.temperature=60
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub conditions: ConditionArgs,

    /// Write the full audit record as JSON into this directory.
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Output format for the result printed to stdout.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub conditions: ConditionArgs,

    /// The parameter to vary.
    #[arg(short, long, value_enum, required = true)]
    pub axis: AxisArg,

    /// First value of the swept parameter.
    #[arg(long, required = true, value_name = "FLOAT", allow_negative_numbers = true)]
    pub from: f64,

    /// Last value of the swept parameter (inclusive).
    #[arg(long, required = true, value_name = "FLOAT", allow_negative_numbers = true)]
    pub to: f64,

    /// Number of evenly spaced points, at least 2.
    #[arg(short = 'n', long, default_value_t = 11, value_name = "INT")]
    pub steps: usize,

    /// Write the CSV table to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisArg {
    Ion,
    Temperature,
    Crowding,
}

impl From<AxisArg> for SweepAxis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::Ion => SweepAxis::Ion,
            AxisArg::Temperature => SweepAxis::Temperature,
            AxisArg::Crowding => SweepAxis::Crowding,
        }
    }
}
