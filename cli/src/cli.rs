use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use geodiversity::OBSERVATION_FIELD;

/// Diversity scores and basemap views for areal census extracts
#[derive(Parser, Debug)]
#[command(name = "geodiversity", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reshape a long-format extract and score each area (forbids stdout)
    Score(ScoreArgs),

    /// Compute the basemap view for a table of area locations
    Basemap(BasemapArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Long-format CSV: one row per (area, category, count)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Categorical field to score, e.g. "Ethnic group (6 categories)"
    #[arg(long)]
    pub variable: String,

    /// Geographic identifier field, e.g. "Lower tier local authorities Code"
    #[arg(long)]
    pub geo: String,

    /// Count field
    #[arg(long, default_value = OBSERVATION_FIELD)]
    pub observation: String,

    /// Output CSV with proportions and the Entropy column ("-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct BasemapArgs {
    /// CSV with one location per row
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Latitude column
    #[arg(long, default_value = "lat")]
    pub lat: String,

    /// Longitude column
    #[arg(long, default_value = "long")]
    pub lon: String,

    /// JSON file with zoom/padding overrides
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub options: Option<PathBuf>,

    /// Output JSON file (stdout if omitted)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}
