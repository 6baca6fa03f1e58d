use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "freelance-match",
    version,
    about = "Freelancer match scoring, ranking and stored-score audit CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding freelance-match.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the match score for one set of metrics
    Score(ScoreCommand),
    /// Compute the 0-30 skills overlap sub-score
    Overlap(OverlapCommand),
    /// Rank candidates for a job
    Rank(RankCommand),
    /// Compare stored match scores against live computation
    Audit(AuditCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PresetArg {
    Display,
    Matching,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long, allow_hyphen_values = true)]
    pub job_performance: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub skills_experience: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub responsiveness: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub fairness: f64,
    /// Weighting preset; defaults to display.preset from config
    #[arg(short, long, value_enum)]
    pub preset: Option<PresetArg>,
    /// Print the unrounded value
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct OverlapCommand {
    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub requested: Vec<String>,
}

#[derive(Args)]
pub struct RankCommand {
    pub input: PathBuf,
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(long)]
    pub min_score: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: RankFormat,
    /// Write a ranking snapshot under <root>/.freelance-match/rankings
    #[arg(long)]
    pub export: bool,
}

#[derive(Args)]
pub struct AuditCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub tolerance: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: AuditFormat,
}

#[derive(Clone, ValueEnum)]
pub enum RankFormat {
    Json,
    Md,
}

#[derive(Clone, ValueEnum)]
pub enum AuditFormat {
    Json,
    Md,
    Sarif,
}
