use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rubric",
    version,
    about = "Phased resume review scoring against a weighted rubric"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a review document and print the report
    Score(ScoreCommand),
    /// Validate a review document without scoring it
    Check(CheckCommand),
    /// Classify a Phase 2 score
    Classify(ClassifyCommand),
    /// Emit a blank review document
    Template(TemplateCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub review: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub review: PathBuf,
}

#[derive(Args)]
pub struct ClassifyCommand {
    /// Percentage between 0 and 100
    #[arg(allow_negative_numbers = true, value_parser = parse_percentage)]
    pub score: f64,
}

fn parse_percentage(raw: &str) -> Result<f64, String> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(format!("score must be between 0 and 100, got '{raw}'"));
    }
    Ok(score)
}

#[derive(Args)]
pub struct TemplateCommand {
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long, requires = "output")]
    pub no_overwrite: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
