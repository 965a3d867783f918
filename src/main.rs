mod cli;

use chrono::Utc;
use clap::Parser;
use rubric::config;
use rubric::error::RubricError;
use rubric::report::{self, OutputFormat};
use rubric::review::{self, ReviewData};
use rubric::scoring;
use rubric::telemetry;
use rubric::types::config::{ReportFormatSetting, RubricConfig};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const INVALID_REVIEW: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn load_config_for(review: &Path) -> Result<RubricConfig, RubricError> {
    let root = review
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let cfg = match config::load_config(root)? {
        Some(cfg) => cfg,
        None => {
            tracing::info!(root = %root.display(), "no rubric.toml found, using defaults");
            RubricConfig::default()
        }
    };
    Ok(cfg)
}

fn run() -> Result<i32, RubricError> {
    let cli = cli::Cli::parse();
    telemetry::init(telemetry::default_level(cli.verbose, cli.quiet))?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let cfg = load_config_for(&cmd.review)?;
            let weights = cfg.weights()?;
            let (review, candidate) = review::load_review(&cmd.review, &weights)?;
            let evaluation = review::build_report(
                &review,
                &cfg.thresholds(),
                candidate.as_ref(),
                Utc::now(),
            );

            let output_format = match (cmd.format, cfg.report_format()) {
                (Some(cli::ReportFormat::Json), _) => OutputFormat::Json,
                (Some(cli::ReportFormat::Md), _) => OutputFormat::Md,
                (None, Some(ReportFormatSetting::Json)) => OutputFormat::Json,
                (None, _) => OutputFormat::Md,
            };
            let rendered = report::render(&evaluation, output_format)?;
            println!("{rendered}");

            if evaluation.is_complete() {
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!(
                    "warning: {} criteria not yet rated",
                    evaluation.unrated.len()
                );
                Ok(exit_code::INCOMPLETE)
            }
        }
        cli::Commands::Check(cmd) => {
            let cfg = load_config_for(&cmd.review)?;
            review::load_review(&cmd.review, &cfg.weights()?)?;
            println!("check: ok");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            let cfg = config::load_config(Path::new("."))?.unwrap_or_default();
            let classification = scoring::classify_with(cmd.score, &cfg.thresholds());
            println!("{classification}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Template(cmd) => {
            let cfg = config::load_config(Path::new("."))?.unwrap_or_default();
            let document = ReviewData::new(&cfg.weights()?).to_document(None);
            let rendered = toml::to_string(&document)?;

            match cmd.output {
                Some(path) => {
                    if cmd.no_overwrite && path.exists() {
                        return Err(RubricError::FileExists(path.display().to_string()));
                    }
                    std::fs::write(&path, rendered)?;
                    println!("template written: {}", path.display());
                }
                None => print!("{rendered}"),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_validation() {
                exit_code::INVALID_REVIEW
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
