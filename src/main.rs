mod cli;

use clap::Parser;
use freelance_match::error::{MatchError, Result};
use freelance_match::export::{write_ranking_snapshot, RankingSnapshot};
use freelance_match::report::{self, OutputFormat};
use freelance_match::scoring::{compute_match_score, compute_skills_overlap_score};
use freelance_match::types::config::{AuditOptions, MatchConfig, RankingOptions};
use freelance_match::types::metrics::FreelancerMetrics;
use freelance_match::types::scoring::{Preset, SCORE_MAX, SCORE_MIN};
use freelance_match::{audit, config, logging, ranking};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.root)?;
    if loaded.is_none() {
        tracing::warn!(
            "no {} found in {}; using built-in defaults",
            config::DEFAULT_CONFIG_FILE,
            cli.root.display()
        );
    }

    match cli.command {
        cli::Commands::Score(cmd) => {
            let preset = match cmd.preset {
                Some(cli::PresetArg::Display) => Preset::Display,
                Some(cli::PresetArg::Matching) => Preset::Matching,
                None => loaded
                    .as_ref()
                    .map(MatchConfig::display_preset)
                    .unwrap_or(Preset::Display),
            };
            let metrics = FreelancerMetrics::new(
                cmd.job_performance,
                cmd.skills_experience,
                cmd.responsiveness,
                cmd.fairness,
            );
            let score = compute_match_score(&metrics, preset);
            tracing::debug!(%preset, raw = score.value(), "computed match score");

            if cmd.raw {
                println!("{}", score.value());
            } else if preset.rounds_for_display() {
                println!("{}", score.rounded());
            } else {
                println!("{:.2}", score.value());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Overlap(cmd) => {
            let score = compute_skills_overlap_score(&cmd.skills, &cmd.requested);
            println!("{score:.2}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rank(cmd) => {
            let mut options = loaded
                .as_ref()
                .map(MatchConfig::ranking_options)
                .unwrap_or_default();
            if let Some(top) = cmd.top {
                options.top_n = top;
            }
            if let Some(min_score) = cmd.min_score {
                options.min_score = min_score;
            }
            validate_ranking_options(&options)?;

            let (input, bytes) = ranking::input::load_ranking_input(&cmd.input)?;
            let ranking_report = ranking::rank_report(&input.job, &input.candidates, &options);

            let output_format = match cmd.format {
                cli::RankFormat::Json => OutputFormat::Json,
                cli::RankFormat::Md => OutputFormat::Md,
            };
            let rendered = report::render_ranking(&ranking_report, output_format)?;
            println!("{rendered}");

            if cmd.export {
                let snapshot = RankingSnapshot::new(&ranking_report, &bytes);
                let path = write_ranking_snapshot(&cli.root, &snapshot)?;
                eprintln!("ranking snapshot: {}", path.display());
            }

            if ranking_report.ranked.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Audit(cmd) => {
            let mut options = loaded
                .as_ref()
                .map(MatchConfig::audit_options)
                .unwrap_or_default();
            if let Some(tolerance) = cmd.tolerance {
                options.tolerance = tolerance;
            }
            validate_audit_options(&options)?;

            let audit_report = audit::audit_snapshots(&cmd.path, &options)?;
            let output_format = match cmd.format {
                cli::AuditFormat::Json => OutputFormat::Json,
                cli::AuditFormat::Md => OutputFormat::Md,
                cli::AuditFormat::Sarif => OutputFormat::Sarif,
            };
            let rendered = report::render_audit(&audit_report, output_format)?;
            println!("{rendered}");

            if audit_report.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if !audit_report.findings.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn validate_ranking_options(options: &RankingOptions) -> Result<()> {
    if !(SCORE_MIN..=SCORE_MAX).contains(&options.min_score) {
        return Err(MatchError::InvalidOption(format!(
            "--min-score must be between 0 and 100 (got {})",
            options.min_score
        )));
    }
    Ok(())
}

fn validate_audit_options(options: &AuditOptions) -> Result<()> {
    if !(SCORE_MIN..=SCORE_MAX).contains(&options.tolerance) {
        return Err(MatchError::InvalidOption(format!(
            "--tolerance must be between 0 and 100 (got {})",
            options.tolerance
        )));
    }
    Ok(())
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
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
