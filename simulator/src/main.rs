//! Measure RTP and hit statistics for a slot configuration.
//!
//! Runs a seeded Monte Carlo batch and prints a summary (or JSON report)
//! so paytable changes can be evaluated numerically.

use anyhow::{Context, Result};
use clap::Parser;
use reelhouse_engine::slots::SEED_LENGTH;
use reelhouse_simulator::run;
use reelhouse_types::slots::{SlotsConfig, BASE_MULTIPLIER, CREDIT};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "reelhouse-simulator")]
#[command(about = "Monte Carlo odds measurement for a slot configuration")]
struct Args {
    /// Number of spins to simulate.
    #[arg(long, default_value_t = 1_000_000)]
    spins: u64,

    /// Bet per spin, in credits.
    #[arg(long, default_value_t = 1.0)]
    bet: f64,

    /// Seed for a reproducible run; omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// YAML configuration file; defaults to the classic 5x3 game.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the full report as JSON instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

fn build_config(args: &Args) -> Result<SlotsConfig> {
    let Some(path) = &args.config else {
        return Ok(SlotsConfig::classic());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SlotsConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Spread a 64-bit seed across the full seed width.
fn build_seed(seed: Option<u64>) -> [u8; SEED_LENGTH] {
    let value = seed.unwrap_or_else(rand::random);
    let mut out = [0u8; SEED_LENGTH];
    for (idx, chunk) in out.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&value.wrapping_add(idx as u64).to_le_bytes());
    }
    out
}

fn bet_units(bet_credits: f64) -> Result<u64> {
    anyhow::ensure!(
        bet_credits.is_finite() && bet_credits > 0.0,
        "bet must be a positive number of credits"
    );
    Ok((bet_credits * CREDIT as f64).round() as u64)
}

fn percent(bps: u64) -> f64 {
    bps as f64 / BASE_MULTIPLIER as f64 * 100.0
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = build_config(&args)?;
    let seed = build_seed(args.seed);
    let bet = bet_units(args.bet)?;

    info!(spins = args.spins, bet, config = ?args.config, "starting simulation");
    let report = run(config, seed, args.spins, bet)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "spins: {}  bet: {:.2} credits  wagered: {:.2}  won: {:.2}",
        report.spins,
        report.bet as f64 / CREDIT as f64,
        report.total_wagered as f64 / CREDIT as f64,
        report.total_won as f64 / CREDIT as f64,
    );
    println!(
        "rtp: {:.2}%  hit rate: {:.2}%  scatter triggers: {}  max line multiplier: {:.2}x",
        percent(report.rtp_bps),
        percent(report.hit_rate_bps),
        report.scatter_triggers,
        report.max_line_multiplier_bps as f64 / BASE_MULTIPLIER as f64,
    );
    for (payline, hits) in report.wins_by_payline.iter().enumerate() {
        println!("  payline {}: {} wins", payline, hits);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["simulator"]);
        assert_eq!(args.spins, 1_000_000);
        assert_eq!(args.bet, 1.0);
        assert!(args.seed.is_none());
        assert!(args.config.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_build_seed_is_deterministic() {
        assert_eq!(build_seed(Some(7)), build_seed(Some(7)));
        assert_ne!(build_seed(Some(7)), build_seed(Some(8)));
    }

    #[test]
    fn test_bet_units_conversion() {
        assert_eq!(bet_units(1.0).unwrap(), CREDIT);
        assert_eq!(bet_units(0.1).unwrap(), CREDIT / 10);
        assert_eq!(bet_units(2.5).unwrap(), 25_000);
        assert!(bet_units(0.0).is_err());
        assert!(bet_units(-1.0).is_err());
    }

    #[test]
    fn test_build_config_defaults_to_classic() {
        let args = Args::parse_from(["simulator"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config, SlotsConfig::classic());
    }

    #[test]
    fn test_build_config_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        let yaml = serde_yaml::to_string(&SlotsConfig::wildcard_any_row()).unwrap();
        std::fs::write(&path, yaml).unwrap();

        let args = Args::parse_from([
            "simulator",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config, SlotsConfig::wildcard_any_row());
    }

    #[test]
    fn test_build_config_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "columns: [not a number]").unwrap();

        let args = Args::parse_from([
            "simulator",
            "--config",
            path.to_str().unwrap(),
        ]);
        assert!(build_config(&args).is_err());
    }
}
