//! Self-play CLI
//!
//! Plays a match between two engines and prints a report.

use anyhow::Context;
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use self_play::{MatchConfig, MatchRunner};

fn print_usage() {
    println!("Checkers self-play runner");
    println!();
    println!("Usage:");
    println!("  self_play [CONFIG.toml]");
    println!();
    println!("Without a config file, minimax depth 4 plays minimax depth 3 over two games.");
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to control log output.");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        Some("help" | "--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(path) => MatchConfig::load(Path::new(path))
            .with_context(|| format!("loading match config from {path}"))?,
        None => MatchConfig::default(),
    };

    info!(
        engine1 = %config.engine1.label(),
        engine2 = %config.engine2.label(),
        games = config.num_games,
        "starting match"
    );

    let mut engine1 = config.engine1.build();
    let mut engine2 = config.engine2.build();

    let runner = MatchRunner::new(config);
    let summary = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    summary.print_report();

    if let Some(output) = &runner.config().output {
        summary
            .save(output)
            .with_context(|| format!("writing match summary to {}", output.display()))?;
        info!(path = %output.display(), "saved match summary");
    }

    Ok(())
}
