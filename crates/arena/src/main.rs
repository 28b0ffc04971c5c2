//! Arena CLI
//!
//! Play automated matches between engines and record the results.

use anyhow::{bail, Context};
use arena::{create_engine, ArenaConfig, MatchRunner, ENGINE_NAMES};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Rules-engine Arena");
    println!();
    println!("Usage:");
    println!("  arena match <white> <black> [--games N] [--max-plies N] [--seed S]");
    println!("                              [--config PATH] [--out PATH]");
    println!();
    println!("Engines:");
    println!("  greedy        - Captures first, otherwise a random legal move");
    println!("  random        - Uniformly random legal move");
    println!();
    println!("Examples:");
    println!("  arena match greedy random --games 20 --seed 7");
    println!("  arena match greedy greedy --config arena.toml --out results.json");
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn run_match(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine names");
    }
    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // The config file is read first so flags can override it.
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => {
            let path = flag_value(args, i, "--config")?;
            ArenaConfig::load(path).with_context(|| format!("loading {path}"))?
        }
        None => ArenaConfig::default(),
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                config.games = flag_value(args, i, "--games")?.parse().context("--games")?;
                i += 1;
            }
            "--max-plies" => {
                config.max_plies = flag_value(args, i, "--max-plies")?
                    .parse()
                    .context("--max-plies")?;
                i += 1;
            }
            "--seed" | "-s" => {
                config.seed = Some(flag_value(args, i, "--seed")?.parse().context("--seed")?);
                i += 1;
            }
            "--out" | "-o" => {
                config.results_path = Some(PathBuf::from(flag_value(args, i, "--out")?));
                i += 1;
            }
            "--config" | "-c" => i += 1,
            other => warn!("ignoring unknown argument {other}"),
        }
        i += 1;
    }
    config.validate()?;

    info!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    info!(
        "Games: {}, max plies: {}, seed: {:?}",
        config.games, config.max_plies, config.seed
    );

    let mut engine1 = create_engine(engine1_spec, config.seed)?;
    let mut engine2 = create_engine(engine2_spec, config.seed)?;

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
    result.print_summary();

    if let Some(path) = &runner.config().results_path {
        result
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("results written to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("match") => run_match(&args[1..]),
        Some("engines") => {
            for name in ENGINE_NAMES {
                println!("{name}");
            }
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}
