#![cfg(not(tarpaulin_include))]

use clap::Parser;
use std::path::PathBuf;
use task_tracker::{GoalSet, generate_to_file, output_filename};

/// Write a task tracker workbook for one year to disk
#[derive(Parser, Debug)]
#[command(name = "task-tracker", version, about)]
struct Cli {
    /// Calendar year to lay out
    year: i32,

    /// Output path (defaults to task_tracker_<year>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding the built-in goals
    #[arg(short, long)]
    goals: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let goals = match &cli.goals {
        Some(path) => GoalSet::from_toml_file(path)?,
        None => GoalSet::default(),
    };
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(output_filename(cli.year)));

    generate_to_file(cli.year, &goals, &output)?;
    println!("Wrote {}", output.display());

    Ok(())
}
