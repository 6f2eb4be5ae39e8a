#![cfg(not(tarpaulin_include))]

use clap::Parser;
use std::path::PathBuf;
use task_tracker::GoalSet;
use task_tracker::app::{self, ServerConfig};

/// Serve the task tracker form and workbook downloads
#[derive(Parser, Debug)]
#[command(name = "website", version, about)]
struct Args {
    #[arg(long, env = "TRACKER_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "TRACKER_PORT", default_value_t = 3000)]
    port: u16,

    /// TOML file overriding the built-in goals
    #[arg(short, long)]
    goals: Option<PathBuf>,
}

/// Main entry point for the web application
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let goals = match &args.goals {
        Some(path) => GoalSet::from_toml_file(path)?,
        None => GoalSet::default(),
    };

    app::run(ServerConfig {
        host: args.host,
        port: args.port,
        goals,
    })
    .await
}
