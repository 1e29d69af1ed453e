mod commands;
mod render;

use anyhow::Result;
use calvis_core::config::CalvisConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calvis")]
#[command(about = "Check which calendar events are visible in a time window")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a single recurring event occurs in a window
    Check {
        /// Repetition rule, e.g. "FREQ=WEEKLY;BYDAY=MO"
        #[arg(short, long, default_value = "")]
        rule: String,

        /// Event start (seconds since epoch)
        #[arg(long, allow_negative_numbers = true)]
        start: i64,

        /// Event end (seconds since epoch)
        #[arg(long, allow_negative_numbers = true)]
        end: i64,

        /// Window start (YYYY-MM-DD or seconds since epoch)
        #[arg(long)]
        from: Option<String>,

        /// Window end (YYYY-MM-DD or seconds since epoch)
        #[arg(long)]
        to: Option<String>,
    },
    /// Filter a JSON array of event records down to those visible in a window
    Filter {
        /// Path to the events file
        events: PathBuf,

        /// Window start (YYYY-MM-DD or seconds since epoch)
        #[arg(long)]
        from: Option<String>,

        /// Window end (YYYY-MM-DD or seconds since epoch)
        #[arg(long)]
        to: Option<String>,

        /// Print the visible events as JSON instead
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CalvisConfig::load()?;

    init_logging(&config);

    match cli.command {
        Commands::Check {
            rule,
            start,
            end,
            from,
            to,
        } => commands::check::run(&config, &rule, start, end, from.as_deref(), to.as_deref()),
        Commands::Filter {
            events,
            from,
            to,
            json,
        } => commands::filter::run(&config, &events, from.as_deref(), to.as_deref(), json),
    }
}

fn init_logging(config: &CalvisConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
