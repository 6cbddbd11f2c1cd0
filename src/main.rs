mod api;
mod classify;
mod forecast;
mod stats;
mod store;
mod transitions;
mod types;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use api::Tracker;
use forecast::Forecaster;
use store::FileBackend;
use types::Direction;

#[derive(Parser)]
#[command(name = "roulette-tracker")]
#[command(version = "0.1.0")]
#[command(about = "Track roulette spins, bucket statistics and forecasts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// History file path
    #[arg(short, long, default_value = "history.json")]
    data: PathBuf,

    /// Seed for the forecast tie-break (deterministic runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a spin
    Register {
        /// Winning number (0-36)
        number: u8,
        /// Wheel rotation: left or right
        direction: String,
    },
    /// Remove the most recent spin
    Undo,
    /// Print history, statistics and the current forecast
    Show,
    /// Replace the history with the records in FILE
    Import {
        file: PathBuf,
    },
    /// Write the persisted history to FILE (stdout when omitted)
    Export {
        file: Option<PathBuf>,
    },
    /// Delete every recorded spin
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let forecaster = match cli.seed {
        Some(seed) => Forecaster::with_seed(seed),
        None => Forecaster::new(),
    };
    let tracker = Tracker::new(Box::new(FileBackend::new(&cli.data)), forecaster);

    match cli.command {
        Commands::Register { number, direction } => {
            let direction = Direction::from_str(&direction)
                .ok_or_else(|| anyhow!("Unknown direction: {direction}. Use left or right"))?;
            println!("{}", tracker.register(number, direction)?.message);
        }
        Commands::Undo => {
            println!("{}", tracker.undo()?.message);
        }
        Commands::Show => {
            let view = tracker.state();
            println!("{}", view.history_display);
            println!("{}", view.forecast);
            match view.dozen_stats {
                Some(stats) => println!("{stats}"),
                None => println!("No dozen data."),
            }
            match view.half_stats {
                Some(stats) => println!("{stats}"),
                None => println!("No half data."),
            }
        }
        Commands::Import { file } => {
            let payload = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            println!("{}", tracker.import_history(&payload)?.message);
        }
        Commands::Export { file } => {
            let bytes = tracker.export_history()?;
            match file {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Exported history to {}", path.display());
                }
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
        Commands::Clear => {
            println!("{}", tracker.clear()?.message);
        }
    }

    Ok(())
}
