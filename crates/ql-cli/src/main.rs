//! CLI frontend for the Questline interactive fiction engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "ql",
    about = "Questline, a text adventure with dice",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game
    Play {
        /// Character class (see `ql classes`)
        #[arg(short, long, default_value = "fighter")]
        class: String,

        /// RNG seed for a reproducible game (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// World JSON file (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Character name (random if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Write the game log to this file on exit
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// List the playable classes
    Classes,

    /// Export or validate world files
    World {
        #[command(subcommand)]
        command: WorldCommands,
    },
}

#[derive(Subcommand)]
enum WorldCommands {
    /// Write the built-in world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a world JSON file
    Check {
        /// The file to check
        file: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            class,
            seed,
            world,
            name,
            transcript,
        } => commands::play::run(
            &class,
            seed,
            world.as_deref(),
            name.as_deref(),
            transcript.as_deref(),
        ),
        Commands::Classes => commands::classes::run(),
        Commands::World { command } => match command {
            WorldCommands::Export { output } => commands::world::export(output.as_deref()),
            WorldCommands::Check { file } => commands::world::check(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
