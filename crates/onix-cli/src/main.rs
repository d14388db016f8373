//! Onix CLI - Command-line tools for Onix map files

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{convert, inspect, path, simulate, validate};

#[derive(Parser)]
#[command(name = "onix")]
#[command(about = "Validate, convert and preview Onix map files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a map file and optionally its model references
    Validate {
        /// Path to map file (.toml or .json)
        map: String,

        /// Asset directory to resolve model names against
        #[arg(long)]
        assets: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Convert a map between TOML and JSON
    Convert {
        /// Input map file
        input: String,

        /// Output map file; the extension picks the format
        output: String,
    },

    /// Sample an animated model's path at a given time
    Path {
        /// Path to map file
        map: String,

        /// Animated model index or modelName
        #[arg(long)]
        model: String,

        /// Path time in seconds
        #[arg(long)]
        time: f64,
    },

    /// Run the animation system headless and print model poses
    Simulate {
        /// Path to map file
        map: String,

        /// Simulated duration in seconds
        #[arg(long, default_value = "10")]
        seconds: f64,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
    },

    /// Show a summary of a map
    Inspect {
        /// Path to map file
        map: String,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            map,
            assets,
            format,
        } => validate::run(validate::ValidateArgs {
            map,
            assets,
            format,
        }),
        Commands::Convert { input, output } => convert::run(&input, &output),
        Commands::Path { map, model, time } => path::run(&map, &model, time),
        Commands::Simulate { map, seconds, fps } => simulate::run(&map, seconds, fps),
        Commands::Inspect { map } => inspect::run(&map),
    }
}
