/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::moods::MoodRegistry;
use crate::palette::{self, RandomSource, SeededRandom, ThreadRandom};

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based mood palette generator"
)]
pub struct Cli {
    /// Path to a TOML mood file replacing the built-in registry.
    #[arg(long, value_name = "FILE")]
    pub moods: Option<PathBuf>,

    /// Delay in milliseconds before a freshly generated palette is shown.
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print generated palettes for a mood without entering the UI.
    Generate {
        mood: String,
        /// How many palettes to print, one per line.
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: u32,
        /// Seed the generator for reproducible output.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// List the configured moods and their base colors.
    Moods,
}

/// Execute a CLI command against the loaded registry.
pub fn run(command: Command, registry: &MoodRegistry) -> Result<()> {
    match command {
        Command::Generate { mood, count, seed } => handle_generate(mood, count, seed, registry)?,
        Command::Moods => handle_moods(registry),
    }
    Ok(())
}

fn handle_generate(
    mood: String,
    count: u32,
    seed: Option<u64>,
    registry: &MoodRegistry,
) -> Result<()> {
    let mood = registry.get(&mood)?;
    let mut source: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    for _ in 0..count {
        let colors = palette::vary(&mood.colors, source.as_mut());
        println!("{}", colors.join(", "));
    }
    Ok(())
}

fn handle_moods(registry: &MoodRegistry) {
    for mood in registry.moods() {
        println!(
            "{} {:<12} {:<40} {}",
            mood.icon,
            mood.id,
            mood.description,
            mood.colors.join(" ")
        );
    }
}
