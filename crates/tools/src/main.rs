use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{DungeonGenerator, Tier};
use dungeon_tools::{load_optional_tier_table, render_ascii, render_summary};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Summary,
    Json,
    Ascii,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layout seed
    #[arg(short, long, default_value_t = 1)]
    seed: u32,
    /// Difficulty tier, 1 through 5
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    tier: u8,
    /// TOML file with `[[tier]]` overrides
    #[arg(long)]
    tiers: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tier = Tier::try_from(args.tier)?;
    let table = load_optional_tier_table(args.tiers.as_deref())?;
    let layout = DungeonGenerator::from_table(args.seed, tier, &table).generate();

    match args.format {
        Format::Summary => println!("{}", render_summary(&layout)),
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&layout).context("Failed to serialize layout JSON")?;
            println!("{json}");
        }
        Format::Ascii => println!("{}", render_ascii(&layout)),
    }

    Ok(())
}
