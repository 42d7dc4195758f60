use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{DungeonGenerator, Tier, audit_layout};
use dungeon_tools::load_optional_tier_table;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    cases: u32,
    /// TOML file with `[[tier]]` overrides
    #[arg(long)]
    tiers: Option<PathBuf>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    let args = Args::parse();
    let table = load_optional_tier_table(args.tiers.as_deref())?;

    println!("Starting layout fuzz on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_rooms = 0_usize;
    for case in 0..args.cases {
        let layout_seed = rng.next_u32();
        let tier = choose(&mut rng, &Tier::ALL);
        let generator = DungeonGenerator::from_table(layout_seed, tier, &table);

        let first = generator.generate();
        let second = generator.generate();
        if first.fingerprint() != second.fingerprint() {
            bail!(
                "Case {case}: seed {layout_seed} tier {} is not deterministic ({:016x} vs {:016x})",
                tier.level(),
                first.fingerprint(),
                second.fingerprint()
            );
        }

        let violations = audit_layout(&first);
        if !violations.is_empty() {
            for violation in &violations {
                eprintln!("  {violation}");
            }
            bail!(
                "Case {case}: seed {layout_seed} tier {} broke {} invariants",
                tier.level(),
                violations.len()
            );
        }
        total_rooms += first.rooms.len();
    }

    println!("Fuzz complete: {} layouts, {} rooms, no violations.", args.cases, total_rooms);
    Ok(())
}
