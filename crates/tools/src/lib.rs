//! Shared helpers for the developer binaries: tier-file loading and text renderings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::mapgen::{DungeonLayout, RoomRole, TierEntry, TierTable};
use serde::Deserialize;

/// On-disk shape of a tier override file: `[[tier]]` tables keyed by `level`.
#[derive(Debug, Default, Deserialize)]
pub struct TierFile {
    #[serde(default)]
    pub tier: Vec<TierEntry>,
}

pub fn parse_tier_table(source: &str) -> Result<TierTable> {
    let file: TierFile = toml::from_str(source).context("Failed to parse tier file TOML")?;
    TierTable::from_entries(&file.tier).context("Tier file contains an invalid configuration")
}

pub fn load_tier_table(path: &Path) -> Result<TierTable> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tier file: {}", path.display()))?;
    parse_tier_table(&source).with_context(|| format!("Failed to load {}", path.display()))
}

pub fn load_optional_tier_table(path: Option<&Path>) -> Result<TierTable> {
    path.map_or_else(|| Ok(TierTable::default()), load_tier_table)
}

pub fn render_summary(layout: &DungeonLayout) -> String {
    let count_role = |role: RoomRole| layout.rooms.iter().filter(|room| room.role == role).count();
    let enemies: usize = layout.rooms.iter().map(|room| room.enemies.len()).sum();
    let loot: usize = layout.rooms.iter().map(|room| room.loot_positions.len()).sum();

    let mut lines = vec![
        format!("Seed: {} (tier {})", layout.seed, layout.tier.level()),
        format!("World: {} x {}", layout.world_width, layout.world_height),
        format!(
            "Rooms: {} ({} loot, {} enemy)",
            layout.rooms.len(),
            count_role(RoomRole::Loot),
            count_role(RoomRole::Enemy)
        ),
        format!("Corridors: {}", layout.corridors.len()),
        format!("Walls: {}", layout.walls.len()),
        format!("Enemies: {enemies}, loot spots: {loot}"),
    ];
    if let Some(spawn) = layout.spawn_room() {
        lines.push(format!("Spawn: room {} at ({}, {})", spawn.id, spawn.cx, spawn.cy));
    }
    if let Some(boss) = layout.boss_room() {
        lines.push(format!("Boss: room {} at ({}, {})", boss.id, boss.cx, boss.cy));
    }
    lines.push(format!("Fingerprint: {:016x}", layout.fingerprint()));
    lines.join("\n")
}

/// One character per grid cell: `#` solid, `.` open, `S`/`B` spawn and boss
/// centers, `e` enemy, `$` loot.
pub fn render_ascii(layout: &DungeonLayout) -> String {
    let grid = layout.rasterize();
    let width = grid.width();
    let mut canvas: Vec<u8> =
        grid.cells().iter().map(|&cell| if cell == 0 { b'.' } else { b'#' }).collect();

    let mut mark = |x: f64, y: f64, glyph: u8| {
        if let Some((column, row)) = grid.cell_at_point(x, y, layout.cell_size) {
            canvas[row * width + column] = glyph;
        }
    };
    for room in &layout.rooms {
        for loot in &room.loot_positions {
            mark(loot.x, loot.y, b'$');
        }
        for enemy in &room.enemies {
            mark(enemy.x, enemy.y, b'e');
        }
    }
    if let Some(spawn) = layout.spawn_room() {
        mark(spawn.cx, spawn.cy, b'S');
    }
    if let Some(boss) = layout.boss_room() {
        mark(boss.cx, boss.cy, b'B');
    }

    canvas
        .chunks(width.max(1))
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
