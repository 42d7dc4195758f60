//! Difficulty tiers and the per-tier generation parameters they select.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::CELL_SIZE;
use super::layout::{PLACEMENT_ATTEMPTS, max_world_side};
use super::roles::SPAWN_INSET;

/// Upper bound on `enemies_per_room.max`.
pub const MAX_ENEMIES_PER_ROOM: u32 = 64;
/// Upper bound on the cell count of the largest grid a configuration can produce.
pub const MAX_GRID_CELLS: u64 = 1 << 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::One, Tier::Two, Tier::Three, Tier::Four, Tier::Five];

    pub fn level(self) -> u8 {
        self as u8
    }

    fn slot(self) -> usize {
        usize::from(self.level() - 1)
    }
}

impl TryFrom<u8> for Tier {
    type Error = TierConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            4 => Ok(Tier::Four),
            5 => Ok(Tier::Five),
            other => Err(TierConfigError::UnknownTier(other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.level()
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum TierConfigError {
    #[error("tier {0} is outside the supported range 1..=5")]
    UnknownTier(u8),
    #[error("tier {0} is configured more than once")]
    DuplicateTier(u8),
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange { field: &'static str, min: f64, max: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("room_size.min {min} leaves no spawn interior inside a {inset} inset")]
    RoomTooSmall { min: f64, inset: f64 },
    #[error("room_size {min}..={max} contains no whole-unit size")]
    NoWholeRoomSize { min: f64, max: f64 },
    #[error("{field}.max {value} exceeds the limit of {limit}")]
    TooLarge { field: &'static str, value: u32, limit: u32 },
    #[error("worst-case grid of {cells} cells exceeds the limit of {limit}")]
    GridTooLarge { cells: f64, limit: u64 },
}

/// Inclusive `min..=max` bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub room_count: Span<u32>,
    pub room_size: Span<f64>,
    pub corridor_width: f64,
    /// Read by combat consumers, not by the generator.
    pub enemy_multiplier: f64,
    /// Read by the loot layer, not by the generator.
    pub loot_quality: u32,
    pub enemies_per_room: Span<u32>,
}

impl TierConfig {
    pub fn builtin(tier: Tier) -> Self {
        BUILTIN_TIERS[tier.slot()].clone()
    }

    pub fn average_room_size(&self) -> f64 {
        (self.room_size.min + self.room_size.max) / 2.0
    }

    pub fn validate(&self) -> Result<(), TierConfigError> {
        check_span("room_count", self.room_count.min.into(), self.room_count.max.into())?;
        check_span("room_size", self.room_size.min, self.room_size.max)?;
        check_span(
            "enemies_per_room",
            self.enemies_per_room.min.into(),
            self.enemies_per_room.max.into(),
        )?;
        check_positive("room_size", self.room_size.max)?;
        check_positive("corridor_width", self.corridor_width)?;
        check_positive("enemy_multiplier", self.enemy_multiplier)?;
        if self.room_size.min.is_nan() || self.room_size.min <= 2.0 * SPAWN_INSET {
            return Err(TierConfigError::RoomTooSmall {
                min: self.room_size.min,
                inset: SPAWN_INSET,
            });
        }
        if self.room_size.min.ceil() > self.room_size.max {
            return Err(TierConfigError::NoWholeRoomSize {
                min: self.room_size.min,
                max: self.room_size.max,
            });
        }
        check_at_most("room_count", self.room_count.max, PLACEMENT_ATTEMPTS)?;
        check_at_most("enemies_per_room", self.enemies_per_room.max, MAX_ENEMIES_PER_ROOM)?;

        let side_cells = (max_world_side(self) / CELL_SIZE).ceil();
        let cells = side_cells * side_cells;
        if cells > MAX_GRID_CELLS as f64 {
            return Err(TierConfigError::GridTooLarge { cells, limit: MAX_GRID_CELLS });
        }
        Ok(())
    }
}

fn check_at_most(field: &'static str, value: u32, limit: u32) -> Result<(), TierConfigError> {
    if value > limit {
        return Err(TierConfigError::TooLarge { field, value, limit });
    }
    Ok(())
}

fn check_span(field: &'static str, min: f64, max: f64) -> Result<(), TierConfigError> {
    if min > max {
        return Err(TierConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), TierConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TierConfigError::NotPositive { field, value });
    }
    Ok(())
}

const BUILTIN_TIERS: [TierConfig; 5] = [
    TierConfig {
        room_count: Span::new(8, 12),
        room_size: Span::new(160.0, 280.0),
        corridor_width: 48.0,
        enemy_multiplier: 1.0,
        loot_quality: 1,
        enemies_per_room: Span::new(1, 3),
    },
    TierConfig {
        room_count: Span::new(9, 13),
        room_size: Span::new(170.0, 300.0),
        corridor_width: 48.0,
        enemy_multiplier: 1.2,
        loot_quality: 2,
        enemies_per_room: Span::new(2, 4),
    },
    TierConfig {
        room_count: Span::new(10, 15),
        room_size: Span::new(180.0, 320.0),
        corridor_width: 56.0,
        enemy_multiplier: 1.45,
        loot_quality: 3,
        enemies_per_room: Span::new(2, 5),
    },
    TierConfig {
        room_count: Span::new(12, 17),
        room_size: Span::new(190.0, 340.0),
        corridor_width: 56.0,
        enemy_multiplier: 1.7,
        loot_quality: 4,
        enemies_per_room: Span::new(3, 6),
    },
    TierConfig {
        room_count: Span::new(14, 20),
        room_size: Span::new(200.0, 360.0),
        corridor_width: 64.0,
        enemy_multiplier: 2.0,
        loot_quality: 5,
        enemies_per_room: Span::new(3, 7),
    },
];

/// One row of an override file: a tier level plus its full configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierEntry {
    pub level: u8,
    #[serde(flatten)]
    pub config: TierConfig,
}

/// Configuration for all five tiers, starting from the builtin values.
#[derive(Clone, Debug, PartialEq)]
pub struct TierTable {
    configs: [TierConfig; 5],
}

impl Default for TierTable {
    fn default() -> Self {
        Self { configs: BUILTIN_TIERS }
    }
}

impl TierTable {
    /// Builtin table with each listed entry replacing its tier.
    pub fn from_entries(entries: &[TierEntry]) -> Result<Self, TierConfigError> {
        let mut table = Self::default();
        let mut seen = [false; 5];
        for entry in entries {
            let tier = Tier::try_from(entry.level)?;
            if seen[tier.slot()] {
                return Err(TierConfigError::DuplicateTier(entry.level));
            }
            seen[tier.slot()] = true;
            table = table.with_override(tier, entry.config.clone())?;
        }
        Ok(table)
    }

    pub fn with_override(
        mut self,
        tier: Tier,
        config: TierConfig,
    ) -> Result<Self, TierConfigError> {
        config.validate()?;
        self.configs[tier.slot()] = config;
        Ok(self)
    }

    pub fn get(&self, tier: Tier) -> &TierConfig {
        &self.configs[tier.slot()]
    }
}
