//! High-level dungeon generation entry point that binds a seed to a tier config.

mod pipeline;

use super::model::DungeonLayout;
use super::tiers::{Tier, TierConfig, TierConfigError, TierTable};

pub struct DungeonGenerator {
    seed: u32,
    tier: Tier,
    config: TierConfig,
}

impl DungeonGenerator {
    pub fn new(seed: u32, tier: Tier) -> Self {
        Self { seed, tier, config: TierConfig::builtin(tier) }
    }

    /// Generator with a custom configuration, refused when it fails validation.
    pub fn with_config(seed: u32, tier: Tier, config: TierConfig) -> Result<Self, TierConfigError> {
        config.validate()?;
        Ok(Self { seed, tier, config })
    }

    pub fn from_table(seed: u32, tier: Tier, table: &TierTable) -> Self {
        Self { seed, tier, config: table.get(tier).clone() }
    }

    pub fn config(&self) -> &TierConfig {
        &self.config
    }

    pub fn generate(&self) -> DungeonLayout {
        pipeline::generate_layout(self.seed, self.tier, &self.config)
    }
}
