pub mod mapgen;

pub use mapgen::{
    DungeonGenerator, DungeonLayout, LayoutViolation, Tier, TierConfig, TierConfigError,
    TierTable, audit_layout, generate,
};
