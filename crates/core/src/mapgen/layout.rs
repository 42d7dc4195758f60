//! Rejection-sampling room placement and world-bounds normalization.

use super::model::Room;
use super::seed::SeededRandom;
use super::tiers::TierConfig;

/// Clearance added to the corridor width around every room.
pub const ROOM_MARGIN: f64 = 16.0;
/// Empty border kept between the outermost rooms and the world edge.
pub const WORLD_PADDING: f64 = 200.0;

pub(super) const PLACEMENT_ATTEMPTS: u32 = 1_000;
const SPREAD_FACTOR: f64 = 0.8;
const MIN_SPREAD_ROOMS: u32 = 6;

#[derive(Clone, Debug, PartialEq)]
pub(super) struct RoomPlacement {
    pub(super) rooms: Vec<Room>,
    pub(super) target_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct WorldBounds {
    pub(super) width: f64,
    pub(super) height: f64,
}

pub(super) fn place_rooms(rng: &mut SeededRandom, config: &TierConfig) -> RoomPlacement {
    let target_count = rng.int_inclusive(config.room_count.min, config.room_count.max);
    let padding = config.corridor_width + ROOM_MARGIN;
    let spread = spread_side(target_count, config.average_room_size());

    let mut rooms: Vec<Room> = Vec::with_capacity(target_count.min(PLACEMENT_ATTEMPTS) as usize);
    for _ in 0..PLACEMENT_ATTEMPTS {
        if rooms.len() >= target_count as usize {
            break;
        }
        let w = draw_room_side(rng, config);
        let h = draw_room_side(rng, config);
        let x = (rng.next_f64() * spread).floor();
        let y = (rng.next_f64() * spread).floor();

        let candidate = Room::new(rooms.len(), x, y, w, h);
        let candidate_with_margin = candidate.padded_bounds(padding);
        if rooms
            .iter()
            .any(|existing| existing.padded_bounds(padding).intersects(&candidate_with_margin))
        {
            continue;
        }
        rooms.push(candidate);
    }

    RoomPlacement { rooms, target_count }
}

/// Whole-unit room side, never below the ceiling of a fractional minimum.
fn draw_room_side(rng: &mut SeededRandom, config: &TierConfig) -> f64 {
    let side = rng.range_f64(config.room_size.min, config.room_size.max).floor();
    side.max(config.room_size.min.ceil())
}

/// Side of the square window room corners are drawn from.
fn spread_side(target_count: u32, average_room_size: f64) -> f64 {
    f64::from(target_count.max(MIN_SPREAD_ROOMS)) * average_room_size * SPREAD_FACTOR
}

/// Largest world side a configuration can produce: the spread window, one
/// room reaching past its far edge, and padding on both sides.
pub(super) fn max_world_side(config: &TierConfig) -> f64 {
    spread_side(config.room_count.max, config.average_room_size())
        + config.room_size.max
        + 2.0 * WORLD_PADDING
}

/// Shifts rooms so the outermost ones sit exactly `WORLD_PADDING` from the
/// origin and returns the world extent that bounds them with padding.
pub(super) fn normalize_world(rooms: &mut [Room]) -> WorldBounds {
    if rooms.is_empty() {
        return WorldBounds { width: 0.0, height: 0.0 };
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for room in rooms.iter() {
        let bounds = room.bounds();
        min_x = min_x.min(bounds.x);
        min_y = min_y.min(bounds.y);
        max_x = max_x.max(bounds.right());
        max_y = max_y.max(bounds.bottom());
    }

    let shift_x = WORLD_PADDING - min_x;
    let shift_y = WORLD_PADDING - min_y;
    for room in rooms.iter_mut() {
        room.translate(shift_x, shift_y);
    }

    WorldBounds {
        width: (max_x - min_x) + 2.0 * WORLD_PADDING,
        height: (max_y - min_y) + 2.0 * WORLD_PADDING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::tiers::{Span, Tier};

    #[test]
    fn placed_rooms_keep_padded_clearance() {
        for tier in Tier::ALL {
            let config = TierConfig::builtin(tier);
            let padding = config.corridor_width + ROOM_MARGIN;
            let placement = place_rooms(&mut SeededRandom::new(42), &config);

            for (left_index, left) in placement.rooms.iter().enumerate() {
                for right in &placement.rooms[(left_index + 1)..] {
                    assert!(
                        !left.padded_bounds(padding).intersects(&right.padded_bounds(padding)),
                        "rooms must keep corridor clearance: {left:?} vs {right:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn placement_reaches_target_for_builtin_tiers() {
        for tier in Tier::ALL {
            let config = TierConfig::builtin(tier);
            for seed in 0..50 {
                let placement = place_rooms(&mut SeededRandom::new(seed), &config);
                assert_eq!(
                    placement.rooms.len(),
                    placement.target_count as usize,
                    "seed={seed} tier={tier:?} fell short of its target"
                );
                assert!(
                    (config.room_count.min..=config.room_count.max)
                        .contains(&placement.target_count)
                );
            }
        }
    }

    #[test]
    fn room_ids_match_insertion_order_and_sizes_stay_in_range() {
        let config = TierConfig::builtin(Tier::Three);
        let placement = place_rooms(&mut SeededRandom::new(7), &config);
        for (index, room) in placement.rooms.iter().enumerate() {
            assert_eq!(room.id, index);
            assert!(room.w >= config.room_size.min && room.w <= config.room_size.max);
            assert!(room.h >= config.room_size.min && room.h <= config.room_size.max);
            assert_eq!(room.w, room.w.floor());
            assert_eq!(room.x, room.x.floor());
        }
    }

    #[test]
    fn impossible_targets_degrade_to_partial_placement() {
        let mut config = TierConfig::builtin(Tier::One);
        config.room_count = Span::new(1_500, 1_500);
        let placement = place_rooms(&mut SeededRandom::new(3), &config);
        assert!(!placement.rooms.is_empty());
        assert!(placement.rooms.len() <= PLACEMENT_ATTEMPTS as usize);
        assert_eq!(placement.target_count, 1_500);
    }

    #[test]
    fn huge_targets_stop_at_the_attempt_cap() {
        let mut config = TierConfig::builtin(Tier::One);
        config.room_count = Span::new(4_000_000_000, 4_000_000_000);
        let placement = place_rooms(&mut SeededRandom::new(3), &config);
        assert_eq!(placement.target_count, 4_000_000_000);
        assert!(placement.rooms.capacity() <= PLACEMENT_ATTEMPTS as usize);
        assert!(!placement.rooms.is_empty());
    }

    #[test]
    fn fractional_minimum_keeps_sides_in_range() {
        let mut config = TierConfig::builtin(Tier::One);
        config.room_size = Span::new(160.5, 175.0);
        for seed in 0..20 {
            let placement = place_rooms(&mut SeededRandom::new(seed), &config);
            for room in &placement.rooms {
                for side in [room.w, room.h] {
                    assert!((161.0..=175.0).contains(&side), "seed={seed} side={side}");
                    assert_eq!(side, side.floor());
                }
            }
        }
    }

    #[test]
    fn world_never_exceeds_its_worst_case_side() {
        for tier in Tier::ALL {
            let config = TierConfig::builtin(tier);
            for seed in 0..20 {
                let mut rooms = place_rooms(&mut SeededRandom::new(seed), &config).rooms;
                let bounds = normalize_world(&mut rooms);
                assert!(bounds.width <= max_world_side(&config));
                assert!(bounds.height <= max_world_side(&config));
            }
        }
    }

    #[test]
    fn empty_target_places_nothing() {
        let mut config = TierConfig::builtin(Tier::One);
        config.room_count = Span::new(0, 0);
        let placement = place_rooms(&mut SeededRandom::new(1), &config);
        assert!(placement.rooms.is_empty());
        assert_eq!(normalize_world(&mut []), WorldBounds { width: 0.0, height: 0.0 });
    }

    #[test]
    fn normalization_pads_every_side() {
        let mut rooms = vec![
            Room::new(0, 500.0, 300.0, 200.0, 100.0),
            Room::new(1, 900.0, 700.0, 100.0, 150.0),
        ];
        let bounds = normalize_world(&mut rooms);

        assert_eq!((rooms[0].x, rooms[0].y), (WORLD_PADDING, WORLD_PADDING));
        assert_eq!(bounds.width, 500.0 + 2.0 * WORLD_PADDING);
        assert_eq!(bounds.height, 550.0 + 2.0 * WORLD_PADDING);
        assert_eq!(rooms[1].bounds().right() + WORLD_PADDING, bounds.width);
        assert_eq!(rooms[1].bounds().bottom() + WORLD_PADDING, bounds.height);
    }
}
