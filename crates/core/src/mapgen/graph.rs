//! Room connectivity: a minimum spanning tree over room centers plus a few
//! redundant edges so the floor has loops.

use super::model::{Corridor, Room};
use super::seed::SeededRandom;

const MIN_LOOP_EDGES: usize = 1;
const LOOP_EDGE_CHOICES: usize = 2;

pub(super) fn connect_rooms(rng: &mut SeededRandom, rooms: &[Room]) -> Vec<Corridor> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    let mut corridors = minimum_spanning_tree(rooms);
    add_loop_edges(rng, rooms.len(), &mut corridors);
    corridors
}

fn pairwise_distances(rooms: &[Room]) -> Vec<f64> {
    let count = rooms.len();
    let mut distances = vec![0.0; count * count];
    for (a, left) in rooms.iter().enumerate() {
        for (b, right) in rooms.iter().enumerate().skip(a + 1) {
            let distance = left.center_distance_squared(right).sqrt();
            distances[a * count + b] = distance;
            distances[b * count + a] = distance;
        }
    }
    distances
}

/// Prim's algorithm rooted at room 0. Ties go to the lowest pending index and
/// then to the earliest connected room.
fn minimum_spanning_tree(rooms: &[Room]) -> Vec<Corridor> {
    let count = rooms.len();
    let distances = pairwise_distances(rooms);

    let mut connected = vec![false; count];
    let mut best_distance = vec![f64::INFINITY; count];
    let mut best_link = vec![0_usize; count];
    connected[0] = true;
    best_distance[1..].copy_from_slice(&distances[1..count]);

    let mut corridors = Vec::with_capacity(count - 1);
    for _ in 1..count {
        let mut choice: Option<usize> = None;
        for pending in (0..count).filter(|&index| !connected[index]) {
            let closer = match choice {
                None => true,
                Some(current) => best_distance[pending] < best_distance[current],
            };
            if closer {
                choice = Some(pending);
            }
        }
        let Some(next) = choice else {
            break;
        };

        connected[next] = true;
        corridors.push(Corridor { from: best_link[next], to: next });
        for pending in (0..count).filter(|&index| !connected[index]) {
            let distance = distances[next * count + pending];
            if distance < best_distance[pending] {
                best_distance[pending] = distance;
                best_link[pending] = next;
            }
        }
    }
    corridors
}

fn add_loop_edges(rng: &mut SeededRandom, room_count: usize, corridors: &mut Vec<Corridor>) {
    let extra_count = MIN_LOOP_EDGES + rng.index(LOOP_EDGE_CHOICES);

    let mut unused_pairs = Vec::new();
    for a in 0..room_count {
        for b in (a + 1)..room_count {
            if !corridors.iter().any(|corridor| corridor.connects(a, b)) {
                unused_pairs.push(Corridor { from: a, to: b });
            }
        }
    }

    for _ in 0..extra_count {
        if unused_pairs.is_empty() {
            break;
        }
        let picked = rng.index(unused_pairs.len());
        corridors.push(unused_pairs.remove(picked));
    }
}
