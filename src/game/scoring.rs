//! Round standings and point awards

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::ws::protocol::PlacementInfo;

use super::entities::Player;
use super::round::Elimination;
use super::tuning::points_for_place;

/// One resolved placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub player_id: Uuid,
    pub name: String,
    pub place: u32,
    pub points: u32,
}

/// Final standings of a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundResult {
    /// Name of the first-placed player, if anyone placed
    pub winner: Option<String>,
    pub placements: Vec<Placement>,
}

impl RoundResult {
    pub fn placement_infos(&self) -> Vec<PlacementInfo> {
        self.placements
            .iter()
            .map(|p| PlacementInfo {
                name: p.name.clone(),
                points: p.points,
                place: p.place,
            })
            .collect()
    }
}

/// Survivors first (by join order), then the eliminated from last to first.
/// Players no longer on the roster are skipped.
pub fn resolve_placements(
    players: &HashMap<Uuid, Player>,
    eliminations: &[Elimination],
) -> RoundResult {
    let mut survivors: Vec<&Player> = players.values().filter(|p| p.alive).collect();
    survivors.sort_by_key(|p| p.join_seq);

    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut ordered: Vec<&Player> = Vec::with_capacity(players.len());

    for player in survivors {
        if seen.insert(player.id) {
            ordered.push(player);
        }
    }
    // Stable sort keeps append order among same-tick eliminations
    let mut by_time: Vec<&Elimination> = eliminations.iter().collect();
    by_time.sort_by_key(|e| e.tick);
    for elimination in by_time.into_iter().rev() {
        if let Some(player) = players.get(&elimination.player_id) {
            if seen.insert(player.id) {
                ordered.push(player);
            }
        }
    }

    let placements: Vec<Placement> = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, player)| Placement {
            player_id: player.id,
            name: player.name.clone(),
            place: (idx + 1) as u32,
            points: points_for_place(idx + 1),
        })
        .collect();

    RoundResult {
        winner: placements.first().map(|p| p.name.clone()),
        placements,
    }
}

/// Add awarded points to the persistent scores.
pub fn award_points(players: &mut HashMap<Uuid, Player>, result: &RoundResult) {
    for placement in &result.placements {
        if let Some(player) = players.get_mut(&placement.player_id) {
            player.score += placement.points;
        }
    }
}
