//! Snapshot building and broadcast throttling

use std::collections::HashMap;
use uuid::Uuid;

use crate::ws::protocol::{ObstacleSnapshot, PlayerSnapshot, PowerUpSnapshot, ServerMsg};

use super::entities::{Obstacle, Player, PowerUp};
use super::round::{RoundPhase, RoundState};

/// Builds snapshots for network transmission
pub struct SnapshotBuilder {
    /// Ticks still to suppress before the next throttled snapshot
    countdown: u32,
    /// Value the countdown is reloaded with after each throttled snapshot
    hold_ticks: u32,
}

impl SnapshotBuilder {
    pub fn new(hold_ticks: u32) -> Self {
        Self {
            countdown: 0,
            hold_ticks,
        }
    }

    /// Called once per tick. A snapshot goes out whenever the countdown has
    /// run out; it is then reloaded, muting the next `hold_ticks` ticks.
    pub fn should_send(&mut self) -> bool {
        if self.countdown > 0 {
            self.countdown -= 1;
            false
        } else {
            self.countdown = self.hold_ticks;
            true
        }
    }

    /// Overwrite the countdown directly
    #[cfg(test)]
    pub fn hold_for(&mut self, ticks: u32) {
        self.countdown = ticks;
    }

    #[cfg(test)]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Build a snapshot message
    pub fn build(
        players: &HashMap<Uuid, Player>,
        obstacles: &[Obstacle],
        power_ups: &[PowerUp],
        round: &RoundState,
    ) -> ServerMsg {
        let mut roster: Vec<&Player> = players.values().collect();
        roster.sort_by_key(|p| p.join_seq);

        ServerMsg::GameState {
            players: roster
                .into_iter()
                .map(|p| PlayerSnapshot {
                    id: p.id,
                    name: p.name.clone(),
                    x: p.x,
                    y: p.y,
                    alive: p.alive,
                    ready: p.ready,
                    effect: p.effect,
                    score: p.score,
                    latency_ms: p.latency_ms,
                })
                .collect(),
            obstacles: obstacles
                .iter()
                .map(|o| ObstacleSnapshot { x: o.x, y: o.y })
                .collect(),
            power_ups: power_ups
                .iter()
                .map(|p| PowerUpSnapshot {
                    x: p.x,
                    y: p.y,
                    kind: p.kind,
                })
                .collect(),
            wave: round.wave,
            round_active: round.phase == RoundPhase::Active,
            phase: round.phase,
        }
    }
}
