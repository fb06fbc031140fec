//! Round lifecycle state

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tuning::{obstacle_speed_for_wave, BASE_OBSTACLE_SPEED, WAVE_TICKS};

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// No round running; players join and vote ready
    Lobby,
    /// Simulation running
    Active,
    /// Standings being resolved; folds back to Lobby in the same step
    Ended,
}

/// One entry of the elimination order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    pub player_id: Uuid,
    /// Active tick the player was knocked out on
    pub tick: u64,
}

/// Per-round counters and difficulty
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Wave 0 means no round has started since the last reset
    pub wave: u32,
    pub obstacle_speed: f32,
    pub active_ticks: u64,
    pub spawn_counter: u64,
    pub power_up_counter: u64,
    /// Row of the last committed obstacle, used to spread spawns out
    pub last_spawn_row: Option<f32>,
    pub eliminations: Vec<Elimination>,
    /// Roster size when the round started
    pub starting_players: usize,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Lobby,
            wave: 0,
            obstacle_speed: BASE_OBSTACLE_SPEED,
            active_ticks: 0,
            spawn_counter: 0,
            power_up_counter: 0,
            last_spawn_row: None,
            eliminations: Vec::new(),
            starting_players: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// Lobby -> Active. Resets every per-round field exactly once.
    pub fn begin(&mut self, starting_players: usize) {
        *self = Self {
            phase: RoundPhase::Active,
            wave: 1,
            obstacle_speed: obstacle_speed_for_wave(1),
            starting_players,
            ..Self::new()
        };
    }

    /// Active -> Ended. Elimination order stays readable until `finish`.
    pub fn end(&mut self) {
        self.phase = RoundPhase::Ended;
    }

    /// Ended -> Lobby, wave and speed back to their idle values
    pub fn finish(&mut self) {
        *self = Self::new();
    }

    /// Advance the elapsed-ticks counter; returns true when a new wave began.
    pub fn advance_wave_clock(&mut self) -> bool {
        self.active_ticks += 1;
        if self.active_ticks % WAVE_TICKS == 0 {
            self.wave += 1;
            self.obstacle_speed = obstacle_speed_for_wave(self.wave);
            true
        } else {
            false
        }
    }

    /// Append to the elimination order; ignored outside Active.
    pub fn record_elimination(&mut self, player_id: Uuid) {
        if self.is_active() {
            self.eliminations.push(Elimination {
                player_id,
                tick: self.active_ticks,
            });
        }
    }

    /// Auto-end rule: at most one survivor of a round that started with company
    pub fn should_end(&self, alive: usize) -> bool {
        self.is_active() && alive <= 1 && self.starting_players > 1
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
