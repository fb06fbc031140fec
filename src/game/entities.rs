//! Players, obstacles and power-ups

use uuid::Uuid;

use crate::ws::protocol::{PowerUpKind, StatusEffect};

use super::geometry::{clamp_player_position, Rect, SPAWN_X, SPAWN_Y};
use super::tuning::{EFFECT_DURATION_TICKS, MAX_NAME_LEN};

/// Player state in the arena (authoritative)
#[derive(Debug, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    /// Join order, used as a stable tie-break
    pub join_seq: u64,

    pub x: f32,
    pub y: f32,

    pub alive: bool,
    pub ready: bool,
    pub score: u32,

    pub effect: StatusEffect,
    pub effect_ticks: u32,

    pub latency_ms: u64,
}

impl Player {
    pub fn new(id: Uuid, name: String, join_seq: u64) -> Self {
        Self {
            id,
            name,
            join_seq,
            x: SPAWN_X,
            y: SPAWN_Y,
            alive: true,
            ready: false,
            score: 0,
            effect: StatusEffect::None,
            effect_ticks: 0,
            latency_ms: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::player(self.x, self.y)
    }

    /// Apply a client-reported position; a missing axis keeps its value.
    pub fn move_to(&mut self, x: Option<f32>, y: Option<f32>) {
        let x = x.filter(|v| v.is_finite()).unwrap_or(self.x);
        let y = y.filter(|v| v.is_finite()).unwrap_or(self.y);
        let (x, y) = clamp_player_position(x, y);
        self.x = x;
        self.y = y;
    }

    /// Round-start reset
    pub fn respawn(&mut self) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
        self.alive = true;
        self.ready = false;
        self.clear_effect();
    }

    /// Overwrites whatever effect was active
    pub fn grant_effect(&mut self, effect: StatusEffect) {
        self.effect = effect;
        self.effect_ticks = if effect == StatusEffect::None {
            0
        } else {
            EFFECT_DURATION_TICKS
        };
    }

    pub fn clear_effect(&mut self) {
        self.effect = StatusEffect::None;
        self.effect_ticks = 0;
    }

    pub fn is_shielded(&self) -> bool {
        self.effect == StatusEffect::Shield
    }
}

/// Trim a requested display name, or fall back to `Player N`.
pub fn sanitize_name(requested: Option<&str>, roster_size: usize) -> String {
    let trimmed = requested.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return format!("Player {}", roster_size + 1);
    }
    trimmed.chars().take(MAX_NAME_LEN).collect::<String>().trim_end().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::obstacle(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::power_up(self.x, self.y)
    }
}
