//! WebSocket protocol message definitions
//! These are the wire types for client-server communication

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::game::round::RoundPhase;

/// Power-up variants floating through the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    /// Adds points on pickup
    ScoreBonus,
    /// Obstacles pass through harmlessly
    Shield,
    /// Client-side movement boost
    Speed,
    /// Slows every obstacle in the field
    Freeze,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::ScoreBonus,
        PowerUpKind::Shield,
        PowerUpKind::Speed,
        PowerUpKind::Freeze,
    ];

    /// Timed effect granted on pickup, if any
    pub fn effect(self) -> Option<StatusEffect> {
        match self {
            PowerUpKind::ScoreBonus => None,
            PowerUpKind::Shield => Some(StatusEffect::Shield),
            PowerUpKind::Speed => Some(StatusEffect::Speed),
            PowerUpKind::Freeze => Some(StatusEffect::Freeze),
        }
    }
}

/// Active timed effect on a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEffect {
    #[default]
    None,
    Shield,
    Speed,
    Freeze,
}

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// Enter the arena roster
    Join {
        /// Display name, defaulted when absent, blank or not a string
        #[serde(default, deserialize_with = "lenient_name")]
        name: Option<String>,
    },

    /// Client-reported avatar position
    Move {
        #[serde(default)]
        x: Option<f32>,
        #[serde(default)]
        y: Option<f32>,
    },

    /// Vote to start the next round
    Ready,

    /// Start a round without waiting for votes
    ForceStart,

    /// End the running round now
    EndRound,

    /// Ping for latency measurement
    Ping {
        /// Client timestamp (ms)
        t: u64,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Greeting after the socket opens
    ConnectionResponse {
        data: String,
    },

    /// Authoritative arena snapshot
    GameState {
        players: Vec<PlayerSnapshot>,
        obstacles: Vec<ObstacleSnapshot>,
        power_ups: Vec<PowerUpSnapshot>,
        wave: u32,
        round_active: bool,
        phase: RoundPhase,
    },

    /// Round finished
    RoundEnd {
        winner: String,
        /// Best placement first
        placements: Vec<PlacementInfo>,
    },

    /// Pong response
    Pong {
        /// Echo back client timestamp
        t: u64,
    },
}

/// Anything but a JSON string falls back to the default name.
fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(name) => Ok(Some(name)),
        _ => Ok(None),
    }
}

/// Player state in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub alive: bool,
    pub ready: bool,
    pub effect: StatusEffect,
    pub score: u32,
    /// Last measured one-way delay (ms)
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpSnapshot {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

/// One line of the round-end standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementInfo {
    pub name: String,
    pub points: u32,
    pub place: u32,
}
