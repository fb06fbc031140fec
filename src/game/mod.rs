//! Arena simulation modules

pub mod arena;
pub mod entities;
pub mod geometry;
pub mod physics;
pub mod round;
pub mod scoring;
pub mod snapshot;
pub mod spawner;
pub mod tuning;

pub use arena::{ArenaHandle, GameArena};

use crate::ws::protocol::ClientMsg;
use uuid::Uuid;

/// Inbound event routed from a connection to the arena task
#[derive(Debug, Clone)]
pub struct PlayerInput {
    pub conn_id: Uuid,
    pub event: InputEvent,
    pub received_at: u64,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Parsed client frame
    Message(ClientMsg),
    /// Gateway saw the socket close
    Disconnected,
}
