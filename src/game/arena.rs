//! Arena state and authoritative tick loop

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::interval;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::util::time::{tick_duration, Timer, TICK_DURATION_MICROS};
use crate::ws::protocol::{ClientMsg, ServerMsg};

use super::entities::{sanitize_name, Obstacle, Player, PowerUp};
use super::physics::PhysicsSystem;
use super::round::{RoundPhase, RoundState};
use super::scoring::{award_points, resolve_placements};
use super::snapshot::SnapshotBuilder;
use super::spawner::Spawner;
use super::{InputEvent, PlayerInput};

/// Compact status published for health checks
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArenaStatus {
    pub phase: RoundPhase,
    pub wave: u32,
    pub players: usize,
}

/// Entity stores and round state (owned by the arena task)
pub struct ArenaState {
    pub players: HashMap<Uuid, Player>,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
    pub round: RoundState,
    pub rng: ChaCha8Rng,
    next_join_seq: u64,
}

impl ArenaState {
    pub fn new(seed: u64) -> Self {
        Self {
            players: HashMap::new(),
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            round: RoundState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_join_seq: 0,
        }
    }

    /// Count alive players
    pub fn alive_count(&self) -> usize {
        self.players.values().filter(|p| p.alive).count()
    }

    fn all_ready(&self) -> bool {
        !self.players.is_empty() && self.players.values().all(|p| p.ready)
    }

    fn take_join_seq(&mut self) -> u64 {
        let seq = self.next_join_seq;
        self.next_join_seq += 1;
        seq
    }
}

/// Handle to the running arena
#[derive(Clone)]
pub struct ArenaHandle {
    pub input_tx: mpsc::Sender<PlayerInput>,
    pub outbound_tx: broadcast::Sender<ServerMsg>,
    pub status_rx: watch::Receiver<ArenaStatus>,
}

impl ArenaHandle {
    pub fn status(&self) -> ArenaStatus {
        *self.status_rx.borrow()
    }
}

/// The authoritative arena
pub struct GameArena {
    state: ArenaState,
    input_rx: mpsc::Receiver<PlayerInput>,
    outbound_tx: broadcast::Sender<ServerMsg>,
    status_tx: watch::Sender<ArenaStatus>,
    snapshot_builder: SnapshotBuilder,
}

impl GameArena {
    /// Create a new arena
    pub fn new(seed: u64, snapshot_hold_ticks: u32) -> (Self, ArenaHandle) {
        let (input_tx, input_rx) = mpsc::channel(1024);
        let (outbound_tx, _) = broadcast::channel(256);
        let (status_tx, status_rx) = watch::channel(ArenaStatus {
            phase: RoundPhase::Lobby,
            wave: 0,
            players: 0,
        });

        let handle = ArenaHandle {
            input_tx,
            outbound_tx: outbound_tx.clone(),
            status_rx,
        };

        let arena = Self {
            state: ArenaState::new(seed),
            input_rx,
            outbound_tx,
            status_tx,
            snapshot_builder: SnapshotBuilder::new(snapshot_hold_ticks),
        };

        (arena, handle)
    }

    /// Run the authoritative tick loop until every input sender is gone
    pub async fn run(mut self) {
        info!("Arena loop started");

        let mut tick_interval = interval(tick_duration());
        tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tick_interval.tick() => {
                    let timer = Timer::new();
                    self.on_tick();
                    let elapsed = timer.elapsed_micros();
                    if elapsed > TICK_DURATION_MICROS {
                        warn!(elapsed_micros = elapsed, "Arena tick overran its budget");
                    }
                }
                input = self.input_rx.recv() => {
                    match input {
                        Some(input) => self.handle_input(input),
                        None => break,
                    }
                }
            }
        }

        info!("Arena loop stopped");
    }

    /// One scheduled tick: simulate, then maybe emit a throttled snapshot
    fn on_tick(&mut self) {
        self.step();

        if self.snapshot_builder.should_send() && !self.state.players.is_empty() {
            self.broadcast_snapshot();
        }
    }

    /// Apply one inbound event
    fn handle_input(&mut self, input: PlayerInput) {
        let conn_id = input.conn_id;
        match input.event {
            InputEvent::Message(ClientMsg::Join { name }) => {
                self.handle_join(conn_id, name.as_deref());
            }
            InputEvent::Message(ClientMsg::Move { x, y }) => {
                if let Some(player) = self.state.players.get_mut(&conn_id) {
                    player.move_to(x, y);
                }
            }
            InputEvent::Message(ClientMsg::Ready) => {
                self.handle_ready(conn_id);
            }
            InputEvent::Message(ClientMsg::ForceStart) => {
                if self.state.round.phase == RoundPhase::Lobby {
                    self.start_round();
                }
            }
            InputEvent::Message(ClientMsg::EndRound) => {
                if self.state.round.is_active() {
                    info!(conn_id = %conn_id, "Round ended on request");
                    self.finish_round();
                }
            }
            InputEvent::Message(ClientMsg::Ping { t }) => {
                if let Some(player) = self.state.players.get_mut(&conn_id) {
                    player.latency_ms = input.received_at.saturating_sub(t);
                }
            }
            InputEvent::Disconnected => {
                self.handle_leave(conn_id);
            }
        }
    }

    /// Handle player join request
    fn handle_join(&mut self, conn_id: Uuid, requested_name: Option<&str>) {
        if self.state.players.contains_key(&conn_id) {
            warn!(conn_id = %conn_id, "Connection already joined");
            return;
        }

        let name = sanitize_name(requested_name, self.state.players.len());
        let seq = self.state.take_join_seq();
        let mut player = Player::new(conn_id, name, seq);
        // Mid-round joiners watch until the next round starts
        player.alive = !self.state.round.is_active();

        info!(
            conn_id = %conn_id,
            name = %player.name,
            player_count = self.state.players.len() + 1,
            "Player joined arena"
        );

        self.state.players.insert(conn_id, player);
        self.publish_status();
        self.broadcast_snapshot();
    }

    fn handle_ready(&mut self, conn_id: Uuid) {
        if self.state.round.phase != RoundPhase::Lobby {
            return;
        }
        let Some(player) = self.state.players.get_mut(&conn_id) else {
            return;
        };
        player.ready = true;
        debug!(conn_id = %conn_id, "Player voted ready");

        if self.state.all_ready() {
            self.start_round();
        } else {
            self.broadcast_snapshot();
        }
    }

    /// Handle player leave
    fn handle_leave(&mut self, conn_id: Uuid) {
        let Some(player) = self.state.players.remove(&conn_id) else {
            return;
        };

        info!(conn_id = %conn_id, name = %player.name, "Player left arena");
        self.publish_status();

        match self.state.round.phase {
            RoundPhase::Active if self.state.players.is_empty() => {
                info!("Arena emptied mid-round, returning to lobby");
                self.state.round.finish();
                self.publish_status();
            }
            RoundPhase::Active if self.state.round.should_end(self.state.alive_count()) => {
                self.finish_round();
                return;
            }
            RoundPhase::Lobby if self.state.all_ready() => {
                self.start_round();
                return;
            }
            _ => {}
        }

        self.broadcast_snapshot();
    }

    /// Lobby -> Active
    fn start_round(&mut self) {
        if self.state.players.is_empty() {
            debug!("Refusing to start a round with no players");
            return;
        }

        self.state.obstacles.clear();
        self.state.power_ups.clear();
        for player in self.state.players.values_mut() {
            player.respawn();
        }
        self.state.round.begin(self.state.players.len());

        info!(players = self.state.players.len(), "Round started");
        self.publish_status();
        self.broadcast_snapshot();
    }

    /// Run a single simulation step
    fn step(&mut self) {
        if !self.state.round.is_active() {
            return;
        }

        let state = &mut self.state;

        if state.round.advance_wave_clock() {
            info!(
                wave = state.round.wave,
                speed = state.round.obstacle_speed,
                "Wave advanced"
            );
            let _ = self.status_tx.send_replace(ArenaStatus {
                phase: state.round.phase,
                wave: state.round.wave,
                players: state.players.len(),
            });
        }

        Spawner::step(
            &mut state.round,
            &mut state.obstacles,
            &mut state.power_ups,
            &mut state.rng,
        );

        let slow = PhysicsSystem::slow_multiplier(&state.players);
        PhysicsSystem::advance(
            &mut state.obstacles,
            &mut state.power_ups,
            state.round.obstacle_speed,
            slow,
        );

        PhysicsSystem::decay_effects(&mut state.players);

        let report =
            PhysicsSystem::resolve_collisions(&mut state.players, &state.obstacles, &mut state.power_ups);
        for (player_id, kind) in &report.pickups {
            debug!(conn_id = %player_id, kind = ?kind, "Power-up collected");
        }
        for player_id in report.eliminated {
            debug!(conn_id = %player_id, tick = state.round.active_ticks, "Player eliminated");
            state.round.record_elimination(player_id);
        }

        if self.state.round.should_end(self.state.alive_count()) {
            self.finish_round();
        }
    }

    /// Active -> Ended -> Lobby
    fn finish_round(&mut self) {
        self.state.round.end();

        let result = resolve_placements(&self.state.players, &self.state.round.eliminations);
        award_points(&mut self.state.players, &result);

        let winner = result.winner.clone().unwrap_or_else(|| "No one".to_string());
        info!(winner = %winner, placed = result.placements.len(), "Round ended");

        self.broadcast_snapshot();
        let _ = self.outbound_tx.send(ServerMsg::RoundEnd {
            winner,
            placements: result.placement_infos(),
        });

        self.state.round.finish();
        self.publish_status();
    }

    fn broadcast_snapshot(&self) {
        let snapshot = SnapshotBuilder::build(
            &self.state.players,
            &self.state.obstacles,
            &self.state.power_ups,
            &self.state.round,
        );
        // No receivers just means nobody is connected
        let _ = self.outbound_tx.send(snapshot);
    }

    fn publish_status(&self) {
        let _ = self.status_tx.send_replace(ArenaStatus {
            phase: self.state.round.phase,
            wave: self.state.round.wave,
            players: self.state.players.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::spawner::safe_gap_holds;
    use crate::game::geometry::{
        FIELD_HEIGHT, FIELD_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, SPAWN_X, SPAWN_Y,
    };
    use crate::game::tuning::{MAX_OBSTACLES, MAX_POWER_UPS};
    use crate::ws::protocol::{PlacementInfo, StatusEffect};
    use tokio::sync::broadcast::error::TryRecvError;

    fn input(conn_id: Uuid, msg: ClientMsg) -> PlayerInput {
        PlayerInput {
            conn_id,
            event: InputEvent::Message(msg),
            received_at: 1_000,
        }
    }

    fn join(arena: &mut GameArena, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        arena.handle_input(input(
            id,
            ClientMsg::Join {
                name: Some(name.to_string()),
            },
        ));
        id
    }

    fn drain(rx: &mut broadcast::Receiver<ServerMsg>) -> Vec<ServerMsg> {
        let mut out = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(msg) => out.push(msg),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => return out,
            }
        }
    }

    fn eliminate(arena: &mut GameArena, id: Uuid) {
        // park an obstacle on top of the player and let the step resolve it
        let player = &arena.state.players[&id];
        let (x, y) = (player.x, player.y);
        arena.state.obstacles.push(Obstacle {
            x: x + arena.state.round.obstacle_speed,
            y,
        });
        arena.step();
    }

    #[test]
    fn both_ready_starts_round_at_spawn() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "Ada");
        let b = join(&mut arena, "Bob");
        arena.handle_input(input(a, ClientMsg::Move { x: Some(10.0), y: Some(10.0) }));

        arena.handle_input(input(a, ClientMsg::Ready));
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);

        arena.handle_input(input(b, ClientMsg::Ready));
        assert_eq!(arena.state.round.phase, RoundPhase::Active);
        assert_eq!(arena.state.round.wave, 1);
        for player in arena.state.players.values() {
            assert!(player.alive);
            assert!(!player.ready);
            assert_eq!((player.x, player.y), (SPAWN_X, SPAWN_Y));
        }
        assert_eq!(FIELD_WIDTH, 1200.0);
        assert_eq!(FIELD_HEIGHT, 600.0);
    }

    #[test]
    fn start_requires_players() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        arena.handle_input(input(Uuid::new_v4(), ClientMsg::ForceStart));
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
    }

    #[test]
    fn force_start_is_noop_while_active() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "Ada");
        join(&mut arena, "Bob");
        arena.handle_input(input(a, ClientMsg::ForceStart));
        for _ in 0..30 {
            arena.step();
        }
        let ticks = arena.state.round.active_ticks;
        arena.handle_input(input(a, ClientMsg::ForceStart));
        assert_eq!(arena.state.round.active_ticks, ticks);
        assert_eq!(arena.state.round.starting_players, 2);
    }

    #[test]
    fn moves_are_clamped_and_unknown_connections_ignored() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "Ada");
        arena.handle_input(input(a, ClientMsg::Move { x: Some(9_999.0), y: Some(-9_999.0) }));
        let player = &arena.state.players[&a];
        assert_eq!(player.x, FIELD_WIDTH - PLAYER_WIDTH);
        assert_eq!(player.y, 0.0);

        let stranger = Uuid::new_v4();
        arena.handle_input(input(stranger, ClientMsg::Move { x: Some(1.0), y: Some(1.0) }));
        arena.handle_input(input(stranger, ClientMsg::Ready));
        arena.handle_input(input(stranger, ClientMsg::Ping { t: 1 }));
        assert_eq!(arena.state.players.len(), 1);
        assert!(arena.state.players[&a].y <= FIELD_HEIGHT - PLAYER_HEIGHT);
    }

    #[test]
    fn ping_records_one_way_delay() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "Ada");
        arena.handle_input(input(a, ClientMsg::Ping { t: 960 }));
        assert_eq!(arena.state.players[&a].latency_ms, 40);
    }

    #[test]
    fn join_forces_snapshot_despite_throttle() {
        let (mut arena, handle) = GameArena::new(7, 2);
        let mut rx = handle.outbound_tx.subscribe();
        join(&mut arena, "Ada");
        drain(&mut rx);

        arena.snapshot_builder.hold_for(5);
        for _ in 0..5 {
            arena.on_tick();
        }
        assert!(drain(&mut rx).is_empty());

        join(&mut arena, "Bob");
        let msgs = drain(&mut rx);
        assert_eq!(msgs.len(), 1);
        assert!(matches!(&msgs[0], ServerMsg::GameState { players, .. } if players.len() == 2));
        assert_eq!(arena.snapshot_builder.countdown(), 0);

        arena.on_tick();
        assert_eq!(drain(&mut rx).len(), 1);
    }

    #[test]
    fn lone_player_round_stays_active() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "Solo");
        arena.handle_input(input(a, ClientMsg::Ready));
        assert!(arena.state.round.is_active());

        eliminate(&mut arena, a);
        assert!(!arena.state.players[&a].alive);
        assert!(arena.state.round.is_active());

        arena.handle_input(input(a, ClientMsg::EndRound));
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
    }

    #[test]
    fn last_survivor_wins_and_scores() {
        let (mut arena, handle) = GameArena::new(7, 2);
        let mut rx = handle.outbound_tx.subscribe();
        let a = join(&mut arena, "A");
        let b = join(&mut arena, "B");
        let c = join(&mut arena, "C");
        arena.handle_input(input(a, ClientMsg::ForceStart));
        // spread them out so one obstacle never hits two players
        arena.handle_input(input(a, ClientMsg::Move { x: Some(100.0), y: Some(100.0) }));
        arena.handle_input(input(b, ClientMsg::Move { x: Some(100.0), y: Some(300.0) }));
        arena.handle_input(input(c, ClientMsg::Move { x: Some(100.0), y: Some(500.0) }));
        arena.state.obstacles.clear();
        drain(&mut rx);

        eliminate(&mut arena, a);
        assert!(arena.state.round.is_active());
        assert_eq!(arena.state.round.eliminations.len(), 1);

        arena.state.obstacles.clear();
        eliminate(&mut arena, b);

        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
        assert_eq!(arena.state.round.wave, 0);
        assert_eq!(arena.state.players[&c].score, 3);
        assert_eq!(arena.state.players[&b].score, 2);
        assert_eq!(arena.state.players[&a].score, 1);

        let msgs = drain(&mut rx);
        let round_end = msgs
            .iter()
            .find_map(|m| match m {
                ServerMsg::RoundEnd { winner, placements } => Some((winner.clone(), placements.clone())),
                _ => None,
            })
            .expect("round_end broadcast");
        assert_eq!(round_end.0, "C");
        assert_eq!(
            round_end.1,
            vec![
                PlacementInfo { name: "C".into(), points: 3, place: 1 },
                PlacementInfo { name: "B".into(), points: 2, place: 2 },
                PlacementInfo { name: "A".into(), points: 1, place: 3 },
            ]
        );
        // final snapshot precedes the notification
        assert!(matches!(msgs[msgs.len() - 2], ServerMsg::GameState { round_active: false, .. }));
    }

    #[test]
    fn shielded_player_survives_contact() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "A");
        let b = join(&mut arena, "B");
        arena.handle_input(input(a, ClientMsg::ForceStart));
        arena.handle_input(input(b, ClientMsg::Move { x: Some(100.0), y: Some(100.0) }));
        arena.state.players.get_mut(&a).unwrap().grant_effect(StatusEffect::Shield);

        eliminate(&mut arena, a);
        assert!(arena.state.players[&a].alive);
        assert!(arena.state.players[&b].alive);
        assert!(arena.state.round.is_active());
        assert!(arena.state.round.eliminations.is_empty());
    }

    #[test]
    fn disconnect_can_end_round() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "A");
        let b = join(&mut arena, "B");
        arena.handle_input(input(a, ClientMsg::ForceStart));

        arena.handle_input(PlayerInput {
            conn_id: b,
            event: InputEvent::Disconnected,
            received_at: 0,
        });
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
        assert_eq!(arena.state.players[&a].score, 3);
        assert_eq!(handle_status(&arena).players, 1);
    }

    fn handle_status(arena: &GameArena) -> ArenaStatus {
        *arena.status_tx.borrow()
    }

    #[test]
    fn leaving_can_complete_ready_check() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "A");
        let b = join(&mut arena, "B");
        arena.handle_input(input(a, ClientMsg::Ready));
        arena.handle_input(PlayerInput {
            conn_id: b,
            event: InputEvent::Disconnected,
            received_at: 0,
        });
        assert!(arena.state.round.is_active());
    }

    fn leave(arena: &mut GameArena, conn_id: Uuid) {
        arena.handle_input(PlayerInput {
            conn_id,
            event: InputEvent::Disconnected,
            received_at: 0,
        });
    }

    #[test]
    fn end_round_outside_active_does_nothing() {
        let (mut arena, handle) = GameArena::new(7, 2);
        let mut rx = handle.outbound_tx.subscribe();
        let a = join(&mut arena, "A");
        arena.handle_input(input(a, ClientMsg::Ready));
        assert!(arena.state.round.is_active());
        arena.handle_input(input(a, ClientMsg::EndRound));
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
        let score = arena.state.players[&a].score;
        drain(&mut rx);

        arena.handle_input(input(a, ClientMsg::EndRound));
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
        assert_eq!(arena.state.players[&a].score, score);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn ready_votes_are_ignored_while_active() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "A");
        let b = join(&mut arena, "B");
        arena.handle_input(input(a, ClientMsg::ForceStart));

        arena.handle_input(input(b, ClientMsg::Ready));
        assert!(!arena.state.players[&b].ready);
        assert!(arena.state.round.is_active());

        // a vote cast mid-round must not count toward the next lobby
        arena.handle_input(input(a, ClientMsg::EndRound));
        arena.handle_input(input(a, ClientMsg::Ready));
        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
    }

    #[test]
    fn emptied_round_folds_to_lobby_silently() {
        let (mut arena, handle) = GameArena::new(7, 2);
        let mut rx = handle.outbound_tx.subscribe();
        // a lone player's round never ends on its own, so leaving empties it
        let a = join(&mut arena, "A");
        arena.handle_input(input(a, ClientMsg::ForceStart));
        for _ in 0..10 {
            arena.step();
        }
        assert!(arena.state.round.is_active());
        drain(&mut rx);

        leave(&mut arena, a);

        assert_eq!(arena.state.round.phase, RoundPhase::Lobby);
        assert_eq!(arena.state.round.wave, 0);
        assert!(arena.state.players.is_empty());
        let msgs = drain(&mut rx);
        assert!(!msgs.iter().any(|m| matches!(m, ServerMsg::RoundEnd { .. })));
        let status = handle_status(&arena);
        assert_eq!(status.phase, RoundPhase::Lobby);
        assert_eq!(status.players, 0);
    }

    #[test]
    fn join_with_unusable_name_gets_default() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        join(&mut arena, "Ada");
        let msg: ClientMsg = serde_json::from_str(r#"{"type":"join","name":7}"#).unwrap();
        let id = Uuid::new_v4();
        arena.handle_input(input(id, msg));
        assert_eq!(arena.state.players[&id].name, "Player 2");
    }

    #[test]
    fn mid_round_joiner_spectates() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "A");
        join(&mut arena, "B");
        arena.handle_input(input(a, ClientMsg::ForceStart));
        let late = join(&mut arena, "Late");
        assert!(!arena.state.players[&late].alive);
        assert_eq!(arena.state.round.starting_players, 2);
    }

    #[test]
    fn long_round_respects_caps_and_gap() {
        // a lone player keeps the round running whatever happens to them
        let (mut arena, _handle) = GameArena::new(99, 2);
        let a = join(&mut arena, "A");
        arena.handle_input(input(a, ClientMsg::ForceStart));

        for _ in 0..5_000 {
            arena.step();
            assert!(arena.state.obstacles.len() <= MAX_OBSTACLES);
            assert!(arena.state.power_ups.len() <= MAX_POWER_UPS);
            assert!(safe_gap_holds(&arena.state.obstacles));
        }
        assert!(arena.state.round.is_active());
        assert!(arena.state.round.wave > 1);
    }

    #[test]
    fn elimination_is_one_way_within_round() {
        let (mut arena, _handle) = GameArena::new(7, 2);
        let a = join(&mut arena, "A");
        let b = join(&mut arena, "B");
        let c = join(&mut arena, "C");
        arena.handle_input(input(a, ClientMsg::ForceStart));
        arena.handle_input(input(b, ClientMsg::Move { x: Some(100.0), y: Some(100.0) }));
        arena.handle_input(input(c, ClientMsg::Move { x: Some(100.0), y: Some(300.0) }));
        eliminate(&mut arena, a);
        assert!(arena.state.round.is_active());
        arena.state.obstacles.clear();
        for _ in 0..200 {
            arena.step();
            assert!(!arena.state.players[&a].alive);
        }
        assert_eq!(
            arena
                .state
                .round
                .eliminations
                .iter()
                .filter(|e| e.player_id == a)
                .count(),
            1
        );
    }
}
