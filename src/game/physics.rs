//! Per-tick movement, effect timers and collision resolution

use std::collections::HashMap;

use uuid::Uuid;

use crate::ws::protocol::{PowerUpKind, StatusEffect};

use super::entities::{Obstacle, Player, PowerUp};
use super::tuning::{FREEZE_SLOW_MULTIPLIER, POWER_UP_SPEED_FACTOR, SCORE_BONUS_POINTS};

/// Outcome of one collision pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CollisionReport {
    /// Players knocked out this tick, in resolution order
    pub eliminated: Vec<Uuid>,
    pub pickups: Vec<(Uuid, PowerUpKind)>,
}

/// Physics system for the scrolling field
pub struct PhysicsSystem;

impl PhysicsSystem {
    /// Obstacle speed multiplier for this tick
    pub fn slow_multiplier(players: &HashMap<Uuid, Player>) -> f32 {
        if players.values().any(|p| p.effect == StatusEffect::Freeze) {
            FREEZE_SLOW_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Scroll everything toward x = 0 and drop what has fully left the field.
    pub fn advance(
        obstacles: &mut Vec<Obstacle>,
        power_ups: &mut Vec<PowerUp>,
        obstacle_speed: f32,
        slow_multiplier: f32,
    ) {
        let obstacle_step = obstacle_speed * slow_multiplier;
        let power_up_step = obstacle_speed * POWER_UP_SPEED_FACTOR;

        for obstacle in obstacles.iter_mut() {
            obstacle.x -= obstacle_step;
        }
        for power_up in power_ups.iter_mut() {
            power_up.x -= power_up_step;
        }

        obstacles.retain(|o| {
            let rect = o.rect();
            rect.x + rect.w >= 0.0
        });
        power_ups.retain(|p| {
            let rect = p.rect();
            rect.x + rect.w >= 0.0
        });
    }

    /// Count down effect timers, clearing the ones that hit zero
    pub fn decay_effects(players: &mut HashMap<Uuid, Player>) {
        for player in players.values_mut() {
            if player.effect == StatusEffect::None {
                continue;
            }
            player.effect_ticks = player.effect_ticks.saturating_sub(1);
            if player.effect_ticks == 0 {
                player.clear_effect();
            }
        }
    }

    /// Pickups first, then obstacle hits, for every live player.
    pub fn resolve_collisions(
        players: &mut HashMap<Uuid, Player>,
        obstacles: &[Obstacle],
        power_ups: &mut Vec<PowerUp>,
    ) -> CollisionReport {
        let mut report = CollisionReport::default();

        // Stable order so simultaneous pickups resolve the same way every run
        let mut order: Vec<(u64, Uuid)> = players
            .values()
            .filter(|p| p.alive)
            .map(|p| (p.join_seq, p.id))
            .collect();
        order.sort_unstable();

        for (_, id) in order {
            let Some(player) = players.get_mut(&id) else {
                continue;
            };
            let hitbox = player.rect();

            let mut idx = 0;
            while idx < power_ups.len() {
                if hitbox.overlaps(&power_ups[idx].rect()) {
                    let power_up = power_ups.swap_remove(idx);
                    Self::apply_pickup(player, power_up.kind);
                    report.pickups.push((id, power_up.kind));
                } else {
                    idx += 1;
                }
            }

            if player.is_shielded() {
                continue;
            }

            if obstacles.iter().any(|o| hitbox.overlaps(&o.rect())) {
                player.alive = false;
                report.eliminated.push(id);
            }
        }

        report
    }

    fn apply_pickup(player: &mut Player, kind: PowerUpKind) {
        match kind.effect() {
            Some(effect) => player.grant_effect(effect),
            None => player.score += SCORE_BONUS_POINTS,
        }
    }
}
