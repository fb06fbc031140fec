//! Procedural obstacle and power-up placement

use rand::Rng;

use crate::ws::protocol::PowerUpKind;

use super::entities::{Obstacle, PowerUp};
use super::geometry::{
    FIELD_HEIGHT, FIELD_WIDTH, OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, POWER_UP_HEIGHT,
};
use super::round::RoundState;
use super::tuning::{
    spawn_interval_ticks, MAX_OBSTACLES, MAX_POWER_UPS, POWER_UP_INTERVAL_TICKS, ROW_BIAS_MAX,
    ROW_BIAS_MIN, SAFE_GAP_MARGIN, SPAWN_ATTEMPTS,
};

/// Smallest open corridor a column of obstacles must leave
pub const MIN_SAFE_GAP: f32 = PLAYER_HEIGHT + SAFE_GAP_MARGIN;

/// Spawner for obstacles and power-ups
pub struct Spawner;

impl Spawner {
    /// Run both cadences for one active tick
    pub fn step<R: Rng>(
        round: &mut RoundState,
        obstacles: &mut Vec<Obstacle>,
        power_ups: &mut Vec<PowerUp>,
        rng: &mut R,
    ) {
        Self::try_spawn_obstacle(round, obstacles, rng);
        Self::try_spawn_power_up(round, power_ups, rng);
    }

    /// Returns true when an obstacle was committed this tick.
    pub fn try_spawn_obstacle<R: Rng>(
        round: &mut RoundState,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut R,
    ) -> bool {
        round.spawn_counter += 1;
        if round.spawn_counter % spawn_interval_ticks(round.wave) != 0 {
            return false;
        }
        if obstacles.len() >= MAX_OBSTACLES {
            return false;
        }

        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = Obstacle {
                x: FIELD_WIDTH,
                y: Self::propose_row(round.last_spawn_row, rng),
            };
            if placement_keeps_gap(obstacles, &candidate) {
                obstacles.push(candidate);
                round.last_spawn_row = Some(candidate.y);
                return true;
            }
        }

        false
    }

    /// Returns true when a power-up was committed this tick.
    pub fn try_spawn_power_up<R: Rng>(
        round: &mut RoundState,
        power_ups: &mut Vec<PowerUp>,
        rng: &mut R,
    ) -> bool {
        round.power_up_counter += 1;
        if round.power_up_counter % POWER_UP_INTERVAL_TICKS != 0 {
            return false;
        }
        if power_ups.len() >= MAX_POWER_UPS {
            return false;
        }

        let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
        power_ups.push(PowerUp {
            x: FIELD_WIDTH,
            y: rng.gen_range(0.0..=FIELD_HEIGHT - POWER_UP_HEIGHT),
            kind,
        });
        true
    }

    /// Uniform for the first obstacle of a round, then pushed away from the
    /// previous row by a bounded random offset.
    fn propose_row<R: Rng>(previous: Option<f32>, rng: &mut R) -> f32 {
        let max_row = FIELD_HEIGHT - OBSTACLE_HEIGHT;
        match previous {
            None => rng.gen_range(0.0..=max_row),
            Some(prev) => {
                let offset = rng.gen_range(ROW_BIAS_MIN..=ROW_BIAS_MAX);
                let row = if rng.gen_bool(0.5) {
                    prev + offset
                } else {
                    prev - offset
                };
                row.clamp(0.0, max_row)
            }
        }
    }
}

fn shares_column(a: &Obstacle, b: &Obstacle) -> bool {
    a.x < b.x + OBSTACLE_WIDTH && a.x + OBSTACLE_WIDTH > b.x
}

/// Largest vertical run of free space left by a set of obstacles.
pub fn largest_vertical_gap<'a, I>(column: I) -> f32
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let mut spans: Vec<(f32, f32)> = column
        .into_iter()
        .map(|o| (o.y.max(0.0), (o.y + OBSTACLE_HEIGHT).min(FIELD_HEIGHT)))
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut best = 0.0_f32;
    let mut cursor = 0.0_f32;
    for (top, bottom) in spans {
        if top > cursor {
            best = best.max(top - cursor);
        }
        cursor = cursor.max(bottom);
    }
    best.max(FIELD_HEIGHT - cursor)
}

/// Would adding `candidate` still leave a corridor through its own column
/// and through the column of every obstacle it shares x-range with?
pub fn placement_keeps_gap(obstacles: &[Obstacle], candidate: &Obstacle) -> bool {
    let column_with_candidate = |anchor: &Obstacle| {
        let column = obstacles
            .iter()
            .filter(|o| shares_column(o, anchor))
            .chain(std::iter::once(candidate));
        largest_vertical_gap(column) >= MIN_SAFE_GAP
    };

    column_with_candidate(candidate)
        && obstacles
            .iter()
            .filter(|o| shares_column(o, candidate))
            .all(column_with_candidate)
}

/// Every column crossing an obstacle leaves a corridor for a player.
#[cfg(test)]
pub fn safe_gap_holds(obstacles: &[Obstacle]) -> bool {
    obstacles.iter().all(|anchor| {
        let column = obstacles.iter().filter(|o| shares_column(o, anchor));
        largest_vertical_gap(column) >= MIN_SAFE_GAP
    })
}
