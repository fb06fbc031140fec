//! Difficulty, cadence and reward constants

/// Obstacle speed in pixels per tick at wave 1
pub const BASE_OBSTACLE_SPEED: f32 = 5.0;
/// Speed added per wave
pub const SPEED_PER_WAVE: f32 = 0.75;
pub const MAX_OBSTACLE_SPEED: f32 = 12.0;

/// Active ticks per wave (10 s at 60 Hz)
pub const WAVE_TICKS: u64 = 600;

/// Obstacle spawn interval at wave 0, shortened by one tick per wave
pub const BASE_SPAWN_INTERVAL_TICKS: u64 = 15;
pub const MIN_SPAWN_INTERVAL_TICKS: u64 = 4;
/// Candidate rows tried before a spawn is skipped
pub const SPAWN_ATTEMPTS: usize = 4;
/// Bounds of the random offset away from the previous obstacle row
pub const ROW_BIAS_MIN: f32 = 60.0;
pub const ROW_BIAS_MAX: f32 = 180.0;
/// Extra clearance on top of player height for the safe corridor
pub const SAFE_GAP_MARGIN: f32 = 20.0;

pub const POWER_UP_INTERVAL_TICKS: u64 = 300;
/// Power-ups drift slower than obstacles
pub const POWER_UP_SPEED_FACTOR: f32 = 0.6;

pub const MAX_OBSTACLES: usize = 40;
pub const MAX_POWER_UPS: usize = 3;

/// Lifetime of shield/speed/freeze effects
pub const EFFECT_DURATION_TICKS: u32 = 300;
/// Obstacle speed multiplier while anyone holds freeze
pub const FREEZE_SLOW_MULTIPLIER: f32 = 0.5;
pub const SCORE_BONUS_POINTS: u32 = 1;

/// Points for 1st, 2nd and 3rd place; lower places earn nothing
pub const PLACEMENT_POINTS: [u32; 3] = [3, 2, 1];

pub const MAX_NAME_LEN: usize = 15;

/// Obstacle spawn interval for a wave.
pub fn spawn_interval_ticks(wave: u32) -> u64 {
    BASE_SPAWN_INTERVAL_TICKS
        .saturating_sub(wave as u64)
        .max(MIN_SPAWN_INTERVAL_TICKS)
}

/// Obstacle speed for a wave, capped.
pub fn obstacle_speed_for_wave(wave: u32) -> f32 {
    let extra = wave.saturating_sub(1) as f32 * SPEED_PER_WAVE;
    (BASE_OBSTACLE_SPEED + extra).min(MAX_OBSTACLE_SPEED)
}

pub fn points_for_place(place: usize) -> u32 {
    place
        .checked_sub(1)
        .and_then(|idx| PLACEMENT_POINTS.get(idx))
        .copied()
        .unwrap_or(0)
}
