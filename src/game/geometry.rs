//! Play-field bounds and hit-box sizes

/// Play-field width in pixels
pub const FIELD_WIDTH: f32 = 1200.0;
/// Play-field height in pixels
pub const FIELD_HEIGHT: f32 = 600.0;

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 30.0;

pub const OBSTACLE_WIDTH: f32 = 40.0;
pub const OBSTACLE_HEIGHT: f32 = 40.0;

pub const POWER_UP_WIDTH: f32 = 24.0;
pub const POWER_UP_HEIGHT: f32 = 24.0;

/// Where every player is placed at round start (center-bottom)
pub const SPAWN_X: f32 = FIELD_WIDTH / 2.0;
pub const SPAWN_Y: f32 = FIELD_HEIGHT - 50.0;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn player(x: f32, y: f32) -> Self {
        Self::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn obstacle(x: f32, y: f32) -> Self {
        Self::new(x, y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    pub fn power_up(x: f32, y: f32) -> Self {
        Self::new(x, y, POWER_UP_WIDTH, POWER_UP_HEIGHT)
    }

    /// Strict overlap on both axes; shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Clamp a requested player position into the field.
pub fn clamp_player_position(x: f32, y: f32) -> (f32, f32) {
    (
        x.clamp(0.0, FIELD_WIDTH - PLAYER_WIDTH),
        y.clamp(0.0, FIELD_HEIGHT - PLAYER_HEIGHT),
    )
}
