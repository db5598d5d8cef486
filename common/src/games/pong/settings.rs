use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};

pub const PADDLE_WIDTH: f32 = 100.0;
pub const PADDLE_HEIGHT: f32 = 15.0;
pub const BALL_SIZE: f32 = 20.0;
/// Per-frame velocity on each axis at multiplier 1.
pub const BALL_SPEED: f32 = 15.0;
pub const PADDLE_STEP: f32 = 30.0;
pub const TOP_PADDLE_Y: f32 = 30.0;
/// Distance from the arena bottom to the bottom paddle's top edge.
pub const BOTTOM_PADDLE_OFFSET: f32 = 140.0;
pub const SPEED_UP_INTERVAL_MS: u32 = 5000;
pub const SPEED_UP_STEP: f32 = 0.5;
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PongSettings {
    pub arena_width: u32,
    pub arena_height: u32,
    pub winning_score: u32,
    pub frame_interval_ms: u32,
}

impl PongSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_interval_ms))
    }
}

impl Default for PongSettings {
    fn default() -> Self {
        Self {
            arena_width: 400,
            arena_height: 800,
            winning_score: 3,
            frame_interval_ms: 16,
        }
    }
}

impl Validate for PongSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("Pong arena width", self.arena_width, 200, 4000)?;
        check_range("Pong arena height", self.arena_height, 400, 4000)?;
        check_range("Pong winning score", self.winning_score, 1, 99)?;
        check_range("Pong frame interval", self.frame_interval_ms, 5, 200)?;
        Ok(())
    }
}
