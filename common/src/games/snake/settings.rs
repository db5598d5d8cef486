use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};
use super::types::{FieldSize, WallCollisionMode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub wall_collision_mode: WallCollisionMode,
}

impl SnakeSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize {
            width: self.field_width as usize,
            height: self.field_height as usize,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval_ms: 150,
            wall_collision_mode: WallCollisionMode::WrapAround,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("Snake field width", self.field_width, 6, 100)?;
        check_range("Snake field height", self.field_height, 6, 100)?;
        check_range("Snake tick interval", self.tick_interval_ms, 50, 5000)?;
        Ok(())
    }
}
