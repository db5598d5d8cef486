mod entity;
mod game_state;
mod settings;
mod types;

pub use entity::Snake;
pub use game_state::SnakeGameState;
pub use settings::SnakeSettings;
pub use types::{Direction, FieldSize, GameEndReason, Point, TickOutcome, WallCollisionMode};
