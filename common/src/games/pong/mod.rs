mod game_state;
mod settings;
mod types;

pub use game_state::PongGameState;
pub use settings::{
    BALL_SIZE, BALL_SPEED, BOTTOM_PADDLE_OFFSET, MAX_SPEED_MULTIPLIER, PADDLE_HEIGHT, PADDLE_STEP,
    PADDLE_WIDTH, PongSettings, SPEED_UP_INTERVAL_MS, SPEED_UP_STEP, TOP_PADDLE_Y,
};
pub use types::{FrameOutcome, PaddleDirection, Player};
