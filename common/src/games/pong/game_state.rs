//! Two-player paddle game on a rectangular arena.
//!
//! Positions are top-left corners in arena units with y growing downwards.
//! Player one defends the bottom edge, player two the top edge. The ball
//! moves a whole velocity step per frame, so paddle hits are detected by
//! checking whether the ball crossed the paddle surface during the frame
//! rather than only whether it overlaps it afterwards.

use glam::Vec2;

use crate::log;

use super::settings::{
    BALL_SIZE, BALL_SPEED, BOTTOM_PADDLE_OFFSET, MAX_SPEED_MULTIPLIER, PADDLE_HEIGHT, PADDLE_STEP,
    PADDLE_WIDTH, PongSettings, SPEED_UP_INTERVAL_MS, SPEED_UP_STEP, TOP_PADDLE_Y,
};
use super::types::{FrameOutcome, PaddleDirection, Player};

#[derive(Clone, Debug)]
pub struct PongGameState {
    arena: Vec2,
    ball: Vec2,
    velocity: Vec2,
    paddles: [f32; 2],
    scores: [u32; 2],
    speed_multiplier: f32,
    speed_timer_ms: u32,
    winning_score: u32,
    running: bool,
    winner: Option<Player>,
}

impl PongGameState {
    pub fn new(settings: &PongSettings) -> Self {
        let arena = Vec2::new(settings.arena_width as f32, settings.arena_height as f32);
        let centered_paddle = (arena.x - PADDLE_WIDTH) / 2.0;
        Self {
            arena,
            ball: arena / 2.0,
            velocity: Vec2::splat(BALL_SPEED),
            paddles: [centered_paddle; 2],
            scores: [0; 2],
            speed_multiplier: 1.0,
            speed_timer_ms: 0,
            winning_score: settings.winning_score,
            running: false,
            winner: None,
        }
    }

    /// Starts a new match: scores cleared, ball served from the centre.
    pub fn start(&mut self) {
        self.reset_ball();
        self.scores = [0; 2];
        self.winner = None;
        self.speed_timer_ms = 0;
        self.running = true;
    }

    fn reset_ball(&mut self) {
        self.ball = self.arena / 2.0;
        self.velocity = Vec2::splat(BALL_SPEED);
        self.speed_multiplier = 1.0;
    }

    pub fn move_paddle(&mut self, player: Player, direction: PaddleDirection) {
        let max_x = self.arena.x - PADDLE_WIDTH;
        let paddle = &mut self.paddles[player.index()];
        *paddle = (*paddle + PADDLE_STEP * direction.sign()).clamp(0.0, max_x);
    }

    /// Advances one frame of `frame_ms` milliseconds.
    pub fn update(&mut self, frame_ms: u32) -> FrameOutcome {
        if !self.running {
            return FrameOutcome::Idle;
        }

        self.speed_timer_ms += frame_ms;
        while self.speed_timer_ms >= SPEED_UP_INTERVAL_MS {
            self.speed_timer_ms -= SPEED_UP_INTERVAL_MS;
            self.speed_multiplier = (self.speed_multiplier + SPEED_UP_STEP).min(MAX_SPEED_MULTIPLIER);
        }

        self.step_ball()
    }

    fn step_ball(&mut self) -> FrameOutcome {
        let prev = self.ball;
        let mut next = prev + self.velocity * self.speed_multiplier;
        let mut velocity = self.velocity;

        if next.x <= 0.0 || next.x + BALL_SIZE >= self.arena.x {
            velocity.x = -velocity.x;
            next.x = if next.x <= 0.0 { 0.0 } else { self.arena.x - BALL_SIZE };
        }

        let bottom_y = self.bottom_paddle_y();
        let bottom_x = self.paddles[Player::One.index()];
        if prev.y + BALL_SIZE <= bottom_y && next.y + BALL_SIZE >= bottom_y {
            if Self::overlaps_paddle(next.x, bottom_x) {
                velocity.y = -velocity.y;
                next.y = bottom_y - BALL_SIZE;
            }
        } else if next.y + BALL_SIZE >= bottom_y
            && next.y <= bottom_y + PADDLE_HEIGHT
            && Self::overlaps_paddle(next.x, bottom_x)
        {
            velocity.y = -velocity.y;
            next.y = bottom_y - BALL_SIZE;
        }

        let top_surface = TOP_PADDLE_Y + PADDLE_HEIGHT;
        let top_x = self.paddles[Player::Two.index()];
        if prev.y >= top_surface && next.y <= top_surface {
            if Self::overlaps_paddle(next.x, top_x) {
                velocity.y = -velocity.y;
                next.y = top_surface;
            }
        } else if next.y <= top_surface
            && next.y + BALL_SIZE >= TOP_PADDLE_Y
            && Self::overlaps_paddle(next.x, top_x)
        {
            velocity.y = -velocity.y;
            next.y = top_surface;
        }

        if next.y + BALL_SIZE > self.arena.y {
            return self.award_point(Player::Two);
        }
        if next.y < 0.0 {
            return self.award_point(Player::One);
        }

        self.ball = next;
        self.velocity = velocity;
        FrameOutcome::Moved
    }

    fn overlaps_paddle(ball_x: f32, paddle_x: f32) -> bool {
        ball_x + BALL_SIZE >= paddle_x && ball_x <= paddle_x + PADDLE_WIDTH
    }

    fn award_point(&mut self, player: Player) -> FrameOutcome {
        let score = &mut self.scores[player.index()];
        *score += 1;
        let score = *score;
        self.reset_ball();
        log!(
            "{} scores, {} - {}",
            player,
            self.scores[Player::One.index()],
            self.scores[Player::Two.index()]
        );

        if score >= self.winning_score {
            self.winner = Some(player);
            self.running = false;
            log!("{} wins the match", player);
            return FrameOutcome::Won(player);
        }
        FrameOutcome::Scored(player)
    }

    pub fn bottom_paddle_y(&self) -> f32 {
        self.arena.y - BOTTOM_PADDLE_OFFSET
    }

    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    pub fn ball(&self) -> Vec2 {
        self.ball
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn paddle_x(&self, player: Player) -> f32 {
        self.paddles[player.index()]
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[cfg(test)]
    fn place_ball(&mut self, position: Vec2, velocity: Vec2) {
        self.ball = position;
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::init_quiet_logger;

    fn started() -> PongGameState {
        let mut state = PongGameState::new(&PongSettings::default());
        state.start();
        state
    }

    #[test]
    fn test_idle_until_started() {
        init_quiet_logger();
        let mut state = PongGameState::new(&PongSettings::default());
        assert_eq!(state.update(16), FrameOutcome::Idle);
        assert_eq!(state.ball(), Vec2::new(200.0, 400.0));
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        init_quiet_logger();
        let mut state = started();
        assert_eq!(state.update(16), FrameOutcome::Moved);
        assert_eq!(state.ball(), Vec2::new(215.0, 415.0));
    }

    #[test]
    fn test_side_wall_reflects_and_clamps() {
        init_quiet_logger();
        let mut state = started();
        state.place_ball(Vec2::new(375.0, 300.0), Vec2::new(15.0, 15.0));
        state.update(16);
        assert_eq!(state.ball().x, 380.0);
        assert_eq!(state.velocity().x, -15.0);

        state.place_ball(Vec2::new(10.0, 300.0), Vec2::new(-15.0, 15.0));
        state.update(16);
        assert_eq!(state.ball().x, 0.0);
        assert_eq!(state.velocity().x, 15.0);
    }

    #[test]
    fn test_bottom_paddle_catches_crossing_ball() {
        init_quiet_logger();
        let mut state = started();
        // paddle surface at 660, ball bottom at 650 crosses to 665 this frame
        state.place_ball(Vec2::new(185.0, 630.0), Vec2::new(15.0, 15.0));
        assert_eq!(state.update(16), FrameOutcome::Moved);
        assert_eq!(state.ball().y, 640.0);
        assert_eq!(state.velocity().y, -15.0);
    }

    #[test]
    fn test_fast_ball_does_not_tunnel_through_paddle() {
        init_quiet_logger();
        let mut state = started();
        // a 75 unit step jumps clean over the 15 unit paddle
        state.place_ball(Vec2::new(185.0, 600.0), Vec2::new(0.0, 75.0));
        state.update(16);
        assert_eq!(state.ball().y, 640.0);
        assert!(state.velocity().y < 0.0);
    }

    #[test]
    fn test_top_paddle_catches_crossing_ball() {
        init_quiet_logger();
        let mut state = started();
        state.place_ball(Vec2::new(185.0, 55.0), Vec2::new(15.0, -15.0));
        state.update(16);
        assert_eq!(state.ball().y, 45.0);
        assert_eq!(state.velocity().y, 15.0);
    }

    #[test]
    fn test_missed_ball_scores_for_opponent() {
        init_quiet_logger();
        let mut state = started();
        state.move_paddle(Player::One, PaddleDirection::Left);
        for _ in 0..5 {
            state.move_paddle(Player::One, PaddleDirection::Left);
        }
        assert_eq!(state.paddle_x(Player::One), 0.0);

        state.place_ball(Vec2::new(300.0, 770.0), Vec2::new(0.0, 15.0));
        assert_eq!(state.update(16), FrameOutcome::Scored(Player::Two));
        assert_eq!(state.score(Player::Two), 1);
        assert_eq!(state.ball(), Vec2::new(200.0, 400.0));

        state.place_ball(Vec2::new(5.0, 5.0), Vec2::new(0.0, -15.0));
        assert_eq!(state.update(16), FrameOutcome::Scored(Player::One));
        assert_eq!(state.score(Player::One), 1);
    }

    #[test]
    fn test_third_point_wins_and_stops() {
        init_quiet_logger();
        let mut state = started();
        for _ in 0..2 {
            state.place_ball(Vec2::new(5.0, 5.0), Vec2::new(0.0, -15.0));
            state.update(16);
        }
        state.place_ball(Vec2::new(5.0, 5.0), Vec2::new(0.0, -15.0));
        assert_eq!(state.update(16), FrameOutcome::Won(Player::One));
        assert_eq!(state.winner(), Some(Player::One));
        assert!(!state.is_running());
        assert_eq!(state.update(16), FrameOutcome::Idle);

        state.start();
        assert_eq!(state.score(Player::One), 0);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_speed_multiplier_ramps_and_caps() {
        init_quiet_logger();
        let mut state = started();
        state.update(SPEED_UP_INTERVAL_MS);
        assert_eq!(state.speed_multiplier(), 1.5);
        for _ in 0..20 {
            state.update(SPEED_UP_INTERVAL_MS);
        }
        assert!(state.speed_multiplier() <= MAX_SPEED_MULTIPLIER);
    }

    #[test]
    fn test_paddle_clamped_to_arena() {
        init_quiet_logger();
        let mut state = started();
        for _ in 0..20 {
            state.move_paddle(Player::Two, PaddleDirection::Right);
        }
        assert_eq!(state.paddle_x(Player::Two), 300.0);
        assert_eq!(state.paddle_x(Player::One), 150.0);
    }
}
