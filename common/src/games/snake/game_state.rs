use crate::games::session_rng::RandomSource;
use crate::log;

use super::entity::Snake;
use super::types::{Direction, FieldSize, GameEndReason, Point, TickOutcome, WallCollisionMode};

const START_POSITION: Point = Point { x: 5, y: 5 };
const START_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Option<Point>,
    pub field_size: FieldSize,
    pub wall_collision_mode: WallCollisionMode,
    pub score: u32,
    pub best_score: u32,
    pub game_end_reason: Option<GameEndReason>,
}

impl SnakeGameState {
    pub fn new(
        field_size: FieldSize,
        wall_collision_mode: WallCollisionMode,
        best_score: u32,
        rng: &mut impl RandomSource,
    ) -> Self {
        let start = Self::start_position(&field_size);
        let mut state = Self {
            snake: Snake::new(start, START_DIRECTION),
            food: None,
            field_size,
            wall_collision_mode,
            score: 0,
            best_score,
            game_end_reason: None,
        };
        state.restart(rng);
        state
    }

    fn start_position(field_size: &FieldSize) -> Point {
        Point::new(
            START_POSITION.x.min(field_size.width - 1),
            START_POSITION.y.min(field_size.height - 1),
        )
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max { 0 } else { value + 1 }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 { max - 1 } else { value - 1 }
    }

    pub fn restart(&mut self, rng: &mut impl RandomSource) {
        self.snake = Snake::new(Self::start_position(&self.field_size), START_DIRECTION);
        self.score = 0;
        self.game_end_reason = None;
        self.food = None;
        self.spawn_food(rng);
    }

    pub fn is_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    /// Queues a turn for the next tick. Reversing onto the body is ignored.
    pub fn turn(&mut self, direction: Direction) {
        if self.is_over() || direction.is_opposite(&self.snake.direction) {
            return;
        }
        self.snake.pending_direction = Some(direction);
    }

    pub fn update(&mut self, rng: &mut impl RandomSource) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = match self.next_head_position() {
            Ok(point) => point,
            Err(reason) => return self.end_game(reason),
        };

        // the tail has not moved yet, so stepping onto it is fatal too
        if self.snake.contains(&next_head) {
            return self.end_game(GameEndReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            if self.score > self.best_score {
                self.best_score = self.score;
            }
            log!(
                "Snake ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = None;
            if !self.spawn_food(rng) {
                return self.end_game(GameEndReason::BoardFilled);
            }
            return TickOutcome::AteFood;
        }

        self.snake.drop_tail();
        TickOutcome::Moved
    }

    fn end_game(&mut self, reason: GameEndReason) -> TickOutcome {
        self.game_end_reason = Some(reason);
        log!("Snake game over: {} with score {}", reason, self.score);
        TickOutcome::GameOver(reason)
    }

    fn next_head_position(&self) -> Result<Point, GameEndReason> {
        let head = self.snake.head();
        let width = self.field_size.width;
        let height = self.field_size.height;

        match self.wall_collision_mode {
            WallCollisionMode::Death => match self.snake.direction {
                Direction::Up if head.y == 0 => Err(GameEndReason::WallCollision),
                Direction::Down if head.y + 1 >= height => Err(GameEndReason::WallCollision),
                Direction::Left if head.x == 0 => Err(GameEndReason::WallCollision),
                Direction::Right if head.x + 1 >= width => Err(GameEndReason::WallCollision),
                Direction::Up => Ok(Point::new(head.x, head.y - 1)),
                Direction::Down => Ok(Point::new(head.x, head.y + 1)),
                Direction::Left => Ok(Point::new(head.x - 1, head.y)),
                Direction::Right => Ok(Point::new(head.x + 1, head.y)),
            },
            WallCollisionMode::WrapAround => Ok(match self.snake.direction {
                Direction::Up => Point::new(head.x, Self::wrapping_dec(head.y, height)),
                Direction::Down => Point::new(head.x, Self::wrapping_inc(head.y, height)),
                Direction::Left => Point::new(Self::wrapping_dec(head.x, width), head.y),
                Direction::Right => Point::new(Self::wrapping_inc(head.x, width), head.y),
            }),
        }
    }

    /// Places food on a uniformly chosen free cell. Returns `false` when the
    /// snake covers the whole field.
    fn spawn_food(&mut self, rng: &mut impl RandomSource) -> bool {
        let free: Vec<Point> = (0..self.field_size.height)
            .flat_map(|y| (0..self.field_size.width).map(move |x| Point::new(x, y)))
            .filter(|p| !self.snake.contains(p))
            .collect();

        if free.is_empty() {
            self.food = None;
            return false;
        }

        self.food = Some(free[rng.index(free.len())]);
        true
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = Some(food);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::init_quiet_logger;
    use crate::games::session_rng::SessionRng;

    fn create_state(mode: WallCollisionMode) -> (SnakeGameState, SessionRng) {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(
            FieldSize { width: 20, height: 20 },
            mode,
            0,
            &mut rng,
        );
        (state, rng)
    }

    #[test]
    fn test_starts_at_fixed_position_heading_right() {
        init_quiet_logger();
        let (state, _) = create_state(WallCollisionMode::WrapAround);
        assert_eq!(state.snake.head(), Point::new(5, 5));
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.len(), 1);
        let food = state.food.unwrap();
        assert_ne!(food, Point::new(5, 5));
    }

    #[test]
    fn test_moves_one_cell_per_tick() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::WrapAround);
        state.set_food(Point::new(0, 0));
        assert_eq!(state.update(&mut rng), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Point::new(6, 5));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_wraps_around_edges() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::WrapAround);
        state.set_food(Point::new(10, 10));
        state.turn(Direction::Up);
        for _ in 0..6 {
            state.update(&mut rng);
        }
        assert_eq!(state.snake.head(), Point::new(5, 19));
    }

    #[test]
    fn test_wall_death_mode() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::Death);
        state.set_food(Point::new(10, 10));
        state.turn(Direction::Up);
        for _ in 0..5 {
            assert_eq!(state.update(&mut rng), TickOutcome::Moved);
        }
        assert_eq!(
            state.update(&mut rng),
            TickOutcome::GameOver(GameEndReason::WallCollision)
        );
        assert!(state.is_over());
        assert_eq!(state.update(&mut rng), TickOutcome::Idle);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::WrapAround);
        state.set_food(Point::new(6, 5));
        assert_eq!(state.update(&mut rng), TickOutcome::AteFood);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        assert_eq!(state.best_score, 1);
        let food = state.food.unwrap();
        assert!(!state.snake.contains(&food));
    }

    #[test]
    fn test_reverse_turn_is_ignored() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::WrapAround);
        state.set_food(Point::new(0, 0));
        state.turn(Direction::Left);
        state.update(&mut rng);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Point::new(6, 5));
    }

    #[test]
    fn test_self_collision_ends_game() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::WrapAround);
        // grow to length 5 along the row
        for x in 6..10 {
            state.set_food(Point::new(x, 5));
            assert_eq!(state.update(&mut rng), TickOutcome::AteFood);
        }
        state.set_food(Point::new(0, 0));
        state.turn(Direction::Down);
        state.update(&mut rng);
        state.turn(Direction::Left);
        state.update(&mut rng);
        state.turn(Direction::Up);
        assert_eq!(
            state.update(&mut rng),
            TickOutcome::GameOver(GameEndReason::SelfCollision)
        );
    }

    #[test]
    fn test_restart_keeps_best_score() {
        init_quiet_logger();
        let (mut state, mut rng) = create_state(WallCollisionMode::WrapAround);
        state.set_food(Point::new(6, 5));
        state.update(&mut rng);
        state.restart(&mut rng);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 1);
        assert_eq!(state.snake.head(), Point::new(5, 5));
        assert!(!state.is_over());
    }

    #[test]
    fn test_board_filled_ends_game() {
        init_quiet_logger();
        let mut rng = SessionRng::new(1);
        let mut state = SnakeGameState::new(
            FieldSize { width: 2, height: 1 },
            WallCollisionMode::WrapAround,
            0,
            &mut rng,
        );
        // start is clamped to (1, 0), the only free cell holds food
        assert_eq!(state.snake.head(), Point::new(1, 0));
        assert_eq!(state.food, Some(Point::new(0, 0)));
        assert_eq!(
            state.update(&mut rng),
            TickOutcome::GameOver(GameEndReason::BoardFilled)
        );
    }
}
