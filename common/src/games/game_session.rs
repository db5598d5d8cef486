use super::game_kind::GameKind;
use super::game_settings::GameSettings;
use super::moles::MolesGameState;
use super::pong::PongGameState;
use super::puzzle2048::Puzzle2048GameState;
use super::queens::QueensGameState;
use super::session_rng::RandomSource;
use super::snake::SnakeGameState;
use super::tug_of_war::TugOfWarGameState;
use super::wordle::WordleGameState;

/// One running game, whichever it is.
pub enum GameSession {
    Puzzle2048(Puzzle2048GameState),
    Pong(PongGameState),
    Wordle(WordleGameState),
    Moles(MolesGameState),
    TugOfWar(TugOfWarGameState),
    Queens(QueensGameState),
    Snake(SnakeGameState),
}

impl GameSession {
    /// Builds a fresh session for `kind`. `best_score` seeds the games that
    /// track one and is ignored by the rest.
    pub fn new(
        kind: GameKind,
        settings: &GameSettings,
        best_score: u64,
        rng: &mut impl RandomSource,
    ) -> Self {
        let best_u32 = u32::try_from(best_score).unwrap_or(u32::MAX);
        match kind {
            GameKind::Puzzle2048 => GameSession::Puzzle2048(Puzzle2048GameState::new(best_score, rng)),
            GameKind::Pong => GameSession::Pong(PongGameState::new(&settings.pong)),
            GameKind::Wordle => GameSession::Wordle(WordleGameState::new(
                settings.wordle.max_attempts as usize,
                rng,
            )),
            GameKind::Moles => GameSession::Moles(MolesGameState::new(settings.moles, best_u32)),
            GameKind::TugOfWar => GameSession::TugOfWar(TugOfWarGameState::new(&settings.tug_of_war)),
            GameKind::Queens => GameSession::Queens(QueensGameState::new()),
            GameKind::Snake => GameSession::Snake(SnakeGameState::new(
                settings.snake.field_size(),
                settings.snake.wall_collision_mode,
                best_u32,
                rng,
            )),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            GameSession::Puzzle2048(_) => GameKind::Puzzle2048,
            GameSession::Pong(_) => GameKind::Pong,
            GameSession::Wordle(_) => GameKind::Wordle,
            GameSession::Moles(_) => GameKind::Moles,
            GameSession::TugOfWar(_) => GameKind::TugOfWar,
            GameSession::Queens(_) => GameKind::Queens,
            GameSession::Snake(_) => GameKind::Snake,
        }
    }
}
