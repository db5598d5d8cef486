use std::fmt::Write;

use common::games::moles::{HOLE_COUNT, MolesGameState};
use common::games::pong::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH, PongGameState, Player, TOP_PADDLE_Y};
use common::games::puzzle2048::Puzzle2048GameState;
use common::games::queens::{BOARD_SIZE, QueensGameState};
use common::games::snake::{Point, SnakeGameState};
use common::games::tug_of_war::TugOfWarGameState;
use common::games::wordle::WordleGameState;

const PONG_COLUMNS: usize = 40;
const PONG_ROWS: usize = 24;
const ROPE_LENGTH: usize = 21;

pub fn render_2048(state: &Puzzle2048GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score: {}   Best: {}   Moves: {}",
        state.score(),
        state.best_score(),
        state.moves_made()
    );
    out.push_str(&state.grid().to_string());
    if state.is_over() {
        let _ = writeln!(out, "Game over! Highest tile {}. Type r to play again.", state.highest_tile());
    }
    out
}

pub fn render_snake(state: &SnakeGameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Score: {}   Best: {}", state.score, state.best_score);
    let width = state.field_size.width;
    let border = "#".repeat(width + 2);
    let _ = writeln!(out, "{}", border);
    for y in 0..state.field_size.height {
        out.push('#');
        for x in 0..width {
            let p = Point::new(x, y);
            let c = if state.snake.head() == p {
                '@'
            } else if state.snake.contains(&p) {
                'o'
            } else if state.food == Some(p) {
                '*'
            } else {
                ' '
            };
            out.push(c);
        }
        out.push_str("#\n");
    }
    let _ = writeln!(out, "{}", border);
    if let Some(reason) = state.game_end_reason {
        let _ = writeln!(out, "Game over: {}. Type r to play again.", reason);
    }
    out
}

fn to_cell(value: f32, extent: f32, cells: usize) -> usize {
    let scaled = (value / extent * cells as f32).floor();
    (scaled.max(0.0) as usize).min(cells - 1)
}

pub fn render_pong(state: &PongGameState) -> String {
    let arena = state.arena();
    let mut rows = vec![vec![' '; PONG_COLUMNS]; PONG_ROWS];

    let paddles = [
        (Player::Two, TOP_PADDLE_Y),
        (Player::One, state.bottom_paddle_y()),
    ];
    for (player, y) in paddles {
        let row = to_cell(y + PADDLE_HEIGHT / 2.0, arena.y, PONG_ROWS);
        let x = state.paddle_x(player);
        let from = to_cell(x, arena.x, PONG_COLUMNS);
        let to = to_cell(x + PADDLE_WIDTH, arena.x, PONG_COLUMNS);
        for cell in &mut rows[row][from..=to] {
            *cell = '=';
        }
    }

    let ball = state.ball() + BALL_SIZE / 2.0;
    let ball_row = to_cell(ball.y, arena.y, PONG_ROWS);
    let ball_col = to_cell(ball.x, arena.x, PONG_COLUMNS);
    rows[ball_row][ball_col] = 'O';

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Player 2: {}   Player 1: {}   Speed x{:.1}",
        state.score(Player::Two),
        state.score(Player::One),
        state.speed_multiplier()
    );
    let border = format!("+{}+", "-".repeat(PONG_COLUMNS));
    let _ = writeln!(out, "{}", border);
    for row in rows {
        let line: String = row.into_iter().collect();
        let _ = writeln!(out, "|{}|", line);
    }
    let _ = writeln!(out, "{}", border);
    match state.winner() {
        Some(winner) => {
            let _ = writeln!(out, "{} wins! Type r for a rematch.", winner);
        }
        None if !state.is_running() => {
            let _ = writeln!(out, "Type r to serve.");
        }
        None => {}
    }
    out
}

pub fn render_wordle(state: &WordleGameState) -> String {
    let mut out = String::new();
    for guess in state.guesses() {
        let letters: String = guess.word.chars().flat_map(|c| [c, ' ']).collect();
        let marks: String = guess.scores.iter().flat_map(|s| [s.symbol(), ' ']).collect();
        let _ = writeln!(out, "{}  {}", letters.trim_end(), marks.trim_end());
    }
    for _ in state.guesses().len()..state.max_attempts() {
        let _ = writeln!(out, "_ _ _ _ _");
    }
    if state.is_won() {
        let _ = writeln!(out, "You guessed it!");
    } else if state.is_over() {
        let _ = writeln!(out, "The word was {}. Type r for another word.", state.target_word());
    } else {
        let _ = writeln!(out, "{} attempts left. # right spot, + wrong spot, . not in word", state.attempts_left());
    }
    out
}

pub fn render_moles(state: &MolesGameState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score: {}   High score: {}   Time left: {}s",
        state.score(),
        state.best_score(),
        state.seconds_left()
    );
    for row in (0..HOLE_COUNT).collect::<Vec<_>>().chunks(4) {
        let line: Vec<String> = row
            .iter()
            .map(|&hole| {
                if state.active_hole() == Some(hole) {
                    format!("[{}:M]", hole + 1)
                } else {
                    format!("[{}: ]", hole + 1)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    if !state.is_running() {
        let _ = writeln!(out, "Type r to start a round, reset to clear the high score.");
    }
    out
}

pub fn render_tug_of_war(state: &TugOfWarGameState) -> String {
    let position = (state.progress_percent() / 100.0 * (ROPE_LENGTH - 1) as f32).round() as usize;
    let rope: String = (0..ROPE_LENGTH)
        .map(|i| if i == position.min(ROPE_LENGTH - 1) { 'X' } else { '-' })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Player 1 [{}] Player 2   ({})", rope, state.score());
    if let Some(winner) = state.winner() {
        let _ = writeln!(out, "{} wins! Type r to restart.", winner);
    }
    out
}

pub fn render_queens(state: &QueensGameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Queens placed: {}/{}", state.queens_placed(), BOARD_SIZE);
    let header: String = (1..=BOARD_SIZE).map(|c| format!("{} ", c)).collect();
    let _ = writeln!(out, "  {}", header.trim_end());
    for row in 0..BOARD_SIZE {
        let cells: Vec<&str> = (0..BOARD_SIZE)
            .map(|col| {
                if state.board().has_queen(row, col) {
                    "Q"
                } else if state.invalid_cell() == Some((row, col)) {
                    "X"
                } else if (row + col) % 2 == 1 {
                    "."
                } else {
                    " "
                }
            })
            .collect();
        let _ = writeln!(out, "{} {}", row + 1, cells.join(" "));
    }
    if state.is_won() {
        let _ = writeln!(out, "Solved! Type r to reset.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::pong::PongSettings;
    use common::games::puzzle2048::Direction;
    use common::games::tug_of_war::{Side, TugOfWarSettings};

    #[test]
    fn test_tug_rope_marker_moves() {
        let mut state = TugOfWarGameState::new(&TugOfWarSettings::default());
        assert!(render_tug_of_war(&state).contains("----------X----------"));
        for _ in 0..20 {
            state.tap(Side::Top);
        }
        let text = render_tug_of_war(&state);
        assert!(text.contains("[X--------------------]"));
        assert!(text.contains("Player 1 wins!"));
    }

    #[test]
    fn test_queens_marks_queen_and_rejected_cell() {
        let mut state = QueensGameState::new();
        state.toggle(0, 0).unwrap();
        let _ = state.toggle(0, 1);
        let text = render_queens(&state);
        assert!(text.contains("1 Q X"));
    }

    #[test]
    fn test_pong_frame_has_fixed_size() {
        let state = PongGameState::new(&PongSettings::default());
        let text = render_pong(&state);
        assert_eq!(text.lines().count(), PONG_ROWS + 4);
        assert_eq!(text.matches('O').count(), 1);
    }

    #[test]
    fn test_wordle_shows_empty_rows() {
        let mut state = WordleGameState::with_target("CHAIR", 6).unwrap();
        state.submit_guess("CHAIN").unwrap();
        let text = render_wordle(&state);
        assert!(text.starts_with("C H A I N  # # # # ."));
        assert_eq!(text.matches("_ _ _ _ _").count(), 5);
    }

    #[test]
    fn test_wordle_loss_offers_restart() {
        let mut state = WordleGameState::with_target("CHAIR", 2).unwrap();
        state.submit_guess("PLANT").unwrap();
        state.submit_guess("STONE").unwrap();
        let text = render_wordle(&state);
        assert!(text.contains("The word was CHAIR. Type r for another word."));
        assert!(!text.contains("attempts left"));
    }

    #[test]
    fn test_2048_header_counts_moves() {
        let mut rng = SessionRng::new(7);
        let mut state = Puzzle2048GameState::new(0, &mut rng);
        assert!(render_2048(&state).starts_with("Score: 0   Best: 0   Moves: 0"));

        let moved = [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
            .into_iter()
            .any(|direction| state.apply_move(direction, &mut rng));
        assert!(moved);
        assert!(render_2048(&state).contains("Moves: 1\n"));
    }
}
