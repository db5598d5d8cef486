use tokio::sync::mpsc;

use common::games::GameKind;
use common::games::puzzle2048::{Direction, Puzzle2048GameState};

use super::{ArcadeContext, RunnerExit, present};
use crate::input::ShellCommand;
use crate::render::render_2048;

const HELP: &str = "Swipe with w/a/s/d (several per line, e.g. \"wwad\"), r restarts, menu leaves.";

/// A whole word like `left`, otherwise one direction per character.
fn parse_moves(text: &str) -> Result<Vec<Direction>, String> {
    if let Ok(direction) = text.parse::<Direction>() {
        return Ok(vec![direction]);
    }
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string().parse::<Direction>())
        .collect()
}

/// Stores the session best; the store ignores anything that is not a record.
fn save_best(state: &Puzzle2048GameState, ctx: &ArcadeContext) {
    ctx.submit_score(GameKind::Puzzle2048, state.best_score());
}

fn restart(state: &mut Puzzle2048GameState, ctx: &mut ArcadeContext) {
    save_best(state, ctx);
    state.restart(&mut ctx.rng);
}

pub async fn run(
    mut state: Puzzle2048GameState,
    ctx: &mut ArcadeContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    present(&render_2048(&state));
    println!("{}", HELP);

    let exit = loop {
        let Some(line) = lines.recv().await else {
            break RunnerExit::Quit;
        };
        match ShellCommand::parse(&line) {
            ShellCommand::Menu => break RunnerExit::Menu,
            ShellCommand::Quit => break RunnerExit::Quit,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Restart => restart(&mut state, ctx),
            ShellCommand::Game(text) => match parse_moves(&text) {
                Ok(moves) => {
                    for direction in moves {
                        if state.apply_move(direction, &mut ctx.rng) && state.is_over() {
                            save_best(&state, ctx);
                            break;
                        }
                    }
                }
                Err(e) => {
                    println!("{}. {}", e, HELP);
                    continue;
                }
            },
        }
        present(&render_2048(&state));
    };

    save_best(&state, ctx);
    exit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::get_temp_score_path;
    use common::logger::init_quiet_logger;

    #[test]
    fn test_parse_word_and_letters() {
        assert_eq!(parse_moves("left"), Ok(vec![Direction::Left]));
        assert_eq!(
            parse_moves("wd s"),
            Ok(vec![Direction::Up, Direction::Right, Direction::Down])
        );
        assert!(parse_moves("wx").is_err());
    }

    #[test]
    fn test_restart_saves_session_best() {
        init_quiet_logger();
        let path = get_temp_score_path();
        let mut ctx = ArcadeContext::with_score_file(path.clone());
        let mut state = Puzzle2048GameState::new(0, &mut ctx.rng);
        let directions = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
        while state.score() == 0 && !state.is_over() {
            for direction in directions {
                state.apply_move(direction, &mut ctx.rng);
            }
        }
        let best = state.best_score();
        assert!(best > 0);

        restart(&mut state, &mut ctx);
        assert_eq!(state.score(), 0);
        assert_eq!(state.best_score(), best);
        assert_eq!(ctx.best_score(GameKind::Puzzle2048), best);
        let _ = std::fs::remove_file(path);
    }
}
