use tokio::sync::mpsc;
use tokio::time::Instant;

use common::games::TickScheduler;
use common::games::queens::{BOARD_SIZE, PlacementError, QueensGameState};

use super::{RunnerExit, frame_timer, present};
use crate::input::ShellCommand;
use crate::render::render_queens;

const HELP: &str = "Toggle a queen with \"row col\" (1-8 each, e.g. \"3 5\"), r clears the board, menu leaves.";
const HIGHLIGHT_STEP_MS: u32 = 100;

/// Parses a 1-based `row col` pair into 0-based board indices.
fn parse_cell(text: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected \"row col\", got \"{}\"", text));
    };
    let parse = |value: &str| -> Result<usize, String> {
        match value.parse::<usize>() {
            Ok(n) if (1..=BOARD_SIZE).contains(&n) => Ok(n - 1),
            _ => Err(format!("\"{}\" is not a number from 1 to {}", value, BOARD_SIZE)),
        }
    };
    Ok((parse(*row)?, parse(*col)?))
}

pub async fn run(
    mut state: QueensGameState,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    let mut scheduler = TickScheduler::from_millis(u64::from(HIGHLIGHT_STEP_MS));
    let mut timer = frame_timer();
    let mut last_frame = Instant::now();

    present(&render_queens(&state));
    println!("{}", HELP);

    loop {
        tokio::select! {
            now = timer.tick() => {
                let elapsed = now.duration_since(last_frame);
                last_frame = now;

                let highlighted = state.invalid_cell().is_some();
                scheduler.advance(elapsed, |_| state.update(HIGHLIGHT_STEP_MS));
                if highlighted && state.invalid_cell().is_none() {
                    present(&render_queens(&state));
                }
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    return RunnerExit::Quit;
                };
                match ShellCommand::parse(&line) {
                    ShellCommand::Menu => return RunnerExit::Menu,
                    ShellCommand::Quit => return RunnerExit::Quit,
                    ShellCommand::Help => println!("{}", HELP),
                    ShellCommand::Restart => {
                        state.reset();
                        present(&render_queens(&state));
                    }
                    ShellCommand::Game(text) => {
                        let result = parse_cell(&text)
                            .and_then(|(row, col)| state.toggle(row, col).map_err(|e| describe(&e)));
                        present(&render_queens(&state));
                        if let Err(message) = result {
                            println!("{}", message);
                        }
                    }
                }
            }
        }
    }
}

fn describe(error: &PlacementError) -> String {
    match error {
        PlacementError::UnderAttack { row, col } => {
            format!("Square {} {} is attacked by another queen", row + 1, col + 1)
        }
        other => other.to_string(),
    }
}
