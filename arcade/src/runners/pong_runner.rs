use tokio::sync::mpsc;
use tokio::time::Instant;

use common::games::TickScheduler;
use common::games::pong::{FrameOutcome, PaddleDirection, PongGameState, Player};

use super::{ArcadeContext, RunnerExit, frame_timer, present};
use crate::input::ShellCommand;
use crate::render::render_pong;

const HELP: &str = "Player 1 (bottom) moves with a/d, player 2 (top) with j/l. \
Repeat letters to move further, r serves a new match, menu leaves.";
const REDRAW_INTERVAL_MS: u64 = 100;

fn paddle_command(c: char) -> Option<(Player, PaddleDirection)> {
    match c.to_ascii_lowercase() {
        'a' => Some((Player::One, PaddleDirection::Left)),
        'd' => Some((Player::One, PaddleDirection::Right)),
        'j' => Some((Player::Two, PaddleDirection::Left)),
        'l' => Some((Player::Two, PaddleDirection::Right)),
        _ => None,
    }
}

pub async fn run(
    mut state: PongGameState,
    ctx: &mut ArcadeContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    let frame_ms = ctx.settings.pong.frame_interval_ms;
    let mut physics = TickScheduler::new(ctx.settings.pong.frame_interval());
    let mut redraw = TickScheduler::from_millis(REDRAW_INTERVAL_MS);
    let mut timer = frame_timer();
    let mut last_frame = Instant::now();

    state.start();
    present(&render_pong(&state));
    println!("{}", HELP);

    loop {
        tokio::select! {
            now = timer.tick() => {
                let elapsed = now.duration_since(last_frame);
                last_frame = now;

                let mut event = false;
                physics.advance(elapsed, |_| {
                    if let FrameOutcome::Scored(_) | FrameOutcome::Won(_) = state.update(frame_ms) {
                        event = true;
                    }
                });
                let due = redraw.advance(elapsed, |_| {}) > 0;

                if event || (due && state.is_running()) {
                    present(&render_pong(&state));
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
                        state.start();
                        physics.reset();
                    }
                    ShellCommand::Game(text) => {
                        for (player, direction) in text.chars().filter_map(paddle_command) {
                            state.move_paddle(player, direction);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_keys() {
        assert_eq!(paddle_command('A'), Some((Player::One, PaddleDirection::Left)));
        assert_eq!(paddle_command('l'), Some((Player::Two, PaddleDirection::Right)));
        assert_eq!(paddle_command('x'), None);
    }
}
