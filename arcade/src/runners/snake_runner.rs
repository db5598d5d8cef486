use tokio::sync::mpsc;
use tokio::time::Instant;

use common::games::snake::{Direction, SnakeGameState, TickOutcome};
use common::games::{GameKind, TickScheduler};

use super::{ArcadeContext, RunnerExit, frame_timer, present};
use crate::input::ShellCommand;
use crate::render::render_snake;

const HELP: &str = "Steer with w/a/s/d, r restarts, menu leaves.";

fn save_best(state: &SnakeGameState, ctx: &ArcadeContext) {
    ctx.submit_score(GameKind::Snake, u64::from(state.best_score));
}

fn restart(state: &mut SnakeGameState, scheduler: &mut TickScheduler, ctx: &mut ArcadeContext) {
    save_best(state, ctx);
    state.restart(&mut ctx.rng);
    scheduler.reset();
}

pub async fn run(
    mut state: SnakeGameState,
    ctx: &mut ArcadeContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    let mut scheduler = TickScheduler::new(ctx.settings.snake.tick_interval());
    let mut timer = frame_timer();
    let mut last_frame = Instant::now();

    present(&render_snake(&state));
    println!("{}", HELP);

    let exit = loop {
        tokio::select! {
            now = timer.tick() => {
                let elapsed = now.duration_since(last_frame);
                last_frame = now;

                let mut changed = false;
                let mut game_over = false;
                let rng = &mut ctx.rng;
                scheduler.advance(elapsed, |_| match state.update(rng) {
                    TickOutcome::Idle => {}
                    TickOutcome::GameOver(_) => {
                        changed = true;
                        game_over = true;
                    }
                    TickOutcome::Moved | TickOutcome::AteFood => changed = true,
                });

                if game_over {
                    save_best(&state, ctx);
                }
                if changed {
                    present(&render_snake(&state));
                }
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    break RunnerExit::Quit;
                };
                match ShellCommand::parse(&line) {
                    ShellCommand::Menu => break RunnerExit::Menu,
                    ShellCommand::Quit => break RunnerExit::Quit,
                    ShellCommand::Help => println!("{}", HELP),
                    ShellCommand::Restart => {
                        restart(&mut state, &mut scheduler, ctx);
                        present(&render_snake(&state));
                    }
                    ShellCommand::Game(text) => {
                        // last valid letter wins
                        let turn = text
                            .chars()
                            .filter_map(|c| c.to_string().parse::<Direction>().ok())
                            .last();
                        if let Some(direction) = turn {
                            state.turn(direction);
                        }
                    }
                }
            }
        }
    };

    save_best(&state, ctx);
    exit
}
