use tokio::sync::mpsc;
use tokio::time::Instant;

use common::games::moles::{HOLE_COUNT, MolesGameState, MolesUpdate};
use common::games::{GameKind, TickScheduler};
use common::log;

use super::{ArcadeContext, RunnerExit, frame_timer, present};
use crate::input::ShellCommand;
use crate::render::render_moles;

const HELP: &str = "Whack the mole by typing its hole number (1-8), r starts a round, \
reset clears the high score, menu leaves.";
const STEP_MS: u32 = 50;

fn parse_holes(text: &str) -> Vec<usize> {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .filter(|&d| (1..=HOLE_COUNT).contains(&d))
        .map(|d| d - 1)
        .collect()
}

fn save_best(state: &MolesGameState, ctx: &ArcadeContext) {
    ctx.submit_score(GameKind::Moles, u64::from(state.best_score()));
}

/// Whacks every listed hole. A hit that beats the high score is saved at once.
fn whack_holes(state: &mut MolesGameState, ctx: &ArcadeContext, holes: &[usize]) -> bool {
    let mut hit = false;
    for &hole in holes {
        hit |= state.whack(hole);
    }
    if hit {
        save_best(state, ctx);
    }
    hit
}

fn restart_round(state: &mut MolesGameState, scheduler: &mut TickScheduler, ctx: &ArcadeContext) {
    save_best(state, ctx);
    state.start();
    scheduler.reset();
}

pub async fn run(
    mut state: MolesGameState,
    ctx: &mut ArcadeContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    let mut scheduler = TickScheduler::from_millis(u64::from(STEP_MS));
    let mut timer = frame_timer();
    let mut last_frame = Instant::now();

    present(&render_moles(&state));
    println!("{}", HELP);

    let exit = loop {
        tokio::select! {
            now = timer.tick() => {
                let elapsed = now.duration_since(last_frame);
                last_frame = now;
                if !state.is_running() {
                    continue;
                }

                let before = (state.active_hole(), state.seconds_left());
                let mut round_over = None;
                let rng = &mut ctx.rng;
                scheduler.advance(elapsed, |_| {
                    if let MolesUpdate::RoundOver { score, new_best } = state.update(STEP_MS, rng) {
                        round_over = Some((score, new_best));
                    }
                });

                if let Some((score, new_best)) = round_over {
                    save_best(&state, ctx);
                    present(&render_moles(&state));
                    println!("Time's up! You whacked {} moles.", score);
                    if new_best {
                        println!("New high score!");
                    }
                } else if before != (state.active_hole(), state.seconds_left()) {
                    present(&render_moles(&state));
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
                        restart_round(&mut state, &mut scheduler, ctx);
                        present(&render_moles(&state));
                    }
                    ShellCommand::Game(text) if text.eq_ignore_ascii_case("reset") => {
                        if state.is_running() {
                            println!("Finish the round first.");
                            continue;
                        }
                        if let Err(e) = ctx.high_scores.reset(GameKind::Moles) {
                            log!("Failed to reset Whack-a-Mole high score: {}", e);
                        }
                        state.reset_best_score();
                        present(&render_moles(&state));
                    }
                    ShellCommand::Game(text) => {
                        if whack_holes(&mut state, ctx, &parse_holes(&text)) {
                            present(&render_moles(&state));
                        }
                    }
                }
            }
        }
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
    fn test_hole_numbers_are_one_based() {
        assert_eq!(parse_holes("1 8"), vec![0, 7]);
        assert_eq!(parse_holes("09x3"), vec![2]);
    }

    #[test]
    fn test_record_whack_saved_before_restart() {
        init_quiet_logger();
        let path = get_temp_score_path();
        let mut ctx = ArcadeContext::with_score_file(path.clone());
        let mut scheduler = TickScheduler::from_millis(u64::from(STEP_MS));
        let mut state = MolesGameState::new(ctx.settings.moles, 0);
        state.start();

        for expected in 1..=3 {
            state.update(1000, &mut ctx.rng);
            let hole = state.active_hole().expect("a mole is up after a full interval");
            assert!(whack_holes(&mut state, &ctx, &[hole]));
            assert_eq!(ctx.best_score(GameKind::Moles), expected);
        }

        restart_round(&mut state, &mut scheduler, &ctx);
        assert_eq!(
            state.update(20_000, &mut ctx.rng),
            MolesUpdate::RoundOver { score: 0, new_best: false }
        );
        assert_eq!(state.best_score(), 3);
        assert_eq!(ctx.best_score(GameKind::Moles), 3);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missed_whack_saves_nothing() {
        init_quiet_logger();
        let path = get_temp_score_path();
        let ctx = ArcadeContext::with_score_file(path.clone());
        let mut state = MolesGameState::new(ctx.settings.moles, 0);
        state.start();
        assert!(!whack_holes(&mut state, &ctx, &[0, 7]));
        assert_eq!(ctx.best_score(GameKind::Moles), 0);
        assert!(!path.exists());
    }
}
