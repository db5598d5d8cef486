use tokio::sync::mpsc;

use common::games::wordle::{GuessOutcome, WordleGameState};

use super::{ArcadeContext, RunnerExit, present};
use crate::input::ShellCommand;
use crate::render::render_wordle;

const HELP: &str = "Type a five letter word and press enter, r starts a new word, menu leaves.";

pub async fn run(
    mut state: WordleGameState,
    ctx: &mut ArcadeContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    present(&render_wordle(&state));
    println!("{}", HELP);

    while let Some(line) = lines.recv().await {
        match ShellCommand::parse(&line) {
            ShellCommand::Menu => return RunnerExit::Menu,
            ShellCommand::Quit => return RunnerExit::Quit,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Restart => state.restart(&mut ctx.rng),
            ShellCommand::Game(text) => match state.submit_guess(&text) {
                Ok(GuessOutcome::Won { attempts }) => {
                    present(&render_wordle(&state));
                    println!("Solved in {} of {}. Type r for another word.", attempts, state.max_attempts());
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
        }
        present(&render_wordle(&state));
    }
    RunnerExit::Quit
}
