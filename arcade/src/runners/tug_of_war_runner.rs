use tokio::sync::mpsc;

use common::games::tug_of_war::{Side, TugOfWarGameState};

use super::{RunnerExit, present};
use crate::input::ShellCommand;
use crate::render::render_tug_of_war;

const HELP: &str = "Player 1 pulls with 1, player 2 with 2. Mash as many as you like per line, \
r restarts, menu leaves.";

/// `"1121"` is four taps; otherwise one named side.
fn parse_taps(text: &str) -> Result<Vec<Side>, String> {
    if !text.is_empty() && text.chars().all(|c| c == '1' || c == '2') {
        return Ok(text
            .chars()
            .map(|c| if c == '1' { Side::Top } else { Side::Bottom })
            .collect());
    }
    text.parse::<Side>().map(|side| vec![side])
}

pub async fn run(
    mut state: TugOfWarGameState,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    present(&render_tug_of_war(&state));
    println!("{}", HELP);

    while let Some(line) = lines.recv().await {
        match ShellCommand::parse(&line) {
            ShellCommand::Menu => return RunnerExit::Menu,
            ShellCommand::Quit => return RunnerExit::Quit,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Restart => state.restart(),
            ShellCommand::Game(text) => match parse_taps(&text) {
                Ok(taps) => {
                    for side in taps {
                        if state.tap(side).is_some() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
        }
        present(&render_tug_of_war(&state));
    }
    RunnerExit::Quit
}
