use std::io::BufRead;

use tokio::sync::mpsc;

use common::log;

/// Line-level commands understood by every screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Menu,
    Quit,
    Restart,
    Help,
    Game(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "menu" | "m" | "back" => ShellCommand::Menu,
            "quit" | "q" | "exit" => ShellCommand::Quit,
            "restart" | "r" | "new" => ShellCommand::Restart,
            "help" | "h" | "?" => ShellCommand::Help,
            _ => ShellCommand::Game(trimmed.to_string()),
        }
    }
}

/// Forwards stdin lines to the returned channel until stdin closes.
///
/// Reads on a plain thread so a pending read never holds up runtime shutdown.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    line_rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_words() {
        assert_eq!(ShellCommand::parse(" MENU "), ShellCommand::Menu);
        assert_eq!(ShellCommand::parse("q"), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("r"), ShellCommand::Restart);
        assert_eq!(ShellCommand::parse("?"), ShellCommand::Help);
    }

    #[test]
    fn test_other_lines_go_to_the_game() {
        assert_eq!(ShellCommand::parse(" w "), ShellCommand::Game("w".to_string()));
        assert_eq!(ShellCommand::parse("crane"), ShellCommand::Game("crane".to_string()));
    }
}
