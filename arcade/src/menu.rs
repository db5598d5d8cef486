use std::fmt::Write;

use common::HighScoreStore;
use common::config::ConfigContentProvider;
use common::games::GameKind;
use common::version::VERSION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameKind),
    Quit,
}

pub fn render_home<P: ConfigContentProvider>(high_scores: &HighScoreStore<P>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pocket Arcade {}", VERSION);
    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let players = if kind.player_count() > 1 { " (2 players)" } else { "" };
        let _ = write!(out, "  {}. {}{}", i + 1, kind.title(), players);
        if let Ok(best) = high_scores.get(*kind)
            && best > 0
        {
            let _ = write!(out, "   best {}", best);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Pick a game by number or name, q to quit.");
    out
}

/// Accepts a 1-based menu number, a route such as `nqueens`, or a title.
pub fn parse_choice(line: &str) -> Result<MenuChoice, String> {
    let trimmed = line.trim();
    if matches!(trimmed.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(MenuChoice::Quit);
    }
    if let Ok(number) = trimmed.parse::<usize>()
        && (1..=GameKind::ALL.len()).contains(&number)
    {
        return Ok(MenuChoice::Play(GameKind::ALL[number - 1]));
    }
    trimmed.parse::<GameKind>().map(MenuChoice::Play)
}
