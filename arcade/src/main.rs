mod config;
mod input;
mod menu;
mod render;
mod runners;

use std::path::PathBuf;

use clap::Parser;
use common::games::{GameKind, GameSession, SessionRng};
use common::{HighScoreStore, log, logger};
use tokio::sync::mpsc;

use config::{ArcadeConfig, get_config_manager, resolve_config_path};
use menu::MenuChoice;
use runners::{ArcadeContext, RunnerExit, present, run_session};

#[derive(Parser)]
#[command(name = "arcade", version)]
struct Args {
    /// Config file, defaults to pocket_arcade_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for every random choice, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Game to open directly, by name (2048, pong, wordle, moles, tugofwar, nqueens, snake).
    game: Option<GameKind>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = resolve_config_path(args.config.as_deref());
    let config_manager = get_config_manager(&config_path);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load {}: {}, using defaults", config_path.display(), e);
            ArcadeConfig::default()
        }
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let mut ctx = ArcadeContext {
        settings: config.games,
        high_scores: HighScoreStore::from_yaml_file(config.high_scores_path(&config_path)),
        rng,
    };
    let mut lines = input::spawn_stdin_reader();

    let mut last_game = config.last_game;
    let mut next_game = args.game;
    loop {
        let kind = match next_game.take() {
            Some(kind) => kind,
            None => match choose_game(&ctx, last_game, &mut lines).await {
                Some(kind) => kind,
                None => break,
            },
        };

        last_game = Some(kind);
        if let Err(e) = config_manager.update_config(|c| c.last_game = Some(kind)) {
            log!("Failed to remember last game: {}", e);
        }

        let session = GameSession::new(kind, &ctx.settings, ctx.best_score(kind), &mut ctx.rng);
        if run_session(session, &mut ctx, &mut lines).await == RunnerExit::Quit {
            break;
        }
    }

    log!("Bye");
    Ok(())
}

/// Shows the home menu until a game is picked. `None` means quit.
async fn choose_game(
    ctx: &ArcadeContext,
    last_game: Option<GameKind>,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> Option<GameKind> {
    present(&menu::render_home(&ctx.high_scores));
    if let Some(kind) = last_game {
        println!("Press enter to play {} again.", kind.title());
    }
    while let Some(line) = lines.recv().await {
        if line.trim().is_empty() && last_game.is_some() {
            return last_game;
        }
        match menu::parse_choice(&line) {
            Ok(MenuChoice::Play(kind)) => return Some(kind),
            Ok(MenuChoice::Quit) => return None,
            Err(e) => println!("{}", e),
        }
    }
    None
}
