use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{DEFAULT_GRID, FRAME_DURATION};
use grid_snake::error::{AssetError, GameError};
use grid_snake::game::GameState;
use grid_snake::input::{InputHandler, PollOutcome};
use grid_snake::logging;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::theme::Theme;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Load colors and glyphs from this JSON theme instead of the built-in one.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here instead of the platform data directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled ({}): {error}", log_path.display());
    }

    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "exiting");
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli) -> Result<(), AppError> {
    let theme = load_theme(cli.theme.as_deref())?;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(DEFAULT_GRID, seed)?,
        None => GameState::new(DEFAULT_GRID)?,
    };

    info!(theme = %theme.name, seed = ?cli.seed, "starting");
    install_panic_hook();
    run(state, &theme)
}

fn load_theme(path: Option<&Path>) -> Result<Theme, AssetError> {
    match path {
        Some(path) => Theme::load(path),
        None => Theme::builtin(),
    }
}

fn run(mut state: GameState, theme: &Theme) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut next_frame = Instant::now();

    loop {
        let frame_input = match input.poll_frame()? {
            PollOutcome::Quit => break,
            PollOutcome::Frame(frame_input) => frame_input,
        };

        state.update(&frame_input)?;
        session.draw(&state, theme)?;

        next_frame += FRAME_DURATION;
        let now = Instant::now();
        if next_frame > now {
            thread::sleep(next_frame - now);
        } else {
            if now - next_frame > FRAME_DURATION {
                warn!(behind = ?(now - next_frame), "frame loop running behind");
            }
            next_frame = now;
        }
    }

    info!(score = state.score(), status = ?state.status, "quit");
    Ok(())
}
