mod config;
mod storage;
mod svg;

use std::path::Path;

use clap::{Parser, Subcommand};
use engine::{Difficulty, GameRng, GameSession, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play X at a cell index (0-8); the opponent answers in the same turn.
    Move { position: usize },
    /// Discard the current game and start a fresh one.
    Reset,
    /// Set the opponent strength (easy, medium or hard) for future turns.
    Difficulty { level: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::load_config()?;
    let state_path = Path::new(&config.state_file);
    let svg_path = Path::new(&config.svg_file);

    let mut session = match storage::load_state(state_path)? {
        Some(state) => GameSession::from_state(state, GameRng::from_random()),
        None => GameSession::new(config.default_difficulty, GameRng::from_random()),
    };

    match args.command {
        Command::Move { position } => {
            // Range is validated here; the engine treats it as a precondition.
            if position > 8 {
                log!("Ignoring move outside the board: {}", position);
            } else if session.handle_move(position) {
                log!("Move applied at cell {}", position);
            } else {
                log!("Move at cell {} ignored", position);
            }
        }
        Command::Reset => {
            session.reset();
            log!("Game reset, difficulty {}", session.state().difficulty.as_str());
        }
        Command::Difficulty { level } => match Difficulty::parse(&level) {
            Some(difficulty) => {
                session.set_difficulty(difficulty);
                log!("Difficulty set to {}", difficulty.as_str());
            }
            None => {
                log!("Ignoring unknown difficulty: {}", level);
            }
        },
    }

    let state = session.into_state();
    storage::save_state(state_path, &state)?;
    svg::write_svg(svg_path, &state)?;

    Ok(())
}
