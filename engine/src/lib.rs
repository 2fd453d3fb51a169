pub mod board;
pub mod bot_controller;
pub mod game_rng;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::calculate_move;
pub use game_rng::GameRng;
pub use game_state::{Difficulty, GameState, Mark};
pub use session::GameSession;
pub use types::WinningLine;
pub use win_detector::{check_win, check_win_with_line};
