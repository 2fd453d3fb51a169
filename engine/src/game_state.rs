use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::WinningLine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive parse. Unknown values yield `None`; the command
    /// layer treats those as no-ops rather than errors.
    pub fn parse(value: &str) -> Option<Difficulty> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Mark,
    pub game_over: bool,
    pub winner: Option<Mark>,
    pub winning_line: Option<WinningLine>,
    pub difficulty: Difficulty,
    pub moves_history: Vec<usize>,
}

impl GameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            game_over: false,
            winner: None,
            winning_line: None,
            difficulty,
            moves_history: Vec::new(),
        }
    }
}
