use serde::{Deserialize, Serialize};

use crate::game_state::Mark;

/// A completed triple: the owning mark and the two endpoint cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: usize,
    pub end: usize,
}

impl WinningLine {
    pub fn new(mark: Mark, start: usize, end: usize) -> Self {
        Self { mark, start, end }
    }
}
