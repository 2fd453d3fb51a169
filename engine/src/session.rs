use crate::bot_controller::calculate_move;
use crate::game_rng::GameRng;
use crate::game_state::{Difficulty, GameState, Mark};
use crate::win_detector::check_win_with_line;

/// Drives one game: validates the human's move, applies it, and lets the
/// bot answer within the same transition. The human always plays X.
pub struct GameSession {
    state: GameState,
    rng: GameRng,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            state: GameState::new(difficulty),
            rng,
        }
    }

    pub fn from_state(state: GameState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// One full turn cycle. Returns false when the request was ignored:
    /// the game is already over, or the cell is occupied. Ignored requests
    /// leave the state untouched.
    pub fn handle_move(&mut self, position: usize) -> bool {
        if self.state.game_over {
            return false;
        }
        if self.state.board.cell_at(position) != Mark::Empty {
            return false;
        }

        self.apply_mark(position, Mark::X);
        if self.check_game_over() {
            return true;
        }

        let reply = calculate_move(
            self.state.difficulty,
            &self.state.board,
            Mark::O,
            &mut self.rng,
        );
        if let Some(reply) = reply {
            self.apply_mark(reply, Mark::O);
            self.check_game_over();
        }

        // The human moves next in every continuing game.
        self.state.current_player = Mark::X;
        true
    }

    /// Takes effect on future move selection only; the board is untouched.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
    }

    /// Fresh game; the difficulty setting survives the reset.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.state.difficulty);
    }

    fn apply_mark(&mut self, position: usize, mark: Mark) {
        self.state.board.place(position, mark);
        self.state.moves_history.push(position);
    }

    fn check_game_over(&mut self) -> bool {
        if let Some(line) = check_win_with_line(&self.state.board) {
            self.state.winner = Some(line.mark);
            self.state.winning_line = Some(line);
            self.state.game_over = true;
            return true;
        }
        if self.state.board.is_full() {
            self.state.game_over = true;
            return true;
        }
        false
    }
}
