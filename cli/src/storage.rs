use std::path::Path;

use engine::GameState;

#[derive(Debug)]
pub enum StorageError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
            StorageError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::ParseError(e)
    }
}

/// `Ok(None)` when no state file exists yet; the caller starts a new game.
pub fn load_state(path: &Path) -> Result<Option<GameState>, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let state = serde_json::from_str(&content)?;
    Ok(Some(state))
}

pub fn save_state(path: &Path, state: &GameState) -> Result<(), StorageError> {
    let content = serde_json::to_string(state)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Difficulty, GameRng, GameSession};
    use std::path::PathBuf;

    fn temp_state_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("tictactoe_state_{}.json", random_number))
    }

    #[test]
    fn test_missing_file_means_no_state() {
        let path = temp_state_path();
        let loaded = load_state(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_state_round_trips_through_disk() {
        let mut session = GameSession::new(Difficulty::Hard, GameRng::new(17));
        session.handle_move(4);
        let state = session.into_state();

        let path = temp_state_path();
        save_state(&path, &state).unwrap();
        let loaded = load_state(&path).unwrap().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_finished_game_round_trips_with_line() {
        let mut state = GameState::new(Difficulty::Medium);
        for (index, mark) in [
            (0, engine::Mark::X),
            (3, engine::Mark::O),
            (1, engine::Mark::X),
            (4, engine::Mark::O),
            (2, engine::Mark::X),
        ] {
            state.board.place(index, mark);
            state.moves_history.push(index);
        }
        state.game_over = true;
        state.winner = Some(engine::Mark::X);
        state.winning_line = Some(engine::WinningLine::new(engine::Mark::X, 0, 2));

        let path = temp_state_path();
        save_state(&path, &state).unwrap();
        let loaded = load_state(&path).unwrap().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, state);
        let line = loaded.winning_line.unwrap();
        assert_eq!((line.start, line.end), (0, 2));
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let path = temp_state_path();
        std::fs::write(&path, "not a state record {").unwrap();
        let result = load_state(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(StorageError::ParseError(_))));
    }
}
