use crate::board::Board;
use crate::game_rng::GameRng;
use crate::game_state::{Difficulty, Mark};
use crate::win_detector::check_win;

const HARD_MAX_DEPTH: usize = 6;
const MEDIUM_MAX_DEPTH: usize = 3;
const MEDIUM_RANDOM_CHANCE: f64 = 0.3;

/// Picks the bot's next cell, or `None` when the board has no empty cell.
/// Callers rule out finished boards before asking for a move.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    bot_mark: Mark,
    rng: &mut GameRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_CHANCE) {
                calculate_random_move(board, rng)
            } else {
                calculate_minimax_move(board, bot_mark, MEDIUM_MAX_DEPTH)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board, bot_mark, HARD_MAX_DEPTH),
    }
}

fn calculate_random_move(board: &Board, rng: &mut GameRng) -> Option<usize> {
    let available = board.empty_indices();
    rng.choose(&available).copied()
}

/// Depth-bounded search. Ties go to the first maximal cell in ascending
/// index order, so the choice is deterministic.
fn calculate_minimax_move(board: &Board, bot_mark: Mark, max_depth: usize) -> Option<usize> {
    let available = board.empty_indices();
    if available.is_empty() {
        return None;
    }

    let mut board = board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available {
        board.place(index, bot_mark);
        let score = minimax(
            &mut board,
            max_depth - 1,
            max_depth,
            false,
            bot_mark,
            i32::MIN,
            i32::MAX,
        );
        board.place(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Alpha-beta minimax over tentative in-place placements. `depth` counts
/// down; a win found after d plies scores 10 - d for the bot and d - 10 for
/// the human, so faster outcomes dominate slower ones. Exhausted depth and
/// full boards score 0.
fn minimax(
    board: &mut Board,
    depth: usize,
    max_depth: usize,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        let used = (max_depth - depth) as i32;
        return if winner == bot_mark { 10 - used } else { used - 10 };
    }

    if board.is_full() || depth == 0 {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.empty_indices() {
            board.place(index, bot_mark);
            let eval = minimax(board, depth - 1, max_depth, false, bot_mark, alpha, beta);
            board.place(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent = bot_mark.opponent().unwrap();
        let mut min_eval = i32::MAX;
        for index in board.empty_indices() {
            board.place(index, opponent);
            let eval = minimax(board, depth - 1, max_depth, true, bot_mark, alpha, beta);
            board.place(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
