use crate::board::Board;
use crate::game_state::Mark;
use crate::types::WinningLine;

/// The 8 winning triples: rows top to bottom, columns left to right, then
/// the two diagonals. The first matching line in this order is the one
/// reported, so the result is reproducible even on boards with two
/// simultaneous lines.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WIN_LINES {
        let mark = board.cell_at(line[0]);
        if mark == Mark::Empty {
            continue;
        }
        if board.cell_at(line[1]) == mark && board.cell_at(line[2]) == mark {
            return Some(WinningLine::new(mark, line[0], line[2]));
        }
    }
    None
}
