use std::path::Path;

use engine::{GameState, Mark};

const CELL_SIZE: i32 = 100;
const GLYPH_HALF_SIZE: i32 = 30;

fn cell_center(index: usize) -> (i32, i32) {
    let x = (index % 3) as i32 * CELL_SIZE + CELL_SIZE / 2;
    let y = (index / 3) as i32 * CELL_SIZE + CELL_SIZE / 2;
    (x, y)
}

/// 300x300 projection of the game: grid, marks, the winning strike line
/// when one exists, and a status caption. Pure formatting, no feedback
/// into the game.
pub fn render_board(state: &GameState) -> String {
    let mut svg = vec![
        r#"<svg width="300" height="300" xmlns="http://www.w3.org/2000/svg">"#.to_string(),
        r#"<rect width="300" height="300" fill="white" stroke="black" stroke-width="2"/>"#
            .to_string(),
        r#"<line x1="100" y1="0" x2="100" y2="300" stroke="black" stroke-width="2"/>"#.to_string(),
        r#"<line x1="200" y1="0" x2="200" y2="300" stroke="black" stroke-width="2"/>"#.to_string(),
        r#"<line x1="0" y1="100" x2="300" y2="100" stroke="black" stroke-width="2"/>"#.to_string(),
        r#"<line x1="0" y1="200" x2="300" y2="200" stroke="black" stroke-width="2"/>"#.to_string(),
    ];

    for index in 0..9 {
        let (x, y) = cell_center(index);
        let d = GLYPH_HALF_SIZE;
        match state.board.cell_at(index) {
            Mark::X => {
                svg.push(format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="red" stroke-width="4"/>"#,
                    x - d,
                    y - d,
                    x + d,
                    y + d
                ));
                svg.push(format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="red" stroke-width="4"/>"#,
                    x + d,
                    y - d,
                    x - d,
                    y + d
                ));
            }
            Mark::O => {
                svg.push(format!(
                    r#"<circle cx="{}" cy="{}" r="{}" stroke="blue" stroke-width="4" fill="none"/>"#,
                    x, y, d
                ));
            }
            Mark::Empty => {}
        }
    }

    if let Some(line) = state.winning_line {
        let (x1, y1) = cell_center(line.start);
        let (x2, y2) = cell_center(line.end);
        svg.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="green" stroke-width="6" stroke-linecap="round"/>"#,
            x1, y1, x2, y2
        ));
    }

    let status = if state.game_over {
        match state.winner {
            Some(winner) => format!("Game Over - Winner: {:?}", winner),
            None => "Game Over - It's a tie!".to_string(),
        }
    } else {
        format!("Current Player: {:?}", state.current_player)
    };

    svg.push(format!(
        r#"<text x="150" y="280" font-family="Arial" font-size="14" text-anchor="middle">{}</text>"#,
        status
    ));
    svg.push(format!(
        r#"<text x="150" y="296" font-family="Arial" font-size="11" text-anchor="middle">Difficulty: {}</text>"#,
        state.difficulty.as_str()
    ));
    svg.push("</svg>".to_string());

    svg.join("\n")
}

pub fn write_svg(path: &Path, state: &GameState) -> std::io::Result<()> {
    std::fs::write(path, render_board(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Difficulty, WinningLine};

    fn state_with_marks(marks: &[(usize, Mark)]) -> GameState {
        let mut state = GameState::new(Difficulty::Hard);
        for &(index, mark) in marks {
            state.board.place(index, mark);
        }
        state
    }

    #[test]
    fn test_fresh_board_renders_grid_and_caption() {
        let rendered = render_board(&GameState::new(Difficulty::Easy));
        assert!(rendered.starts_with("<svg"));
        assert!(rendered.ends_with("</svg>"));
        assert_eq!(rendered.matches(r#"stroke="black""#).count(), 5);
        assert!(rendered.contains("Current Player: X"));
        assert!(rendered.contains("Difficulty: easy"));
        assert!(!rendered.contains(r#"stroke="red""#));
        assert!(!rendered.contains("circle"));
    }

    #[test]
    fn test_marks_are_drawn_at_cell_centers() {
        let state = state_with_marks(&[(0, Mark::X), (4, Mark::O)]);
        let rendered = render_board(&state);
        // One X is a pair of red strokes, one O is a single circle.
        assert_eq!(rendered.matches(r#"stroke="red""#).count(), 2);
        assert_eq!(rendered.matches("<circle").count(), 1);
        assert!(rendered.contains(r#"cx="150" cy="150""#));
        assert!(rendered.contains(r#"x1="20" y1="20" x2="80" y2="80""#));
    }

    #[test]
    fn test_winning_line_is_struck_through() {
        let mut state = state_with_marks(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        state.game_over = true;
        state.winner = Some(Mark::X);
        state.winning_line = Some(WinningLine::new(Mark::X, 0, 2));

        let rendered = render_board(&state);
        assert!(rendered.contains(r#"x1="50" y1="50" x2="250" y2="50" stroke="green""#));
        assert!(rendered.contains("Game Over - Winner: X"));
    }

    #[test]
    fn test_tie_has_no_strike_line() {
        let mut state = state_with_marks(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        state.game_over = true;

        let rendered = render_board(&state);
        assert!(!rendered.contains(r#"stroke="green""#));
        assert!(rendered.contains("It's a tie!"));
    }

    #[test]
    fn test_write_svg_creates_the_file() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("tictactoe_render_{}.svg", random_number));

        let state = state_with_marks(&[(4, Mark::X)]);
        write_svg(&path, &state).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(content, render_board(&state));
    }
}
