//! Text rendering of the board.

use tabletop_tictactoe::{BOARD_LENGTH, Board, Square};

/// Renders `board` with `padding` spaces either side of every cell.
///
/// Rows are separated by a dashed divider and the drawing ends with a blank
/// line:
///
/// ```text
///  X | O | X
/// -----------
///    | X |
/// -----------
///  O |   | O
///
/// ```
pub fn render_board(board: &Board, padding: usize) -> String {
    let pad = " ".repeat(padding);
    let divider = "-".repeat(BOARD_LENGTH * (2 * padding + 1) + 2);

    let mut out = String::new();
    for (row_index, row) in board.rows().enumerate() {
        if row_index != 0 {
            out.push_str(&divider);
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|square| format!("{pad}{}{pad}", symbol(*square)))
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn symbol(square: Square) -> String {
    match square {
        Square::Empty => " ".to_string(),
        Square::Occupied(mark) => mark.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_tictactoe::Game;

    #[test]
    fn test_empty_board() {
        let rendered = render_board(&Board::new(), 1);
        let expected = "   |   |   \n\
                        -----------\n   |   |   \n\
                        -----------\n   |   |   \n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_marks_and_padding() {
        let game = Game::replay([0, 4]).unwrap();
        let rendered = render_board(game.board(), 0);
        assert_eq!(rendered, "X| | \n-----\n |O| \n-----\n | | \n\n");
    }

    #[test]
    fn test_divider_matches_row_width() {
        for padding in 0..4 {
            let rendered = render_board(&Board::new(), padding);
            let lines: Vec<&str> = rendered.lines().collect();
            assert_eq!(lines[0].len(), lines[1].len());
        }
    }
}
