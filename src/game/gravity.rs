use super::board::{Board, Cell, COLS, ROWS};
use super::detect::CellSet;

/// Clear `cells` and let every column settle toward the bottom row.
///
/// Surviving pieces keep their top-to-bottom order within a column; columns are
/// independent of each other.
pub fn collapse(board: &Board, cells: &CellSet) -> Board {
    let mut next = *board;

    for &(row, col) in cells {
        next.set(row, col, Cell::Empty);
    }

    for col in 0..COLS {
        let mut write = ROWS;
        for row in (0..ROWS).rev() {
            let cell = next.get(row, col);
            if cell.is_empty() {
                continue;
            }
            write -= 1;
            if write != row {
                next.set(write, col, cell);
                next.set(row, col, Cell::Empty);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::board_from_diagram;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn column(board: &Board, col: usize) -> Vec<Cell> {
        (0..ROWS)
            .map(|row| board.get(row, col))
            .filter(|cell| !cell.is_empty())
            .collect()
    }

    #[test]
    fn test_empty_set_keeps_settled_board() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            "..Y....",
            "..R.Y..",
            "RYR.YR.",
        ]);
        assert_eq!(collapse(&board, &CellSet::new()), board);
    }

    #[test]
    fn test_cleared_bottom_row_has_nothing_to_drop() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRRRY..",
        ]);
        let cells: CellSet = [(5, 0), (5, 1), (5, 2), (5, 3)].into_iter().collect();
        let expected = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "....Y..",
        ]);
        assert_eq!(collapse(&board, &cells), expected);
    }

    #[test]
    fn test_pieces_above_cleared_cells_fall_in_order() {
        let board = board_from_diagram([
            "..Y....",
            "..R....",
            "..Y....",
            "..R....",
            "..R....",
            "..Y....",
        ]);
        let cells: CellSet = [(3, 2), (4, 2)].into_iter().collect();
        let expected = board_from_diagram([
            ".......",
            ".......",
            "..Y....",
            "..R....",
            "..Y....",
            "..Y....",
        ]);
        assert_eq!(collapse(&board, &cells), expected);
    }

    #[test]
    fn test_input_board_is_untouched() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            "R......",
            "Y......",
        ]);
        let before = board;
        let cells: CellSet = [(5, 0)].into_iter().collect();
        let after = collapse(&board, &cells);
        assert_eq!(board, before);
        assert_eq!(after.get(5, 0), Cell::Red);
        assert_eq!(after.get(4, 0), Cell::Empty);
    }

    #[test]
    fn test_random_collapse_preserves_survivors_and_settles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut board = Board::new();
            let mut cells = CellSet::new();
            for row in 0..ROWS {
                for col in 0..COLS {
                    let cell = match rng.random_range(0..3) {
                        0 => Cell::Empty,
                        1 => Cell::Red,
                        _ => Cell::Yellow,
                    };
                    board.set(row, col, cell);
                    if rng.random_bool(0.25) {
                        cells.insert((row, col));
                    }
                }
            }

            let after = collapse(&board, &cells);
            assert!(after.is_settled());
            for col in 0..COLS {
                let survivors: Vec<Cell> = (0..ROWS)
                    .filter(|&row| !cells.contains(&(row, col)))
                    .map(|row| board.get(row, col))
                    .filter(|cell| !cell.is_empty())
                    .collect();
                assert_eq!(column(&after, col), survivors);
            }
        }
    }
}
