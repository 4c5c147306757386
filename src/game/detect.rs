//! Four-in-a-row detection.

use std::collections::BTreeSet;

use super::board::{Board, COLS, ROWS};
use super::score::ScoreTally;

/// Length of a scoring window.
pub const RUN_LENGTH: usize = 4;

/// Scan directions as (row step, column step): horizontal, vertical, and the
/// two diagonals. Together with the anchor scan over every cell these cover
/// each line once.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Deduplicated `(row, col)` coordinates, iterated in row-major order.
pub type CellSet = BTreeSet<(usize, usize)>;

/// Result of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Detection {
    pub cells: CellSet,
    pub scores: ScoreTally,
}

impl Detection {
    /// A pass that found nothing means the board is stable.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find every uniform window of [`RUN_LENGTH`] cells on the board.
///
/// Each (anchor, direction) pair whose window matches credits the anchor's
/// owner once, so a run of length `n` scores `n - 3`. Overlapping windows share
/// cells in the returned set but still score independently.
pub fn detect(board: &Board) -> Detection {
    let mut detection = Detection::default();

    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(owner) = board.get(row, col).owner() else {
                continue;
            };

            for &(dr, dc) in &DIRECTIONS {
                if let Some(window) = window_from(board, row, col, dr, dc) {
                    detection.cells.extend(window);
                    detection.scores.credit(owner);
                }
            }
        }
    }

    detection
}

/// Cells of the window starting at (row, col) when every one of them holds the
/// anchor's marker.
fn window_from(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> Option<[(usize, usize); RUN_LENGTH]> {
    let anchor = board.get(row, col);
    let mut window = [(row, col); RUN_LENGTH];

    for (k, slot) in window.iter_mut().enumerate().skip(1) {
        let k = k as isize;
        let r = row.checked_add_signed(dr * k).filter(|&r| r < ROWS)?;
        let c = col.checked_add_signed(dc * k).filter(|&c| c < COLS)?;
        if board.get(r, c) != anchor {
            return None;
        }
        *slot = (r, c);
    }

    Some(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{board_from_diagram, Cell};
    use crate::game::player::Player;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty_board_has_no_runs() {
        let detection = detect(&Board::new());
        assert!(detection.is_empty());
        assert!(detection.scores.is_zero());
    }

    #[test]
    fn test_three_is_not_a_run() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            "...R...",
            "...R...",
            "RRR.YYY",
        ]);
        assert!(detect(&board).is_empty());
    }

    #[test]
    fn test_horizontal_run() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRRRY..",
        ]);
        let detection = detect(&board);
        let expected: CellSet = [(5, 0), (5, 1), (5, 2), (5, 3)].into_iter().collect();
        assert_eq!(detection.cells, expected);
        assert_eq!(detection.scores, ScoreTally { red: 1, yellow: 0 });
    }

    #[test]
    fn test_vertical_run() {
        let board = board_from_diagram([
            ".......",
            ".......",
            "......Y",
            "......Y",
            "......Y",
            "......Y",
        ]);
        let detection = detect(&board);
        assert_eq!(detection.cells.len(), 4);
        assert!(detection.cells.contains(&(2, 6)));
        assert_eq!(detection.scores, ScoreTally { red: 0, yellow: 1 });
    }

    #[test]
    fn test_diagonal_down_right_run() {
        let board = board_from_diagram([
            ".......",
            ".......",
            "R......",
            "YR.....",
            "YYR....",
            "YYYR...",
        ]);
        let detection = detect(&board);
        let expected: CellSet = [(2, 0), (3, 1), (4, 2), (5, 3)].into_iter().collect();
        assert_eq!(detection.cells, expected);
        assert_eq!(detection.scores.red, 1);
        assert_eq!(detection.scores.yellow, 0);
    }

    #[test]
    fn test_diagonal_down_left_run() {
        let board = board_from_diagram([
            ".......",
            ".......",
            "......Y",
            ".....YR",
            "....YRR",
            "...YRRR",
        ]);
        let detection = detect(&board);
        let expected: CellSet = [(2, 6), (3, 5), (4, 4), (5, 3)].into_iter().collect();
        assert_eq!(detection.cells, expected);
        assert_eq!(detection.scores.yellow, 1);
    }

    #[test]
    fn test_five_run_scores_each_window() {
        let board = board_from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".RRRRR.",
        ]);
        let detection = detect(&board);
        assert_eq!(detection.cells.len(), 5);
        assert_eq!(detection.scores.red, 2);
    }

    #[test]
    fn test_crossing_runs_share_cells_but_score_separately() {
        let board = board_from_diagram([
            ".......",
            ".......",
            "...Y...",
            "...Y...",
            "...Y...",
            "YYYYRR.",
        ]);
        let detection = detect(&board);
        // (5, 3) belongs to both runs but is listed once
        assert_eq!(detection.cells.len(), 7);
        assert_eq!(detection.scores, ScoreTally { red: 0, yellow: 2 });
    }

    #[test]
    fn test_detected_cells_lie_in_uniform_windows() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..500 {
            let mut cells = [[Cell::Empty; COLS]; ROWS];
            for row in cells.iter_mut() {
                for cell in row.iter_mut() {
                    *cell = match rng.random_range(0..3) {
                        0 => Cell::Empty,
                        1 => Cell::Red,
                        _ => Cell::Yellow,
                    };
                }
            }
            let board = Board::from_cells(cells);
            let detection = detect(&board);

            let mut windows = 0;
            let mut covered = CellSet::new();
            for row in 0..ROWS {
                for col in 0..COLS {
                    if board.get(row, col).is_empty() {
                        continue;
                    }
                    for &(dr, dc) in &DIRECTIONS {
                        if let Some(window) = window_from(&board, row, col, dr, dc) {
                            windows += 1;
                            covered.extend(window);
                        }
                    }
                }
            }

            assert_eq!(detection.cells, covered);
            assert_eq!(detection.scores.total(), windows);
            for &(r, c) in &detection.cells {
                assert!(board.get(r, c).owner().is_some());
            }
            for player in Player::ALL {
                let owned = detection
                    .cells
                    .iter()
                    .filter(|&&(r, c)| board.get(r, c) == player.to_cell())
                    .count();
                if detection.scores.get(player) > 0 {
                    assert!(owned >= RUN_LENGTH);
                } else {
                    assert_eq!(owned, 0);
                }
            }
        }
    }
}
