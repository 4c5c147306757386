use tracing::debug;

use super::board::{Board, COLS, ROWS};
use super::detect::{detect, RUN_LENGTH};
use super::gravity::collapse;
use super::player::Player;
use super::score::ScoreTally;
use crate::error::MoveError;

/// Upper bound on clearing passes: every pass removes at least one full run.
pub const MAX_PASSES: usize = ROWS * COLS / RUN_LENGTH;

/// A single move: the column to drop into and who is dropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub column: usize,
    pub player: Player,
}

impl MoveRequest {
    pub fn new(column: usize, player: Player) -> Self {
        MoveRequest { column, player }
    }
}

/// Stable board reached after a move, with everything it scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub board: Board,
    pub scores: ScoreTally,
    /// Number of detect-and-collapse passes that cleared something
    pub passes: usize,
}

/// Clear runs and apply gravity until no run remains, summing the scores of
/// every pass.
pub fn stabilize(board: Board) -> Resolution {
    let mut current = board;
    let mut scores = ScoreTally::new();
    let mut passes = 0;

    loop {
        let detection = detect(&current);
        if detection.is_empty() {
            break;
        }

        passes += 1;
        debug_assert!(passes <= MAX_PASSES, "stabilization exceeded {MAX_PASSES} passes");
        debug!(
            pass = passes,
            cleared = detection.cells.len(),
            red = detection.scores.red,
            yellow = detection.scores.yellow,
            "clearing runs"
        );

        scores += detection.scores;
        current = collapse(&current, &detection.cells);
    }

    Resolution {
        board: current,
        scores,
        passes,
    }
}

/// Drop `player`'s marker into `column` and return the new board.
///
/// The input board is left untouched, including when the move is rejected.
pub fn apply_move(board: &Board, column: usize, player: Player) -> Result<Board, MoveError> {
    let mut next = *board;
    next.drop_piece(column, player)?;
    Ok(next)
}

/// Apply a move and settle the board.
pub fn resolve_move(board: &Board, request: MoveRequest) -> Result<Resolution, MoveError> {
    let dropped = apply_move(board, request.column, request.player)?;
    let resolution = stabilize(dropped);
    debug!(
        column = request.column,
        player = %request.player,
        passes = resolution.passes,
        red = resolution.scores.red,
        yellow = resolution.scores.yellow,
        "move resolved"
    );
    Ok(resolution)
}
