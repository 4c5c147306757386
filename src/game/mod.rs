//! Board resolution engine: piece drops, four-in-a-row detection, gravity, and
//! the cascade loop that settles a board after every move.

mod board;
mod detect;
mod gravity;
mod player;
mod resolve;
mod score;

pub use board::{Board, Cell, COLS, ROWS};
pub use detect::{detect, CellSet, Detection, DIRECTIONS, RUN_LENGTH};
pub use gravity::collapse;
pub use player::Player;
pub use resolve::{apply_move, resolve_move, stabilize, MoveRequest, Resolution, MAX_PASSES};
pub use score::ScoreTally;
