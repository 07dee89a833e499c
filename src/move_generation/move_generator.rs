//! Error type shared by move generation, move application, and position setup.

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The move is not in the current legal-move set. Nothing was changed.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("layout has no {0:?} king")]
    MissingKing(Color),

    #[error("layout has more than one {0:?} king")]
    MultipleKings(Color),
}
