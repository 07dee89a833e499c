use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Single undo record for `make_move` / `unmake_move`.
///
/// The move itself carries the moved and captured pieces; castling rights are
/// restored from the game's rights history, which is pushed every ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub prev_en_passant_square: Option<Square>,
}
