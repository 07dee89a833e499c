//! Pawn pushes, diagonal captures, and en-passant captures.
//!
//! Promotion is not a separate generation step: `ChessMove::new` flags any
//! pawn move onto the far row, and applying it always yields a queen.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_square: Option<Square>,
    out: &mut Vec<ChessMove>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(ChessMove::new(from, one_step, board));

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step, board));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        match board.color_at(to) {
            Some(owner) if owner != color => out.push(ChessMove::new(from, to, board)),
            None if en_passant_square == Some(to) => {
                out.push(ChessMove::en_passant(from, to, board))
            }
            _ => {}
        }
    }
}

/// True when `mv` is a pawn's two-square opening advance.
#[inline]
pub fn is_double_advance(mv: &ChessMove) -> bool {
    mv.moved_piece.is_some_and(|piece| piece.kind == PieceKind::Pawn)
        && mv.from.row().abs_diff(mv.to.row()) == 2
}

/// The square a double advance skipped over.
#[inline]
pub fn skipped_square(mv: &ChessMove) -> Square {
    Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col())
}
