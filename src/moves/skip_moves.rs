//! Skip-and-capture archetype: cardinal and minister.
//!
//! Quiet moves run along one set of rays and may pass over a single friendly
//! piece per ray. Captures run along the other set and hit the first occupied
//! square, skipping empties.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::movement::Offset;

pub fn generate_skip_moves(
    board: &Board,
    from: Square,
    color: Color,
    moves: &[Offset],
    captures: &[Offset],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in moves {
        let mut skipped_friend = false;
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.color_at(to) {
                None => out.push(ChessMove::new(from, to, board)),
                Some(owner) if owner == color && !skipped_friend => skipped_friend = true,
                Some(_) => break,
            }
            cursor = to;
        }
    }

    for &(d_row, d_col) in captures {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            if let Some(owner) = board.color_at(to) {
                if owner != color {
                    out.push(ChessMove::new(from, to, board));
                }
                break;
            }
            cursor = to;
        }
    }
}
