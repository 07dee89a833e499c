//! Attack and check queries.
//!
//! A square is attacked by a colour when any of that colour's pseudo-legal
//! moves ends on it. Castling is never counted as an attack.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::generate_piece_moves;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut buffer = Vec::with_capacity(32);
    for (from, piece) in board.pieces() {
        if piece.color != attacker_color {
            continue;
        }
        buffer.clear();
        generate_piece_moves(board, from, piece, None, &mut buffer);
        if buffer.iter().any(|mv| mv.to == square) {
            return true;
        }
    }
    false
}

impl GameState {
    #[inline]
    pub fn square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        is_square_attacked(&self.board, square, attacker_color)
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.square_attacked(self.king_square(color), color.opposite())
    }
}
