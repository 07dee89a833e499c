//! Pseudo-legal move assembly.
//!
//! Walks the board, and for every piece of the requested colour dispatches on
//! its movement archetype. Castling is not produced here: it needs attack
//! queries, which are themselves answered from this list.

use crate::game_state::chess_types::{Board, Color, Piece, Square};
use crate::moves::lane_moves::generate_lane_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::movement::Movement;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::skip_moves::generate_skip_moves;
use crate::moves::slide_moves::generate_slide_moves;
use crate::moves::step_moves::generate_step_moves;

/// Every pseudo-legal move for `color`. `en_passant_square` is only
/// meaningful when `color` is the side to move.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    color: Color,
    en_passant_square: Option<Square>,
) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(128);
    for (from, piece) in board.pieces() {
        if piece.color == color {
            generate_piece_moves(board, from, piece, en_passant_square, &mut out);
        }
    }
    out
}

pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_square: Option<Square>,
    out: &mut Vec<ChessMove>,
) {
    let color = piece.color;
    match piece.kind.movement() {
        Movement::Pawn => generate_pawn_moves(board, from, color, en_passant_square, out),
        Movement::Step(steps) => generate_step_moves(board, from, color, steps, out),
        Movement::Slide(directions) => generate_slide_moves(board, from, color, directions, out),
        Movement::Skip { moves, captures } => {
            generate_skip_moves(board, from, color, moves, captures, out)
        }
        Movement::Lane(rays) => generate_lane_moves(board, from, color, rays, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn opening_position_has_thirty_four_moves_per_side() {
        let board = Board::starting();
        assert_eq!(generate_pseudo_legal_moves(&board, Color::White, None).len(), 34);
        assert_eq!(generate_pseudo_legal_moves(&board, Color::Black, None).len(), 34);
    }

    #[test]
    fn opening_moves_come_from_pawns_and_jumpers_only() {
        let board = Board::starting();
        let movers: Vec<PieceKind> = generate_pseudo_legal_moves(&board, Color::White, None)
            .into_iter()
            .filter_map(|mv| mv.moved_piece.map(|piece| piece.kind))
            .collect();
        let count = |kind| movers.iter().filter(|k| **k == kind).count();
        assert_eq!(count(PieceKind::Pawn), 20);
        assert_eq!(count(PieceKind::Knight), 4);
        assert_eq!(count(PieceKind::Unicorn), 6);
        assert_eq!(count(PieceKind::Eagle), 4);
        assert_eq!(movers.len(), 34);
    }
}
