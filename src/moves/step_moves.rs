//! Step-list archetype: king, knight, unicorn, eagle.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::movement::Offset;

/// Pushes a move to every on-board offset not held by `color`'s own pieces.
/// Jumps ignore whatever stands in between.
pub fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    steps: &[Offset],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in steps {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.color_at(to) != Some(color) {
            out.push(ChessMove::new(from, to, board));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::moves::movement::{EAGLE_STEPS, KNIGHT_STEPS, UNICORN_STEPS};

    fn targets(board: &Board, from: Square, steps: &[Offset]) -> Vec<Square> {
        let mut out = Vec::new();
        generate_step_moves(board, from, Color::White, steps, &mut out);
        out.into_iter().map(|mv| mv.to).collect()
    }

    #[test]
    fn eagle_in_the_centre_reaches_all_sixteen_squares() {
        let board = Board::empty();
        assert_eq!(targets(&board, Square::new(4, 4), &EAGLE_STEPS).len(), 16);
    }

    #[test]
    fn eagle_in_the_corner_only_keeps_on_board_squares() {
        let board = Board::empty();
        let mut got = targets(&board, Square::new(9, 0), &EAGLE_STEPS);
        got.sort();
        assert_eq!(
            got,
            vec![
                Square::new(6, 1),
                Square::new(6, 2),
                Square::new(7, 3),
                Square::new(8, 3),
            ]
        );
    }

    #[test]
    fn unicorn_leaps_over_blockers_and_captures_enemies() {
        let mut board = Board::empty();
        let from = Square::new(5, 5);
        board.set(Square::new(4, 5), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(Square::new(2, 5), Some(Piece::new(Color::Black, PieceKind::Rook)));
        board.set(Square::new(5, 8), Some(Piece::new(Color::White, PieceKind::Rook)));

        let mut out = Vec::new();
        generate_step_moves(&board, from, Color::White, &UNICORN_STEPS, &mut out);

        let capture = out.iter().find(|mv| mv.to == Square::new(2, 5)).copied();
        assert_eq!(
            capture.and_then(|mv| mv.captured_piece),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert!(out.iter().all(|mv| mv.to != Square::new(5, 8)));
        assert_eq!(out.len(), 11);
    }

    #[test]
    fn knight_on_the_edge_drops_off_board_jumps() {
        let board = Board::empty();
        assert_eq!(targets(&board, Square::new(0, 0), &KNIGHT_STEPS).len(), 2);
        assert_eq!(targets(&board, Square::new(0, 5), &KNIGHT_STEPS).len(), 4);
    }
}
