//! Lane-capture archetype: arrow (diagonal rays) and hammer (orthogonal rays).
//!
//! The piece glides along each ray while squares are empty and never captures
//! on the ray itself. At every empty stop it may instead strike an enemy on
//! one of the two squares flanking that stop:
//! - diagonal ray `(dr, dc)`: the stop's row neighbour `(dr, 0)` and column
//!   neighbour `(0, dc)`, i.e. one step further split into its components
//! - orthogonal ray: the two squares either side of the ray

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::movement::Offset;

pub fn generate_lane_moves(
    board: &Board,
    from: Square,
    color: Color,
    rays: &[Offset],
    out: &mut Vec<ChessMove>,
) {
    let first = out.len();
    for &(d_row, d_col) in rays {
        let flanks = flanking_offsets(d_row, d_col);
        let mut cursor = from;
        while let Some(stop) = cursor.offset(d_row, d_col) {
            if !board.is_empty(stop) {
                break;
            }
            out.push(ChessMove::new(from, stop, board));

            for (f_row, f_col) in flanks {
                let Some(target) = stop.offset(f_row, f_col) else {
                    continue;
                };
                let hostile = board.color_at(target).is_some_and(|owner| owner != color);
                // Orthogonal lanes can flank the same diagonal neighbour twice.
                if hostile && !out[first..].iter().any(|mv| mv.to == target) {
                    out.push(ChessMove::new(from, target, board));
                }
            }
            cursor = stop;
        }
    }
}

fn flanking_offsets(d_row: i8, d_col: i8) -> [Offset; 2] {
    if d_row != 0 && d_col != 0 {
        [(d_row, 0), (0, d_col)]
    } else {
        [(d_col, d_row), (-d_col, -d_row)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::moves::movement::{DIAGONAL, ORTHOGONAL};

    fn enemy() -> Option<Piece> {
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    }

    #[test]
    fn flanks_are_perpendicular_for_straight_rays() {
        assert_eq!(flanking_offsets(1, 0), [(0, 1), (0, -1)]);
        assert_eq!(flanking_offsets(0, -1), [(-1, 0), (1, 0)]);
        assert_eq!(flanking_offsets(-1, 1), [(-1, 0), (0, 1)]);
    }

    #[test]
    fn arrow_strikes_beside_its_landing_square() {
        let mut board = Board::empty();
        // Ray (-1, 1) from (5, 5) first stops on (4, 6); its flanks are (3, 6) and (4, 7).
        board.set(Square::new(3, 6), enemy());
        let mut out = Vec::new();
        generate_lane_moves(&board, Square::new(5, 5), Color::White, &DIAGONAL, &mut out);

        let captures: Vec<Square> = out
            .iter()
            .filter(|mv| mv.is_capture())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(captures, vec![Square::new(3, 6)]);
    }

    #[test]
    fn arrow_stops_at_an_occupied_diagonal_without_taking_it() {
        let mut board = Board::empty();
        board.set(Square::new(4, 4), enemy());
        let mut out = Vec::new();
        generate_lane_moves(&board, Square::new(5, 5), Color::White, &DIAGONAL, &mut out);
        assert!(out.iter().all(|mv| mv.to != Square::new(4, 4)));
        assert!(out.iter().all(|mv| mv.to.row() >= 5 || mv.to.col() >= 5));
    }

    #[test]
    fn hammer_lists_a_shared_flank_once() {
        let mut board = Board::empty();
        board.set(Square::new(4, 4), enemy());
        let mut out = Vec::new();
        generate_lane_moves(&board, Square::new(5, 5), Color::White, &ORTHOGONAL, &mut out);

        let hits = out.iter().filter(|mv| mv.to == Square::new(4, 4)).count();
        assert_eq!(hits, 1);
        assert_eq!(out.len(), 18 + 1);
    }

    #[test]
    fn hammer_ignores_friendly_flanks() {
        let mut board = Board::empty();
        // Flanks the first stop up the column and the first stop to the left.
        board.set(Square::new(4, 3), Some(Piece::new(Color::White, PieceKind::Rook)));
        let mut out = Vec::new();
        generate_lane_moves(&board, Square::new(5, 4), Color::White, &ORTHOGONAL, &mut out);
        assert!(out.iter().all(|mv| !mv.is_capture()));
        assert_eq!(out.len(), 5 + 4 + 4 + 5);
    }
}
