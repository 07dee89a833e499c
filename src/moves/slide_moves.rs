//! Sliding-ray archetype: rook, bishop, queen.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::movement::Offset;

pub fn generate_slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Offset],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<ChessMove>,
) {
    let mut cursor = from;
    while let Some(to) = cursor.offset(d_row, d_col) {
        match board.color_at(to) {
            None => out.push(ChessMove::new(from, to, board)),
            Some(owner) => {
                if owner != color {
                    out.push(ChessMove::new(from, to, board));
                }
                break;
            }
        }
        cursor = to;
    }
}
