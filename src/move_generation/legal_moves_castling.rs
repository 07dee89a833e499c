//! Castling candidates for the side to move.
//!
//! A castle is offered when the right is still held, the king and rook stand
//! on their home squares, every square strictly between them is empty, the
//! king is not in check, and no square the king crosses or lands on is
//! attacked. The rook's own path is not attack-checked.

use crate::game_state::chess_rules::{castled_king_square, king_home, rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let color = game_state.side_to_move();
    let board = game_state.board();
    let king_from = king_home(color);
    if game_state.king_square(color) != king_from
        || !board
            .get(king_from)
            .is_some_and(|piece| piece.is(color, PieceKind::King))
    {
        return;
    }

    let enemy = color.opposite();
    let mut king_in_check = None;

    for side in CastleSide::BOTH {
        if !game_state.castling_rights().has(color, side) {
            continue;
        }
        let rook_from = rook_home(color, side);
        if !board
            .get(rook_from)
            .is_some_and(|piece| piece.is(color, PieceKind::Rook))
        {
            continue;
        }
        if !squares_between(king_from, rook_from).all(|square| board.is_empty(square)) {
            continue;
        }

        if *king_in_check.get_or_insert_with(|| is_square_attacked(board, king_from, enemy)) {
            return;
        }

        let king_to = castled_king_square(color, side);
        if king_path(king_from, king_to).any(|square| is_square_attacked(board, square, enemy)) {
            continue;
        }

        out.push(ChessMove::castling(king_from, king_to, board));
    }
}

/// Squares strictly between two squares on the same row.
fn squares_between(a: Square, b: Square) -> impl Iterator<Item = Square> {
    let row = a.row();
    let (low, high) = if a.col() < b.col() {
        (a.col(), b.col())
    } else {
        (b.col(), a.col())
    };
    (low + 1..high).map(move |col| Square::new(row, col))
}

/// Squares the king crosses and lands on, excluding where it starts.
fn king_path(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let step: i8 = if to.col() > from.col() { 1 } else { -1 };
    let distance = from.col().abs_diff(to.col()) as i8;
    (1..=distance).filter_map(move |n| from.offset(0, step * n))
}
