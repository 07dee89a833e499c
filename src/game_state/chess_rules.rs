//! Fixed rule constants for the 10x10 variant.
//!
//! Board dimension, the starting layout, and the home squares that castling
//! and pawn rules key off.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 10;

/// Outermost row, occupied by the custom pieces at the start.
pub const BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Eagle,
    PieceKind::Cardinal,
    PieceKind::Hammer,
    PieceKind::Arrow,
    PieceKind::Minister,
    PieceKind::Minister,
    PieceKind::Arrow,
    PieceKind::Hammer,
    PieceKind::Cardinal,
    PieceKind::Eagle,
];

/// Row in front of the back row, holding the king and the classical pieces.
pub const ROYAL_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Unicorn,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Unicorn,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 5;

/// How far the king travels when castling on each side.
pub const KINGSIDE_KING_STEP: i8 = 3;
pub const QUEENSIDE_KING_STEP: i8 = -4;

#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 9,
        Color::Black => 0,
    }
}

/// Row holding the king, rooks, and classical pieces at the start.
#[inline]
pub const fn royal_row(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 2,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 9,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(royal_row(color), KING_HOME_COL)
}

#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => Square::new(royal_row(color), 9),
        CastleSide::Queenside => Square::new(royal_row(color), 0),
    }
}

/// Where the king lands after castling on `side`.
#[inline]
pub const fn castled_king_square(color: Color, side: CastleSide) -> Square {
    let step = match side {
        CastleSide::Kingside => KINGSIDE_KING_STEP,
        CastleSide::Queenside => QUEENSIDE_KING_STEP,
    };
    Square::new(royal_row(color), (KING_HOME_COL as i8 + step) as u8)
}

/// Where the rook lands after castling: beside the king, on the king's inner side.
#[inline]
pub const fn castled_rook_square(color: Color, side: CastleSide) -> Square {
    let king = castled_king_square(color, side);
    match side {
        CastleSide::Kingside => Square::new(king.row(), king.col() - 1),
        CastleSide::Queenside => Square::new(king.row(), king.col() + 1),
    }
}
