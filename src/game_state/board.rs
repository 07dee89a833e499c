//! Fixed-size 10x10 grid of square contents.

use std::ops::Index;

use crate::game_state::chess_rules::{
    back_row, pawn_start_row, royal_row, BACK_ROW, BOARD_SIZE, ROYAL_ROW,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Square contents indexed `[row][col]`; `None` is an empty square.
///
/// Reads are public. Writes are crate-private so only the game state's
/// make/unmake path (and position setup) can change the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The fixed opening layout.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for col in 0..BOARD_SIZE {
                board.squares[back_row(color) as usize][col] =
                    Some(Piece::new(color, BACK_ROW[col]));
                board.squares[royal_row(color) as usize][col] =
                    Some(Piece::new(color, ROYAL_ROW[col]));
                board.squares[pawn_start_row(color) as usize][col] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Empties `square` and returns whatever stood there.
    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn find(&self, target: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| *piece == target)
            .map(|(square, _)| square)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.row() as usize][square.col() as usize]
    }
}
