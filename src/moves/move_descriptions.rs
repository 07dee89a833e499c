//! The move value type.
//!
//! A `ChessMove` snapshots the moving and captured pieces when it is built so
//! it can be undone exactly. Equality and hashing only look at the origin and
//! destination squares: a bare move built from two clicked squares compares
//! equal to the fully described legal move it names.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// Piece on `from` when the move was built; `None` only for bare
    /// candidates built from an empty origin.
    pub moved_piece: Option<Piece>,
    pub captured_piece: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

impl ChessMove {
    /// Ordinary move or capture. Promotion is derived from the moved piece and
    /// the destination row.
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        let moved_piece = board.get(from);
        let is_promotion = moved_piece.is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && to.row() == promotion_row(piece.color)
        });
        Self {
            from,
            to,
            moved_piece,
            captured_piece: board.get(to),
            is_promotion,
            is_en_passant: false,
            is_castling: false,
        }
    }

    /// Pawn capture onto the en-passant target. The captured pawn stands on
    /// the origin's row in the destination's column, not on `to`.
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        Self {
            captured_piece: board.get(en_passant_victim(from, to)),
            is_en_passant: true,
            ..Self::new(from, to, board)
        }
    }

    /// King half of a castle; the rook relocation is implied.
    pub fn castling(from: Square, to: Square, board: &Board) -> Self {
        Self {
            is_castling: true,
            ..Self::new(from, to, board)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Square the captured piece is removed from.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            en_passant_victim(self.from, self.to)
        } else {
            self.to
        }
    }
}

/// Bare move built from a raw origin/destination pair, for matching against
/// the legal-move list.
#[inline]
pub fn construct_candidate_move(from: Square, to: Square, board: &Board) -> ChessMove {
    ChessMove::new(from, to, board)
}

#[inline]
pub fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::new(from.row(), to.col())
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(captured) = self.captured_piece {
            write!(f, " x{captured}")?;
        }
        if self.is_en_passant {
            write!(f, " e.p.")?;
        }
        if self.is_castling {
            write!(f, " castle")?;
        }
        if self.is_promotion {
            write!(f, " =q")?;
        }
        Ok(())
    }
}
