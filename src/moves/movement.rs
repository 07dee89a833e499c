//! Piece kind to movement archetype dispatch.
//!
//! Every kind except the pawn maps onto one of four parameterised archetypes,
//! so adding a piece means adding a table entry rather than a generator.

use crate::game_state::chess_types::PieceKind;

/// Row/column delta.
pub type Offset = (i8, i8);

pub const ORTHOGONAL: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ALL_DIRECTIONS: [Offset; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KING_STEPS: [Offset; 8] = ALL_DIRECTIONS;

pub const KNIGHT_STEPS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight jumps plus straight three-square leaps.
pub const UNICORN_STEPS: [Offset; 12] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
    (-3, 0),
    (3, 0),
    (0, -3),
    (0, 3),
];

/// Three squares straight, then one or two to either side.
pub const EAGLE_STEPS: [Offset; 16] = [
    (-3, -1),
    (-3, 1),
    (-3, -2),
    (-3, 2),
    (3, -1),
    (3, 1),
    (3, -2),
    (3, 2),
    (-1, -3),
    (1, -3),
    (-2, -3),
    (2, -3),
    (-1, 3),
    (1, 3),
    (-2, 3),
    (2, 3),
];

/// How a piece kind generates destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Forward pushes, diagonal captures, en passant.
    Pawn,
    /// Fixed jumps; lands on empty or enemy squares.
    Step(&'static [Offset]),
    /// Rays that stop at the first occupied square, capturing it if hostile.
    Slide(&'static [Offset]),
    /// Quiet rays along `moves` that may pass one friendly piece per ray, and
    /// captures along `captures` onto the first occupied square.
    Skip {
        moves: &'static [Offset],
        captures: &'static [Offset],
    },
    /// Quiet rays that capture onto squares flanking each empty stop.
    Lane(&'static [Offset]),
}

impl PieceKind {
    pub const fn movement(self) -> Movement {
        match self {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::King => Movement::Step(&KING_STEPS),
            PieceKind::Knight => Movement::Step(&KNIGHT_STEPS),
            PieceKind::Unicorn => Movement::Step(&UNICORN_STEPS),
            PieceKind::Eagle => Movement::Step(&EAGLE_STEPS),
            PieceKind::Rook => Movement::Slide(&ORTHOGONAL),
            PieceKind::Bishop => Movement::Slide(&DIAGONAL),
            PieceKind::Queen => Movement::Slide(&ALL_DIRECTIONS),
            PieceKind::Cardinal => Movement::Skip {
                moves: &DIAGONAL,
                captures: &ORTHOGONAL,
            },
            PieceKind::Minister => Movement::Skip {
                moves: &ORTHOGONAL,
                captures: &DIAGONAL,
            },
            PieceKind::Arrow => Movement::Lane(&DIAGONAL),
            PieceKind::Hammer => Movement::Lane(&ORTHOGONAL),
        }
    }
}
