//! The game state machine.
//!
//! `GameState` owns the board together with everything needed to play and take
//! back moves: side to move, the undo stack, king locations, the en-passant
//! target, castling rights with their per-ply history, and the terminal flags
//! set by the last legal-move computation.
//!
//! Move application and undo live in `move_generation::legal_move_apply`,
//! legality filtering in `move_generation::legal_move_generator`.

use crate::game_state::chess_rules::king_home;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{construct_candidate_move, ChessMove};

/// Where the game stands after the most recent legal-move computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Color),
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) undo_stack: Vec<UndoState>,
    pub(crate) king_squares: [Square; 2],
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    /// Rights after every ply, starting with the initial rights.
    pub(crate) castling_rights_log: Vec<CastlingRights>,
    pub(crate) is_checkmate: bool,
    pub(crate) is_stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Opening layout, White to move, all castling rights, no en-passant target.
    pub fn new_game() -> Self {
        Self::from_parts(
            Board::starting(),
            Color::White,
            [king_home(Color::White), king_home(Color::Black)],
            CastlingRights::ALL,
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        king_squares: [Square; 2],
        castling_rights: CastlingRights,
    ) -> Self {
        Self {
            board,
            side_to_move,
            undo_stack: Vec::new(),
            king_squares,
            en_passant_square: None,
            castling_rights,
            castling_rights_log: vec![castling_rights],
            is_checkmate: false,
            is_stalemate: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Rights in force before the first ply and after each ply since.
    pub fn castling_rights_history(&self) -> &[CastlingRights] {
        &self.castling_rights_log
    }

    /// Moves played so far, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = &ChessMove> + '_ {
        self.undo_stack.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.is_stalemate
    }

    pub fn status(&self) -> GameStatus {
        if self.is_checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.is_stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::AwaitingMove(self.side_to_move)
        }
    }

    /// Bare move for matching raw origin/destination input against the legal set.
    pub fn construct_candidate_move(&self, from: Square, to: Square) -> ChessMove {
        construct_candidate_move(from, to, &self.board)
    }
}
