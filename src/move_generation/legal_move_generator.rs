//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves and castling candidates for the side to move,
//! plays each one speculatively, and keeps it only if the mover's king is not
//! attacked afterwards. An empty result marks checkmate or stalemate.

use tracing::{info, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_castling::generate_castling_moves;
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::ChessMove;

impl GameState {
    /// Every legal move for the side to move. Also refreshes the checkmate
    /// and stalemate flags.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        let mover = self.side_to_move;
        let mut candidates =
            generate_pseudo_legal_moves(&self.board, mover, self.en_passant_square);
        generate_castling_moves(self, &mut candidates);

        let saved_en_passant = self.en_passant_square;
        let saved_rights = self.castling_rights;

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            if self.with_move_applied(&mv, |game| game.in_check(mover)) {
                trace!(mv = %mv, "discarded: leaves king attacked");
                continue;
            }
            legal.push(mv);
        }

        self.en_passant_square = saved_en_passant;
        self.castling_rights = saved_rights;

        if legal.is_empty() {
            if self.in_check(mover) {
                self.is_checkmate = true;
                self.is_stalemate = false;
                info!(winner = ?mover.opposite(), "checkmate");
            } else {
                self.is_checkmate = false;
                self.is_stalemate = true;
                info!("stalemate");
            }
        } else {
            self.is_checkmate = false;
            self.is_stalemate = false;
        }

        legal
    }

    /// Runs `query` against the position after `mv`, then takes `mv` back.
    pub(crate) fn with_move_applied<R>(
        &mut self,
        mv: &ChessMove,
        query: impl FnOnce(&GameState) -> R,
    ) -> R {
        self.make_move(mv);
        let result = query(self);
        self.unmake_move();
        result
    }
}
