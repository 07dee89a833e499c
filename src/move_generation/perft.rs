//! Perft node counting.
//!
//! Walks the legal-move tree to a fixed depth with make/unmake and tallies
//! the kinds of leaf moves. Used to pin down move generation in tests and
//! benchmarks.

use crate::game_state::chess_types::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &ChessMove, is_checkmate: bool) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant {
            self.en_passant += 1;
        }
        if mv.is_castling {
            self.castles += 1;
        }
        if mv.is_promotion {
            self.promotions += 1;
        }
        if is_checkmate {
            self.checkmates += 1;
        }
    }
}

/// Counts leaf nodes `depth` plies below `game_state`. The state is restored
/// before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = game_state.legal_moves();
    let terminal = (game_state.is_checkmate, game_state.is_stalemate);
    let mut total = PerftCounts::default();
    for mv in moves {
        game_state.make_move(&mv);
        if depth == 1 {
            let is_checkmate = game_state.in_check(game_state.side_to_move())
                && game_state.legal_moves().is_empty();
            total.record_leaf(&mv, is_checkmate);
        } else {
            total.merge(perft(game_state, depth - 1));
        }
        game_state.unmake_move();
    }
    (game_state.is_checkmate, game_state.is_stalemate) = terminal;
    total
}

/// Legal-move count for each root move, like a perft "divide".
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, usize)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    let moves = game_state.legal_moves();
    let terminal = (game_state.is_checkmate, game_state.is_stalemate);
    for mv in moves {
        game_state.make_move(&mv);
        out.push((mv, perft(game_state, depth - 1).nodes));
        game_state.unmake_move();
    }
    (game_state.is_checkmate, game_state.is_stalemate) = terminal;
    out
}
