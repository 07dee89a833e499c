//! Crate root module declarations for the Deca Chess rules engine.
//!
//! A 10x10 chess variant with twelve piece kinds. The crate exposes the game
//! state, per-archetype move generation, the legality filter, and a few
//! diagnostics helpers (layout parsing, rendering, perft, random playouts).

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod lane_moves;
    pub mod move_descriptions;
    pub mod movement;
    pub mod pawn_moves;
    pub mod skip_moves;
    pub mod slide_moves;
    pub mod step_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_castling;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod utils {
    pub mod layout_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
