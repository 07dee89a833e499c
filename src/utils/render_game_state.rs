//! Text rendering for diagnostics.
//!
//! Uses the same two-character tokens as the layout parser, so a rendered
//! board can be pasted straight back into a test.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::utils::layout_parser::EMPTY_TOKEN;

/// Ten lines of ten tokens, row 0 first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE as u8 {
        let tokens: Vec<String> = (0..BOARD_SIZE as u8)
            .map(|col| token(board.get(Square::new(row, col))))
            .collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}

/// Board with row/column indices plus a status line.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {col} "));
    }
    out.push('\n');

    for (row, line) in render_board(game_state.board()).lines().enumerate() {
        out.push_str(&format!("{row}  {line}\n"));
    }

    out.push_str(&format!("{:?}", game_state.status()));
    if let Some(target) = game_state.en_passant_square() {
        out.push_str(&format!(" en-passant {target}"));
    }
    out
}

fn token(piece: Option<Piece>) -> String {
    piece.map_or_else(|| EMPTY_TOKEN.to_owned(), |piece| piece.to_string())
}
