//! Text layouts for setting up custom positions.
//!
//! A layout is ten non-empty lines of ten whitespace-separated tokens, row 0
//! first. Each token is a colour letter (`w`/`b`) followed by a kind letter
//! (`p r n b q k e c h a m u`), or `--` for an empty square. Blank lines are
//! ignored so layouts can be written as indented raw strings.

use crate::game_state::chess_rules::{king_home, rook_home, BOARD_SIZE};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{ChessError, ChessResult};

pub const EMPTY_TOKEN: &str = "--";

pub fn parse_layout(layout: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != BOARD_SIZE {
        return Err(ChessError::InvalidLayout(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(ChessError::InvalidLayout(format!(
                "row {row}: expected {BOARD_SIZE} squares, found {}",
                tokens.len()
            )));
        }
        for (col, token) in tokens.into_iter().enumerate() {
            board.set(Square::new(row as u8, col as u8), parse_token(token)?);
        }
    }
    Ok(board)
}

pub fn parse_token(token: &str) -> ChessResult<Option<Piece>> {
    if token == EMPTY_TOKEN {
        return Ok(None);
    }
    let mut chars = token.chars();
    let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidLayout(format!("bad token {token:?}")));
    };
    let color = Color::from_code(color)
        .ok_or_else(|| ChessError::InvalidLayout(format!("bad colour in {token:?}")))?;
    let kind = PieceKind::from_code(kind)
        .ok_or_else(|| ChessError::InvalidLayout(format!("bad piece kind in {token:?}")))?;
    Ok(Some(Piece::new(color, kind)))
}

impl GameState {
    /// Builds a position from layout text.
    ///
    /// Each colour needs exactly one king. A castling right is granted when the
    /// king and the matching rook both stand on their home squares.
    pub fn from_layout(layout: &str, side_to_move: Color) -> ChessResult<Self> {
        let board = parse_layout(layout)?;
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;

        let mut rights = CastlingRights::ALL;
        for color in [Color::White, Color::Black] {
            let king_home_ok = board
                .get(king_home(color))
                .is_some_and(|piece| piece.is(color, PieceKind::King));
            for side in CastleSide::BOTH {
                let rook_home_ok = board
                    .get(rook_home(color, side))
                    .is_some_and(|piece| piece.is(color, PieceKind::Rook));
                if !(king_home_ok && rook_home_ok) {
                    rights.revoke(color, side);
                }
            }
        }

        Ok(Self::from_parts(
            board,
            side_to_move,
            [white_king, black_king],
            rights,
        ))
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let mut kings = board.find(Piece::new(color, PieceKind::King));
    let first = kings.next().ok_or(ChessError::MissingKing(color))?;
    if kings.next().is_some() {
        return Err(ChessError::MultipleKings(color));
    }
    Ok(first)
}
