//! Make/unmake.
//!
//! `make_move` and `unmake_move` are exact inverses and are used both for real
//! play and for the speculative apply/query/undo cycles of the legality
//! filter. `apply_move` and `undo_move` are the checked public entry points.

use tracing::{debug, warn};

use crate::game_state::chess_rules::{castled_rook_square, rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{ChessError, ChessResult};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{is_double_advance, skipped_square};

impl GameState {
    /// Plays `candidate` if it equals a currently legal move.
    ///
    /// The candidate may be a bare move built from two squares; the fully
    /// described legal move it matches is the one applied and returned. An
    /// illegal candidate leaves the state untouched.
    pub fn apply_move(&mut self, candidate: &ChessMove) -> ChessResult<ChessMove> {
        let legal = self.legal_moves();
        let Some(mv) = legal.into_iter().find(|mv| mv == candidate) else {
            warn!(from = %candidate.from, to = %candidate.to, "rejected illegal move");
            return Err(ChessError::IllegalMove {
                from: candidate.from,
                to: candidate.to,
            });
        };

        self.make_move(&mv);
        self.is_checkmate = false;
        self.is_stalemate = false;
        debug!(ply = self.ply_count(), mv = %mv, "applied move");
        Ok(mv)
    }

    /// Takes back the last ply. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let mv = self.unmake_move()?;
        self.is_checkmate = false;
        self.is_stalemate = false;
        debug!(ply = self.ply_count(), mv = %mv, "undid move");
        Some(mv)
    }

    /// Applies `mv` without a legality check and hands the turn over.
    pub(crate) fn make_move(&mut self, mv: &ChessMove) {
        let color = self.side_to_move;

        let moved = self.board.take(mv.from);
        if mv.is_en_passant {
            self.board.take(mv.capture_square());
        }
        let placed = if mv.is_promotion {
            moved.map(|piece| Piece::new(piece.color, PieceKind::Queen))
        } else {
            moved
        };
        self.board.set(mv.to, placed);

        if mv.is_castling {
            let side = castle_side_of(mv);
            let rook = self.board.take(rook_home(color, side));
            self.board.set(castled_rook_square(color, side), rook);
        }

        if moved.is_some_and(|piece| piece.kind == PieceKind::King) {
            self.king_squares[color.index()] = mv.to;
        }

        self.undo_stack.push(UndoState {
            mv: *mv,
            prev_en_passant_square: self.en_passant_square,
        });
        self.en_passant_square = if is_double_advance(mv) {
            Some(skipped_square(mv))
        } else {
            None
        };

        self.castling_rights = rights_after(self.castling_rights, color, mv);
        self.castling_rights_log.push(self.castling_rights);

        self.side_to_move = color.opposite();
    }

    /// Reverts the last `make_move`, restoring every piece of auxiliary state.
    pub(crate) fn unmake_move(&mut self) -> Option<ChessMove> {
        let undo = self.undo_stack.pop()?;
        let mv = undo.mv;
        let color = self.side_to_move.opposite();
        self.side_to_move = color;

        if mv.is_castling {
            let side = castle_side_of(&mv);
            let rook = self.board.take(castled_rook_square(color, side));
            self.board.set(rook_home(color, side), rook);
        }

        self.board.set(mv.to, None);
        self.board.set(mv.capture_square(), mv.captured_piece);
        self.board.set(mv.from, mv.moved_piece);

        if mv.moved_piece.is_some_and(|piece| piece.kind == PieceKind::King) {
            self.king_squares[color.index()] = mv.from;
        }

        self.en_passant_square = undo.prev_en_passant_square;

        self.castling_rights_log.pop();
        if let Some(rights) = self.castling_rights_log.last() {
            self.castling_rights = *rights;
        }

        Some(mv)
    }
}

#[inline]
fn castle_side_of(mv: &ChessMove) -> CastleSide {
    if mv.to.col() > mv.from.col() {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    }
}

/// Rights after `color` plays `mv`: any king move drops both of that side's
/// rights, a rook leaving its home corner drops that corner's right, and a
/// capture on an enemy rook's home corner drops the enemy's right there.
fn rights_after(mut rights: CastlingRights, color: Color, mv: &ChessMove) -> CastlingRights {
    match mv.moved_piece.map(|piece| piece.kind) {
        Some(PieceKind::King) => rights.revoke_all(color),
        Some(PieceKind::Rook) => {
            for side in CastleSide::BOTH {
                if mv.from == rook_home(color, side) {
                    rights.revoke(color, side);
                }
            }
        }
        _ => {}
    }

    let enemy = color.opposite();
    if mv
        .captured_piece
        .is_some_and(|piece| piece.is(enemy, PieceKind::Rook))
    {
        for side in CastleSide::BOTH {
            if mv.to == rook_home(enemy, side) {
                rights.revoke(enemy, side);
            }
        }
    }

    rights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(Color::White, kind))
    }

    fn black(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(Color::Black, kind))
    }

    #[test]
    fn make_then_unmake_restores_the_opening_position() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = game.construct_candidate_move(Square::new(7, 4), Square::new(5, 4));

        game.make_move(&mv);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.en_passant_square(), Some(Square::new(6, 4)));
        assert_eq!(game.board().get(Square::new(5, 4)), white(PieceKind::Pawn));
        assert_eq!(game.castling_rights_history().len(), 2);

        assert_eq!(game.unmake_move(), Some(mv));
        assert_eq!(game, before);
    }

    #[test]
    fn unmake_on_empty_history_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(game.undo_move(), None);
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_places_a_queen_and_unmake_restores_the_pawn() {
        let mut board = Board::empty();
        board.set(Square::new(1, 2), white(PieceKind::Pawn));
        board.set(Square::new(0, 3), black(PieceKind::Hammer));
        board.set(Square::new(9, 9), white(PieceKind::King));
        board.set(Square::new(5, 0), black(PieceKind::King));
        let mut game = GameState::from_parts(
            board,
            Color::White,
            [Square::new(9, 9), Square::new(5, 0)],
            CastlingRights::NONE,
        );
        let before = game.clone();

        let mv = ChessMove::new(Square::new(1, 2), Square::new(0, 3), game.board());
        assert!(mv.is_promotion);
        game.make_move(&mv);
        assert_eq!(game.board().get(Square::new(0, 3)), white(PieceKind::Queen));
        assert!(game.board().is_empty(Square::new(1, 2)));

        game.unmake_move();
        assert_eq!(game, before);
        assert_eq!(game.board().get(Square::new(0, 3)), black(PieceKind::Hammer));
    }

    #[test]
    fn rook_capture_on_home_corner_revokes_the_owner_right() {
        let mut rights = CastlingRights::ALL;
        let mut board = Board::empty();
        board.set(Square::new(5, 9), white(PieceKind::Rook));
        board.set(Square::new(1, 9), black(PieceKind::Rook));
        let mv = ChessMove::new(Square::new(5, 9), Square::new(1, 9), &board);

        rights = rights_after(rights, Color::White, &mv);
        assert!(!rights.has(Color::Black, CastleSide::Kingside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));
        assert!(rights.has(Color::White, CastleSide::Kingside));
    }

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn castling_position() -> GameState {
        let mut board = Board::empty();
        board.set(sq(8, 5), white(PieceKind::King));
        board.set(sq(8, 0), white(PieceKind::Rook));
        board.set(sq(8, 9), white(PieceKind::Rook));
        board.set(sq(1, 5), black(PieceKind::King));
        GameState::from_parts(board, Color::White, [sq(8, 5), sq(1, 5)], CastlingRights::ALL)
    }

    fn play(game: &mut GameState, from: Square, to: Square) -> ChessMove {
        let candidate = game.construct_candidate_move(from, to);
        game.apply_move(&candidate).expect("move should be legal")
    }

    #[test]
    fn illegal_candidate_is_rejected_without_mutation() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let candidate = game.construct_candidate_move(sq(7, 4), sq(4, 4));
        assert_eq!(
            game.apply_move(&candidate),
            Err(ChessError::IllegalMove {
                from: sq(7, 4),
                to: sq(4, 4),
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut game = GameState::new_game();
        play(&mut game, sq(7, 3), sq(5, 3));
        play(&mut game, sq(2, 0), sq(3, 0));
        play(&mut game, sq(5, 3), sq(4, 3));
        play(&mut game, sq(2, 4), sq(4, 4));
        assert_eq!(game.en_passant_square(), Some(sq(3, 4)));
        let before = game.clone();

        let mv = play(&mut game, sq(4, 3), sq(3, 4));
        assert!(mv.is_en_passant);
        assert_eq!(mv.captured_piece, black(PieceKind::Pawn));
        assert!(game.board().is_empty(sq(4, 4)));
        assert_eq!(game.board().get(sq(3, 4)), white(PieceKind::Pawn));
        assert_eq!(game.en_passant_square(), None);

        assert_eq!(game.undo_move(), Some(mv));
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut game = GameState::new_game();
        play(&mut game, sq(7, 3), sq(5, 3));
        play(&mut game, sq(2, 0), sq(3, 0));
        play(&mut game, sq(5, 3), sq(4, 3));
        play(&mut game, sq(2, 4), sq(4, 4));
        play(&mut game, sq(7, 9), sq(6, 9));
        play(&mut game, sq(3, 0), sq(4, 0));

        let candidate = game.construct_candidate_move(sq(4, 3), sq(3, 4));
        assert!(game.apply_move(&candidate).is_err());
    }

    #[test]
    fn en_passant_is_gone_once_the_passed_pawn_advances() {
        let mut game = GameState::new_game();
        play(&mut game, sq(7, 3), sq(5, 3));
        play(&mut game, sq(2, 0), sq(3, 0));
        play(&mut game, sq(5, 3), sq(4, 3));
        play(&mut game, sq(2, 4), sq(4, 4));
        play(&mut game, sq(7, 9), sq(6, 9));
        play(&mut game, sq(4, 4), sq(5, 4));

        assert_eq!(game.en_passant_square(), None);
        let legal = game.legal_moves();
        assert!(legal.iter().all(|mv| !mv.is_en_passant));
        assert!(!legal.contains(&game.construct_candidate_move(sq(4, 3), sq(3, 4))));
    }

    fn boxed_white_king(black_rook: Square) -> GameState {
        let mut board = Board::empty();
        board.set(sq(9, 0), white(PieceKind::King));
        board.set(sq(8, 9), black(PieceKind::Rook));
        board.set(black_rook, black(PieceKind::Rook));
        board.set(sq(0, 5), black(PieceKind::King));
        GameState::from_parts(board, Color::Black, [sq(9, 0), sq(0, 5)], CastlingRights::NONE)
    }

    #[test]
    fn undo_leaves_checkmate_for_the_mover_turn() {
        let mut game = boxed_white_king(sq(6, 8));
        play(&mut game, sq(6, 8), sq(9, 8));

        assert!(game.legal_moves().is_empty());
        assert!(game.is_checkmate());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );

        game.undo_move();
        assert!(!game.is_checkmate());
        assert_eq!(game.status(), GameStatus::AwaitingMove(Color::Black));
        assert!(!game.legal_moves().is_empty());
        assert_eq!(game.status(), GameStatus::AwaitingMove(Color::Black));
    }

    #[test]
    fn undo_leaves_stalemate_for_the_mover_turn() {
        let mut game = boxed_white_king(sq(0, 2));
        play(&mut game, sq(0, 2), sq(0, 1));

        assert!(game.legal_moves().is_empty());
        assert!(game.is_stalemate());
        assert_eq!(game.status(), GameStatus::Stalemate);

        game.undo_move();
        assert!(!game.is_stalemate());
        assert_eq!(game.status(), GameStatus::AwaitingMove(Color::Black));
        assert!(!game.legal_moves().is_empty());
        assert_eq!(game.status(), GameStatus::AwaitingMove(Color::Black));
    }

    #[test]
    fn kingside_castle_moves_both_pieces_and_undo_restores_them() {
        let mut game = castling_position();
        let before = game.clone();

        let mv = play(&mut game, sq(8, 5), sq(8, 8));
        assert!(mv.is_castling);
        assert_eq!(game.board().get(sq(8, 8)), white(PieceKind::King));
        assert_eq!(game.board().get(sq(8, 7)), white(PieceKind::Rook));
        assert!(game.board().is_empty(sq(8, 9)));
        assert_eq!(game.king_square(Color::White), sq(8, 8));
        assert!(!game.castling_rights().has(Color::White, CastleSide::Kingside));
        assert!(!game.castling_rights().has(Color::White, CastleSide::Queenside));

        game.undo_move();
        assert_eq!(game, before);
    }

    #[test]
    fn queenside_castle_puts_the_rook_beside_the_king() {
        let mut game = castling_position();
        play(&mut game, sq(8, 5), sq(8, 1));
        assert_eq!(game.board().get(sq(8, 1)), white(PieceKind::King));
        assert_eq!(game.board().get(sq(8, 2)), white(PieceKind::Rook));
        assert!(game.board().is_empty(sq(8, 0)));
    }

    #[test]
    fn rook_returning_home_does_not_restore_the_right() {
        let mut game = castling_position();
        play(&mut game, sq(8, 9), sq(7, 9));
        play(&mut game, sq(1, 5), sq(1, 4));
        play(&mut game, sq(7, 9), sq(8, 9));
        play(&mut game, sq(1, 4), sq(1, 5));

        assert!(!game.castling_rights().has(Color::White, CastleSide::Kingside));
        assert!(game.castling_rights().has(Color::White, CastleSide::Queenside));
        let castles: Vec<Square> = game
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.is_castling)
            .map(|mv| mv.to)
            .collect();
        assert_eq!(castles, vec![sq(8, 1)]);

        while game.undo_move().is_some() {}
        assert_eq!(game, castling_position());
    }
}
