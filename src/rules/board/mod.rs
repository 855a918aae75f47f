//! Contains the `Board`: piece placement plus the state needed to judge the next move
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::*;

use Color::*;
use PieceKind::*;

mod fen;
pub mod zobrist;
pub use fen::START_FEN;
pub use zobrist::Zobrist;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Castling availability as four independent flags. A flag, once cleared, is never set again
/// during play.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    /// White may castle king side (`K`)
    pub white_king_side: bool,
    /// White may castle queen side (`Q`)
    pub white_queen_side: bool,
    /// Black may castle king side (`k`)
    pub black_king_side: bool,
    /// Black may castle queen side (`q`)
    pub black_queen_side: bool,
}

impl CastlingRights {
    /// All four rights, as at the start of a game
    pub fn all() -> CastlingRights {
        CastlingRights {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    /// No rights at all
    pub fn none() -> CastlingRights {
        CastlingRights::default()
    }

    /// Returns the right for `color` on the king side (`king_side == true`) or queen side
    pub fn get(self, color: Color, king_side: bool) -> bool {
        match (color, king_side) {
            (White, true) => self.white_king_side,
            (White, false) => self.white_queen_side,
            (Black, true) => self.black_king_side,
            (Black, false) => self.black_queen_side,
        }
    }

    /// Clears a single right
    pub fn clear(&mut self, color: Color, king_side: bool) {
        match (color, king_side) {
            (White, true) => self.white_king_side = false,
            (White, false) => self.white_queen_side = false,
            (Black, true) => self.black_king_side = false,
            (Black, false) => self.black_queen_side = false,
        }
    }

    /// Returns `true` if no right remains
    pub fn is_empty(self) -> bool {
        self == CastlingRights::none()
    }

    /// Returns the original square of the rook involved in castling on the given side
    pub fn rook_home(color: Color, king_side: bool) -> Position {
        Position::new(color.home_row(), if king_side { 7 } else { 0 })
    }

    /// Returns the original square of the king
    pub fn king_home(color: Color) -> Position {
        Position::new(color.home_row(), 4)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An 8x8 grid of pieces together with castling rights and the en passant target.
///
/// The board also carries the active color and the two FEN counters. They are stored so that a
/// position read from FEN can be written back unchanged; the move commander never touches them,
/// callers advance them with [`finish_ply`](#method.finish_ply).
///
/// `Clone` copies the whole fixed-size grid, so a clone is a fully independent board. Use
/// [`deep_copy`](#method.deep_copy) before simulating a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    castling: CastlingRights,
    en_passant: Option<Position>,
    active: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Board {
    /// Returns a board without pieces, castling rights or en passant target, white to move
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            castling: CastlingRights::none(),
            en_passant: None,
            active: White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Returns the standard starting position
    pub fn start_positions() -> Board {
        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for color in &[White, Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.grid[color.home_row() as usize][col] = Some(Piece::new(*kind, *color));
                board.grid[color.pawn_row() as usize][col] = Some(Piece::new(Pawn, *color));
            }
        }
        board.castling = CastlingRights::all();

        board
    }

    /// Returns the piece at `pos`, or `None` if the square is empty or off the board
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.grid[pos.row() as usize][pos.col() as usize]
        } else {
            None
        }
    }

    /// Returns `true` if `pos` is on the board and empty
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.in_bounds() && self.piece_at(pos).is_none()
    }

    /// Puts `piece` on `pos`, replacing whatever was there. No legality checking is done.
    pub fn place_piece(&mut self, pos: Position, piece: Piece) {
        if pos.in_bounds() {
            self.grid[pos.row() as usize][pos.col() as usize] = Some(piece);
        }
    }

    /// Clears `pos`, returning the piece that stood there
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.grid[pos.row() as usize][pos.col() as usize].take()
        } else {
            None
        }
    }

    /// Moves the occupant of `from` to `to`, overwriting anything on `to`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoPieceAtOrigin` if `from` is empty.
    pub fn update_position(&mut self, from: Position, to: Position) -> Result<()> {
        let piece = self.remove_piece(from).ok_or(Error::NoPieceAtOrigin(from))?;
        self.place_piece(to, piece);

        Ok(())
    }

    /// Clears the castling rights affected by `mv`: both rights of a side whose king moves, and
    /// the right tied to a rook corner that the move leaves or lands on. A rook captured on its
    /// original square can never castle, so landing on a corner counts too.
    pub fn update_castling_rights(&mut self, mv: &Move) {
        if mv.piece().is(King) {
            self.castling.clear(mv.piece().color, true);
            self.castling.clear(mv.piece().color, false);
        }

        for sq in &[mv.from(), mv.to()] {
            for color in &[White, Black] {
                for king_side in &[true, false] {
                    let home = CastlingRights::rook_home(*color, *king_side);
                    if home.rank() == sq.rank() && home.file() == sq.file() {
                        self.castling.clear(*color, *king_side);
                    }
                }
            }
        }
    }

    /// Resets the en passant target, then sets it to the passed-over square if `mv` is a
    /// two-square pawn advance
    pub fn update_en_passant_target(&mut self, mv: &Move) {
        self.en_passant = None;

        if mv.piece().is(Pawn) && mv.is_double_advance() {
            let mid = (mv.from().row() + mv.to().row()) / 2;
            self.en_passant = Some(Position::new(mid, mv.from().col()));
        }
    }

    /// Returns the square of `color`'s king, or `None` if there is no king or more than one
    pub fn find_king(&self, color: Color) -> Option<Position> {
        let mut kings = Position::all()
            .filter(|pos| self.piece_at(*pos) == Some(Piece::new(King, color)));

        match (kings.next(), kings.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// Returns every piece of `color` with its square, a8 first
    pub fn find_all_pieces(&self, color: Color) -> Vec<(Position, Piece)> {
        Position::all()
            .filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    /// Returns every piece on the board with its square, a8 first
    pub fn pieces(&self) -> Vec<(Position, Piece)> {
        Position::all()
            .filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
            .collect()
    }

    /// Returns an independent copy of the board for simulating moves
    pub fn deep_copy(&self) -> Board {
        self.clone()
    }

    /// Returns the castling rights
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Replaces the castling rights
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// Returns the en passant target square, if any
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    /// Sets or clears the en passant target square
    pub fn set_en_passant_target(&mut self, target: Option<Position>) {
        self.en_passant = target;
    }

    /// Returns the two-square pawn advance the en passant target implies, if there is a target.
    ///
    /// This lets positions loaded from FEN, which carry no move history, allow en passant.
    pub fn implied_prior_ply(&self) -> Option<PriorPly> {
        let target = self.en_passant?;

        [White, Black].iter()
            .find(|color| target.row() == color.pawn_row() + color.forward())
            .map(|color| PriorPly {
                piece: Piece::new(Pawn, *color),
                from: Position::new(color.pawn_row(), target.col()),
                to: target.offset(color.forward(), 0),
                double_advance: true,
            })
    }

    /// Returns the color to move
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Sets the color to move
    pub fn set_active_color(&mut self, color: Color) {
        self.active = color;
    }

    /// Returns the number of plies since the last pawn move or capture
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Returns the move number, starting at 1 and incremented after black moves
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Sets both FEN counters
    pub fn set_counters(&mut self, halfmove_clock: u32, fullmove_number: u32) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Advances the counters and passes the turn after `mv` has been executed
    pub fn finish_ply(&mut self, mv: &Move) {
        if mv.piece().is(Pawn) || mv.captured().is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.active == Black {
            self.fullmove_number += 1;
        }
        self.active = !self.active;
    }

    /// Returns `true` if a draw can be claimed under the fifty-move rule
    pub fn fifty_moves(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Returns the repetition key of the position: placement, active color, castling rights and
    /// en passant target, but not the counters
    pub fn position_key(&self) -> Zobrist {
        Zobrist::of(self)
    }

    /// Returns the board as printable symbols, rank 8 first, with `.` for empty squares
    pub fn to_display_grid(&self) -> [[char; 8]; 8] {
        let mut grid = [['.'; 8]; 8];
        for (pos, piece) in self.pieces() {
            grid[pos.row() as usize][pos.col() as usize] = piece.symbol();
        }

        grid
    }
}

impl Default for Board {
    /// Returns the standard starting position
    fn default() -> Self {
        Board::start_positions()
    }
}

impl fmt::Display for Board {
    /// Writes out the board using FEN
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen_fields().fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    #[test]
    fn start_positions_has_32_pieces() {
        let board = Board::start_positions();
        assert_eq!(board.pieces().len(), 32);
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::new(King, White)));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(Queen, Black)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.castling_rights(), CastlingRights::all());
    }

    #[test]
    fn off_board_squares_are_empty() {
        let board = Board::start_positions();
        assert_eq!(board.piece_at(Position::new(-1, 3)), None);
        assert!(!board.is_empty_at(Position::new(8, 3)));
    }

    mod update_position {
        use super::*;

        #[test]
        fn moves_the_piece() {
            let mut board = Board::start_positions();
            board.update_position(sq("g1"), sq("f3")).expect("knight present");
            assert_eq!(board.piece_at(sq("g1")), None);
            assert_eq!(board.piece_at(sq("f3")), Some(Piece::new(Knight, White)));
        }

        #[test]
        fn overwrites_the_destination() {
            let mut board = Board::start_positions();
            board.update_position(sq("d1"), sq("d7")).expect("queen present");
            assert_eq!(board.piece_at(sq("d7")), Some(Piece::new(Queen, White)));
            assert_eq!(board.find_all_pieces(Black).len(), 15);
        }

        #[test]
        fn empty_origin_is_an_error() {
            let mut board = Board::start_positions();
            assert_eq!(board.update_position(sq("e4"), sq("e5")),
                       Err(Error::NoPieceAtOrigin(sq("e4"))));
        }
    }

    mod castling_rights {
        use super::*;

        fn mv(board: &Board, from: &str, to: &str) -> Move {
            Move::infer(board, sq(from), sq(to), None).expect("valid move")
        }

        #[test]
        fn king_move_clears_both_sides() {
            let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
            let m = mv(&board, "e1", "f1");
            board.update_castling_rights(&m);
            assert!(!board.castling_rights().white_king_side);
            assert!(!board.castling_rights().white_queen_side);
            assert!(board.castling_rights().black_king_side);
            assert!(board.castling_rights().black_queen_side);
        }

        #[test]
        fn rook_move_clears_one_side() {
            let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
            let m = mv(&board, "a1", "a5");
            board.update_castling_rights(&m);
            assert!(board.castling_rights().white_king_side);
            assert!(!board.castling_rights().white_queen_side);
        }

        #[test]
        fn capturing_a_home_rook_clears_its_side() {
            let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
            let m = mv(&board, "h1", "h8");
            board.update_castling_rights(&m);
            assert!(!board.castling_rights().white_king_side);
            assert!(!board.castling_rights().black_king_side);
            assert!(board.castling_rights().black_queen_side);
        }

        #[test]
        fn other_moves_leave_rights_alone() {
            let mut board = Board::start_positions();
            let m = mv(&board, "b1", "c3");
            board.update_castling_rights(&m);
            assert_eq!(board.castling_rights(), CastlingRights::all());
        }
    }

    mod en_passant_target {
        use super::*;

        #[test]
        fn double_advance_sets_passed_square() {
            let mut board = Board::start_positions();
            let m = Move::infer(&board, sq("e2"), sq("e4"), None).unwrap();
            board.update_en_passant_target(&m);
            assert_eq!(board.en_passant_target(), Some(sq("e3")));
        }

        #[test]
        fn any_other_move_resets_it() {
            let mut board = Board::start_positions();
            board.set_en_passant_target(Some(sq("e3")));
            let m = Move::infer(&board, sq("e7"), sq("e6"), None).unwrap();
            board.update_en_passant_target(&m);
            assert_eq!(board.en_passant_target(), None);
        }

        #[test]
        fn target_implies_the_prior_ply() {
            let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
            let prior = board.implied_prior_ply().expect("target present");
            assert_eq!(prior.piece, Piece::new(Pawn, Black));
            assert_eq!(prior.from, sq("d7"));
            assert_eq!(prior.to, sq("d5"));
            assert!(prior.double_advance);
        }
    }

    #[test]
    fn find_king_tolerates_degenerate_boards() {
        let board: Board = "8/8/8/8/8/8/8/K6K w - - 0 1".parse().unwrap();
        assert_eq!(board.find_king(White), None);
        assert_eq!(board.find_king(Black), None);
        assert_eq!(Board::start_positions().find_king(Black), Some(sq("e8")));
    }

    #[test]
    fn deep_copy_is_independent() {
        let board = Board::start_positions();
        let mut copy = board.deep_copy();
        copy.remove_piece(sq("e2"));
        copy.set_en_passant_target(Some(sq("e3")));
        assert_eq!(board.piece_at(sq("e2")), Some(Piece::new(Pawn, White)));
        assert_eq!(board.en_passant_target(), None);
        assert_ne!(board, copy);
    }

    #[test]
    fn finish_ply_advances_counters() {
        let mut board = Board::start_positions();
        let knight = Move::infer(&board, sq("g1"), sq("f3"), None).unwrap();
        board.finish_ply(&knight);
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (1, 1));
        assert_eq!(board.active_color(), Black);

        let pawn = Move::infer(&board, sq("e7"), sq("e5"), None).unwrap();
        board.finish_ply(&pawn);
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (0, 2));
        assert_eq!(board.active_color(), White);
    }

    #[test]
    fn display_grid_is_rank_major() {
        let grid = Board::start_positions().to_display_grid();
        assert_eq!(grid[0].iter().collect::<String>(), "rnbqkbnr");
        assert_eq!(grid[4].iter().collect::<String>(), "........");
        assert_eq!(grid[7].iter().collect::<String>(), "RNBQKBNR");
    }
}
