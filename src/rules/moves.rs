//! Contains structures to represent moves
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use lazy_static::lazy_static;
use regex::Regex;
use super::*;
use PieceKind::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The facts about the previous ply that en passant legality depends on.
///
/// Moves carry this by value instead of pointing at the previous `Move`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PriorPly {
    /// The piece that moved
    pub piece: Piece,
    /// Where it came from
    pub from: Position,
    /// Where it landed
    pub to: Position,
    /// `true` if it was a two-square pawn advance
    pub double_advance: bool,
}

impl From<&Move> for PriorPly {
    fn from(mv: &Move) -> Self {
        PriorPly {
            piece: mv.piece,
            from: mv.from,
            to: mv.to,
            double_advance: mv.double_advance,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One ply: a piece moving from one square to another, with the context validators need.
///
/// A `Move` makes no claim to be legal. Build one with [`new`](#method.new) and the `with_*`
/// methods, or let [`infer`](#method.infer) read the context from a board, then check it with
/// [`validator::move_legal`](../validator/fn.move_legal.html).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Position,
    piece: Piece,
    captured: Option<Piece>,
    castling_rook: Option<Position>,
    promotion: Option<PieceKind>,
    double_advance: bool,
    previous: Option<PriorPly>,
}

impl Move {
    /// Creates a move of `piece` from `from` to `to` with no further context.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` if either square is off the board.
    pub fn new(from: Position, to: Position, piece: Piece) -> Result<Move> {
        Ok(Move {
            from: from.checked()?,
            to: to.checked()?,
            piece,
            captured: None,
            castling_rook: None,
            promotion: None,
            double_advance: false,
            previous: None,
        })
    }

    /// Creates a move from algebraic square names such as `"e2"` and `"e4"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` naming the square that is not recognized.
    pub fn from_algebraic(from: &str, to: &str, piece: Piece) -> Result<Move> {
        Move::new(from.parse()?, to.parse()?, piece)
    }

    /// Creates the move of whatever stands on `from` to `to`, reading the captured piece
    /// (including an en passant victim), castling rook, double advance and previous ply from
    /// `board`. The move is not validated.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` for off-board squares and `Error::NoPieceAtOrigin` if
    /// `from` is empty.
    pub fn infer(board: &Board, from: Position, to: Position, promotion: Option<PieceKind>)
        -> Result<Move>
    {
        let from = from.checked()?;
        let to = to.checked()?;
        let piece = board.piece_at(from).ok_or(Error::NoPieceAtOrigin(from))?;
        let mut mv = Move::new(from, to, piece)?;

        mv.captured = board.piece_at(to).filter(|p| p.color != piece.color);
        mv.previous = board.implied_prior_ply();

        match piece.kind {
            Pawn => {
                let d_row = to.row() - from.row();
                mv.double_advance = d_row.abs() == 2 && from.col() == to.col();

                // a diagonal step onto the empty target square captures the pawn beside it
                if from.col() != to.col() && mv.captured.is_none()
                    && board.en_passant_target() == Some(to) {
                    mv.captured = board.piece_at(Position::new(from.row(), to.col()))
                        .filter(|p| p.is(Pawn) && p.color != piece.color);
                }
                mv.promotion = promotion;
            },
            King if from.row() == to.row() && (to.col() - from.col()).abs() == 2 => {
                let king_side = to.col() > from.col();
                mv.castling_rook = Some(Position::new(from.row(), if king_side { 7 } else { 0 }));
            },
            _ => mv.promotion = promotion,
        }

        Ok(mv)
    }

    /// Returns the move with the captured piece set
    pub fn with_capture(mut self, captured: Piece) -> Move {
        self.captured = Some(captured);
        self
    }

    /// Returns the move marked as castling with the rook on `rook`
    pub fn with_castling_rook(mut self, rook: Position) -> Move {
        self.castling_rook = Some(rook);
        self
    }

    /// Returns the move with a promotion piece chosen
    pub fn with_promotion(mut self, kind: PieceKind) -> Move {
        self.promotion = Some(kind);
        self
    }

    /// Returns the move marked as a two-square pawn advance
    pub fn with_double_advance(mut self) -> Move {
        self.double_advance = true;
        self
    }

    /// Returns the move with the previous ply attached
    pub fn after(mut self, previous: Option<PriorPly>) -> Move {
        self.previous = previous;
        self
    }

    /// Returns the origin square
    pub fn from(&self) -> Position {
        self.from
    }

    /// Returns the destination square
    pub fn to(&self) -> Position {
        self.to
    }

    /// Returns the moving piece
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Returns the color of the moving piece
    pub fn color(&self) -> Color {
        self.piece.color
    }

    /// Returns the captured piece, if any
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Returns the square of the rook a castling move involves
    pub fn castling_rook(&self) -> Option<Position> {
        self.castling_rook
    }

    /// Returns the chosen promotion piece, if any
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns the previous ply, if known
    pub fn previous(&self) -> Option<PriorPly> {
        self.previous
    }

    /// Returns `true` for a two-square pawn advance, whether flagged or evident from the squares
    pub fn is_double_advance(&self) -> bool {
        self.double_advance
            || (self.piece.is(Pawn) && (self.to.row() - self.from.row()).abs() == 2
                && self.to.col() == self.from.col())
    }

    /// Returns `true` if this is a king moving two files along its rank
    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
            || (self.piece.is(King) && self.from.row() == self.to.row()
                && (self.to.col() - self.from.col()).abs() == 2)
    }

    /// Returns `true` if the move is a capture
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    /// Writes the move in coordinate notation, e.g. `e2e4` or `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            s.push(kind.letter().to_ascii_lowercase());
        }

        s.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
lazy_static! {
    static ref COORDINATES: Regex =
        Regex::new(r"^([a-h][1-8])[-x]?([a-h][1-8])(?:=?([qrbnQRBN]))?$").expect("INFALLIBLE");
}

/// Parses coordinate notation (`e2e4`, `e2-e4`, `e7e8q`, `e7e8=Q`) into origin, destination
/// and promotion piece.
pub fn parse_coordinates(s: &str) -> Result<(Position, Position, Option<PieceKind>)> {
    let caps = COORDINATES.captures(s.trim())
        .ok_or_else(|| Error::ParseMove(s.to_owned()))?;

    let from: Position = caps[1].parse()?;
    let to: Position = caps[2].parse()?;
    let promotion = caps.get(3)
        .and_then(|m| m.as_str().chars().next())
        .and_then(PieceKind::from_letter);

    Ok((from, to, promotion))
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    mod new {
        use super::*;
        use crate::rules::error::PositionFault;

        #[test]
        fn off_board_squares_are_rejected() {
            let pawn = Piece::new(Pawn, Color::White);
            match Move::new(Position::new(6, 4), Position::new(-1, 4), pawn) {
                Err(Error::InvalidPosition { position, fault }) => {
                    assert_eq!(position, "(-1, 4)");
                    assert_eq!(fault, PositionFault::OutOfBounds);
                },
                other => panic!("unexpected {:?}", other),
            }
            assert!(Move::new(Position::new(6, 8), sq("e4"), pawn).is_err());
        }

        #[test]
        fn unrecognized_names_are_rejected() {
            let pawn = Piece::new(Pawn, Color::White);
            match Move::from_algebraic("e2", "e9", pawn) {
                Err(Error::InvalidPosition { position, fault }) => {
                    assert_eq!(position, "e9");
                    assert_eq!(fault, PositionFault::Unrecognized);
                },
                other => panic!("unexpected {:?}", other),
            }
            assert!(Move::from_algebraic("e2", "e4", pawn).is_ok());
        }
    }

    mod infer {
        use super::*;

        #[test]
        fn empty_origin_is_reported() {
            let board = Board::start_positions();
            assert_eq!(Move::infer(&board, sq("e4"), sq("e5"), None),
                       Err(Error::NoPieceAtOrigin(sq("e4"))));
        }

        #[test]
        fn double_advance_is_detected() {
            let board = Board::start_positions();
            assert!(Move::infer(&board, sq("e2"), sq("e4"), None).unwrap().is_double_advance());
            assert!(!Move::infer(&board, sq("e2"), sq("e3"), None).unwrap().is_double_advance());
        }

        #[test]
        fn captures_are_recorded() {
            let board: Board = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
            let mv = Move::infer(&board, sq("e4"), sq("d5"), None).unwrap();
            assert_eq!(mv.captured(), Some(Piece::new(Pawn, Color::Black)));
        }

        #[test]
        fn en_passant_victim_is_recorded() {
            let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
            let mv = Move::infer(&board, sq("e5"), sq("d6"), None).unwrap();
            assert_eq!(mv.captured(), Some(Piece::new(Pawn, Color::Black)));
            let prior = mv.previous().expect("implied by target");
            assert_eq!(prior.to, sq("d5"));
        }

        #[test]
        fn castling_rook_is_found() {
            let board: Board = "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
            let mv = Move::infer(&board, sq("e1"), sq("g1"), None).unwrap();
            assert_eq!(mv.castling_rook(), Some(sq("h1")));
            assert!(mv.is_castling());
            let mv = Move::infer(&board, sq("e1"), sq("c1"), None).unwrap();
            assert_eq!(mv.castling_rook(), Some(sq("a1")));
            let mv = Move::infer(&board, sq("e1"), sq("f1"), None).unwrap();
            assert!(!mv.is_castling());
        }

        #[test]
        fn own_piece_is_not_a_capture() {
            let board = Board::start_positions();
            let mv = Move::infer(&board, sq("a1"), sq("a2"), None).unwrap();
            assert_eq!(mv.captured(), None);
        }
    }

    #[test]
    fn display_uses_coordinate_notation() {
        let pawn = Piece::new(Pawn, Color::White);
        assert_eq!(Move::from_algebraic("e2", "e4", pawn).unwrap().to_string(), "e2e4");
        assert_eq!(Move::from_algebraic("e7", "e8", pawn).unwrap()
                   .with_promotion(Knight).to_string(), "e7e8n");
    }

    mod parse_coordinates {
        use super::*;

        #[test]
        fn accepted_forms() {
            assert_eq!(parse_coordinates("e2e4").unwrap(), (sq("e2"), sq("e4"), None));
            assert_eq!(parse_coordinates("e2-e4").unwrap(), (sq("e2"), sq("e4"), None));
            assert_eq!(parse_coordinates("d4xe5").unwrap(), (sq("d4"), sq("e5"), None));
            assert_eq!(parse_coordinates("e7e8q").unwrap(), (sq("e7"), sq("e8"), Some(Queen)));
            assert_eq!(parse_coordinates("e7e8=N").unwrap(), (sq("e7"), sq("e8"), Some(Knight)));
        }

        #[test]
        fn rejected_forms() {
            for s in &["", "e2", "e2e9", "Nf3", "e7e8k", "e2e4e5"] {
                assert!(parse_coordinates(s).is_err(), "{}", s);
            }
        }
    }
}
