//! Defines the error types needed by the rules module
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Why a value could not be used as a board coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionFault {
    /// Row or column outside `0..8`
    OutOfBounds,
    /// Text that does not name a square
    Unrecognized,
}

impl fmt::Display for PositionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFault::OutOfBounds => "out of bounds",
            PositionFault::Unrecognized => "not a recognized position value",
        }.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The rule a rejected move broke
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Illegal {
    /// The piece at the origin belongs to the side not on move
    WrongColor,
    /// The move names a different piece than the one standing on its origin
    PieceMismatch,
    /// The move's captured piece, double advance or castling rook disagrees with the board
    Inconsistent,
    /// The piece cannot reach the destination with its movement pattern
    Unreachable,
    /// The destination holds a piece of the mover's own color
    OwnPieceAtDestination,
    /// A piece stands between origin and destination
    PathBlocked,
    /// A pawn tried to capture straight ahead or move diagonally without capturing
    PawnRule,
    /// A castling condition failed
    Castling,
    /// An en passant condition failed
    EnPassant,
    /// A promotion piece was given for a move that does not promote, or an invalid piece was
    /// chosen
    Promotion,
    /// The mover's king would be in check afterwards
    LeavesKingInCheck,
}

impl fmt::Display for Illegal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Illegal::*;

        match self {
            WrongColor => "piece belongs to the side not on move",
            PieceMismatch => "piece does not match the origin square",
            Inconsistent => "move details disagree with the board",
            Unreachable => "piece cannot reach the destination",
            OwnPieceAtDestination => "destination occupied by own piece",
            PathBlocked => "path is blocked",
            PawnRule => "pawns capture diagonally and advance straight",
            Castling => "castling is not allowed",
            EnPassant => "en passant capture is not allowed",
            Promotion => "invalid promotion",
            LeavesKingInCheck => "king would be left in check",
        }.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used by the `rules` module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate could not be used to build a move
    InvalidPosition {
        /// The offending value, as written or as `(row, col)`
        position: String,
        /// What is wrong with it
        fault: PositionFault,
    },
    /// The origin of a move is empty
    NoPieceAtOrigin(super::Position),
    /// The move breaks a rule
    IllegalMove(Illegal),
    /// A FEN string could not be parsed
    ParseFen(ParseFenError),
    /// A move string could not be parsed
    ParseMove(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            InvalidPosition { position, fault } => write!(f, "{}: {}", position, fault),
            NoPieceAtOrigin(pos) => write!(f, "no piece at {}", pos),
            IllegalMove(reason) => write!(f, "illegal move: {}", reason),
            ParseFen(err) => write!(f, "invalid fen: {}", err),
            ParseMove(s) => write!(f, "cannot parse move: {}", s),
        }
    }
}

impl std::error::Error for Error { }

impl From<ParseFenError> for Error {
    fn from(err: ParseFenError) -> Self {
        Error::ParseFen(err)
    }
}

impl From<Illegal> for Error {
    fn from(reason: Illegal) -> Self {
        Error::IllegalMove(reason)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error which can be returned when parsing a FEN string
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseFenError {
    /// The string does not have exactly six fields; holds the number found
    FieldCount(usize),
    /// Error parsing the piece placement
    Placement,
    /// Error parsing the active color
    ActiveColor,
    /// Error parsing the castling availability
    Castling,
    /// Error parsing the en passant target square
    EnPassant,
    /// Error parsing the halfmove clock
    HalfmoveClock,
    /// Error parsing the fullmove number
    FullmoveNumber,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseFenError::*;

        match self {
            FieldCount(n) => write!(f, "expected 6 fields, found {}", n),
            Placement => "cannot parse piece placement".fmt(f),
            ActiveColor => "cannot parse active color".fmt(f),
            Castling => "cannot parse castling availability".fmt(f),
            EnPassant => "cannot parse en passant square".fmt(f),
            HalfmoveClock => "cannot parse halfmove clock".fmt(f),
            FullmoveNumber => "cannot parse fullmove number".fmt(f),
        }
    }
}

impl std::error::Error for ParseFenError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by methods in the `rules` module
pub type Result<T> = std::result::Result<T, Error>;
