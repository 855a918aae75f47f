//! The `rules` module implements the FIDE Laws of Chess on a plain 8x8 grid.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops;
use std::fmt;
use std::str::FromStr;
use std::convert::TryFrom;
use error::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on, based on the color of the pieces for that side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The number of colors
    pub const COUNT: usize = 2;

    /// Row delta of a one-square pawn advance. White moves toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game
    pub fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row this side's pawns start on, from which they may advance two squares
    pub fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns promote
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    ///
    /// # Example
    /// ```
    /// use arbiter::rules::Color;
    /// assert_eq!(!Color::White, Color::Black);
    /// assert_eq!(!Color::Black, Color::White);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => 'w'.fmt(f),
            Color::Black => 'b'.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = ParseFenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _   => Err(ParseFenError::ActiveColor),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl From<Color> for usize {
    fn from(value: Color) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The kind of a chess piece, without its color
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// The number of piece kinds
    pub const COUNT: usize = PieceKind::King as usize + 1;

    /// Kinds a pawn may promote to, strongest first
    pub const PROMOTIONS: [PieceKind; 4] =
        [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

    /// Returns the uppercase letter used for this kind in FEN
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses a piece letter of either case
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'P'|'p' => Some(PieceKind::Pawn),
            'N'|'n' => Some(PieceKind::Knight),
            'B'|'b' => Some(PieceKind::Bishop),
            'R'|'r' => Some(PieceKind::Rook),
            'Q'|'q' => Some(PieceKind::Queen),
            'K'|'k' => Some(PieceKind::King),
            _       => None,
        }
    }

    /// Returns `true` for rooks, bishops and queens
    pub fn is_slider(self) -> bool {
        match self {
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => true,
            _ => false,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letter().fmt(f)
    }
}

impl Default for PieceKind {
    fn default() -> Self {
        PieceKind::Pawn
    }
}

impl TryFrom<usize> for PieceKind {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(PieceKind::Pawn),
            1 => Ok(PieceKind::Knight),
            2 => Ok(PieceKind::Bishop),
            3 => Ok(PieceKind::Rook),
            4 => Ok(PieceKind::Queen),
            5 => Ok(PieceKind::King),
            _ => Err(Error::ParseMove(format!("{}: not a piece index", value))),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A piece code: a kind combined with a color. Written as one of `KQRBNPkqrbnp`, with
/// uppercase letters for white.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    /// What the piece is
    pub kind: PieceKind,
    /// Which side it belongs to
    pub color: Color,
}

impl Piece {
    /// Creates a piece code
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Returns the FEN symbol for the piece
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Parses a FEN symbol, deriving the color from its case
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };

        Some(Piece { kind, color })
    }

    /// Returns `true` if the piece is of the given kind
    pub fn is(self, kind: PieceKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbol().fmt(f)
    }
}

impl FromStr for Piece {
    type Err = ParseFenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_symbol(c).ok_or(ParseFenError::Placement),
            _ => Err(ParseFenError::Placement),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod error;
pub mod position;
pub mod board;
pub mod moves;
pub mod movegen;
pub mod path;
pub mod attacks;
pub mod check;
pub mod validator;
pub mod commander;
pub mod outcome;
pub mod history;
pub mod game;
pub mod variations;

pub use position::Position;
pub use board::{Board, CastlingRights, START_FEN};
pub use moves::{Move, PriorPly};
pub use history::MoveHistory;
pub use game::Game;
pub use outcome::GameStatus;
pub use error::{Error, Result};
