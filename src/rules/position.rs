//! Board coordinates
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use super::error::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A square given by row and column. Row 0 is rank 8 (black's back rank) and column 0 is file a.
///
/// Positions off the board can be represented so that move generation can step past the edge;
/// [`in_bounds`](#method.in_bounds) tells them apart, and the notation conversions return `None`
/// for them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// The number of squares on the board
    pub const COUNT: usize = 64;

    /// Creates a position, which may lie off the board
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Returns the row, 0 being rank 8
    pub fn row(self) -> i8 {
        self.row
    }

    /// Returns the column, 0 being file a
    pub fn col(self) -> i8 {
        self.col
    }

    /// Returns `true` if the position is on the board
    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Returns the position shifted by `(d_row, d_col)`, on the board or not
    pub fn offset(self, d_row: i8, d_col: i8) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// Returns the rank number, 1 through 8
    pub fn rank(self) -> Option<u8> {
        if self.in_bounds() {
            Some(8 - self.row as u8)
        } else {
            None
        }
    }

    /// Returns the file letter, `a` through `h`
    pub fn file(self) -> Option<char> {
        if self.in_bounds() {
            Some((b'a' + self.col as u8) as char)
        } else {
            None
        }
    }

    /// Returns the square index, 0 for a8 through 63 for h1
    pub fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row as usize * 8 + self.col as usize)
        } else {
            None
        }
    }

    /// Returns the algebraic name of the square, e.g. `"e4"`
    pub fn to_algebraic(self) -> Option<String> {
        Some(format!("{}{}", self.file()?, self.rank()?))
    }

    /// Parses an algebraic square name such as `"e4"`
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Some(Position::new(8 - (rank - b'0') as i8, (file - b'a') as i8))
    }

    /// Returns `true` if the square is a light square
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Returns all 64 squares, a8 first
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|row| (0..8).map(move |col| Position::new(row, col)))
    }

    /// Returns the position, or an error naming it if it lies off the board
    pub fn checked(self) -> Result<Position> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(Error::InvalidPosition {
                position: self.to_string(),
                fault: PositionFault::OutOfBounds,
            })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => name.fmt(f),
            None => format!("({}, {})", self.row, self.col).fmt(f),
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::from_algebraic(s).ok_or_else(|| Error::InvalidPosition {
            position: s.to_owned(),
            fault: PositionFault::Unrecognized,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_round_trip_for_every_square() {
        for pos in Position::all() {
            let name = pos.to_algebraic().expect("on the board");
            assert_eq!(Position::from_algebraic(&name), Some(pos));
        }
        assert_eq!(Position::all().count(), Position::COUNT);
    }

    #[test]
    fn row_zero_is_rank_eight() {
        assert_eq!(Position::new(0, 0).to_algebraic().unwrap(), "a8");
        assert_eq!(Position::new(7, 7).to_algebraic().unwrap(), "h1");
        assert_eq!(Position::new(6, 4).to_algebraic().unwrap(), "e2");
        assert_eq!(Position::from_algebraic("e4"), Some(Position::new(4, 4)));
    }

    #[test]
    fn off_board_conversions_are_absent() {
        for pos in &[Position::new(-1, 0), Position::new(0, 8), Position::new(8, 8)] {
            assert!(!pos.in_bounds());
            assert_eq!(pos.rank(), None);
            assert_eq!(pos.file(), None);
            assert_eq!(pos.index(), None);
            assert_eq!(pos.to_algebraic(), None);
        }
    }

    #[test]
    fn bad_names_are_rejected() {
        for s in &["", "e", "e9", "i1", "e44", "4e", "e0"] {
            assert_eq!(Position::from_algebraic(s), None, "{}", s);
        }
        match "z9".parse::<Position>() {
            Err(Error::InvalidPosition { fault, .. }) => assert_eq!(fault, PositionFault::Unrecognized),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn checked_reports_out_of_bounds() {
        assert!(Position::new(3, 3).checked().is_ok());
        match Position::new(8, 0).checked() {
            Err(Error::InvalidPosition { position, fault }) => {
                assert_eq!(position, "(8, 0)");
                assert_eq!(fault, PositionFault::OutOfBounds);
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn square_colors() {
        assert!(Position::from_algebraic("h1").unwrap().is_light());
        assert!(!Position::from_algebraic("a1").unwrap().is_light());
        assert!(Position::from_algebraic("a8").unwrap().is_light());
    }
}
