//! Squares lying between two others on a rank, file or diagonal
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// Returns the squares strictly between `a` and `b`, in order from `a`.
///
/// Empty if the two are identical, adjacent, or not on a common rank, file or diagonal.
pub fn between(a: Position, b: Position) -> Vec<Position> {
    let d_row = b.row() - a.row();
    let d_col = b.col() - a.col();
    if !(d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs()) {
        return Vec::new();
    }

    let step = (d_row.signum(), d_col.signum());
    let mut squares = Vec::new();
    if step == (0, 0) {
        return squares;
    }

    let mut pos = a.offset(step.0, step.1);
    while pos != b {
        squares.push(pos);
        pos = pos.offset(step.0, step.1);
    }

    squares
}

/// Returns `true` if every square between `a` and `b` is empty
pub fn is_clear(board: &Board, a: Position, b: Position) -> bool {
    between(a, b).into_iter().all(|pos| board.piece_at(pos).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    #[test]
    fn straight_and_diagonal_lines() {
        assert_eq!(between(sq("a1"), sq("a4")), vec![sq("a2"), sq("a3")]);
        assert_eq!(between(sq("h1"), sq("e1")), vec![sq("g1"), sq("f1")]);
        assert_eq!(between(sq("c1"), sq("f4")), vec![sq("d2"), sq("e3")]);
        assert_eq!(between(sq("a8"), sq("h1")).len(), 6);
    }

    #[test]
    fn no_squares_between() {
        assert!(between(sq("e4"), sq("e4")).is_empty());
        assert!(between(sq("e4"), sq("e5")).is_empty());
        assert!(between(sq("e4"), sq("f5")).is_empty());
        assert!(between(sq("g1"), sq("f3")).is_empty());
        assert!(between(sq("a1"), sq("c4")).is_empty());
    }

    #[test]
    fn clear_paths() {
        let board = Board::start_positions();
        assert!(!is_clear(&board, sq("a1"), sq("a3")));
        assert!(is_clear(&board, sq("a2"), sq("a7")));
        assert!(is_clear(&board, sq("e1"), sq("f1")));
    }
}
