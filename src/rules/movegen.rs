//! Candidate destinations by movement pattern
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use PieceKind::*;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Returns the squares `piece` could move to from `from` by its movement pattern alone.
///
/// With a board, a slide stops at the first occupied square, which is included whatever its
/// color. Without one, slides run to the edge. Occupancy of the destination is not otherwise
/// considered, and castling is not generated here.
///
/// For pawns this is the single and double advance plus both forward diagonals; whether each
/// is actually usable is up to the validator.
pub fn destinations(from: Position, piece: Piece, board: Option<&Board>) -> Vec<Position> {
    if !from.in_bounds() {
        return Vec::new();
    }

    match piece.kind {
        Pawn => {
            let forward = piece.color.forward();
            let mut squares = vec![from.offset(forward, 0)];
            if from.row() == piece.color.pawn_row() {
                squares.push(from.offset(2 * forward, 0));
            }
            squares.extend(pawn_diagonals(from, piece.color));
            squares.retain(|pos| pos.in_bounds());
            squares
        },
        Knight => steps(from, &KNIGHT_OFFSETS),
        King => steps(from, &KING_OFFSETS),
        Bishop => slides(from, &BISHOP_DIRECTIONS, board),
        Rook => slides(from, &ROOK_DIRECTIONS, board),
        Queen => {
            let mut squares = slides(from, &ROOK_DIRECTIONS, board);
            squares.extend(slides(from, &BISHOP_DIRECTIONS, board));
            squares
        },
    }
}

/// Returns the two forward diagonal squares of a pawn of `color` on `from` that are on the board
pub fn pawn_diagonals(from: Position, color: Color) -> Vec<Position> {
    let forward = color.forward();
    [from.offset(forward, -1), from.offset(forward, 1)].iter()
        .copied()
        .filter(|pos| pos.in_bounds())
        .collect()
}

fn steps(from: Position, offsets: &[(i8, i8)]) -> Vec<Position> {
    offsets.iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|pos| pos.in_bounds())
        .collect()
}

fn slides(from: Position, directions: &[(i8, i8)], board: Option<&Board>) -> Vec<Position> {
    let mut squares = Vec::new();

    for &(d_row, d_col) in directions {
        let mut pos = from.offset(d_row, d_col);
        while pos.in_bounds() {
            squares.push(pos);
            if board.map_or(false, |b| b.piece_at(pos).is_some()) {
                break;
            }
            pos = pos.offset(d_row, d_col);
        }
    }

    squares
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    fn names(squares: Vec<Position>) -> Vec<String> {
        let mut names: Vec<String> = squares.iter().map(|p| p.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn knight_in_corner_has_two_squares() {
        let squares = destinations(sq("a1"), Piece::new(Knight, White), None);
        assert_eq!(names(squares), vec!["b3", "c2"]);
    }

    #[test]
    fn knight_in_center_has_eight_squares() {
        assert_eq!(destinations(sq("d4"), Piece::new(Knight, Black), None).len(), 8);
    }

    #[test]
    fn king_steps_once() {
        assert_eq!(destinations(sq("e4"), Piece::new(King, White), None).len(), 8);
        assert_eq!(destinations(sq("h8"), Piece::new(King, Black), None).len(), 3);
    }

    #[test]
    fn slides_run_to_the_edge_without_a_board() {
        assert_eq!(destinations(sq("d4"), Piece::new(Rook, White), None).len(), 14);
        assert_eq!(destinations(sq("d4"), Piece::new(Bishop, White), None).len(), 13);
        assert_eq!(destinations(sq("d4"), Piece::new(Queen, White), None).len(), 27);
    }

    #[test]
    fn slides_stop_at_the_first_piece() {
        let board = Board::start_positions();
        let rook = destinations(sq("a1"), Piece::new(Rook, White), Some(&board));
        assert_eq!(names(rook), vec!["a2", "b1"]);

        let board: Board = "4k3/8/8/1p6/8/3B4/8/4K3 w - - 0 1".parse().unwrap();
        let bishop = destinations(sq("d3"), Piece::new(Bishop, White), Some(&board));
        assert!(bishop.contains(&sq("b5")));
        assert!(!bishop.contains(&sq("a6")));
        assert!(bishop.contains(&sq("h7")));
        assert!(bishop.contains(&sq("e2")));
    }

    #[test]
    fn pawns_include_diagonals_and_double_advance() {
        let white = destinations(sq("e2"), Piece::new(Pawn, White), None);
        assert_eq!(names(white), vec!["d3", "e3", "e4", "f3"]);

        let black = destinations(sq("a7"), Piece::new(Pawn, Black), None);
        assert_eq!(names(black), vec!["a5", "a6", "b6"]);

        let moved = destinations(sq("e3"), Piece::new(Pawn, White), None);
        assert_eq!(moved.len(), 3);
    }

    #[test]
    fn off_board_origin_has_no_destinations() {
        assert!(destinations(Position::new(8, 0), Piece::new(Queen, White), None).is_empty());
    }
}
