//! Squares a piece attacks, and whether a square is attacked
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use super::movegen::{destinations, pawn_diagonals};

/// Returns the squares `piece` on `from` attacks.
///
/// Pawns attack their two forward diagonals only. Other pieces attack the squares they could
/// move to; with a board, slides end on the first blocker.
pub fn attacks(from: Position, piece: Piece, board: Option<&Board>) -> Vec<Position> {
    if piece.is(PieceKind::Pawn) {
        pawn_diagonals(from, piece.color)
    } else {
        destinations(from, piece, board)
    }
}

/// Returns `true` if any piece of color `by` attacks `target` on `board`
pub fn square_attacked(board: &Board, target: Position, by: Color) -> bool {
    board.find_all_pieces(by).into_iter()
        .any(|(from, piece)| attacks(from, piece, Some(board)).contains(&target))
}

/// Returns the squares of every piece of color `by` that attacks `target`
pub fn attackers(board: &Board, target: Position, by: Color) -> Vec<Position> {
    board.find_all_pieces(by).into_iter()
        .filter(|&(from, piece)| attacks(from, piece, Some(board)).contains(&target))
        .map(|(from, _)| from)
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;
    use PieceKind::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let squares = attacks(sq("e4"), Piece::new(Pawn, White), None);
        assert_eq!(squares.len(), 2);
        assert!(squares.contains(&sq("d5")));
        assert!(squares.contains(&sq("f5")));

        let squares = attacks(sq("a5"), Piece::new(Pawn, Black), None);
        assert_eq!(squares, vec![sq("b4")]);
    }

    #[test]
    fn blocked_sliders_do_not_attack_beyond() {
        let board: Board = "4k3/8/8/8/4p3/8/8/4R1K1 w - - 0 1".parse().unwrap();
        assert!(square_attacked(&board, sq("e4"), White));
        assert!(!square_attacked(&board, sq("e5"), White));
        assert!(square_attacked(&board, sq("d3"), Black));
        assert!(!square_attacked(&board, sq("e3"), Black));
    }

    #[test]
    fn start_position_attacks() {
        let board = Board::start_positions();
        assert!(square_attacked(&board, sq("f3"), White));
        assert!(!square_attacked(&board, sq("e4"), White));
        assert!(square_attacked(&board, sq("f6"), Black));
        assert_eq!(attackers(&board, sq("f3"), White).len(), 3);
    }
}
