//! Stalemate
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use crate::rules::check::in_check;
use crate::rules::validator::has_legal_move;

/// Returns `true` if `color` is not in check but has no legal move. Always `false` unless
/// `color` has exactly one king.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    board.find_king(color).is_some()
        && !in_check(board, color, None)
        && !has_legal_move(board, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn queen_boxes_in_the_king() {
        let board: Board = "k7/8/1Q6/8/8/8/8/7K b - - 0 1".parse().unwrap();
        assert!(is_stalemate(&board, Black));
        assert!(!is_stalemate(&board, White));
    }

    #[test]
    fn blocked_pawn_and_cornered_king() {
        let board: Board = "7k/5Q2/8/8/8/8/p7/K7 w - - 0 1".parse().unwrap();
        assert!(!is_stalemate(&board, White));
        let board: Board = "5k2/5P2/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(is_stalemate(&board, Black));
    }

    #[test]
    fn king_with_a_free_square_is_not_stalemated() {
        let board: Board = "8/8/8/8/8/1k6/1P6/1K6 b - - 0 1".parse().unwrap();
        assert!(!is_stalemate(&board, Black));
    }

    #[test]
    fn no_result_without_a_single_king() {
        let board: Board = "8/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();
        assert!(!is_stalemate(&board, White));
        let board: Board = "8/8/8/8/8/8/8/K6K b - - 0 1".parse().unwrap();
        assert!(!is_stalemate(&board, Black));
        assert!(!is_stalemate(&board, White));
    }

    #[test]
    fn checkmate_is_not_stalemate() {
        let board: Board = "3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
        assert!(!is_stalemate(&board, Black));
    }
}
