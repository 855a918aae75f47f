//! Castling legality
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::debug;
use super::*;
use crate::rules::attacks::square_attacked;

/// Returns `true` if `mv` is a legal castling move on `board`.
///
/// The king must stand on its original square and move two files toward a rook of its own
/// color on that rook's original corner. The castling right for that side must still be set,
/// the squares between king and rook must be empty, and the king may not be in check, pass
/// through an attacked square, or end up in check.
pub fn castling_legal(board: &Board, mv: &Move) -> bool {
    let piece = mv.piece();
    let color = piece.color;
    let (from, to) = (mv.from(), mv.to());

    if !piece.is(King) || board.piece_at(from) != Some(piece) {
        return false;
    }
    if from != CastlingRights::king_home(color) || to.row() != from.row()
        || (to.col() - from.col()).abs() != 2 {
        return false;
    }

    let king_side = to.col() > from.col();
    if !board.castling_rights().get(color, king_side) {
        debug!("{}: castling right already lost", mv);
        return false;
    }

    let rook = CastlingRights::rook_home(color, king_side);
    if mv.castling_rook().map_or(false, |pos| pos != rook) {
        return false;
    }
    if board.piece_at(rook) != Some(Piece::new(Rook, color)) {
        return false;
    }
    if !path::is_clear(board, from, rook) {
        return false;
    }

    let transit = from.offset(0, if king_side { 1 } else { -1 });
    if [from, transit, to].iter().any(|sq| square_attacked(board, *sq, !color)) {
        return false;
    }

    let mut copy = board.deep_copy();
    match execute_move(&mut copy, mv) {
        Ok(()) => !in_check(&copy, color, None),
        Err(_) => false,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn castle(fen: &str, from: &str, to: &str) -> bool {
        let board: Board = fen.parse().expect("valid fen");
        let from = Position::from_algebraic(from).unwrap();
        let to = Position::from_algebraic(to).unwrap();
        let mv = Move::infer(&board, from, to, None).expect("king present");
        castling_legal(&board, &mv)
    }

    #[test]
    fn both_sides_for_both_colors() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert!(castle(fen, "e1", "g1"));
        assert!(castle(fen, "e1", "c1"));
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1";
        assert!(castle(fen, "e8", "g8"));
        assert!(castle(fen, "e8", "c8"));
    }

    #[test]
    fn right_must_be_set() {
        assert!(!castle("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "e1", "g1"));
        assert!(castle("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "e1", "c1"));
    }

    #[test]
    fn rook_must_be_home() {
        assert!(!castle("r3k2r/8/8/8/8/8/7R/R3K3 w KQkq - 0 1", "e1", "g1"));
        assert!(!castle("r3k2r/8/8/8/8/8/8/R3K2n w KQkq - 0 1", "e1", "g1"));
    }

    #[test]
    fn squares_between_must_be_empty() {
        assert!(!castle("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1", "e1", "g1"));
        assert!(!castle("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", "e1", "c1"));
    }

    #[test]
    fn b_file_may_be_attacked_on_the_queen_side() {
        assert!(castle("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", "e1", "c1"));
    }

    #[test]
    fn no_castling_out_of_through_or_into_check() {
        assert!(!castle("r3k2r/4r3/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "g1"));
        assert!(!castle("r3k2r/5r2/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "g1"));
        assert!(!castle("r3k2r/6r1/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "g1"));
        assert!(castle("r3k2r/7r/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "g1"));
    }

    #[test]
    fn king_must_start_at_home() {
        assert!(!castle("r3k2r/8/8/8/8/8/8/R4K1R w KQkq - 0 1", "f1", "h1"));
        assert!(!castle("r3k2r/8/8/8/8/8/8/R2K3R w KQkq - 0 1", "d1", "f1"));
    }
}
