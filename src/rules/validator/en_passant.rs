//! En passant legality
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// Returns `true` if `mv` is a pawn capturing en passant that the previous ply allows.
///
/// The previous ply is taken from the move, or failing that from the board's en passant target.
/// It must be an opposing pawn's double advance that landed beside the mover, on the target's
/// file one rank behind it, and that pawn must still be standing there.
pub fn en_passant_legal(board: &Board, mv: &Move) -> bool {
    let piece = mv.piece();
    if !piece.is(Pawn) || mv.is_double_advance() {
        return false;
    }
    if board.en_passant_target() != Some(mv.to()) {
        return false;
    }

    let prior = match mv.previous().or_else(|| board.implied_prior_ply()) {
        Some(prior) => prior,
        None => return false,
    };
    let victim = mv.to().offset(-piece.color.forward(), 0);

    prior.piece == Piece::new(Pawn, !piece.color)
        && prior.double_advance
        && prior.to == victim
        && victim.row() == mv.from().row()
        && board.piece_at(victim) == Some(prior.piece)
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    #[test]
    fn capture_after_double_advance() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2".parse().unwrap();
        let mv = Move::infer(&board, sq("e5"), sq("d6"), None).unwrap();
        assert!(en_passant_legal(&board, &mv));

        let board: Board = "4k3/8/8/8/4pP2/8/8/4K3 b - f3 0 1".parse().unwrap();
        let mv = Move::infer(&board, sq("e4"), sq("f3"), None).unwrap();
        assert!(en_passant_legal(&board, &mv));
    }

    #[test]
    fn target_must_match() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2".parse().unwrap();
        let mv = Move::infer(&board, sq("e5"), sq("d6"), None).unwrap();
        assert!(!en_passant_legal(&board, &mv));
    }

    #[test]
    fn explicit_prior_ply_must_be_a_double_advance() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2".parse().unwrap();
        let single = PriorPly {
            piece: Piece::new(Pawn, Black),
            from: sq("d6"),
            to: sq("d5"),
            double_advance: false,
        };
        let mv = Move::infer(&board, sq("e5"), sq("d6"), None).unwrap().after(Some(single));
        assert!(!en_passant_legal(&board, &mv));
    }

    #[test]
    fn victim_must_still_be_there() {
        let mut board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2".parse().unwrap();
        let mv = Move::infer(&board, sq("e5"), sq("d6"), None).unwrap();
        board.remove_piece(sq("d5"));
        assert!(!en_passant_legal(&board, &mv));
    }

    #[test]
    fn only_pawns_capture_en_passant() {
        let board: Board = "4k3/8/8/3pN3/8/8/8/4K3 w - d6 0 2".parse().unwrap();
        let mv = Move::infer(&board, sq("e5"), sq("d6"), None).unwrap();
        assert!(!en_passant_legal(&board, &mv));
    }
}
