//! Applies moves to a board
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::debug;
use super::*;
use PieceKind::*;

/// Applies `mv` to `board` without checking its legality.
///
/// Removes a pawn captured en passant, brings the rook across when castling, moves the piece,
/// promotes it (to a queen unless another piece was chosen), then updates castling rights and
/// the en passant target. The active color and counters are left for
/// [`Board::finish_ply`](../board/struct.Board.html#method.finish_ply).
///
/// # Errors
///
/// Returns `Error::NoPieceAtOrigin` if there is nothing to move.
pub fn execute_move(board: &mut Board, mv: &Move) -> Result<()> {
    let (from, to) = (mv.from(), mv.to());
    let piece = board.piece_at(from).ok_or(Error::NoPieceAtOrigin(from))?;
    let captured = board.piece_at(to);

    // en passant: a pawn stepping diagonally onto an empty square
    if piece.is(Pawn) && from.col() != to.col() && captured.is_none() {
        let victim = Position::new(from.row(), to.col());
        if board.piece_at(victim).map_or(false, |p| p.is(Pawn) && p.color != piece.color) {
            board.remove_piece(victim);
        }
    }

    if piece.is(King) && from.row() == to.row() && (to.col() - from.col()).abs() == 2 {
        let king_side = to.col() > from.col();
        let rook = mv.castling_rook()
            .unwrap_or_else(|| Position::new(from.row(), if king_side { 7 } else { 0 }));
        let rook_to = from.offset(0, if king_side { 1 } else { -1 });
        board.update_position(rook, rook_to)?;
    }

    board.update_position(from, to)?;

    if piece.is(Pawn) && to.row() == piece.color.promotion_row() {
        let kind = mv.promotion().unwrap_or(Queen);
        board.place_piece(to, Piece::new(kind, piece.color));
    }

    if piece.is(King) || piece.is(Rook) || captured.is_some() {
        board.update_castling_rights(mv);
    }
    board.update_en_passant_target(mv);

    debug!("executed {}: {}", mv, board);
    Ok(())
}
