//! Move legality, and enumeration of legal moves
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
use super::movegen::destinations;
use super::check::in_check;
use super::commander::execute_move;
use super::error::Illegal;
use PieceKind::*;

mod castling;
mod en_passant;
mod promotion;

pub use castling::castling_legal;
pub use en_passant::en_passant_legal;
pub use promotion::{promotion_legal, promotion_piece_allowed};

/// Checks `mv` against every rule for the side `active`, stopping at the first one it breaks.
///
/// # Errors
///
/// `Error::NoPieceAtOrigin` if the origin is empty, otherwise `Error::IllegalMove` naming the
/// rule that failed.
pub fn validate(board: &Board, mv: &Move, active: Color) -> Result<()> {
    let result = check_rules(board, mv, active);
    if let Err(ref err) = result {
        debug!("rejected {} from {}: {}", mv, board, err);
    }

    result
}

/// Returns `true` if `mv` is legal for `active` on `board`
pub fn move_legal(board: &Board, mv: &Move, active: Color) -> bool {
    validate(board, mv, active).is_ok()
}

fn check_rules(board: &Board, mv: &Move, active: Color) -> Result<()> {
    let (from, to) = (mv.from(), mv.to());
    let piece = board.piece_at(from).ok_or(Error::NoPieceAtOrigin(from))?;

    if piece.color != active {
        return Err(Illegal::WrongColor.into());
    }
    if piece != mv.piece() {
        return Err(Illegal::PieceMismatch.into());
    }
    let derived = Move::infer(board, from, to, mv.promotion())?;
    if mv.captured() != derived.captured()
        || mv.is_double_advance() != derived.is_double_advance()
        || mv.castling_rook() != derived.castling_rook() {
        return Err(Illegal::Inconsistent.into());
    }
    if mv.is_castling() {
        return if castling_legal(board, mv) { Ok(()) } else { Err(Illegal::Castling.into()) };
    }

    // (a) reachable by the piece's movement pattern
    if !destinations(from, piece, Some(board)).contains(&to) {
        return Err(Illegal::Unreachable.into());
    }

    // (b) not onto an own piece
    let target = board.piece_at(to);
    if target.map_or(false, |p| p.color == active) {
        return Err(Illegal::OwnPieceAtDestination.into());
    }

    // (c) nothing in the way
    if !piece.is(Knight) && !path::is_clear(board, from, to) {
        return Err(Illegal::PathBlocked.into());
    }

    // (d) pawn rules
    if piece.is(Pawn) {
        if from.col() == to.col() {
            if target.is_some() {
                return Err(Illegal::PawnRule.into());
            }
        } else if target.is_none() {
            if board.en_passant_target() != Some(to) {
                return Err(Illegal::PawnRule.into());
            }
            if !en_passant_legal(board, mv) {
                return Err(Illegal::EnPassant.into());
            }
        }
    }
    if let Some(kind) = mv.promotion() {
        if !promotion_legal(mv) || !promotion_piece_allowed(kind) {
            return Err(Illegal::Promotion.into());
        }
    }

    // (e) the mover's king is safe afterwards
    if leaves_king_in_check(board, mv)? {
        return Err(Illegal::LeavesKingInCheck.into());
    }

    Ok(())
}

fn leaves_king_in_check(board: &Board, mv: &Move) -> Result<bool> {
    let mut copy = board.deep_copy();
    execute_move(&mut copy, mv)?;

    Ok(in_check(&copy, mv.color(), None))
}

/// Returns every legal move for `color`, castling included. A pawn reaching the far rank yields
/// one move per promotion piece.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board.find_all_pieces(color).into_iter()
        .flat_map(|(from, _)| legal_moves_from(board, from))
        .collect()
}

/// Returns the legal moves of the piece on `from`, whichever side it belongs to. Empty if the
/// square is empty or off the board.
pub fn legal_moves_from(board: &Board, from: Position) -> Vec<Move> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    let mut targets = destinations(from, piece, Some(board));
    if piece.is(King) && from == CastlingRights::king_home(piece.color) {
        targets.push(from.offset(0, 2));
        targets.push(from.offset(0, -2));
    }

    let mut moves = Vec::new();
    for to in targets {
        let mv = match Move::infer(board, from, to, None) {
            Ok(mv) => mv,
            Err(_) => continue,
        };
        if promotion_legal(&mv) {
            moves.extend(PieceKind::PROMOTIONS.iter().map(|kind| mv.with_promotion(*kind)));
        } else {
            moves.push(mv);
        }
    }
    moves.retain(|mv| check_rules(board, mv, piece.color).is_ok());

    moves
}

/// Returns `true` if `color` has at least one legal move
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.find_all_pieces(color).into_iter()
        .any(|(from, _)| !legal_moves_from(board, from).is_empty())
}
