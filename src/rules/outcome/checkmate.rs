//! Checkmate
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use crate::rules::check::in_check;
use crate::rules::validator::has_legal_move;

/// Returns `true` if `color` is in check and has no legal move. Any legal move, by the king or
/// by a piece that captures or blocks, is an escape.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    in_check(board, color, None) && !has_legal_move(board, color)
}
