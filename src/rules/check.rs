//! Check detection
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use super::attacks::square_attacked;

/// Returns `true` if the king of `color` is attacked by any opposing piece.
///
/// `king` overrides where the king is looked for, which lets a caller ask about a square the
/// king is passing through. A board with no king of that color is never in check.
pub fn in_check(board: &Board, color: Color, king: Option<Position>) -> bool {
    match king.or_else(|| board.find_king(color)) {
        Some(pos) => square_attacked(board, pos, !color),
        None => false,
    }
}
