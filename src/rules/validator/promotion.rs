//! Promotion rules
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// Returns `true` if `mv` takes a pawn onto the far rank for its color
pub fn promotion_legal(mv: &Move) -> bool {
    mv.piece().is(Pawn) && mv.to().row() == mv.color().promotion_row()
}

/// Returns `true` if a pawn may become `kind`
pub fn promotion_piece_allowed(kind: PieceKind) -> bool {
    PieceKind::PROMOTIONS.contains(&kind)
}
