//! Insufficient mating material
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use PieceKind::*;

/// Returns `true` if neither side can deliver mate: king against king, king and a single
/// bishop or knight against a bare king, or king and bishop against king and bishop with both
/// bishops on squares of the same color.
pub fn insufficient_material(board: &Board) -> bool {
    let mut others = board.pieces().into_iter().filter(|(_, piece)| !piece.is(King));
    let first = others.next();
    let second = others.next();
    if others.next().is_some() {
        return false;
    }

    match (first, second) {
        (None, None) => true,
        (Some((_, piece)), None) => piece.is(Bishop) || piece.is(Knight),
        (Some((a, pa)), Some((b, pb))) => {
            pa.is(Bishop) && pb.is(Bishop) && pa.color != pb.color
                && a.is_light() == b.is_light()
        },
        (None, Some(_)) => false,
    }
}
