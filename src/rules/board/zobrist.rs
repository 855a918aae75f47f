//! Contains structure and data for Zobrist hash keys
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A 64-bit hash key identifying a position for repetition purposes.
///
/// Covers piece placement, the side to move, castling rights and the en passant target. The
/// halfmove clock and fullmove number are not part of a position's identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Zobrist(u64);

impl Zobrist {
    /// Creates an empty key
    pub fn new() -> Zobrist {
        Zobrist(0)
    }

    /// Computes the key of `board` from scratch
    pub fn of(board: &Board) -> Zobrist {
        let mut key = Zobrist::new();

        for (pos, piece) in board.pieces() {
            key.toggle_piece_placement(piece, pos);
        }
        if board.active_color() == Color::Black {
            key.toggle_turn();
        }
        key.toggle_castling_rights(board.castling_rights());
        if let Some(target) = board.en_passant_target() {
            key.toggle_ep_square(target);
        }

        key
    }

    /// Toggles piece placement
    pub fn toggle_piece_placement(&mut self, piece: Piece, pos: Position) {
        if let Some(index) = pos.index() {
            self.0 ^= KEYS.placement[piece.color as usize][piece.kind as usize][index];
        }
    }

    /// Toggles an en passant square
    pub fn toggle_ep_square(&mut self, pos: Position) {
        if let Some(index) = pos.index() {
            self.0 ^= KEYS.ep_square[index];
        }
    }

    /// Toggles castling flags
    pub fn toggle_castling_rights(&mut self, rights: CastlingRights) {
        let flags = [
            rights.white_king_side,
            rights.white_queen_side,
            rights.black_king_side,
            rights.black_queen_side,
        ];
        for (i, set) in flags.iter().enumerate() {
            if *set {
                self.0 ^= KEYS.castling[i];
            }
        }
    }

    /// Toggles whose turn it is
    pub fn toggle_turn(&mut self) {
        self.0 ^= KEYS.black_move;
    }
}

impl fmt::Display for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::LowerHex for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<Zobrist> for u64 {
    fn from(key: Zobrist) -> Self {
        key.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
struct Keys {
    placement: [[[u64; Position::COUNT]; PieceKind::COUNT]; Color::COUNT],
    ep_square: [u64; Position::COUNT],
    castling: [u64; 4],
    black_move: u64,
}

impl Keys {
    // fixed seed: the same keys on every run
    const SEED: u64 = 0x7a3c_51e9_d204_8b6f;

    fn generate() -> Keys {
        let mut rng = StdRng::seed_from_u64(Keys::SEED);
        let mut keys = Keys {
            placement: [[[0; Position::COUNT]; PieceKind::COUNT]; Color::COUNT],
            ep_square: [0; Position::COUNT],
            castling: [0; 4],
            black_move: 0,
        };

        for color in keys.placement.iter_mut() {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        for key in keys.ep_square.iter_mut() {
            *key = rng.gen();
        }
        for key in keys.castling.iter_mut() {
            *key = rng.gen();
        }
        keys.black_move = rng.gen();

        keys
    }
}

lazy_static! {
    static ref KEYS: Keys = Keys::generate();
}
