//! Detection of the ways a game can end
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::*;

mod checkmate;
mod stalemate;
mod material;

pub use checkmate::is_checkmate;
pub use stalemate::is_stalemate;
pub use material::insufficient_material;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Whether the game has ended, and how
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has a legal move and no draw applies
    InProgress,
    /// The side to move is checkmated; holds the winner
    Checkmate(Color),
    /// The side to move has no legal move but is not in check
    Stalemate,
    /// Neither side can possibly checkmate
    InsufficientMaterial,
    /// The same position has occurred three times
    ThreefoldRepetition,
    /// One hundred plies without a pawn move or capture
    FiftyMoves,
}

impl GameStatus {
    /// Returns `true` unless the game is still in progress
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the PGN result tag: `1-0`, `0-1`, `1/2-1/2` or `*`
    pub fn result(self) -> &'static str {
        match self {
            GameStatus::InProgress => "*",
            GameStatus::Checkmate(Color::White) => "1-0",
            GameStatus::Checkmate(Color::Black) => "0-1",
            _ => "1/2-1/2",
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => "in progress".fmt(f),
            GameStatus::Checkmate(Color::White) => "checkmate, white wins".fmt(f),
            GameStatus::Checkmate(Color::Black) => "checkmate, black wins".fmt(f),
            GameStatus::Stalemate => "stalemate".fmt(f),
            GameStatus::InsufficientMaterial => "draw by insufficient material".fmt(f),
            GameStatus::ThreefoldRepetition => "draw by threefold repetition".fmt(f),
            GameStatus::FiftyMoves => "draw by the fifty-move rule".fmt(f),
        }
    }
}

/// Classifies the position on `board` for the side to move. Checkmate and stalemate take
/// precedence over the draws; `history` supplies repetitions.
pub fn status(board: &Board, history: &MoveHistory) -> GameStatus {
    let active = board.active_color();

    if is_checkmate(board, active) {
        GameStatus::Checkmate(!active)
    } else if is_stalemate(board, active) {
        GameStatus::Stalemate
    } else if insufficient_material(board) {
        GameStatus::InsufficientMaterial
    } else if history.threefold_repetition() {
        GameStatus::ThreefoldRepetition
    } else if board.fifty_moves() {
        GameStatus::FiftyMoves
    } else {
        GameStatus::InProgress
    }
}
