//! The record of a game's moves and the positions they produced
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::collections::HashMap;
use log::trace;
use super::*;
use super::board::Zobrist;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The moves played so far together with a count of every position reached.
///
/// Positions are identified by [`Board::position_key`](../board/struct.Board.html#method.position_key),
/// a 64-bit Zobrist hash of the placement, active color, castling rights and en passant target.
/// Two different positions sharing a key would be counted together; with 64 random bits that
/// is not expected to happen within a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
    keys: Vec<Zobrist>,
    occurrences: HashMap<Zobrist, usize>,
}

impl MoveHistory {
    /// Constructs an empty history with no positions recorded
    pub fn new() -> MoveHistory {
        MoveHistory::default()
    }

    /// Constructs a history whose initial position is `board`
    pub fn starting_at(board: &Board) -> MoveHistory {
        let mut history = MoveHistory::new();
        history.record_position(board);
        history
    }

    /// Counts one more occurrence of `board`'s position
    pub fn record_position(&mut self, board: &Board) {
        let key = board.position_key();
        let count = self.occurrences.entry(key).or_insert(0);
        *count += 1;
        trace!("position {:x} seen {} time(s)", key, count);
        self.keys.push(key);
    }

    /// Appends `mv` and records the position it produced
    pub fn add_move(&mut self, mv: Move, resulting: &Board) {
        self.moves.push(mv);
        self.record_position(resulting);
    }

    /// Returns `true` once any position has occurred at least three times
    pub fn threefold_repetition(&self) -> bool {
        self.occurrences.values().any(|&count| count >= 3)
    }

    /// Returns `true` if the latest position occurred earlier
    pub fn repetition(&self) -> bool {
        self.keys.last()
            .and_then(|key| self.occurrences.get(key))
            .map_or(false, |&count| count >= 2)
    }

    /// Returns the number of times `board`'s position has been recorded
    pub fn occurrences(&self, board: &Board) -> usize {
        self.occurrences.get(&board.position_key()).copied().unwrap_or(0)
    }

    /// Returns `true` if any recorded move started on `pos`.
    ///
    /// Castling legality does not use this; the board's castling rights decide.
    pub fn has_moved(&self, pos: Position) -> bool {
        self.moves.iter().any(|mv| mv.from() == pos)
    }

    /// Returns the facts of the latest move, if any
    pub fn last_ply(&self) -> Option<PriorPly> {
        self.moves.last().map(PriorPly::from)
    }

    /// Returns the moves in the order they were played
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if no move has been played
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
