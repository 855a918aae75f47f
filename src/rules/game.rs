//! Module to implement a chess game
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
use super::validator::validate;
use super::commander::execute_move;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A board and its history, advanced one legal move at a time.
///
/// Each move is validated, executed, used to advance the turn and counters, and recorded, in that
/// order. Nothing is changed if a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: MoveHistory,
}

impl Game {
    /// Constructs a game at the standard starting position
    pub fn new() -> Game {
        Game::starting_at(Board::start_positions())
    }

    /// Constructs a game starting at `board`, with `board`'s side to move
    pub fn starting_at(board: Board) -> Game {
        let history = MoveHistory::starting_at(&board);
        Game { board, history }
    }

    /// Returns the current position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns the side to move
    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    /// Plays `mv` and returns the status of the resulting position.
    ///
    /// # Errors
    ///
    /// Returns whatever [`validate`](../validator/fn.validate.html) reports for an illegal move.
    /// The game is left unchanged in that case.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus> {
        validate(&self.board, &mv, self.board.active_color())?;

        let mut board = self.board.deep_copy();
        execute_move(&mut board, &mv)?;
        board.finish_ply(&mv);

        self.board = board;
        self.history.add_move(mv, &self.board);
        debug!("played {}: {}", mv, self.board);

        Ok(self.status())
    }

    /// Plays a move given in coordinate notation, such as `e2e4` or `e7e8q`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ParseMove` if `s` is not coordinate notation, and otherwise the same errors
    /// as [`play`](#method.play).
    pub fn play_str(&mut self, s: &str) -> Result<GameStatus> {
        let (from, to, promotion) = moves::parse_coordinates(s)?;
        let mv = Move::infer(&self.board, from, to, promotion)?;

        self.play(mv)
    }

    /// Returns the status of the current position
    pub fn status(&self) -> GameStatus {
        outcome::status(&self.board, &self.history)
    }

    /// Returns the legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        validator::legal_moves(&self.board, self.board.active_color())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
