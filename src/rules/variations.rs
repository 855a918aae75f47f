//! Module for counting and printing the number of variations from a given position
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use super::validator::legal_moves;
use super::commander::execute_move;

fn after(board: &Board, mv: &Move) -> Option<Board> {
    let mut next = board.deep_copy();
    execute_move(&mut next, mv).ok()?;
    next.finish_ply(mv);

    Some(next)
}

/// Print the number of variations of the given `depth` for each legal move from `board`
pub fn print(board: &Board, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let mut total = 0;

    for mv in legal_moves(board, board.active_color()) {
        if let Some(next) = after(board, &mv) {
            let count = count(&next, depth - 1);
            total += count;
            println!("\t{:7}\t{:12}\t{}", mv, count, next);
        }
    }

    total
}

/// Count the number of variations of the given `depth` from `board`
pub fn count(board: &Board, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let moves = legal_moves(board, board.active_color());
    if depth == 1 {
        return moves.len();
    }

    moves.iter()
        .filter_map(|mv| after(board, mv))
        .map(|next| count(&next, depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position() {
        let board = Board::start_positions();
        assert_eq!(count(&board, 0), 1);
        assert_eq!(count(&board, 1), 20);
        assert_eq!(count(&board, 2), 400);
    }

    #[test]
    fn mated_side_has_no_variations() {
        let board: Board = "3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
        assert_eq!(count(&board, 1), 0);
        assert_eq!(count(&board, 3), 0);
    }
}
