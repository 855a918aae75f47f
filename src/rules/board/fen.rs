//! Forsyth-Edwards Notation for a `Board`
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::str::FromStr;
use log::warn;
use super::*;

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board from a FEN string.
    ///
    /// All six fields are required. The placement is not checked for legality (king counts,
    /// pawns on the back rank), so partial setups can be loaded.
    pub fn from_fen(s: &str) -> std::result::Result<Board, ParseFenError> {
        use ParseFenError::*;

        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FieldCount(fields.len()));
        }

        let mut board = Board::empty();

        // parse the placement, rank 8 first
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(Placement);
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                match c {
                    '1' ..= '8' => {
                        col += c.to_digit(10).expect("INFALLIBLE") as i8;
                    },
                    _ => {
                        let piece = Piece::from_symbol(c).ok_or(Placement)?;
                        let pos = Position::new(row as i8, col);
                        if !pos.in_bounds() {
                            return Err(Placement);
                        }
                        board.place_piece(pos, piece);
                        col += 1;
                    },
                }
                if col > 8 {
                    return Err(Placement);
                }
            }
            if col != 8 {
                return Err(Placement);
            }
        }

        // parse the active color
        board.active = fields[1].parse()?;

        // parse the castling availability
        if fields[2] != "-" {
            let mut seen = String::new();
            for c in fields[2].chars() {
                if seen.contains(c) {
                    return Err(Castling);
                }
                match c {
                    'K' => board.castling.white_king_side = true,
                    'Q' => board.castling.white_queen_side = true,
                    'k' => board.castling.black_king_side = true,
                    'q' => board.castling.black_queen_side = true,
                    _ => return Err(Castling),
                }
                seen.push(c);
            }
        }

        // parse the en passant target
        if fields[3] != "-" {
            board.en_passant = Some(Position::from_algebraic(fields[3]).ok_or(EnPassant)?);
        }

        board.halfmove_clock = fields[4].parse().map_err(|_| HalfmoveClock)?;
        board.fullmove_number = fields[5].parse().map_err(|_| FullmoveNumber)?;

        for &color in &[Color::White, Color::Black] {
            let kings = board.find_all_pieces(color).iter()
                .filter(|(_, piece)| piece.is(PieceKind::King))
                .count();
            if kings != 1 {
                warn!("{} {} kings in {}", kings, color, s);
            }
        }

        Ok(board)
    }

    /// Converts the board to a FEN string
    pub fn to_fen_fields(&self) -> String {
        // the placement
        let mut placement = String::new();
        for row in 0..8 {
            let mut count = 0;
            for col in 0..8 {
                match self.piece_at(Position::new(row, col)) {
                    Some(piece) => {
                        if count > 0 {
                            placement += &count.to_string();
                            count = 0;
                        }
                        placement.push(piece.symbol());
                    },
                    None => count += 1,
                }
            }
            if count > 0 {
                placement += &count.to_string();
            }
            if row < 7 {
                placement.push('/');
            }
        }

        // castling availability
        let mut castling = String::new();
        if self.castling.white_king_side {
            castling.push('K');
        }
        if self.castling.white_queen_side {
            castling.push('Q');
        }
        if self.castling.black_king_side {
            castling.push('k');
        }
        if self.castling.black_queen_side {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        // en passant target
        let en_passant = match self.en_passant.and_then(Position::to_algebraic) {
            Some(name) => name,
            None => "-".to_owned(),
        };

        format!("{} {} {} {} {} {}", placement, self.active, castling, en_passant,
                                     self.halfmove_clock, self.fullmove_number)
    }
}

impl FromStr for Board {
    type Err = ParseFenError;

    /// Parse a board from a FEN string
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
