//! The arbiter chess rules tool.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::fs::{File, read_to_string};
use std::path::{Path, PathBuf};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand, crate_version};
use simplelog::{WriteLogger, LevelFilter};
use log::info;
use arbiter::config::{self, Config, ConfigError};
use arbiter::rules::{self, Board, Game, Move, Position};
use arbiter::rules::{check, outcome, validator, variations};

fn main() -> Result<(), Error> {
    let fen_arg = || Arg::with_name("fen")
        .value_name("FEN_STRING")
        .help("Position in Forsyth-Edwards Notation (FEN); defaults to the configured start \
               position");

    let matches =
        App::new("Arbiter")
            .version(crate_version!())
            .author("Mike Leany")
            .about("Judges chess positions and moves by the Laws of Chess")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .global(true)
                .value_name("CONFIG_FILE")
                .takes_value(true)
                .help("Reads settings from CONFIG_FILE instead of ~/.arbiter/config.yaml"))
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .help("Sets the log file if logging is turned on [default: arbiter.log]"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .help("Sets the log level if logging is turned on [default: info]"))
            .subcommand(SubCommand::with_name("fen")
                .about("Shows a position and writes it back out as FEN")
                .arg(fen_arg()))
            .subcommand(SubCommand::with_name("moves")
                .about("Lists the legal moves of the side to move")
                .arg(Arg::with_name("from")
                    .long("from")
                    .short("f")
                    .value_name("SQUARE")
                    .takes_value(true)
                    .help("Only lists moves of the piece on SQUARE"))
                .arg(fen_arg()))
            .subcommand(SubCommand::with_name("status")
                .about("Tells whether the game is over and how")
                .arg(fen_arg()))
            .subcommand(SubCommand::with_name("play")
                .about("Plays a sequence of moves in coordinate notation (e2e4, e7e8q)")
                .arg(Arg::with_name("position")
                    .long("fen")
                    .value_name("FEN_STRING")
                    .takes_value(true)
                    .help("Position to start from; defaults to the configured start position"))
                .arg(Arg::with_name("moves")
                    .value_name("MOVES")
                    .multiple(true)
                    .required(true)
                    .help("Moves to play, in order")))
            .subcommand(SubCommand::with_name("counts")
                .about("Counts the number of variations from a given starting position \
                        to a specified\ndepth. Defaults to the configured start position.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the position"))
                .arg(fen_arg().multiple(true)))
            .subcommand(SubCommand::with_name("suite")
                .about("Reports the status of every position in a YAML file mapping names to FEN")
                .arg(Arg::with_name("file")
                    .value_name("SUITE_FILE")
                    .required(true)
                    .help("YAML file of positions")))
            .get_matches();

    let config = Config::load(matches.value_of_os("config").map(Path::new))?;

    let log_file = matches.value_of_os("log-file")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.log_file.clone());
    let log_level = match matches.value_of("log-level") {
        Some(level) => config::parse_level(level)?,
        None => config.level_filter()?,
    };

    let _logger = if matches.is_present("log") || config.log {
        WriteLogger::init(
            log_level,
            simplelog::Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, simplelog::Config::default(), std::io::sink())
    };

    match matches.subcommand() {
        ("fen", Some(matches)) => {
            let board = board_arg(matches, &config)?;
            print_board(&board);
            println!("{}", board);
        },
        ("moves", Some(matches)) => {
            let board = board_arg(matches, &config)?;
            let moves: Vec<Move> = match matches.value_of("from") {
                Some(square) => {
                    let from: Position = square.parse()?;
                    validator::legal_moves_from(&board, from).into_iter()
                        .filter(|mv| mv.color() == board.active_color())
                        .collect()
                },
                None => validator::legal_moves(&board, board.active_color()),
            };
            let list: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
            println!("{}", list.join(" "));
            println!("{} legal move(s)", list.len());
        },
        ("status", Some(matches)) => {
            let board = board_arg(matches, &config)?;
            let game = Game::starting_at(board);
            report(&game);
        },
        ("play", Some(matches)) => {
            let fen = matches.value_of("position").unwrap_or(config.start_fen.as_str());
            let mut game = Game::starting_at(parse_board(fen)?);

            for s in matches.values_of("moves").expect("INFALLIBLE") {
                if game.status().is_over() {
                    return Err(Error(format!("{}: the game is already over", s)));
                }
                game.play_str(s).map_err(|err| Error(format!("{}: {}", s, err)))?;
                info!("{} -> {}", s, game.board());
            }
            print_board(game.board());
            report(&game);
        },
        ("counts", Some(matches)) => {
            let depth = matches
                .value_of("depth")
                .expect("INFALLIBLE")
                .parse()
                .map_err(|_| {Error("depth must be numeric".to_owned())})?;
            let fens: Vec<&str> = match matches.values_of("fen") {
                Some(values) => values.collect(),
                None => vec![config.start_fen.as_str()],
            };

            println!();
            for fen in fens {
                let board = parse_board(fen)?;
                println!("{}", fen);
                let count = variations::print(&board, depth);
                println!("Depth {} total:\t{:12}\n", depth, count);
            }
        },
        ("suite", Some(matches)) => {
            let path = Path::new(matches.value_of_os("file").expect("INFALLIBLE"));
            let suite = read_suite(path)?;
            for (name, fen) in suite.iter() {
                match parse_board(fen) {
                    Ok(board) => {
                        let status = outcome::status(&board, &rules::MoveHistory::new());
                        println!("{:24}\t{:8}\t{}", name, status.result(), status);
                    },
                    Err(err) => println!("{:24}\terror\t{}", name, err),
                }
            }
        },
        _ => unreachable!(),
    }

    Ok(())
}

fn board_arg(matches: &ArgMatches, config: &Config) -> Result<Board, Error> {
    parse_board(matches.value_of("fen").unwrap_or(config.start_fen.as_str()))
}

fn parse_board(fen: &str) -> Result<Board, Error> {
    fen.parse().map_err(|err| Error(format!("{}: {}", fen, err)))
}

fn read_suite(path: &Path) -> Result<BTreeMap<String, String>, Error> {
    let s = read_to_string(path).map_err(|err| Error(format!("{}: {}", path.display(), err)))?;
    Ok(serde_yaml::from_str(&s)?)
}

fn print_board(board: &Board) {
    for (i, row) in board.to_display_grid().iter().enumerate() {
        let squares: Vec<String> = row.iter().map(char::to_string).collect();
        println!("{}  {}", 8 - i, squares.join(" "));
    }
    println!("\n   a b c d e f g h\n");
}

fn report(game: &Game) {
    let board = game.board();
    let active = board.active_color();
    let status = game.status();

    println!("{} to move{}", if active == rules::Color::White { "white" } else { "black" },
             if check::in_check(board, active, None) { ", in check" } else { "" });
    println!("{}", status);
    if status.is_over() {
        println!("{}", status.result());
    }
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error(err.to_string())
    }
}

impl From<rules::Error> for Error {
    fn from(err: rules::Error) -> Self {
        Error(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error(err.to_string())
    }
}
