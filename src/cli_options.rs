/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of DS Quest.

DS Quest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

DS Quest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
DS Quest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! List the available levels:
//!
//! ```text
//! $ dsquest --ls --kind queue
//! queue  1  Easy    Basic Enqueue
//! queue  2  Easy    Enqueue and Dequeue
//! ...
//! ```
//!
//! Play the third stack level as alice:
//!
//! ```text
//! $ dsquest --kind stack --level 3 --player alice
//! ```
//!
//! Without `--kind`, the game saved when the player last quit is continued.

use clap::Parser;
use log::{debug, warn};
use rand::rngs::ThreadRng;
use std::env;
use std::path::PathBuf;

use dsquest::catalog::Catalog;
use dsquest::recorder::Player;
use dsquest::saver::default_data_dir;
use dsquest::saver::scoreboard::{PersistentScoreBoard, SaverScoreBoard};
use dsquest::{GameError, GameSession, Kind, ScoreBoard};

const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Learn data structure operations by solving puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the levels and the best scores
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Data structure to play with: stack, queue, linked-list, binary-tree, or graph
    #[arg(short, long)]
    kind: Option<Kind>,

    /// Level to play. A random level is selected when not provided
    #[arg(short = 'n', long, requires = "kind")]
    level: Option<u32>,

    /// Player name. Sessions of guest players are not recorded
    #[arg(short, long)]
    player: Option<String>,

    /// Directory for the saved game and the score boards
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Do not save the game and the score boards on disk
    #[arg(long, default_value_t = false)]
    no_save: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options for playing the game.
pub struct Options {
    /// Player of the game.
    pub player: Player,

    /// Directory for the save files. None when saving is disabled.
    pub data_dir: Option<PathBuf>,

    /// Puzzle to play. None to continue the saved game.
    pub kind: Option<Kind>,

    /// Level to play.
    pub level: Option<u32>,
}

impl Options {
    /// Return the session to start with.
    ///
    /// Without a kind, the first level of the default kind is used. Without a level, a random
    /// level is selected.
    pub fn new_game(&self, catalog: &Catalog) -> Result<GameSession, GameError> {
        let kind: Kind = self.kind.unwrap_or_default();
        let level: u32 = match (self.kind, self.level) {
            (_, Some(l)) => l,
            (Some(k), None) => {
                let mut rng: ThreadRng = rand::rng();
                catalog.random_level(k, &mut rng).unwrap_or(1)
            }
            (None, None) => 1,
        };
        debug!("Starting {kind} level {level}");
        GameSession::start(catalog, kind, level)
    }

    /// Return the score boards saved in the data directory.
    pub fn score_boards(&self) -> Option<PersistentScoreBoard> {
        let dir: PathBuf = self.data_dir.clone()?;
        Some(PersistentScoreBoard::open(SaverScoreBoard::new(dir)))
    }
}

/// Result of the command-line processing.
pub enum Command {
    /// Nothing else to do: exit with the given code.
    Exit(u8),

    /// Start the game.
    Play(Options),
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: Option<PathBuf> = if args.no_save {
        None
    } else {
        let dir: Option<PathBuf> = args.data_dir.or_else(default_data_dir);
        if dir.is_none() {
            warn!("Cannot find the user data directory: the game will not be saved");
        }
        dir
    };
    let options: Options = Options {
        player: Player::from_name(args.player.as_deref()),
        data_dir,
        kind: args.kind,
        level: args.level,
    };

    //
    // List the levels
    //
    if args.ls {
        let catalog: Catalog = Catalog::new();
        let saved: Option<PersistentScoreBoard> = options.score_boards();
        let empty: ScoreBoard = ScoreBoard::new();
        let board: &ScoreBoard = saved.as_ref().map_or(&empty, |s| s.board());
        let kinds: Vec<Kind> = match args.kind {
            Some(k) => vec![k],
            None => Kind::all().collect(),
        };
        for kind in kinds {
            for level in catalog.levels(kind) {
                let Some(puzzle) = catalog.get(kind, level) else {
                    continue;
                };
                let difficulty: String = puzzle
                    .difficulty()
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                let best: String = board
                    .best(kind, level)
                    .map(|s| format!("  (best: {} by {})", s.score, s.player))
                    .unwrap_or_default();
                println!(
                    "{:<12} {level:>2}  {difficulty:<7} {}{best}",
                    kind.id_prefix(),
                    puzzle.title
                );
            }
        }
        return Command::Exit(0);
    }

    if let (Some(kind), Some(level)) = (args.kind, args.level) {
        if Catalog::new().get(kind, level).is_none() {
            eprintln!("Unknown level {level} for {kind}. Use --ls to list the available levels.");
            return Command::Exit(1);
        }
    }

    Command::Play(options)
}
