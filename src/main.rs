/*
main.rs

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

mod cli_options;

use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use cli_options::{Command, Options};
use dsquest::catalog::Catalog;
use dsquest::saver::game::SaverGame;
use dsquest::shell::{ScoreKeeper, Shell};
use dsquest::{GameSession, ScoreBoard};

/// Run the shell with the given score keeper.
fn play<R: BufRead, W: Write, K: ScoreKeeper>(
    options: &Options,
    input: R,
    output: W,
    keeper: K,
) -> ExitCode {
    let saver: Option<SaverGame> = options.data_dir.clone().map(SaverGame::new);
    let mut shell = Shell::new(input, output, options.player.clone(), keeper, saver);

    // An explicit level on the command line replaces the saved game
    let saved: Option<GameSession> = if options.kind.is_none() {
        shell.saved_game()
    } else {
        None
    };
    let game: GameSession = match saved {
        Some(g) => {
            info!("Continuing the saved game");
            g
        }
        None => match options.new_game(&Catalog::new()) {
            Ok(g) => g,
            Err(error) => {
                eprintln!("Error: {error}");
                return ExitCode::FAILURE;
            }
        },
    };

    match shell.run(game) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let options: Options = match cli_options::parse() {
        Command::Exit(ret) => return ExitCode::from(ret),
        Command::Play(o) => o,
    };
    debug!("Player: {}", options.player);

    let input = io::stdin().lock();
    let output = io::stdout().lock();
    match options.score_boards() {
        Some(keeper) => play(&options, input, output, keeper),
        None => play(&options, input, output, ScoreBoard::new()),
    }
}
