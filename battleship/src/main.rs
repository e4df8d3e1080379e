// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use battleboard::{
    placement::randomly_place_ships, AttackOutcome, Board, Coordinate, ShipType,
};

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sink a randomly placed fleet from the command line.")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the fleet layout, for a repeatable game")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|err| format!("invalid seed {:?}: {}", seed, err))
                }),
        )
        .arg(
            Arg::with_name("reveal")
                .short("r")
                .long("reveal")
                .help("list where every ship is before play starts"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log engine activity"),
        )
        .get_matches();

    let default_filter = if matches.is_present("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut rng = match matches.value_of("seed").and_then(|seed| seed.parse().ok()) {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut board = Board::new();
    if let Err(err) = randomly_place_ships(&mut board, &mut rng) {
        eprintln!("could not lay out the fleet: {}", err);
        process::exit(1);
    }
    if matches.is_present("reveal") {
        show_fleet(&board);
    }

    let stdin = io::stdin();
    let mut input = CommandPrompt::new(stdin.lock());
    play(&mut board, &mut input)
}

/// Read attacks until every ship is sunk.
fn play(board: &mut Board, input: &mut CommandPrompt<impl BufRead>) -> io::Result<()> {
    enum Command {
        Fire(Coordinate),
        Status,
        Help,
        Quit,
    }
    println!("Fire at cells from (1,1) to (10,10). Type help or ? for commands.");
    let mut shots = 0;
    while !board.has_lost() {
        let cmd = input.ask(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "status" | "ships" => Some(Command::Status),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => match other.parse() {
                Ok(coord) => Some(Command::Fire(coord)),
                Err(err) => {
                    println!("Invalid target: {}", err);
                    None
                }
            },
        })?;

        match cmd {
            Command::Fire(coord) => match board.receive_attack(coord) {
                Ok(outcome) => {
                    shots += 1;
                    match outcome {
                        AttackOutcome::Miss => println!("Miss."),
                        AttackOutcome::Hit(ship) => println!("Hit a {}!", ShipName(ship)),
                        AttackOutcome::Sunk(ship) | AttackOutcome::Defeated(ship) => {
                            println!("Sunk the {}!", ShipName(ship))
                        }
                    }
                }
                Err(err) => {
                    warn!("{}", err);
                    println!("Can't fire there: {}", err.reason());
                }
            },
            Command::Status => {
                for &ship_type in ShipType::ALL {
                    if let Some(ship) = board.ship(ship_type) {
                        let state = if ship.is_sunk() { "sunk" } else { "afloat" };
                        println!("{:>16}: {}", ShipName(ship_type), state);
                    }
                }
            }
            Command::Help => println!(
                "Available Commands:
    (<x>,<y>)   fire at the given cell, e.g. (3,7) or 3,7.
    status      show which ships are still afloat.
    quit        give up."
            ),
            Command::Quit => return Ok(()),
        }
    }
    println!("All ships sunk in {} shots.", shots);
    Ok(())
}

/// Print where each ship of the fleet sits.
fn show_fleet(board: &Board) {
    for &ship_type in ShipType::ALL {
        if let Some(ship) = board.ship(ship_type) {
            println!(
                "{:>16} at {} ({})",
                ShipName(ship_type),
                ship.origin(),
                ship.direction()
            );
        }
    }
}

/// Display helper that prints the ship's full name.
struct ShipName(ShipType);

impl ShipName {
    fn name(&self) -> &'static str {
        match self.0 {
            ShipType::AircraftCarrier => "aircraft carrier",
            ShipType::Battleship => "battleship",
            ShipType::Destroyer => "destroyer",
            ShipType::Submarine => "submarine",
            ShipType::Cruiser => "cruiser",
        }
    }
}

impl fmt::Display for ShipName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Line-oriented command prompt over any buffered reader.
struct CommandPrompt<B> {
    source: B,
    line: String,
}

impl<B: BufRead> CommandPrompt<B> {
    fn new(source: B) -> Self {
        Self {
            source,
            line: String::new(),
        }
    }

    /// Ask until `parse` accepts the lowercased, trimmed line. Exits on end of input.
    fn ask<T>(&mut self, prompt: &str, mut parse: impl FnMut(&str) -> Option<T>) -> io::Result<T> {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.line.clear();
            if self.source.read_line(&mut self.line)? == 0 {
                println!();
                process::exit(0);
            }
            self.line.make_ascii_lowercase();
            if let Some(value) = parse(self.line.trim()) {
                return Ok(value);
            }
        }
    }
}
