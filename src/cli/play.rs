//! Play command implementation: an interactive read-eval-print loop
//! over game commands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use warfront::game::invariants;
use warfront::{Army, Command, CommandOutcome, Game, Player, Position, World};

use super::CliError;

/// Strength of each player's starting army.
const START_STRENGTH: u32 = 10;

/// A line of player input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    /// A game command to execute.
    Game(Command),
    /// Print the help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the map cannot be read or loaded, or if no
/// playable game can be set up on it.
pub(crate) fn execute(map: &Path, players: u8, food: u32) -> Result<(), CliError> {
    let data = std::fs::read_to_string(map)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", map.display())))?;
    let world = World::load(&data)
        .map_err(|e| CliError::new(format!("{}: {e}", map.display())))?;
    let game = setup_game(world, players, food)?;
    run(game)
}

/// Build a fresh game: each player gets the starting food stockpile
/// and one army placed on a city province. Cities are assigned
/// round-robin in map order; city-poor maps fall back to the first
/// provinces. Placement is front-end setup, not a core rule.
fn setup_game(world: World, player_count: u8, food: u32) -> Result<Game, CliError> {
    if player_count == 0 {
        return Err(CliError::new("need at least one player"));
    }
    if world.is_empty() {
        return Err(CliError::new("map has no provinces"));
    }

    let mut starts: Vec<Position> = world.cities().map(|(position, _)| position).collect();
    if starts.is_empty() {
        starts = world.provinces().map(|(position, _)| position).collect();
    }

    let mut players = Vec::with_capacity(usize::from(player_count));
    for id in 0..player_count {
        let start = starts[usize::from(id) % starts.len()];
        let mut player = Player::new(id, food);
        player.add_army(&Army::new(start, START_STRENGTH), start);
        players.push(player);
    }

    Game::new(world, players).ok_or_else(|| CliError::new("no players"))
}

/// The interactive loop: prompt with the current player's index, parse
/// a line, execute it, report the outcome.
fn run(mut game: Game) -> Result<(), CliError> {
    println!("Welcome to Warfront - type 'help' for instructions.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{}> ", game.current_player_index());
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse(&line) {
            Err(usage) => println!("{usage}"),
            Ok(Input::Help) => print_help(),
            Ok(Input::Quit) => break,
            Ok(Input::Game(command)) => {
                match game.execute(command) {
                    Ok(outcome) => println!("{}", describe(outcome)),
                    Err(e) => println!("{e}"),
                }
                invariants::assert_invariants(&game);
            }
        }
    }

    Ok(())
}

/// Parse a line of input into a command.
///
/// Returns `Err` with the expected form when the line does not parse.
fn parse(line: &str) -> Result<Input, &'static str> {
    const COMMANDS: &str =
        "command must be one of: help, end, mv, capture, feed, undo, resources, print, quit";

    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = words.split_first() else {
        return Err(COMMANDS);
    };

    match keyword {
        "help" => Ok(Input::Help),
        "quit" => Ok(Input::Quit),
        "end" => Ok(Input::Game(Command::EndTurn)),
        "print" => Ok(Input::Game(Command::WorldReport)),
        "resources" => Ok(Input::Game(Command::Resources)),
        "mv" => parse_move(args),
        "capture" => parse_id(args, "command must match: capture ID")
            .map(|army| Input::Game(Command::Capture { army })),
        "undo" => parse_id(args, "command must match: undo ID")
            .map(|army| Input::Game(Command::Undo { army })),
        "feed" => parse_feed(args),
        _ => Err(COMMANDS),
    }
}

/// Parse `mv ID X,Y`.
fn parse_move(args: &[&str]) -> Result<Input, &'static str> {
    const USAGE: &str = "command must match: mv ID X,Y";

    let &[id, target] = args else {
        return Err(USAGE);
    };
    let army = id.parse().map_err(|_| USAGE)?;
    let Some((x, y)) = target.split_once(',') else {
        return Err(USAGE);
    };
    let x = x.parse().map_err(|_| USAGE)?;
    let y = y.parse().map_err(|_| USAGE)?;
    Ok(Input::Game(Command::Move {
        army,
        target: Position::new(x, y),
    }))
}

/// Parse `feed ID QUANTITY`.
fn parse_feed(args: &[&str]) -> Result<Input, &'static str> {
    const USAGE: &str = "command must match: feed ID QUANTITY";

    let &[id, quantity] = args else {
        return Err(USAGE);
    };
    let army = id.parse().map_err(|_| USAGE)?;
    let food = quantity.parse().map_err(|_| USAGE)?;
    Ok(Input::Game(Command::Feed { army, food }))
}

/// Parse a single-id argument list.
fn parse_id(args: &[&str], usage: &'static str) -> Result<u32, &'static str> {
    let &[id] = args else {
        return Err(usage);
    };
    id.parse().map_err(|_| usage)
}

/// One-line description of a successful outcome.
fn describe(outcome: CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Moved { from, to } => format!("Army moved {from} -> {to}"),
        CommandOutcome::Captured { position } => format!("Territory captured at {position}"),
        CommandOutcome::AlreadyControlled { position } => {
            format!("Territory at {position} already controlled")
        }
        CommandOutcome::Fed { health } => format!("Army fed, health now {health}"),
        CommandOutcome::MoveUndone { position } => format!("Army returned to {position}"),
        CommandOutcome::TurnEnded { current_player } => {
            format!("Turn passed to player {current_player}")
        }
        CommandOutcome::Resources { food } => format!("Food: {food}"),
        CommandOutcome::WorldReport(report) => report,
    }
}

/// Print the help text.
fn print_help() {
    println!("help => Prints this help message");
    println!("end => Ends the current player's turn, advancing to the next player");
    println!("mv ID X,Y => Moves army ID to X,Y iff the move is legal");
    println!("capture ID => Brings the province under army ID's control");
    println!("feed ID QUANTITY => Feeds army ID from the food stockpile to heal it");
    println!("undo ID => Moves army ID back to its position at the start of the turn");
    println!("resources => Prints the current player's food stockpile");
    println!("print => Prints the current state of the world");
    println!("quit => Exits the game");
}
