//! monopoly-sim - automated self-play for one seed.
//!
//! Seats N automated participants, plays rounds until one participant is
//! left standing or the round limit is reached, then prints the standings.

use clap::Parser;
use tracing::info;

use monopoly_sim::{BoardSnapshot, Frontend, Game, GameConfig, GameError, GameEvent};

#[derive(Parser, Debug)]
#[command(name = "monopoly-sim", version, about = "Automated self-play for the property-trading game")]
struct Args {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of automated participants
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,

    /// Stop after this many rounds
    #[arg(long, default_value_t = 200)]
    rounds: usize,

    #[arg(long, default_value_t = monopoly_sim::core::DEFAULT_STARTING_BALANCE)]
    starting_balance: i64,

    /// Print the board after every move
    #[arg(long)]
    board: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

const SEAT_NAMES: [&str; 8] = ["Ada", "Bo", "Cy", "Dee", "Eli", "Fay", "Gus", "Hal"];

/// Prints every event; there is nobody to prompt.
struct Console {
    show_board: bool,
}

impl Frontend for Console {
    fn prompt_yes_no(&mut self, _message: &str) -> bool {
        false
    }

    fn prompt_text(&mut self, _message: &str) -> String {
        String::new()
    }

    fn prompt_integer(&mut self, _message: &str) -> i64 {
        0
    }

    fn notify(&mut self, event: &GameEvent) {
        println!("{}", event);
    }

    fn render_board(&mut self, board: &BoardSnapshot) {
        if self.show_board {
            print!("{}", board);
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = GameConfig::default()
        .with_seed(args.seed)
        .with_starting_balance(args.starting_balance)
        .with_max_participants(args.players as usize);
    let mut game = Game::new(config, Console { show_board: args.board });
    info!(
        seed = game.config().seed,
        balance = game.config().starting_balance,
        players = args.players,
        "starting self-play"
    );
    // Distinct initials so every token is told apart on the board
    for name in SEAT_NAMES.iter().take(args.players as usize) {
        game.add_participant(name, true)?;
    }

    let mut rounds_played = 0;
    while rounds_played < args.rounds && game.winner().is_none() {
        rounds_played += 1;
        println!("--- Round {} ---", rounds_played);
        game.play_round();
        game.remove_bankrupt();
        debug_assert!(game.check_invariants());
    }

    println!();
    match game.winner() {
        Some(winner) => println!("{} wins after {} rounds", winner.name, rounds_played),
        None => println!("No winner after {} rounds", rounds_played),
    }
    for status in game.status() {
        let properties: Vec<_> = status.property_names().collect();
        println!(
            "{}: ${} (wealth ${}) at {} | {}",
            status.name,
            status.balance,
            status.wealth(),
            status.position,
            if properties.is_empty() {
                "no properties".to_string()
            } else {
                properties.join(", ")
            }
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_initials_are_distinct() {
        let mut initials: Vec<char> = SEAT_NAMES.iter().filter_map(|n| n.chars().next()).collect();
        initials.sort_unstable();
        initials.dedup();
        assert_eq!(initials.len(), SEAT_NAMES.len());
    }
}
