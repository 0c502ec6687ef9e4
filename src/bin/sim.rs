use std::io;

use battlesalvo::{
    init_logging, AiPlayer, FleetSpec, GameConfig, GameResult, LocalController, TextConsole,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one AI-vs-AI game and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed1: u64,
    seed2: u64,
    #[arg(long, default_value_t = 10)]
    height: usize,
    #[arg(long, default_value_t = 10)]
    width: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let p1 = AiPlayer::new(SmallRng::seed_from_u64(args.seed1)).with_name("player1");
    let p2 = AiPlayer::new(SmallRng::seed_from_u64(args.seed2)).with_name("player2");

    let config = GameConfig::new(args.height, args.width, FleetSpec::one_of_each());
    let console = TextConsole::new(io::empty(), io::sink());
    let mut controller = LocalController::new(console, Box::new(p1), Box::new(p2));
    let outcome = controller.run_with_config(&config)?;

    let winner = match (outcome.first, outcome.second) {
        (GameResult::Win, _) => Some("player1"),
        (_, GameResult::Win) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "player1": outcome.first,
        "player2": outcome.second,
        "winner": winner,
        "rounds": outcome.rounds,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
