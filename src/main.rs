use std::sync::{Arc, Mutex};

use battlesalvo::{
    init_logging, rng_from_seed, AiPlayer, GameType, HumanPlayer, HuntTargeting, LocalController,
    Player, PlayerNode, RandomTargeting, Targeting, TcpTransport, TextConsole,
};

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TargetingKind {
    /// Follow up on hits by firing at their neighbours.
    Hunt,
    /// Fire at random unresolved cells every round.
    Random,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GameTypeArg {
    Single,
    Multi,
}

impl From<GameTypeArg> for GameType {
    fn from(arg: GameTypeArg) -> Self {
        match arg {
            GameTypeArg::Single => GameType::Single,
            GameTypeArg::Multi => GameType::Multi,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play against an AI on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = TargetingKind::Hunt)]
        targeting: TargetingKind,
    },
    /// Connect an AI player to a BattleSalvo server.
    Connect {
        host: String,
        port: u16,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = TargetingKind::Hunt)]
        targeting: TargetingKind,
        #[arg(long, value_enum, default_value_t = GameTypeArg::Single)]
        game_type: GameTypeArg,
        #[arg(long, help = "Name sent to the server when joining")]
        name: Option<String>,
    },
}

fn ai_player(seed: Option<u64>, targeting: TargetingKind, name: Option<String>) -> Box<dyn Player> {
    let rng = rng_from_seed(seed);
    match targeting {
        TargetingKind::Hunt => named(AiPlayer::with_targeting(rng, HuntTargeting::new()), name),
        TargetingKind::Random => named(AiPlayer::with_targeting(rng, RandomTargeting::new()), name),
    }
}

fn named<T: Targeting + 'static>(ai: AiPlayer<T>, name: Option<String>) -> Box<dyn Player> {
    match name {
        Some(n) => Box::new(ai.with_name(n)),
        None => Box::new(ai),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, targeting } => {
            if let Some(s) = seed {
                log::info!("using fixed seed {} (game will be reproducible)", s);
            }
            let console = Arc::new(Mutex::new(TextConsole::stdio()));
            let human = HumanPlayer::new(console.clone(), rng_from_seed(seed));
            // different stream for the opponent so both fleets differ
            let ai = ai_player(seed.map(|s| s.wrapping_add(1)), targeting, None);
            let mut controller = LocalController::new(console, Box::new(human), ai);
            controller.run()?;
        }
        Commands::Connect {
            host,
            port,
            seed,
            targeting,
            game_type,
            name,
        } => {
            let transport = match TcpTransport::connect((host.as_str(), port)).await {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Unable to connect to server");
                    return Err(e.into());
                }
            };
            log::info!("connected to {}:{}", host, port);
            let player = ai_player(seed, targeting, name);
            let mut node =
                PlayerNode::new(player, Box::new(transport)).with_game_type(game_type.into());
            node.run().await?;
        }
    }
    Ok(())
}
