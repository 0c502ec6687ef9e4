pub mod console;
pub mod core;
pub mod game;
mod logging;
pub mod player;
#[cfg(feature = "net")]
pub mod player_node;
pub mod prelude;
pub mod protocol;
#[cfg(feature = "net")]
pub mod transport;

pub use crate::core::*;
pub use console::{Console, TextConsole};
pub use game::{GameConfig, GameOutcome, LocalController, Phase};
pub use logging::init_logging;
pub use player::{rng_from_seed, AiPlayer, HumanPlayer, HuntTargeting, Player, PlayerCore, RandomTargeting, Targeting};
#[cfg(feature = "net")]
pub use player_node::*;
pub use protocol::*;
#[cfg(feature = "net")]
pub use transport::{tcp::TcpTransport, Transport, TransportError};
