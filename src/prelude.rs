//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, CellState, Console, Coord, FleetSpec, GameConfig, GameResult, HumanPlayer,
    HuntTargeting, LocalController, Player, RandomTargeting, SalvoError, Ship, ShipBoard,
    ShipType, TextConsole,
};

#[cfg(feature = "net")]
pub use crate::{
    transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport},
    PlayerNode,
};
