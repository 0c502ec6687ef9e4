//! Core BattleSalvo model: coordinates, boards, ships and fleets.
//!
//! Nothing in here performs I/O; players, the local controller and the
//! protocol adapter all build on these types.

pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod ship;
pub mod ship_board;

// Re-export commonly used types
pub use board::{Board, CellState};
pub use common::{GameResult, SalvoError};
pub use config::*;
pub use coord::Coord;
pub use fleet::FleetSpec;
pub use ship::{Orientation, Ship, ShipType};
pub use ship_board::ShipBoard;
