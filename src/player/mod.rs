//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: autonomous player driven by a pluggable targeting strategy
//! - HumanPlayer: interactive player reading shots from a console
//!
//! Both compose a [`PlayerCore`], which owns the boards and the pending salvo.

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{Board, CellState, Coord, FleetSpec, GameResult, SalvoError, Ship, ShipBoard};

/// Interface implemented by different player types.
///
/// Every operation except [`name`](Player::name) and [`setup`](Player::setup)
/// fails with [`SalvoError::NotSetUp`] until `setup` has run.
pub trait Player: Send {
    /// Static identity of this player.
    fn name(&self) -> &str;

    /// Create fresh boards of `height × width`, place `fleet` and return the
    /// placed ships. Calling it again starts over.
    fn setup(
        &mut self,
        height: usize,
        width: usize,
        fleet: &FleetSpec,
    ) -> Result<Vec<Ship>, SalvoError>;

    /// This round's volley: one shot per ship still afloat on this player's
    /// own board, fewer if the opponent board runs out of targets.
    fn take_shots(&mut self) -> Result<Vec<Coord>, SalvoError>;

    /// Apply the opponent's volley to our fleet and return the shots that hit,
    /// in the order they were given.
    fn report_damage(&mut self, incoming: &[Coord]) -> Result<Vec<Coord>, SalvoError>;

    /// Learn which shots of our last volley hit.
    fn successful_hits(&mut self, hits: &[Coord]) -> Result<(), SalvoError>;

    /// Inform the player that the game is over.
    fn end_game(&mut self, _result: GameResult, _reason: &str) {}
}

/// Boards created by `setup`.
#[derive(Debug, Clone)]
struct Boards {
    own: ShipBoard,
    opponent: Board,
}

/// State shared by every player variant: own fleet, opponent knowledge, the
/// volley awaiting results and the RNG used for placement.
#[derive(Debug, Clone)]
pub struct PlayerCore {
    rng: SmallRng,
    boards: Option<Boards>,
    pending: Vec<Coord>,
}

impl PlayerCore {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            boards: None,
            pending: Vec::new(),
        }
    }

    pub fn setup(
        &mut self,
        height: usize,
        width: usize,
        fleet: &FleetSpec,
    ) -> Result<Vec<Ship>, SalvoError> {
        let mut own = ShipBoard::new(height, width)?;
        let opponent = Board::new(height, width)?;
        let ships = own.place_fleet(&mut self.rng, fleet)?;
        debug!("placed {} ships on a {}x{} board", ships.len(), height, width);
        self.boards = Some(Boards { own, opponent });
        self.pending.clear();
        Ok(ships)
    }

    fn boards(&self) -> Result<&Boards, SalvoError> {
        self.boards.as_ref().ok_or(SalvoError::NotSetUp)
    }

    fn boards_mut(&mut self) -> Result<&mut Boards, SalvoError> {
        self.boards.as_mut().ok_or(SalvoError::NotSetUp)
    }

    /// This player's fleet.
    pub fn own_board(&self) -> Result<&ShipBoard, SalvoError> {
        Ok(&self.boards()?.own)
    }

    /// What this player knows of the opponent: only `WATER`, `HIT` or `MISS`.
    pub fn opponent_board(&self) -> Result<&Board, SalvoError> {
        Ok(&self.boards()?.opponent)
    }

    pub fn unsunk_ship_count(&self) -> Result<usize, SalvoError> {
        Ok(self.boards()?.own.unsunk_ship_count())
    }

    /// Shots fired but not yet reconciled by `successful_hits`.
    pub fn pending_salvo(&self) -> &[Coord] {
        &self.pending
    }

    /// Opponent knowledge and RNG together, for targeting strategies.
    pub fn targeting_view(&mut self) -> Result<(&Board, &mut SmallRng), SalvoError> {
        let boards = self.boards.as_ref().ok_or(SalvoError::NotSetUp)?;
        Ok((&boards.opponent, &mut self.rng))
    }

    /// Remember a volley until its results come back.
    pub fn record_volley(&mut self, shots: &[Coord]) {
        self.pending.extend_from_slice(shots);
    }

    /// Fails with [`SalvoError::OutOfBounds`] before touching the fleet if any
    /// shot is off the board.
    pub fn report_damage(&mut self, incoming: &[Coord]) -> Result<Vec<Coord>, SalvoError> {
        let own = &mut self.boards_mut()?.own;
        let board = own.board();
        if let Some(&coord) = incoming.iter().find(|c| !board.is_in_bounds(**c)) {
            let (height, width) = own.dimensions();
            return Err(SalvoError::OutOfBounds {
                coord,
                height,
                width,
            });
        }
        let mut hits = Vec::new();
        for &shot in incoming {
            if own.receive_shot(shot)? {
                hits.push(shot);
            }
        }
        Ok(hits)
    }

    pub fn successful_hits(&mut self, hits: &[Coord]) -> Result<(), SalvoError> {
        let boards = self.boards.as_mut().ok_or(SalvoError::NotSetUp)?;
        for &shot in &self.pending {
            if hits.contains(&shot) {
                boards.opponent.set_cell_at(shot, CellState::Hit)?;
            } else if boards.opponent.cell_at(shot)? != CellState::Hit {
                // a repeat shot must not un-mark an earlier confirmed hit
                boards.opponent.set_cell_at(shot, CellState::Miss)?;
            }
        }
        self.pending.clear();
        Ok(())
    }
}

/// Seeded RNG when `seed` is given, otherwise one seeded from the thread RNG.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

pub mod human;
pub use human::HumanPlayer;

pub mod targeting;
pub use targeting::{HuntTargeting, RandomTargeting, Targeting};
