//! A board that knows which ship occupies each cell.

use core::fmt;

use log::trace;
use rand::Rng;

use super::board::{Board, CellState};
use super::common::SalvoError;
use super::config::MAX_PLACEMENT_ATTEMPTS;
use super::coord::Coord;
use super::fleet::FleetSpec;
use super::ship::{Orientation, Ship, ShipType};

/// A player's own waters: the cell grid plus the ships placed on it, in
/// placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipBoard {
    board: Board,
    ships: Vec<Ship>,
}

impl ShipBoard {
    /// Create an empty board with no ships placed.
    pub fn new(height: usize, width: usize) -> Result<Self, SalvoError> {
        Ok(ShipBoard {
            board: Board::new(height, width)?,
            ships: Vec::new(),
        })
    }

    /// The underlying cell grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    pub fn cell_at(&self, coord: Coord) -> Result<CellState, SalvoError> {
        self.board.cell_at(coord)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships with at least one undamaged segment.
    pub fn unsunk_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Whether a ship of `ship_type` fits at `origin` without leaving the
    /// board or overlapping another ship. Earlier misses do not block it.
    pub fn is_valid_placement(
        &self,
        origin: Coord,
        orientation: Orientation,
        ship_type: ShipType,
    ) -> bool {
        self.fits(&Ship::of_type(origin, orientation, ship_type))
    }

    fn fits(&self, candidate: &Ship) -> bool {
        candidate.occupied_coords().all(|c| {
            matches!(
                self.board.cell_at(c),
                Ok(CellState::Water) | Ok(CellState::Miss)
            )
        })
    }

    /// Place a ship, marking its cells. Fails with `InvalidPlacement` when
    /// [`is_valid_placement`](Self::is_valid_placement) would return `false`.
    pub fn create_and_place_ship(
        &mut self,
        origin: Coord,
        orientation: Orientation,
        ship_type: ShipType,
    ) -> Result<&Ship, SalvoError> {
        self.place(Ship::of_type(origin, orientation, ship_type))
    }

    /// Place an already constructed, undamaged ship.
    pub fn place(&mut self, ship: Ship) -> Result<&Ship, SalvoError> {
        if !self.fits(&ship) {
            return Err(SalvoError::InvalidPlacement {
                origin: ship.origin(),
                orientation: ship.orientation(),
                length: ship.length(),
            });
        }
        for c in ship.occupied_coords() {
            self.board.set_cell_at(c, CellState::Ship)?;
        }
        self.ships.push(ship);
        Ok(&self.ships[self.ships.len() - 1])
    }

    /// Sample uniform origins and orientations until one fits.
    ///
    /// Gives up with `InvalidPlacement` after [`MAX_PLACEMENT_ATTEMPTS`]
    /// samples, which only happens when the fleet is too large for the board.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coord, Orientation), SalvoError> {
        let (height, width) = self.dimensions();
        let mut last = (Coord::new(0, 0), Orientation::Horizontal);
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let origin = Coord::new(rng.random_range(0..width), rng.random_range(0..height));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.is_valid_placement(origin, orientation, ship_type) {
                return Ok((origin, orientation));
            }
            last = (origin, orientation);
        }
        Err(SalvoError::InvalidPlacement {
            origin: last.0,
            orientation: last.1,
            length: ship_type.size(),
        })
    }

    /// Randomly place every ship in `fleet`, largest type first. Returns the
    /// placed ships in placement order.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &FleetSpec,
    ) -> Result<Vec<Ship>, SalvoError> {
        let mut placed = Vec::with_capacity(fleet.total());
        for (ship_type, count) in fleet.in_placement_order() {
            for _ in 0..count {
                let (origin, orientation) = self.random_placement(rng, ship_type)?;
                trace!("placing {} at {} {}", ship_type.name(), origin, orientation);
                placed.push(self.create_and_place_ship(origin, orientation, ship_type)?.clone());
            }
        }
        Ok(placed)
    }

    /// Resolve an incoming shot. Returns `true` for a fresh hit on a ship.
    /// A miss never downgrades a cell that is already `HIT`.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<bool, SalvoError> {
        // validate before touching any ship
        let current = self.board.cell_at(coord)?;
        if let Some(ship) = self.ships.iter_mut().find(|s| s.contains(coord)) {
            if ship.receive_shot(coord) {
                self.board.set_cell_at(coord, CellState::Hit)?;
                return Ok(true);
            }
        }
        if current != CellState::Hit {
            self.board.set_cell_at(coord, CellState::Miss)?;
        }
        Ok(false)
    }
}

impl fmt::Display for ShipBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
