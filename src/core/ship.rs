//! Ship definitions and per-segment damage tracking.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::config::SHIP_CATALOG;
use super::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step from one segment to the next, as `(dx, dy)`.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Kind of ship. Sizes and placement order live in [`SHIP_CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
}

impl ShipType {
    /// Ship's length.
    pub fn size(self) -> usize {
        SHIP_CATALOG
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, size)| *size)
            .unwrap_or_default()
    }

    /// Ship's display name.
    pub fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
        }
    }
}

/// A ship laid out from its origin (the top-left-most cell) along its
/// orientation, with one hit flag per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coord,
    orientation: Orientation,
    hits: Vec<bool>,
}

impl Ship {
    /// An undamaged ship of explicit `length`.
    pub fn new(origin: Coord, orientation: Orientation, length: usize) -> Self {
        Ship {
            origin,
            orientation,
            hits: vec![false; length],
        }
    }

    /// An undamaged ship sized from the catalog.
    pub fn of_type(origin: Coord, orientation: Orientation, ship_type: ShipType) -> Self {
        Ship::new(origin, orientation, ship_type.size())
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.hits.len()
    }

    /// Cells covered by this ship, origin first.
    pub fn occupied_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dx, dy) = self.orientation.step();
        let (x, y) = (self.origin.x(), self.origin.y());
        (0..self.length()).map(move |i| Coord::new(x + i * dx, y + i * dy))
    }

    /// Segment index covering `coord`, if any.
    fn segment(&self, coord: Coord) -> Option<usize> {
        let dx = coord.x().checked_sub(self.origin.x())?;
        let dy = coord.y().checked_sub(self.origin.y())?;
        let idx = match self.orientation {
            Orientation::Horizontal if dy == 0 => dx,
            Orientation::Vertical if dx == 0 => dy,
            _ => return None,
        };
        (idx < self.length()).then_some(idx)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.segment(coord).is_some()
    }

    /// Register a shot. Returns `true` only when it lands on a segment that
    /// had not been hit before.
    pub fn receive_shot(&mut self, coord: Coord) -> bool {
        match self.segment(coord) {
            Some(idx) if !self.hits[idx] => {
                self.hits[idx] = true;
                true
            }
            _ => false,
        }
    }

    /// Whether the segment at `idx` (0 = origin) has been hit.
    pub fn is_segment_hit(&self, idx: usize) -> bool {
        self.hits.get(idx).copied().unwrap_or(false)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ship of length {} at {}",
            self.orientation,
            self.length(),
            self.origin
        )
    }
}
