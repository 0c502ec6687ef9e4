//! Rectangular grid of cell states.

use core::fmt;

use super::common::SalvoError;
use super::config::dimension_in_range;
use super::coord::Coord;

/// What is known about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Water,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Single character used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            CellState::Water => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'H',
            CellState::Miss => 'M',
        }
    }

    /// `true` once a shot has resolved this cell either way.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A `height × width` grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an all-water board. Both dimensions must lie in `[6, 15]`.
    pub fn new(height: usize, width: usize) -> Result<Self, SalvoError> {
        if !dimension_in_range(height) || !dimension_in_range(width) {
            return Err(SalvoError::InvalidDimensions { height, width });
        }
        Ok(Board {
            height,
            width,
            cells: vec![CellState::Water; height * width],
        })
    }

    /// `(height, width)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.x() < self.width && coord.y() < self.height
    }

    pub fn cell_at(&self, coord: Coord) -> Result<CellState, SalvoError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    pub fn set_cell_at(&mut self, coord: Coord, state: CellState) -> Result<(), SalvoError> {
        let idx = self.index(coord)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Every coordinate on the board, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }

    /// Coordinates that no shot has resolved yet.
    pub fn unresolved_coords(&self) -> Vec<Coord> {
        self.coords()
            .zip(self.cells.iter())
            .filter(|(_, cell)| !cell.is_resolved())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    fn index(&self, coord: Coord) -> Result<usize, SalvoError> {
        if !self.is_in_bounds(coord) {
            return Err(SalvoError::OutOfBounds {
                coord,
                height: self.height,
                width: self.width,
            });
        }
        Ok(coord.y() * self.width + coord.x())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
