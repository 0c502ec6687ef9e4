use core::fmt;

use serde::{Deserialize, Serialize};

use super::common::SalvoError;

/// A cell position: `x` is the column, `y` the row, both counted from the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: usize,
    y: usize,
}

/// Signed form accepted on the wire and from the console.
#[derive(Deserialize)]
struct RawCoord {
    x: i64,
    y: i64,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from signed components, rejecting negatives.
    pub fn try_new(x: i64, y: i64) -> Result<Self, SalvoError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok(Self::new(ux, uy)),
            _ => Err(SalvoError::InvalidCoordinate { x, y }),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// The 4-connected neighbours that stay non-negative, in the order
    /// right, down, left, up. Upper bounds are the caller's concern.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        let (x, y) = (self.x, self.y);
        [
            Some(Coord::new(x + 1, y)),
            Some(Coord::new(x, y + 1)),
            x.checked_sub(1).map(|left| Coord::new(left, y)),
            y.checked_sub(1).map(|up| Coord::new(x, up)),
        ]
        .into_iter()
        .flatten()
    }
}

impl TryFrom<RawCoord> for Coord {
    type Error = SalvoError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::try_new(raw.x, raw.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
