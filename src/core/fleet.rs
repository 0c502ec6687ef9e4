use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::SHIP_CATALOG;
use super::ship::ShipType;

/// How many ships of each type a match uses. Types absent from the map count
/// as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FleetSpec(BTreeMap<ShipType, usize>);

impl FleetSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// One ship of every catalog type.
    pub fn one_of_each() -> Self {
        SHIP_CATALOG.iter().map(|(ty, _)| (*ty, 1)).collect()
    }

    /// Builder-style setter.
    pub fn with(mut self, ship_type: ShipType, count: usize) -> Self {
        self.0.insert(ship_type, count);
        self
    }

    pub fn count(&self, ship_type: ShipType) -> usize {
        self.0.get(&ship_type).copied().unwrap_or(0)
    }

    /// Total number of ships requested.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// `(type, count)` pairs in catalog order, largest ship first.
    pub fn in_placement_order(&self) -> impl Iterator<Item = (ShipType, usize)> + '_ {
        SHIP_CATALOG.iter().map(move |(ty, _)| (*ty, self.count(*ty)))
    }

    /// The caller contract for random placement: at least one ship of every
    /// type and no more ships than the shorter board side.
    pub fn is_valid_for(&self, height: usize, width: usize) -> bool {
        self.fits_within(height.min(width))
    }

    /// At least one ship of every type and at most `max_ships` in total.
    pub fn fits_within(&self, max_ships: usize) -> bool {
        self.in_placement_order().all(|(_, count)| count > 0) && self.total() <= max_ships
    }
}

impl FromIterator<(ShipType, usize)> for FleetSpec {
    fn from_iter<I: IntoIterator<Item = (ShipType, usize)>>(iter: I) -> Self {
        FleetSpec(iter.into_iter().collect())
    }
}
