use super::ship::ShipType;

/// Smallest allowed board height or width.
pub const MIN_DIMENSION: usize = 6;
/// Largest allowed board height or width.
pub const MAX_DIMENSION: usize = 15;

/// Ship catalog in placement order, largest first.
///
/// Placing long ships before short ones keeps small boards from ending up
/// with gaps that nothing left in the fleet can fill.
pub const SHIP_CATALOG: [(ShipType, usize); 4] = [
    (ShipType::Carrier, 6),
    (ShipType::Battleship, 5),
    (ShipType::Destroyer, 4),
    (ShipType::Submarine, 3),
];

/// Upper bound on random samples tried for a single ship before setup gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100_000;

/// Returns `true` when `n` is a legal board height or width.
pub fn dimension_in_range(n: usize) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&n)
}
