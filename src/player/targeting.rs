//! Shot selection strategies for the AI player.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::core::{Board, CellState, Coord};

/// Chooses a volley from the opponent-knowledge board.
pub trait Targeting: Send {
    /// Pick up to `quota` distinct, unresolved coordinates.
    fn select(&mut self, knowledge: &Board, quota: usize, rng: &mut SmallRng) -> Vec<Coord>;

    /// Called after the opponent-knowledge board has been updated with the
    /// results of the last volley.
    fn observe_hits(&mut self, _knowledge: &Board, _hits: &[Coord]) {}

    /// Forget everything learned about the previous game.
    fn reset(&mut self) {}
}

/// Shuffle all unresolved cells and fire at the first `quota`.
#[derive(Debug, Clone, Default)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for RandomTargeting {
    fn select(&mut self, knowledge: &Board, quota: usize, rng: &mut SmallRng) -> Vec<Coord> {
        let mut options = knowledge.unresolved_coords();
        options.shuffle(rng);
        options.truncate(quota);
        options
    }
}

/// Random search that switches to the neighbours of every confirmed hit.
///
/// Neighbours are queued first-in first-out and drained before any random
/// shot is taken.
#[derive(Debug, Clone, Default)]
pub struct HuntTargeting {
    queue: VecDeque<Coord>,
}

impl HuntTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates waiting to be fired at, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &Coord> {
        self.queue.iter()
    }
}

impl Targeting for HuntTargeting {
    fn select(&mut self, knowledge: &Board, quota: usize, rng: &mut SmallRng) -> Vec<Coord> {
        let mut shots = Vec::with_capacity(quota);
        while shots.len() < quota {
            let Some(next) = self.queue.pop_front() else {
                break;
            };
            let unresolved = knowledge
                .cell_at(next)
                .map(|cell| !cell.is_resolved())
                .unwrap_or(false);
            if unresolved && !shots.contains(&next) {
                shots.push(next);
            }
        }

        let remaining = quota - shots.len();
        if remaining > 0 {
            let mut options = knowledge.unresolved_coords();
            options.shuffle(rng);
            let fill: Vec<Coord> = options
                .into_iter()
                .filter(|c| !shots.contains(c))
                .take(remaining)
                .collect();
            shots.extend(fill);
        }
        shots
    }

    fn observe_hits(&mut self, knowledge: &Board, hits: &[Coord]) {
        for hit in hits {
            for n in hit.neighbors() {
                let fresh = matches!(knowledge.cell_at(n), Ok(CellState::Water));
                if fresh && !self.queue.contains(&n) {
                    self.queue.push_back(n);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
    }
}
