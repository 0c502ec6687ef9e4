use log::{debug, info};
use rand::rngs::SmallRng;

use crate::core::{Board, Coord, FleetSpec, GameResult, SalvoError, Ship};

use super::targeting::{HuntTargeting, Targeting};
use super::{Player, PlayerCore};

pub const DEFAULT_AI_NAME: &str = "salvo-ai";

/// Autonomous player. Fires one shot per surviving ship, chosen by `T`.
pub struct AiPlayer<T: Targeting = HuntTargeting> {
    name: String,
    core: PlayerCore,
    targeting: T,
}

impl AiPlayer<HuntTargeting> {
    pub fn new(rng: SmallRng) -> Self {
        Self::with_targeting(rng, HuntTargeting::new())
    }
}

impl<T: Targeting> AiPlayer<T> {
    pub fn with_targeting(rng: SmallRng, targeting: T) -> Self {
        Self {
            name: DEFAULT_AI_NAME.to_string(),
            core: PlayerCore::new(rng),
            targeting,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn core(&self) -> &PlayerCore {
        &self.core
    }

    pub fn targeting(&self) -> &T {
        &self.targeting
    }

    pub fn opponent_board(&self) -> Result<&Board, SalvoError> {
        self.core.opponent_board()
    }
}

impl<T: Targeting> Player for AiPlayer<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(
        &mut self,
        height: usize,
        width: usize,
        fleet: &FleetSpec,
    ) -> Result<Vec<Ship>, SalvoError> {
        self.targeting.reset();
        self.core.setup(height, width, fleet)
    }

    fn take_shots(&mut self) -> Result<Vec<Coord>, SalvoError> {
        let quota = self.core.unsunk_ship_count()?;
        let (knowledge, rng) = self.core.targeting_view()?;
        let shots = self.targeting.select(knowledge, quota, rng);
        debug!("{} fires {} of {} shots", self.name, shots.len(), quota);
        self.core.record_volley(&shots);
        Ok(shots)
    }

    fn report_damage(&mut self, incoming: &[Coord]) -> Result<Vec<Coord>, SalvoError> {
        self.core.report_damage(incoming)
    }

    fn successful_hits(&mut self, hits: &[Coord]) -> Result<(), SalvoError> {
        self.core.successful_hits(hits)?;
        let knowledge = self.core.opponent_board()?;
        self.targeting.observe_hits(knowledge, hits);
        Ok(())
    }

    fn end_game(&mut self, result: GameResult, reason: &str) {
        info!("{}: game over, {} ({})", self.name, result, reason);
    }
}
