use rand::rngs::SmallRng;

use crate::console::Console;
use crate::core::{Coord, FleetSpec, SalvoError, Ship};

use super::{Player, PlayerCore};

pub const HUMAN_NAME: &str = "Human Player";

/// Interactive player: shows both boards and reads each shot from a console.
pub struct HumanPlayer<C: Console> {
    core: PlayerCore,
    console: C,
}

impl<C: Console> HumanPlayer<C> {
    pub fn new(console: C, rng: SmallRng) -> Self {
        Self {
            core: PlayerCore::new(rng),
            console,
        }
    }

    pub fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn show_boards(&mut self) -> Result<(), SalvoError> {
        let opponent = self.core.opponent_board()?.to_string();
        let own = self.core.own_board()?.to_string();
        self.console.display_message("Opponent's Board:")?;
        self.console.display_message(&opponent)?;
        self.console.display_message("")?;
        self.console.display_message("Your Board:")?;
        self.console.display_message(&own)?;
        self.console.display_message("")?;
        Ok(())
    }

    fn read_shot(&mut self) -> Result<Coord, SalvoError> {
        let (height, width) = self.core.opponent_board()?.dimensions();
        loop {
            let ints = self
                .console
                .get_some_ints(2, "Please enter exactly 2 integers")?;
            match Coord::try_new(ints[0], ints[1]) {
                Ok(c) if c.x() < width && c.y() < height => return Ok(c),
                _ => self
                    .console
                    .display_message("Please enter coordinates that are within the board's dimensions")?,
            }
        }
    }
}

impl<C: Console> Player for HumanPlayer<C> {
    fn name(&self) -> &str {
        HUMAN_NAME
    }

    fn setup(
        &mut self,
        height: usize,
        width: usize,
        fleet: &FleetSpec,
    ) -> Result<Vec<Ship>, SalvoError> {
        self.core.setup(height, width, fleet)
    }

    fn take_shots(&mut self) -> Result<Vec<Coord>, SalvoError> {
        let quota = self.core.unsunk_ship_count()?;
        self.show_boards()?;
        self.console
            .display_message(&format!("Please enter {} shots:", quota))?;
        let mut shots = Vec::with_capacity(quota);
        for _ in 0..quota {
            shots.push(self.read_shot()?);
        }
        self.core.record_volley(&shots);
        Ok(shots)
    }

    fn report_damage(&mut self, incoming: &[Coord]) -> Result<Vec<Coord>, SalvoError> {
        self.core.report_damage(incoming)
    }

    fn successful_hits(&mut self, hits: &[Coord]) -> Result<(), SalvoError> {
        self.core.successful_hits(hits)
    }
}
