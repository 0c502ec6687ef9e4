//! Local two-player match: configuration prompts, setup, rounds of
//! simultaneous volleys and the final verdict.

use log::{debug, info};

use crate::console::Console;
use crate::core::{
    dimension_in_range, Coord, FleetSpec, GameResult, SalvoError, Ship, MAX_DIMENSION,
    MIN_DIMENSION, SHIP_CATALOG,
};
use crate::player::Player;

pub const REASON_WON: &str = "You won!";
pub const REASON_LOST: &str = "You lost!";
pub const REASON_TIED: &str = "You tied!";

/// Controller phases, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitConfig,
    AwaitSetup,
    Playing,
    Ended,
}

/// Board size and fleet shared by both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub fleet: FleetSpec,
}

impl GameConfig {
    pub fn new(height: usize, width: usize, fleet: FleetSpec) -> Self {
        Self {
            height,
            width,
            fleet,
        }
    }
}

/// How a finished game went, from each player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub first: GameResult,
    pub second: GameResult,
    pub rounds: usize,
}

/// Drives two players through one game. The first player is the one the
/// console speaks to.
pub struct LocalController<C: Console> {
    console: C,
    players: [Box<dyn Player>; 2],
    // copies of each placed fleet, damaged as hits are reported
    fleets: [Vec<Ship>; 2],
    phase: Phase,
    rounds: usize,
}

impl<C: Console> LocalController<C> {
    pub fn new(console: C, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            console,
            players: [first, second],
            fleets: [Vec::new(), Vec::new()],
            phase: Phase::AwaitConfig,
            rounds: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Full interactive game: greet, ask for the configuration, then play.
    pub fn run(&mut self) -> Result<GameOutcome, SalvoError> {
        self.console.display_message("Welcome to BattleSalvo!")?;
        let config = self.prompt_config()?;
        self.run_with_config(&config)
    }

    /// Play a game with an already validated configuration.
    pub fn run_with_config(&mut self, config: &GameConfig) -> Result<GameOutcome, SalvoError> {
        self.phase = Phase::AwaitSetup;
        for (player, fleet) in self.players.iter_mut().zip(self.fleets.iter_mut()) {
            *fleet = player.setup(config.height, config.width, &config.fleet)?;
        }
        info!(
            "{} vs {} on {}x{} with {} ships each",
            self.players[0].name(),
            self.players[1].name(),
            config.height,
            config.width,
            config.fleet.total()
        );

        self.phase = Phase::Playing;
        self.rounds = 0;
        while self.alive(0) > 0 && self.alive(1) > 0 {
            self.play_round()?;
        }

        self.phase = Phase::Ended;
        self.finish()
    }

    fn alive(&self, idx: usize) -> usize {
        self.fleets[idx].iter().filter(|s| !s.is_sunk()).count()
    }

    fn play_round(&mut self) -> Result<(), SalvoError> {
        let first_shots = self.players[0].take_shots()?;
        let second_shots = self.players[1].take_shots()?;

        let hits_on_second = self.players[1].report_damage(&first_shots)?;
        self.players[0].successful_hits(&hits_on_second)?;
        let hits_on_first = self.players[0].report_damage(&second_shots)?;
        self.players[1].successful_hits(&hits_on_first)?;

        apply_hits(&mut self.fleets[1], &hits_on_second);
        apply_hits(&mut self.fleets[0], &hits_on_first);

        self.rounds += 1;
        debug!(
            "round {}: {} hit {}, {} hit {}",
            self.rounds,
            self.players[0].name(),
            hits_on_second.len(),
            self.players[1].name(),
            hits_on_first.len()
        );
        Ok(())
    }

    fn finish(&mut self) -> Result<GameOutcome, SalvoError> {
        let (first, second, line) = match (self.alive(0), self.alive(1)) {
            (0, 0) => (GameResult::Draw, GameResult::Draw, "You tied the game!"),
            (0, _) => (GameResult::Lose, GameResult::Win, "You lost the game!"),
            _ => (GameResult::Win, GameResult::Lose, "You won the game!"),
        };
        self.players[0].end_game(first, reason_for(first));
        self.players[1].end_game(second, reason_for(second));
        self.console.display_message(line)?;
        info!("game over after {} rounds: {} {}", self.rounds, self.players[0].name(), first);
        Ok(GameOutcome {
            first,
            second,
            rounds: self.rounds,
        })
    }

    /// Ask for board dimensions and a fleet until both are acceptable.
    pub fn prompt_config(&mut self) -> Result<GameConfig, SalvoError> {
        self.phase = Phase::AwaitConfig;
        let (height, width) = self.prompt_dimensions()?;
        let fleet = self.prompt_fleet(height.min(width))?;
        Ok(GameConfig::new(height, width, fleet))
    }

    fn prompt_dimensions(&mut self) -> Result<(usize, usize), SalvoError> {
        self.console
            .display_message("Please enter a valid height and width:")?;
        loop {
            let dims = self
                .console
                .get_some_ints(2, "Please enter exactly two integers.")?;
            match (usize::try_from(dims[0]), usize::try_from(dims[1])) {
                (Ok(h), Ok(w)) if dimension_in_range(h) && dimension_in_range(w) => {
                    return Ok((h, w))
                }
                _ => self.console.display_message(&format!(
                    "Please enter dimensions within the range [{}, {}], inclusive.",
                    MIN_DIMENSION, MAX_DIMENSION
                ))?,
            }
        }
    }

    fn prompt_fleet(&mut self, max_ships: usize) -> Result<FleetSpec, SalvoError> {
        let names: Vec<&str> = SHIP_CATALOG.iter().map(|(ty, _)| ty.name()).collect();
        self.console.display_message(&format!(
            "Please enter your fleet in the order [{}].",
            names.join(", ")
        ))?;
        self.console.display_message(&format!(
            "Your fleet size may not exceed {} and must contain at least one of each ship.",
            max_ships
        ))?;
        loop {
            let counts = self
                .console
                .get_some_ints(SHIP_CATALOG.len(), "Please enter exactly four integers.")?;
            let fleet: Option<FleetSpec> = SHIP_CATALOG
                .iter()
                .zip(&counts)
                .map(|((ty, _), &n)| usize::try_from(n).ok().map(|n| (*ty, n)))
                .collect();
            match fleet {
                Some(fleet) if fleet.fits_within(max_ships) => return Ok(fleet),
                _ => self
                    .console
                    .display_message("Please enter a valid fleet size.")?,
            }
        }
    }
}

fn reason_for(result: GameResult) -> &'static str {
    match result {
        GameResult::Win => REASON_WON,
        GameResult::Lose => REASON_LOST,
        GameResult::Draw => REASON_TIED,
    }
}

fn apply_hits(fleet: &mut [Ship], hits: &[Coord]) {
    for &hit in hits {
        if let Some(ship) = fleet.iter_mut().find(|s| s.contains(hit)) {
            ship.receive_shot(hit);
        }
    }
}
