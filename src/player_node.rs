use log::{debug, info, warn};

use crate::{
    core::SalvoError,
    player::Player,
    protocol::{CoordinatesJson, FleetJson, GameType, JoinJson, MessageJson, Request, Response, ShipJson},
    transport::{Transport, TransportError},
};

/// Serves one local [`Player`] to a remote server: every request received on
/// the transport is dispatched to the player and answered.
pub struct PlayerNode {
    player: Box<dyn Player>,
    transport: Box<dyn Transport>,
    game_type: GameType,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            transport,
            game_type: GameType::default(),
        }
    }

    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    /// Handle a single request.
    pub fn dispatch(&mut self, request: Request) -> Result<Response, SalvoError> {
        Ok(match request {
            Request::Join => Response::Join(JoinJson {
                name: self.player.name().to_string(),
                game_type: self.game_type,
            }),
            Request::Setup(args) => {
                let ships = self
                    .player
                    .setup(args.height, args.width, &args.fleet_spec)?;
                Response::Setup(FleetJson {
                    fleet: ships.iter().map(ShipJson::from).collect(),
                })
            }
            Request::TakeShots => {
                Response::TakeShots(CoordinatesJson::from(self.player.take_shots()?))
            }
            Request::ReportDamage(shots) => Response::ReportDamage(CoordinatesJson::from(
                self.player.report_damage(&shots.coordinates)?,
            )),
            Request::SuccessfulHits(hits) => {
                self.player.successful_hits(&hits.coordinates)?;
                Response::SuccessfulHits
            }
            Request::EndGame(end) => {
                info!("game ended: {} ({})", end.result, end.reason);
                self.player.end_game(end.result, &end.reason);
                Response::EndGame
            }
        })
    }

    /// Serve requests until the server ends the game or the connection drops.
    ///
    /// A dropped connection ends the run without error. Malformed messages and
    /// unknown methods fail with [`SalvoError::ProtocolViolation`].
    pub async fn run(&mut self) -> Result<(), SalvoError> {
        loop {
            let msg = match self.transport.recv().await {
                Ok(msg) => msg,
                Err(TransportError::Malformed(e)) => {
                    return Err(SalvoError::ProtocolViolation(e));
                }
                Err(e) => {
                    warn!("connection ended: {}", e);
                    return Ok(());
                }
            };
            debug!("<- {}", msg.method_name);

            let request = Request::try_from(msg)?;
            let ending = matches!(request, Request::EndGame(_));
            let response = MessageJson::try_from(self.dispatch(request)?)?;

            debug!("-> {}", response.method_name);
            if let Err(e) = self.transport.send(response).await {
                warn!("connection ended: {}", e);
                return Ok(());
            }
            if ending {
                if let Err(e) = self.transport.close().await {
                    debug!("close failed: {}", e);
                }
                return Ok(());
            }
        }
    }
}
