//! JSON messages exchanged with a remote BattleSalvo server.
//!
//! Every message is a [`MessageJson`] envelope, `{"method-name", "arguments"}`.
//! Incoming envelopes are decoded into a typed [`Request`]; each handled
//! request produces a [`Response`] that is wrapped back into an envelope.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::{Coord, FleetSpec, GameResult, Orientation, SalvoError, Ship};

/// Envelope for every message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageJson {
    #[serde(rename = "method-name")]
    pub method_name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MessageJson {
    pub fn new(method: Method, arguments: Value) -> Self {
        Self {
            method_name: method.tag().to_string(),
            arguments,
        }
    }
}

/// The six method tags the server may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Join,
    Setup,
    TakeShots,
    ReportDamage,
    SuccessfulHits,
    EndGame,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::Join,
        Method::Setup,
        Method::TakeShots,
        Method::ReportDamage,
        Method::SuccessfulHits,
        Method::EndGame,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Method::Join => "join",
            Method::Setup => "setup",
            Method::TakeShots => "take-shots",
            Method::ReportDamage => "report-damage",
            Method::SuccessfulHits => "successful-hits",
            Method::EndGame => "end-game",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Method::ALL.into_iter().find(|m| m.tag() == tag)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Whether the client asks to play the server's AI or another client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    #[default]
    Single,
    Multi,
}

/// `join` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinJson {
    pub name: String,
    #[serde(rename = "game-type")]
    pub game_type: GameType,
}

/// `setup` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupJson {
    pub height: usize,
    pub width: usize,
    #[serde(rename = "fleet-spec")]
    pub fleet_spec: FleetSpec,
}

/// A placed ship as the server sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipJson {
    pub coord: Coord,
    pub direction: Orientation,
    pub length: usize,
}

impl From<&Ship> for ShipJson {
    fn from(ship: &Ship) -> Self {
        Self {
            coord: ship.origin(),
            direction: ship.orientation(),
            length: ship.length(),
        }
    }
}

impl From<ShipJson> for Ship {
    fn from(json: ShipJson) -> Self {
        Ship::new(json.coord, json.direction, json.length)
    }
}

/// `setup` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetJson {
    pub fleet: Vec<ShipJson>,
}

/// Payload of `take-shots`, `report-damage` and `successful-hits`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatesJson {
    pub coordinates: Vec<Coord>,
}

impl From<Vec<Coord>> for CoordinatesJson {
    fn from(coordinates: Vec<Coord>) -> Self {
        Self { coordinates }
    }
}

/// `end-game` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndGameJson {
    pub result: GameResult,
    pub reason: String,
}

/// A decoded server request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Join,
    Setup(SetupJson),
    TakeShots,
    ReportDamage(CoordinatesJson),
    SuccessfulHits(CoordinatesJson),
    EndGame(EndGameJson),
}

impl Request {
    pub fn method(&self) -> Method {
        match self {
            Request::Join => Method::Join,
            Request::Setup(_) => Method::Setup,
            Request::TakeShots => Method::TakeShots,
            Request::ReportDamage(_) => Method::ReportDamage,
            Request::SuccessfulHits(_) => Method::SuccessfulHits,
            Request::EndGame(_) => Method::EndGame,
        }
    }
}

fn payload<T: for<'de> Deserialize<'de>>(method: Method, arguments: Value) -> Result<T, SalvoError> {
    serde_json::from_value(arguments).map_err(|e| {
        SalvoError::ProtocolViolation(format!("malformed {} arguments: {}", method, e))
    })
}

impl TryFrom<MessageJson> for Request {
    type Error = SalvoError;

    fn try_from(msg: MessageJson) -> Result<Self, Self::Error> {
        let method = Method::from_tag(&msg.method_name).ok_or_else(|| {
            SalvoError::ProtocolViolation(format!("unknown method \"{}\"", msg.method_name))
        })?;
        let args = msg.arguments;
        Ok(match method {
            Method::Join => Request::Join,
            Method::Setup => Request::Setup(payload(method, args)?),
            Method::TakeShots => Request::TakeShots,
            Method::ReportDamage => Request::ReportDamage(payload(method, args)?),
            Method::SuccessfulHits => Request::SuccessfulHits(payload(method, args)?),
            Method::EndGame => Request::EndGame(payload(method, args)?),
        })
    }
}

impl TryFrom<Request> for MessageJson {
    type Error = SalvoError;

    fn try_from(req: Request) -> Result<Self, Self::Error> {
        let method = req.method();
        let arguments = match req {
            Request::Join | Request::TakeShots => json!({}),
            Request::Setup(s) => serde_json::to_value(s)?,
            Request::ReportDamage(c) | Request::SuccessfulHits(c) => serde_json::to_value(c)?,
            Request::EndGame(e) => serde_json::to_value(e)?,
        };
        Ok(MessageJson::new(method, arguments))
    }
}

/// What the client answers to each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Join(JoinJson),
    Setup(FleetJson),
    TakeShots(CoordinatesJson),
    ReportDamage(CoordinatesJson),
    SuccessfulHits,
    EndGame,
}

impl Response {
    pub fn method(&self) -> Method {
        match self {
            Response::Join(_) => Method::Join,
            Response::Setup(_) => Method::Setup,
            Response::TakeShots(_) => Method::TakeShots,
            Response::ReportDamage(_) => Method::ReportDamage,
            Response::SuccessfulHits => Method::SuccessfulHits,
            Response::EndGame => Method::EndGame,
        }
    }
}

impl TryFrom<Response> for MessageJson {
    type Error = SalvoError;

    fn try_from(resp: Response) -> Result<Self, Self::Error> {
        let method = resp.method();
        let arguments = match resp {
            Response::Join(j) => serde_json::to_value(j)?,
            Response::Setup(f) => serde_json::to_value(f)?,
            Response::TakeShots(c) | Response::ReportDamage(c) => serde_json::to_value(c)?,
            Response::SuccessfulHits | Response::EndGame => json!({}),
        };
        Ok(MessageJson::new(method, arguments))
    }
}
