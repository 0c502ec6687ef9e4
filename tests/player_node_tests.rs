#![cfg(feature = "net")]

use battlesalvo::transport::in_memory::InMemoryTransport;
use battlesalvo::{
    AiPlayer, Coord, CoordinatesJson, EndGameJson, FleetJson, FleetSpec, GameResult, GameType,
    MessageJson, Method, PlayerNode, Request, SalvoError, SetupJson, ShipType, Transport,
    TransportError,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn node(transport: InMemoryTransport) -> PlayerNode {
    let ai = AiPlayer::new(SmallRng::seed_from_u64(3));
    PlayerNode::new(Box::new(ai), Box::new(transport))
}

fn setup_request(height: usize, width: usize, fleet: FleetSpec) -> MessageJson {
    MessageJson::try_from(Request::Setup(SetupJson {
        height,
        width,
        fleet_spec: fleet,
    }))
    .unwrap()
}

fn end_request() -> MessageJson {
    MessageJson::try_from(Request::EndGame(EndGameJson {
        result: GameResult::Lose,
        reason: "You lost!".to_string(),
    }))
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_setup_then_end_game() -> anyhow::Result<()> {
    let (client, mut server) = InMemoryTransport::pair();
    let handle = tokio::spawn(async move { node(client).run().await });

    let fleet = FleetSpec::one_of_each().with(ShipType::Submarine, 2);
    server.send(setup_request(10, 10, fleet)).await?;
    server.send(end_request()).await?;

    let first = server.recv().await?;
    assert_eq!(first.method_name, "setup");
    let placed: FleetJson = serde_json::from_value(first.arguments)?;
    assert_eq!(placed.fleet.len(), 5);

    let second = server.recv().await?;
    assert_eq!(second.method_name, "end-game");
    assert_eq!(second.arguments, json!({}));

    assert!(matches!(server.recv().await, Err(TransportError::Closed)));
    handle.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_round_of_requests() -> anyhow::Result<()> {
    let (client, mut server) = InMemoryTransport::pair();
    let ai = AiPlayer::new(SmallRng::seed_from_u64(8)).with_name("tester");
    let mut node =
        PlayerNode::new(Box::new(ai), Box::new(client)).with_game_type(GameType::Multi);
    let handle = tokio::spawn(async move { node.run().await });

    server
        .send(MessageJson::new(Method::Join, json!({})))
        .await?;
    let join = server.recv().await?;
    assert_eq!(
        join.arguments,
        json!({"name": "tester", "game-type": "MULTI"})
    );

    server.send(setup_request(6, 6, FleetSpec::one_of_each())).await?;
    let placed: FleetJson = serde_json::from_value(server.recv().await?.arguments)?;
    assert_eq!(placed.fleet.len(), 4);

    server
        .send(MessageJson::new(Method::TakeShots, json!({})))
        .await?;
    let shots: CoordinatesJson = serde_json::from_value(server.recv().await?.arguments)?;
    assert_eq!(shots.coordinates.len(), 4);

    // fire at the whole first fleet ship, every cell hits
    let first_ship: Vec<Coord> = {
        let ship = battlesalvo::Ship::from(placed.fleet[0]);
        ship.occupied_coords().collect()
    };
    let damage = MessageJson::try_from(Request::ReportDamage(first_ship.clone().into()))?;
    server.send(damage).await?;
    let hits: CoordinatesJson = serde_json::from_value(server.recv().await?.arguments)?;
    assert_eq!(hits.coordinates, first_ship);

    let confirm = MessageJson::try_from(Request::SuccessfulHits(vec![shots.coordinates[0]].into()))?;
    server.send(confirm).await?;
    let ack = server.recv().await?;
    assert_eq!(ack.method_name, "successful-hits");
    assert_eq!(ack.arguments, json!({}));

    // one ship sunk, one fewer shot
    server
        .send(MessageJson::new(Method::TakeShots, json!({})))
        .await?;
    let shots: CoordinatesJson = serde_json::from_value(server.recv().await?.arguments)?;
    assert_eq!(shots.coordinates.len(), 3);

    server.send(end_request()).await?;
    assert_eq!(server.recv().await?.method_name, "end-game");
    handle.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_method_aborts() -> anyhow::Result<()> {
    let (client, mut server) = InMemoryTransport::pair();
    let handle = tokio::spawn(async move { node(client).run().await });
    server
        .send(MessageJson {
            method_name: "forfeit".to_string(),
            arguments: json!({}),
        })
        .await?;
    let res = handle.await?;
    assert!(matches!(res, Err(SalvoError::ProtocolViolation(_))));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_request_before_setup_fails() -> anyhow::Result<()> {
    let (client, mut server) = InMemoryTransport::pair();
    let handle = tokio::spawn(async move { node(client).run().await });
    server
        .send(MessageJson::new(Method::TakeShots, json!({})))
        .await?;
    assert!(matches!(handle.await?, Err(SalvoError::NotSetUp)));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disconnect_ends_quietly() -> anyhow::Result<()> {
    let (client, server) = InMemoryTransport::pair();
    let handle = tokio::spawn(async move { node(client).run().await });
    drop(server);
    handle.await??;
    Ok(())
}
