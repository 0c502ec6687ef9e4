#![cfg(feature = "net")]

use battlesalvo::{
    AiPlayer, FleetJson, GameResult, Method, MessageJson, PlayerNode, TcpTransport, Transport,
    TransportError,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

#[tokio::test(flavor = "multi_thread")]
async fn test_tcp_roundtrip_messages() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await?;
        let mut transport = TcpTransport::new(stream);
        let msg = transport.recv().await?;
        transport.send(msg).await?;
        transport.close().await?;
        Ok::<(), TransportError>(())
    });

    let mut client = TcpTransport::connect(addr).await?;
    let sent = MessageJson::new(Method::TakeShots, json!({"coordinates": []}));
    client.send(sent.clone()).await?;
    assert_eq!(client.recv().await?, sent);
    assert!(matches!(client.recv().await, Err(TransportError::Closed)));
    server.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tcp_split_and_batched_frames() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await?;
        // two messages without a separator, the second one split across writes
        stream
            .write_all(br#"{"method-name":"join","arguments":{}}{"method-name":"take-"#)
            .await?;
        stream.flush().await?;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        stream.write_all(br#"shots","arguments":{}}"#).await?;
        stream.write_all(b"\n   garbage\n").await?;
        Ok::<(), std::io::Error>(())
    });

    let mut client = TcpTransport::connect(addr).await?;
    assert_eq!(client.recv().await?.method_name, "join");
    assert_eq!(client.recv().await?.method_name, "take-shots");
    assert!(matches!(
        client.recv().await,
        Err(TransportError::Malformed(_))
    ));
    server.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_player_node_over_tcp() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let client = tokio::spawn(async move {
        let transport = TcpTransport::connect(addr).await?;
        let ai = AiPlayer::new(SmallRng::seed_from_u64(12));
        let mut node = PlayerNode::new(Box::new(ai), Box::new(transport));
        node.run().await?;
        anyhow::Ok(())
    });

    let (stream, _) = listener.accept().await?;
    let (read, mut write) = stream.into_split();
    let mut lines = BufReader::new(read).lines();

    write
        .write_all(b"{\"method-name\":\"setup\",\"arguments\":{\"height\":7,\"width\":7,\"fleet-spec\":{\"CARRIER\":1,\"BATTLESHIP\":1,\"DESTROYER\":1,\"SUBMARINE\":2}}}\n")
        .await?;
    let line = lines.next_line().await?.unwrap_or_default();
    let reply: MessageJson = serde_json::from_str(&line)?;
    assert_eq!(reply.method_name, "setup");
    let fleet: FleetJson = serde_json::from_value(reply.arguments)?;
    assert_eq!(fleet.fleet.len(), 5);

    let end = json!({"method-name": "end-game", "arguments": {"result": GameResult::Draw, "reason": "You tied!"}});
    write.write_all(format!("{}\n", end).as_bytes()).await?;
    let line = lines.next_line().await?.unwrap_or_default();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&line)?, json!({"method-name": "end-game", "arguments": {}}));
    assert!(lines.next_line().await?.is_none());

    client.await??;
    Ok(())
}
