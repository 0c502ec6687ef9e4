//! Message transports used by [`PlayerNode`](crate::player_node::PlayerNode).

use std::io;

use crate::protocol::MessageJson;

/// Why a transport stopped delivering messages.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The peer hung up.
    #[error("connection closed by peer")]
    Closed,
    #[error("transport i/o error: {0}")]
    Io(#[from] io::Error),
    /// Bytes arrived that are not a message envelope.
    #[error("malformed message: {0}")]
    Malformed(String),
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: MessageJson) -> Result<(), TransportError>;
    async fn recv(&mut self) -> Result<MessageJson, TransportError>;
    /// Stop sending; the peer sees [`TransportError::Closed`] once it has
    /// drained what was already sent.
    async fn close(&mut self) -> Result<(), TransportError>;
}

pub mod in_memory;
pub mod tcp;
