use log::trace;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::protocol::MessageJson;
use crate::transport::{Transport, TransportError};

const READ_CHUNK: usize = 4096;

/// Newline-delimited JSON over TCP. Incoming messages are split on JSON
/// value boundaries, so a peer that omits the newline is still understood.
pub struct TcpTransport {
    stream: TcpStream,
    buf: Vec<u8>,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buf: Vec::new(),
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    /// Pop one complete message off the front of the buffer, if there is one.
    fn take_buffered(&mut self) -> Result<Option<MessageJson>, TransportError> {
        let mut stream = serde_json::Deserializer::from_slice(&self.buf).into_iter::<MessageJson>();
        match stream.next() {
            Some(Ok(msg)) => {
                let used = stream.byte_offset();
                self.buf.drain(..used);
                Ok(Some(msg))
            }
            Some(Err(e)) if e.is_eof() => Ok(None),
            Some(Err(e)) => Err(TransportError::Malformed(e.to_string())),
            None => {
                // only whitespace left
                self.buf.clear();
                Ok(None)
            }
        }
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: MessageJson) -> Result<(), TransportError> {
        let mut data =
            serde_json::to_vec(&msg).map_err(|e| TransportError::Malformed(e.to_string()))?;
        data.push(b'\n');
        self.stream.write_all(&data).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<MessageJson, TransportError> {
        loop {
            if let Some(msg) = self.take_buffered()? {
                trace!("received {}", msg.method_name);
                return Ok(msg);
            }
            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;
            if n == 0 {
                return Err(TransportError::Closed);
            }
            self.buf.extend_from_slice(&chunk[..n]);
        }
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.stream.shutdown().await?;
        Ok(())
    }
}
