//! Line-delimited JSON transport: one envelope per line in each direction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ig_core::ports::{ChannelError, MessageChannelPort};
use ig_core::OutboundMessage;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

const OUTBOUND_BUFFER: usize = 64;

pub struct JsonLinesChannel {
    outbound_tx: mpsc::Sender<String>,
    connected: Arc<AtomicBool>,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

impl JsonLinesChannel {
    /// Spawn the read and write pumps. Each non-empty inbound line is
    /// forwarded to `inbound_tx` verbatim; decoding is the session's job.
    /// When the read side ends, `inbound_tx` is dropped and the channel
    /// reports itself disconnected.
    pub fn start<R, W>(reader: R, writer: W, inbound_tx: mpsc::Sender<String>) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let connected = Arc::new(AtomicBool::new(true));
        let (outbound_tx, outbound_rx) = mpsc::channel(OUTBOUND_BUFFER);

        let reader = tokio::spawn(read_pump(reader, inbound_tx, Arc::clone(&connected)));
        let writer = tokio::spawn(write_pump(writer, outbound_rx, Arc::clone(&connected)));

        Self {
            outbound_tx,
            connected,
            reader,
            writer,
        }
    }

    /// Stop both pumps. Later sends fail with `NotConnected`.
    pub fn close(&self) {
        self.connected.store(false, Ordering::SeqCst);
        self.reader.abort();
        self.writer.abort();
    }
}

impl Drop for JsonLinesChannel {
    fn drop(&mut self) {
        self.reader.abort();
        self.writer.abort();
    }
}

async fn read_pump<R>(reader: R, inbound_tx: mpsc::Sender<String>, connected: Arc<AtomicBool>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                trace!(bytes = line.len(), "inbound line");
                if inbound_tx.send(line.to_string()).await.is_err() {
                    debug!("inbound consumer gone");
                    break;
                }
            }
            Ok(None) => {
                debug!("inbound stream reached end of file");
                break;
            }
            Err(err) => {
                warn!(error = %err, "inbound stream failed");
                break;
            }
        }
    }
    connected.store(false, Ordering::SeqCst);
}

async fn write_pump<W>(mut writer: W, mut outbound_rx: mpsc::Receiver<String>, connected: Arc<AtomicBool>)
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = outbound_rx.recv().await {
        let written = async {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await
        }
        .await;
        if let Err(err) = written {
            warn!(error = %err, "outbound stream failed");
            break;
        }
    }
    connected.store(false, Ordering::SeqCst);
}

#[async_trait]
impl MessageChannelPort for JsonLinesChannel {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn send(&self, message: OutboundMessage) -> Result<(), ChannelError> {
        if !self.is_connected() {
            return Err(ChannelError::NotConnected);
        }
        let kind = message.kind();
        let line = message
            .to_json()
            .map_err(|source| ChannelError::Encode { kind, source })?;
        self.outbound_tx
            .send(line)
            .await
            .map_err(|_| ChannelError::Closed("writer stopped".to_string()))?;
        trace!(%kind, "outbound queued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_core::network::protocol::SpaceRef;
    use ig_core::SpaceId;
    use tokio::io::{duplex, split, AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn outbound_messages_are_written_one_per_line() -> anyhow::Result<()> {
        let (client, server) = duplex(1024);
        let (client_read, client_write) = split(client);
        let (inbound_tx, _inbound_rx) = mpsc::channel(4);
        let channel = JsonLinesChannel::start(client_read, client_write, inbound_tx);

        channel
            .send(OutboundMessage::RequestEntry(SpaceRef::from(&SpaceId::from("s4"))))
            .await?;
        channel.send(OutboundMessage::ListSpaces).await?;

        let mut lines = BufReader::new(server).lines();
        let first = timeout(Duration::from_secs(1), lines.next_line()).await??;
        let second = timeout(Duration::from_secs(1), lines.next_line()).await??;

        let first: serde_json::Value = serde_json::from_str(&first.unwrap_or_default())?;
        assert_eq!(first["type"], "request_entry");
        assert_eq!(first["spaceId"], "s4");
        let second: serde_json::Value = serde_json::from_str(&second.unwrap_or_default())?;
        assert_eq!(second["type"], "list_spaces");
        Ok(())
    }

    #[tokio::test]
    async fn inbound_lines_are_forwarded_and_blank_lines_skipped() -> anyhow::Result<()> {
        let (client, mut server) = duplex(1024);
        let (client_read, client_write) = split(client);
        let (inbound_tx, mut inbound_rx) = mpsc::channel(4);
        let _channel = JsonLinesChannel::start(client_read, client_write, inbound_tx);

        server
            .write_all(b"{\"type\":\"space_list\",\"spaces\":[]}\n\n  \n{\"type\":\"error\",\"message\":\"x\"}\n")
            .await?;

        let first = timeout(Duration::from_secs(1), inbound_rx.recv()).await?;
        let second = timeout(Duration::from_secs(1), inbound_rx.recv()).await?;
        assert_eq!(first.as_deref(), Some("{\"type\":\"space_list\",\"spaces\":[]}"));
        assert_eq!(second.as_deref(), Some("{\"type\":\"error\",\"message\":\"x\"}"));
        Ok(())
    }

    #[tokio::test]
    async fn end_of_stream_disconnects() -> anyhow::Result<()> {
        let (client, server) = duplex(1024);
        let (client_read, client_write) = split(client);
        let (inbound_tx, mut inbound_rx) = mpsc::channel(4);
        let channel = JsonLinesChannel::start(client_read, client_write, inbound_tx);

        drop(server);
        let closed = timeout(Duration::from_secs(1), inbound_rx.recv()).await?;

        assert_eq!(closed, None);
        assert!(!channel.is_connected());
        assert!(matches!(
            channel.send(OutboundMessage::ListSpaces).await,
            Err(ChannelError::NotConnected)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn close_rejects_further_sends() {
        let (client, _server) = duplex(64);
        let (client_read, client_write) = split(client);
        let (inbound_tx, _inbound_rx) = mpsc::channel(1);
        let channel = JsonLinesChannel::start(client_read, client_write, inbound_tx);

        channel.close();

        assert!(!channel.is_connected());
        assert!(matches!(
            channel.send(OutboundMessage::ListMyRentals).await,
            Err(ChannelError::NotConnected)
        ));
    }
}
