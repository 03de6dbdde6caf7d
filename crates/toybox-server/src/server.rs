//! The server process loop: read a frame, dispatch it, write the response.

use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::config::ServerConfig;
use crate::protocol::Dispatcher;
use crate::transport::{FrameReader, FrameWriter, StdioTransport};
use crate::types::ServerResult;

pub struct Server {
    dispatcher: Dispatcher,
    config: ServerConfig,
}

impl Server {
    pub fn new(dispatcher: Dispatcher, config: ServerConfig) -> Self {
        Self { dispatcher, config }
    }

    /// Serve over stdin/stdout until stdin closes.
    pub async fn run_stdio(&self) -> ServerResult<()> {
        let (reader, writer) = StdioTransport::open(self.config.max_frame_bytes);
        self.run(reader, writer).await
    }

    /// Process frames strictly in order. The response to one frame is written
    /// and flushed before the next frame is read.
    ///
    /// Returns `Ok(())` at end of input and the transport error otherwise.
    pub async fn run<R, W>(
        &self,
        mut reader: FrameReader<R>,
        mut writer: FrameWriter<W>,
    ) -> ServerResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(
            "Server started with {} operations",
            self.dispatcher.registry().len()
        );

        let mut handled: u64 = 0;
        loop {
            let frame = match reader.next_frame().await {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    tracing::info!("EOF on input after {handled} requests, shutting down");
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!("{e}");
                    return Err(e);
                }
            };

            let response = self.dispatcher.handle_frame(&frame).await?;
            writer.write_frame(&response).await?;
            handled += 1;
        }
    }
}
