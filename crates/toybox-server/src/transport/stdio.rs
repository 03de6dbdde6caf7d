//! Stdio transport — reads request frames from stdin, writes responses to stdout.
//!
//! The reader and writer are generic over tokio's async I/O traits so the same
//! code runs against in-memory buffers in tests.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::io::{Stdin, Stdout};

use crate::types::{ServerError, ServerResult};

/// Default upper bound on a single frame, in bytes.
pub const DEFAULT_MAX_FRAME_BYTES: usize = 1024 * 1024;

/// Lazily yields newline-delimited frames from an input stream.
pub struct FrameReader<R> {
    reader: R,
    max_frame_bytes: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: AsyncBufRead + Unpin> FrameReader<R> {
    pub fn new(reader: R, max_frame_bytes: usize) -> Self {
        Self {
            reader,
            max_frame_bytes,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Next non-blank frame, `None` at end of input.
    ///
    /// Once this returns `None` or an error, every later call returns `None`.
    pub async fn next_frame(&mut self) -> ServerResult<Option<String>> {
        while !self.finished {
            match self.read_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => return Ok(Some(line)),
                Ok(None) => {
                    self.finished = true;
                    return Ok(None);
                }
                Err(e) => {
                    self.finished = true;
                    return Err(e);
                }
            }
        }
        Ok(None)
    }

    async fn read_line(&mut self) -> ServerResult<Option<String>> {
        self.buf.clear();
        // One byte past the limit tells an oversized frame from one that fits exactly.
        let limit = (self.max_frame_bytes as u64).saturating_add(2);
        let bytes_read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        if self.buf.len() > self.max_frame_bytes {
            return Err(ServerError::Transport(format!(
                "frame exceeds {} bytes",
                self.max_frame_bytes
            )));
        }

        if !terminated {
            return Err(ServerError::Transport(
                "incomplete frame at end of input".to_string(),
            ));
        }

        let line = std::str::from_utf8(&self.buf)
            .map_err(|e| ServerError::Transport(format!("frame is not valid UTF-8: {e}")))?;
        Ok(Some(line.to_string()))
    }
}

/// Writes one frame per line, flushing after each.
pub struct FrameWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub async fn write_frame(&mut self, frame: &str) -> ServerResult<()> {
        let mut line = String::with_capacity(frame.len() + 1);
        line.push_str(frame);
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;
        self.writer
            .flush()
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reader/writer pair bound to the process's standard streams.
pub struct StdioTransport;

impl StdioTransport {
    pub fn open(max_frame_bytes: usize) -> (FrameReader<BufReader<Stdin>>, FrameWriter<Stdout>) {
        (
            FrameReader::new(BufReader::new(tokio::io::stdin()), max_frame_bytes),
            FrameWriter::new(tokio::io::stdout()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &[u8], max: usize) -> (Vec<String>, Option<ServerError>) {
        let mut reader = FrameReader::new(input, max);
        let mut frames = Vec::new();
        loop {
            match reader.next_frame().await {
                Ok(Some(frame)) => frames.push(frame),
                Ok(None) => return (frames, None),
                Err(e) => return (frames, Some(e)),
            }
        }
    }

    #[tokio::test]
    async fn test_reads_frames_in_order() {
        let (frames, err) = collect(b"one\ntwo\r\n\n   \nthree\n", 64).await;
        assert_eq!(frames, vec!["one", "two", "three"]);
        assert!(err.is_none());
    }

    #[tokio::test]
    async fn test_empty_input_ends_cleanly() {
        let (frames, err) = collect(b"", 64).await;
        assert!(frames.is_empty());
        assert!(err.is_none());
    }

    #[tokio::test]
    async fn test_incomplete_final_frame_is_transport_error() {
        let (frames, err) = collect(b"one\n{\"id\":1", 64).await;
        assert_eq!(frames, vec!["one"]);
        let err = err.unwrap();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("incomplete frame"));
    }

    #[tokio::test]
    async fn test_oversized_frame_is_transport_error() {
        let (frames, err) = collect(b"12345\n1234567890\n", 5).await;
        assert_eq!(frames, vec!["12345"]);
        assert!(err.unwrap().to_string().contains("exceeds 5 bytes"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_transport_error() {
        let (_, err) = collect(b"\xff\xfe\n", 64).await;
        assert!(err.unwrap().to_string().contains("UTF-8"));
    }

    #[tokio::test]
    async fn test_sequence_stays_ended_after_error() {
        let mut reader = FrameReader::new(&b"partial"[..], 64);
        assert!(reader.next_frame().await.is_err());
        assert!(reader.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_writer_appends_newline() {
        let mut writer = FrameWriter::new(Vec::new());
        writer.write_frame("{\"id\":1}").await.unwrap();
        writer.write_frame("{\"id\":2}").await.unwrap();
        assert_eq!(writer.into_inner(), b"{\"id\":1}\n{\"id\":2}\n");
    }
}
