//! Transport layer: newline-delimited JSON frames over byte streams.

pub mod framing;
pub mod stdio;

pub use stdio::{FrameReader, FrameWriter, StdioTransport, DEFAULT_MAX_FRAME_BYTES};
