//! Toybox server — a fixed registry of schema-validated operations served over
//! newline-delimited JSON on stdin/stdout.

pub mod config;
pub mod operations;
pub mod protocol;
pub mod registry;
pub mod repl;
pub mod server;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::Dispatcher;
pub use registry::{OperationHandler, OperationRegistry};
pub use server::Server;
pub use transport::StdioTransport;
