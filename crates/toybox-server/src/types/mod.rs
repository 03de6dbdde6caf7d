//! Data types used by the server.

pub mod error;
pub mod message;
pub mod schema;

pub use error::*;
pub use message::*;
pub use schema::*;
