//! Error taxonomy for the toybox server.
//!
//! Only [`ServerError::Transport`] and [`ServerError::Io`] are fatal; every
//! other variant is turned into a failure response by the dispatcher. The
//! `Display` form of each variant is the exact text sent to clients.

/// All errors that can occur in the server.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("TransportError: {0}")]
    Transport(String),

    #[error("DecodeError: {0}")]
    Decode(String),

    #[error("UnknownOperation: {0}")]
    UnknownOperation(String),

    #[error("ValidationError: {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("DomainError: {0}")]
    Domain(String),

    #[error("RenderError: {0}")]
    Render(String),

    #[error("ResourceNotFound: {0}")]
    ResourceNotFound(String),

    #[error("DuplicateOperation: {0}")]
    DuplicateOperation(String),

    #[error("InternalError: {0}")]
    Internal(String),

    #[error("TransportError: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        ServerError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error must stop the server.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ServerError::Transport(_) | ServerError::Io(_))
    }

    /// Short class name, as used in the message prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Transport(_) | ServerError::Io(_) => "TransportError",
            ServerError::Decode(_) => "DecodeError",
            ServerError::UnknownOperation(_) => "UnknownOperation",
            ServerError::Validation { .. } => "ValidationError",
            ServerError::Domain(_) => "DomainError",
            ServerError::Render(_) => "RenderError",
            ServerError::ResourceNotFound(_) => "ResourceNotFound",
            ServerError::DuplicateOperation(_) => "DuplicateOperation",
            ServerError::Internal(_) => "InternalError",
        }
    }
}

impl From<toybox::ToyError> for ServerError {
    fn from(e: toybox::ToyError) -> Self {
        match e {
            toybox::ToyError::Domain(msg) => ServerError::Domain(msg),
            toybox::ToyError::Render(msg) => ServerError::Render(msg),
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
