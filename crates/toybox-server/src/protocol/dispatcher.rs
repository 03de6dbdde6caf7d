//! Request dispatcher — decodes frames, routes them to operations, encodes outcomes.

use std::sync::Arc;

use serde_json::Value;

use crate::registry::OperationRegistry;
use crate::transport::framing;
use crate::types::{Request, Response, ServerError, ServerResult};

use super::validator::validate_arguments;

/// Turns one request frame into exactly one response.
///
/// Only encoding the response can fail; every decode, lookup, validation, or
/// handler failure becomes a failure response carrying the request id.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<OperationRegistry>,
}

impl Dispatcher {
    pub fn new(registry: OperationRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Decode, dispatch, and encode one frame.
    pub async fn handle_frame(&self, frame: &str) -> ServerResult<String> {
        let response = self.dispatch_frame(frame).await;
        framing::encode_response(&response)
    }

    pub async fn dispatch_frame(&self, frame: &str) -> Response {
        match framing::decode_request(frame) {
            Ok(request) => self.dispatch(request).await,
            Err(failure) => {
                tracing::warn!("Rejected frame (id {}): {}", failure.id, failure.error);
                Response::failure(failure.id, failure.error)
            }
        }
    }

    pub async fn dispatch(&self, request: Request) -> Response {
        let Request {
            id,
            operation,
            arguments,
        } = request;

        tracing::debug!("Dispatching {operation} (id {id})");

        match self.invoke(&operation, arguments).await {
            Ok(payload) => Response::success(id, payload),
            Err(e) => {
                tracing::warn!("{operation} (id {id}) failed: {e}");
                Response::failure(id, e)
            }
        }
    }

    async fn invoke(
        &self,
        operation: &str,
        arguments: Option<serde_json::Map<String, Value>>,
    ) -> ServerResult<Value> {
        let op = self
            .registry
            .lookup(operation)
            .ok_or_else(|| ServerError::UnknownOperation(operation.to_string()))?;

        let args = validate_arguments(&op.schema, arguments)?;
        op.handler().call(args).await
    }
}
