//! Operation: reviewCode — build a code-review prompt message.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::registry::{OperationHandler, OperationRegistry};
use crate::types::{Arguments, FieldKind, InputSchema, ServerResult};

pub const NAME: &str = "reviewCode";

pub fn schema() -> InputSchema {
    InputSchema::new().required("code", FieldKind::String, "Code containing the error")
}

pub struct ReviewCode;

#[async_trait]
impl OperationHandler for ReviewCode {
    async fn call(&self, args: Arguments) -> ServerResult<Value> {
        let text = toybox::review_prompt(args.str("code")?);
        Ok(json!({
            "role": "user",
            "text": text,
        }))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    registry.register(
        NAME,
        Some("Review the provided code and suggest fixes for any errors"),
        schema(),
        ReviewCode,
    )
}
