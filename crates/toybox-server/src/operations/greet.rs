//! Operation: greet — templated greeting.

use async_trait::async_trait;
use serde_json::Value;

use crate::registry::{OperationHandler, OperationRegistry};
use crate::types::{Arguments, FieldKind, InputSchema, ServerResult};

pub const NAME: &str = "greet";

pub fn schema() -> InputSchema {
    InputSchema::new().required("name", FieldKind::String, "Who to greet")
}

pub struct Greet;

#[async_trait]
impl OperationHandler for Greet {
    async fn call(&self, args: Arguments) -> ServerResult<Value> {
        let name = args.str("name")?;
        Ok(Value::String(toybox::greet(name)))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    registry.register(NAME, Some("Return a personalised greeting"), schema(), Greet)
}
