//! Operation: getWeather — canned weather report.

use async_trait::async_trait;
use serde_json::Value;

use crate::registry::{OperationHandler, OperationRegistry};
use crate::types::{Arguments, FieldKind, InputSchema, ServerResult};

pub const NAME: &str = "getWeather";

pub fn schema() -> InputSchema {
    InputSchema::new().required("location", FieldKind::String, "Place to report on")
}

pub struct GetWeather;

#[async_trait]
impl OperationHandler for GetWeather {
    async fn call(&self, args: Arguments) -> ServerResult<Value> {
        Ok(Value::String(toybox::weather_report(args.str("location")?)))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    registry.register(
        NAME,
        Some("Get the current weather for a specified location"),
        schema(),
        GetWeather,
    )
}
