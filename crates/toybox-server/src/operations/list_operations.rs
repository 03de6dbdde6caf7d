//! Operation: listOperations — describe every registered operation.
//!
//! Registered last: it snapshots the registry's definitions (plus its own)
//! at registration time, which is final since the registry never changes
//! after startup.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::registry::{OperationDefinition, OperationHandler, OperationRegistry};
use crate::types::{Arguments, InputSchema, ServerError, ServerResult};

pub const NAME: &str = "listOperations";

const DESCRIPTION: &str = "List available operations and their input schemas";

pub fn schema() -> InputSchema {
    InputSchema::new()
}

pub struct ListOperations {
    definitions: Vec<OperationDefinition>,
}

#[async_trait]
impl OperationHandler for ListOperations {
    async fn call(&self, _args: Arguments) -> ServerResult<Value> {
        let operations = serde_json::to_value(&self.definitions)
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        Ok(json!({ "operations": operations }))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    let mut definitions = registry.list();
    definitions.push(OperationDefinition {
        name: NAME.to_string(),
        description: Some(DESCRIPTION.to_string()),
        input_schema: schema().to_json_schema(),
    });
    registry.register(NAME, Some(DESCRIPTION), schema(), ListOperations { definitions })
}
