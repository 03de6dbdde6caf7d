//! Operation registration and lookup.
//!
//! The registry is populated once at startup and then shared read-only
//! behind an `Arc`; it offers no way to mutate itself through `&self`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Arguments, InputSchema, ServerError, ServerResult};

/// Body of an operation. Receives arguments that already passed validation.
#[async_trait]
pub trait OperationHandler: Send + Sync {
    async fn call(&self, args: Arguments) -> ServerResult<Value>;
}

/// A registered operation.
pub struct Operation {
    pub name: String,
    pub description: Option<String>,
    pub schema: InputSchema,
    handler: Arc<dyn OperationHandler>,
}

impl Operation {
    pub fn handler(&self) -> &dyn OperationHandler {
        self.handler.as_ref()
    }

    pub fn definition(&self) -> OperationDefinition {
        OperationDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.schema.to_json_schema(),
        }
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Public description of an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Default)]
pub struct OperationRegistry {
    operations: HashMap<String, Operation>,
    order: Vec<String>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation. Names are unique.
    pub fn register(
        &mut self,
        name: &str,
        description: Option<&str>,
        schema: InputSchema,
        handler: impl OperationHandler + 'static,
    ) -> ServerResult<()> {
        if self.operations.contains_key(name) {
            return Err(ServerError::DuplicateOperation(name.to_string()));
        }

        self.operations.insert(
            name.to_string(),
            Operation {
                name: name.to_string(),
                description: description.map(str::to_string),
                schema,
                handler: Arc::new(handler),
            },
        );
        self.order.push(name.to_string());
        tracing::debug!("Registered operation {name}");
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    /// Definitions in registration order.
    pub fn list(&self) -> Vec<OperationDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.operations.get(name))
            .map(Operation::definition)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
