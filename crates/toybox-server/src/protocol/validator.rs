//! Argument validation against an operation's input schema.

use serde_json::{Map, Value};

use crate::types::{value_kind, Arguments, InputSchema, ServerError, ServerResult};

/// Check `arguments` field by field, in schema order.
///
/// Fails on the first missing required field or type mismatch. Fields the
/// schema does not declare are dropped; `null` counts as absent.
pub fn validate_arguments(
    schema: &InputSchema,
    arguments: Option<Map<String, Value>>,
) -> ServerResult<Arguments> {
    let mut arguments = arguments.unwrap_or_default();
    let mut validated = Map::new();

    for field in &schema.fields {
        match arguments.remove(&field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    return Err(ServerError::validation(
                        &field.name,
                        "required field is missing",
                    ));
                }
            }
            Some(value) => {
                if !field.kind.accepts(&value) {
                    return Err(ServerError::validation(
                        &field.name,
                        format!("expected {}, got {}", field.kind.name(), value_kind(&value)),
                    ));
                }
                validated.insert(field.name.clone(), value);
            }
        }
    }

    if !arguments.is_empty() {
        let ignored: Vec<&String> = arguments.keys().collect();
        tracing::debug!("Ignoring undeclared arguments: {ignored:?}");
    }

    Ok(Arguments::from_validated(validated))
}
