//! Input schemas as explicit field-descriptor lists.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::error::{ServerError, ServerResult};

/// Type a field value must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Integer,
    String,
    Boolean,
    Array,
    Object,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }

    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Number => value.is_number(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::String => value.is_string(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
        }
    }
}

/// JSON type name of a value, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One declared input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ordered list of fields an operation accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    pub fields: Vec<FieldSpec>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.field(name, kind, true, description)
    }

    pub fn optional(self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.field(name, kind, false, description)
    }

    fn field(mut self, name: &str, kind: FieldKind, required: bool, description: &str) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            kind,
            required,
            description: (!description.is_empty()).then(|| description.to_string()),
        });
        self
    }

    /// JSON-Schema rendering, as shown by `info` and the REPL.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut prop = json!({ "type": field.kind.name() });
            if let Some(desc) = &field.description {
                prop["description"] = json!(desc);
            }
            properties.insert(field.name.clone(), prop);
        }
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Arguments that passed schema validation. Holds only declared fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Map<String, Value>,
}

impl Arguments {
    pub(crate) fn from_validated(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn number(&self, name: &str) -> ServerResult<f64> {
        self.get(name)
            .and_then(Value::as_f64)
            .ok_or_else(|| ServerError::validation(name, "expected number"))
    }

    pub fn str(&self, name: &str) -> ServerResult<&str> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| ServerError::validation(name, "expected string"))
    }

    pub fn opt_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Number.accepts(&json!(1)));
        assert!(FieldKind::Number.accepts(&json!(1.5)));
        assert!(!FieldKind::Number.accepts(&json!("1")));
        assert!(FieldKind::Integer.accepts(&json!(-3)));
        assert!(!FieldKind::Integer.accepts(&json!(2.5)));
        assert!(FieldKind::String.accepts(&json!("")));
        assert!(!FieldKind::String.accepts(&Value::Null));
        assert!(FieldKind::Boolean.accepts(&json!(false)));
        assert!(FieldKind::Array.accepts(&json!([])));
        assert!(FieldKind::Object.accepts(&json!({})));
    }

    #[test]
    fn test_json_schema_rendering() {
        let schema = InputSchema::new()
            .required("label", FieldKind::String, "Left-hand text")
            .optional("color", FieldKind::String, "");
        let rendered = schema.to_json_schema();
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["properties"]["label"]["type"], "string");
        assert_eq!(rendered["properties"]["label"]["description"], "Left-hand text");
        assert!(rendered["properties"]["color"].get("description").is_none());
        assert_eq!(rendered["required"], json!(["label"]));
    }

    #[test]
    fn test_argument_accessors() {
        let mut map = Map::new();
        map.insert("n".into(), json!(4));
        map.insert("name".into(), json!("Ada"));
        let args = Arguments::from_validated(map);
        assert_eq!(args.number("n").unwrap(), 4.0);
        assert_eq!(args.str("name").unwrap(), "Ada");
        assert!(args.str("n").is_err());
        assert_eq!(args.opt_str("missing"), None);
        assert_eq!(args.len(), 2);
    }
}
