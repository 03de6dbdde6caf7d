//! Request and response frame types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Correlation token — echoed back verbatim in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(Number),
    Null,
}

impl RequestId {
    /// Pull a usable id out of an arbitrary frame, falling back to `Null`.
    pub fn from_frame(frame: &Value) -> Self {
        match frame.get("id") {
            Some(Value::String(s)) => RequestId::String(s.clone()),
            Some(Value::Number(n)) => RequestId::Number(n.clone()),
            _ => RequestId::Null,
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n.into())
    }
}

impl From<i32> for RequestId {
    fn from(n: i32) -> Self {
        RequestId::Number(n.into())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestId::String(s) => write!(f, "{s}"),
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::Null => write!(f, "null"),
        }
    }
}

/// An incoming operation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "null_id")]
    pub id: RequestId,
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

fn null_id() -> RequestId {
    RequestId::Null
}

impl Request {
    pub fn new(id: impl Into<RequestId>, operation: &str, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => Some(map),
            _ => None,
        };
        Self {
            id: id.into(),
            operation: operation.to_string(),
            arguments,
        }
    }
}

/// Result of dispatching one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Serialized as `"result": <payload>`.
    Result(Value),
    /// Serialized as `"error": "<description>"`.
    Error(String),
}

/// A response frame: `{"id": .., "result": ..}` or `{"id": .., "error": ".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: RequestId,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Response {
    pub fn success(id: RequestId, payload: Value) -> Self {
        Self {
            id,
            outcome: Outcome::Result(payload),
        }
    }

    pub fn failure(id: RequestId, error: impl std::fmt::Display) -> Self {
        Self {
            id,
            outcome: Outcome::Error(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let resp = Response::success(1.into(), json!(3.0));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, json!({ "id": 1, "result": 3.0 }));
    }

    #[test]
    fn test_failure_shape() {
        let resp = Response::failure("abc".into(), "UnknownOperation: nope");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, json!({ "id": "abc", "error": "UnknownOperation: nope" }));
    }

    #[test]
    fn test_response_round_trip() {
        let original = Response::success(RequestId::from("req-7"), json!({ "a": [1, 2] }));
        let text = serde_json::to_string(&original).unwrap();
        let decoded: Response = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);

        let failure = Response::failure(42.into(), "DomainError: n must be non-negative");
        let text = serde_json::to_string(&failure).unwrap();
        let decoded: Response = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, failure);
    }

    #[test]
    fn test_fractional_id_is_echoed() {
        let frame = json!({ "id": 1.5, "operation": "greet" });
        let id = RequestId::from_frame(&frame);
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(1.5));
    }

    #[test]
    fn test_id_from_frame_fallbacks() {
        assert_eq!(RequestId::from_frame(&json!({})), RequestId::Null);
        assert_eq!(RequestId::from_frame(&json!({ "id": [1] })), RequestId::Null);
        assert_eq!(RequestId::from_frame(&json!("text")), RequestId::Null);
        assert_eq!(
            RequestId::from_frame(&json!({ "id": "x" })),
            RequestId::String("x".into())
        );
    }

    #[test]
    fn test_request_arguments_default_to_none() {
        let req: Request = serde_json::from_str(r#"{"id":1,"operation":"greet"}"#).unwrap();
        assert_eq!(req.id, RequestId::from(1));
        assert!(req.arguments.is_none());
    }
}
