//! Message framing for newline-delimited JSON.

use serde_json::Value;

use crate::types::{Request, RequestId, Response, ServerError, ServerResult};

/// A frame that could not be decoded, with whatever id could be recovered.
#[derive(Debug)]
pub struct DecodeFailure {
    pub id: RequestId,
    pub error: ServerError,
}

impl DecodeFailure {
    fn new(id: RequestId, message: impl Into<String>) -> Self {
        Self {
            id,
            error: ServerError::Decode(message.into()),
        }
    }
}

/// Parse a single line of text as a request.
pub fn decode_request(line: &str) -> Result<Request, DecodeFailure> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(DecodeFailure::new(RequestId::Null, "empty frame"));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| DecodeFailure::new(RequestId::Null, e.to_string()))?;

    let id = RequestId::from_frame(&value);
    let Some(object) = value.as_object() else {
        return Err(DecodeFailure::new(id, "frame must be a JSON object"));
    };

    match object.get("operation") {
        Some(Value::String(_)) => {}
        Some(_) => return Err(DecodeFailure::new(id, "'operation' must be a string")),
        None => return Err(DecodeFailure::new(id, "missing 'operation'")),
    }

    match object.get("arguments") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => return Err(DecodeFailure::new(id, "'arguments' must be an object")),
    }

    serde_json::from_value(value).map_err(|e| DecodeFailure::new(id, e.to_string()))
}

/// Serialize a response to a single line (without trailing newline).
pub fn encode_response(response: &Response) -> ServerResult<String> {
    serde_json::to_string(response).map_err(|e| ServerError::Internal(e.to_string()))
}

/// Parse a single line as a response. Used by clients and tests.
pub fn decode_response(line: &str) -> ServerResult<Response> {
    serde_json::from_str(line.trim()).map_err(|e| ServerError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_valid_request() {
        let req =
            decode_request(r#"{"id":1,"operation":"squareRoot","arguments":{"n":9}}"#).unwrap();
        assert_eq!(req.id, RequestId::from(1));
        assert_eq!(req.operation, "squareRoot");
        assert_eq!(req.arguments.unwrap()["n"], json!(9));
    }

    #[test]
    fn test_malformed_json_has_null_id() {
        let failure = decode_request(r#"{"broken":"#).unwrap_err();
        assert_eq!(failure.id, RequestId::Null);
        assert!(failure.error.to_string().starts_with("DecodeError: "));
    }

    #[test]
    fn test_structure_errors_keep_id() {
        let failure = decode_request(r#"{"id":"abc","arguments":{}}"#).unwrap_err();
        assert_eq!(failure.id, RequestId::from("abc"));
        assert_eq!(failure.error.to_string(), "DecodeError: missing 'operation'");

        let failure = decode_request(r#"{"id":5,"operation":7}"#).unwrap_err();
        assert_eq!(failure.id, RequestId::from(5));

        let failure = decode_request(r#"{"id":6,"operation":"greet","arguments":[1]}"#)
            .unwrap_err();
        assert_eq!(failure.id, RequestId::from(6));
        assert_eq!(
            failure.error.to_string(),
            "DecodeError: 'arguments' must be an object"
        );
    }

    #[test]
    fn test_non_object_frame() {
        let failure = decode_request("[1,2,3]").unwrap_err();
        assert_eq!(failure.id, RequestId::Null);
        assert!(matches!(failure.error, ServerError::Decode(_)));
    }

    #[test]
    fn test_null_arguments_accepted() {
        let req = decode_request(r#"{"id":1,"operation":"greet","arguments":null}"#).unwrap();
        assert!(req.arguments.is_none());
    }

    #[test]
    fn test_encode_then_decode_response() {
        let resp = Response::success(RequestId::from(3), json!("Hello, Ada!"));
        let line = encode_response(&resp).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(decode_response(&line).unwrap(), resp);
    }
}
