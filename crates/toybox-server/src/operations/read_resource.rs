//! Operation: readResource — read one of the URI-addressed resources.
//!
//! Known URIs:
//! - `greeting://{name}` — greeting text for `name`
//! - `resource://config` — the demo sampling configuration as JSON

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::{OperationHandler, OperationRegistry};
use crate::types::{Arguments, FieldKind, InputSchema, ServerError, ServerResult};

pub const NAME: &str = "readResource";

const GREETING_PREFIX: &str = "greeting://";
const CONFIG_URI: &str = "resource://config";

/// Contents of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

pub fn schema() -> InputSchema {
    InputSchema::new().required(
        "uri",
        FieldKind::String,
        "greeting://{name} or resource://config",
    )
}

/// Resolve `uri` to its contents.
pub fn read(uri: &str) -> ServerResult<ResourceContent> {
    if let Some(name) = uri.strip_prefix(GREETING_PREFIX) {
        if name.is_empty() {
            return Err(ServerError::ResourceNotFound(uri.to_string()));
        }
        Ok(ResourceContent {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: toybox::greet(name),
        })
    } else if uri == CONFIG_URI {
        let text = serde_json::to_string(&toybox::SamplingConfig::default())
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        Ok(ResourceContent {
            uri: uri.to_string(),
            mime_type: "application/json".to_string(),
            text,
        })
    } else {
        Err(ServerError::ResourceNotFound(uri.to_string()))
    }
}

pub struct ReadResource;

#[async_trait]
impl OperationHandler for ReadResource {
    async fn call(&self, args: Arguments) -> ServerResult<Value> {
        let content = read(args.str("uri")?)?;
        serde_json::to_value(content).map_err(|e| ServerError::Internal(e.to_string()))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    registry.register(
        NAME,
        Some("Read a greeting://{name} or resource://config resource"),
        schema(),
        ReadResource,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_template() {
        let content = read("greeting://Ada").unwrap();
        assert_eq!(content.text, "Hello, Ada!");
        assert_eq!(content.mime_type, "text/plain");
        assert_eq!(content.uri, "greeting://Ada");
    }

    #[test]
    fn test_config_resource() {
        let content = read("resource://config").unwrap();
        assert_eq!(content.mime_type, "application/json");
        let value: Value = serde_json::from_str(&content.text).unwrap();
        assert_eq!(value["max_tokens"], 2048);
    }

    #[test]
    fn test_unknown_uris() {
        for uri in ["greeting://", "resource://other", "file:///etc/passwd", ""] {
            assert!(matches!(read(uri), Err(ServerError::ResourceNotFound(_))), "{uri}");
        }
    }
}
