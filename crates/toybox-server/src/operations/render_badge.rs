//! Operation: renderBadge — render a flat SVG badge as a base64 payload.

use async_trait::async_trait;
use serde_json::Value;

use toybox::Badge;

use crate::registry::{OperationHandler, OperationRegistry};
use crate::types::{Arguments, FieldKind, InputSchema, ServerError, ServerResult};

pub const NAME: &str = "renderBadge";

pub fn schema() -> InputSchema {
    InputSchema::new()
        .required("label", FieldKind::String, "Left-hand badge text")
        .required("text", FieldKind::String, "Right-hand badge text")
        .optional(
            "color",
            FieldKind::String,
            "Message colour: a name such as brightgreen or a #rgb/#rrggbb hex value",
        )
}

pub struct RenderBadge;

#[async_trait]
impl OperationHandler for RenderBadge {
    async fn call(&self, args: Arguments) -> ServerResult<Value> {
        let mut badge = Badge::new(args.str("label")?, args.str("text")?);
        if let Some(color) = args.opt_str("color") {
            badge = badge.with_color(color);
        }

        let payload = badge.render_payload()?;
        serde_json::to_value(payload).map_err(|e| ServerError::Render(e.to_string()))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    registry.register(
        NAME,
        Some("Generate an SVG badge with a label and text"),
        schema(),
        RenderBadge,
    )
}
