//! Built-in operations.

pub mod get_weather;
pub mod greet;
pub mod list_operations;
pub mod read_resource;
pub mod render_badge;
pub mod review_code;
pub mod square_root;

use crate::registry::OperationRegistry;
use crate::types::ServerResult;

/// Registry holding every built-in operation.
pub fn builtin_registry() -> ServerResult<OperationRegistry> {
    let mut registry = OperationRegistry::new();
    square_root::register(&mut registry)?;
    render_badge::register(&mut registry)?;
    greet::register(&mut registry)?;
    get_weather::register(&mut registry)?;
    review_code::register(&mut registry)?;
    read_resource::register(&mut registry)?;
    // must stay last, see list_operations
    list_operations::register(&mut registry)?;
    Ok(registry)
}
