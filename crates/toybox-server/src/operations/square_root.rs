//! Operation: squareRoot — square root of a non-negative number.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::registry::{OperationHandler, OperationRegistry};
use crate::types::{Arguments, FieldKind, InputSchema, ServerResult};

pub const NAME: &str = "squareRoot";

/// Largest magnitude below which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn schema() -> InputSchema {
    InputSchema::new().required("n", FieldKind::Number, "Non-negative number")
}

/// Whole results go out as JSON integers (`3`, not `3.0`).
pub fn number_value(x: f64) -> Value {
    if x.is_finite() && x.fract() == 0.0 && x.abs() <= MAX_EXACT_INTEGER {
        json!(x as i64)
    } else {
        json!(x)
    }
}

pub struct SquareRoot;

#[async_trait]
impl OperationHandler for SquareRoot {
    async fn call(&self, args: Arguments) -> ServerResult<Value> {
        let n = args.number("n")?;
        let root = toybox::square_root(n)?;
        Ok(number_value(root))
    }
}

pub fn register(registry: &mut OperationRegistry) -> ServerResult<()> {
    registry.register(NAME, Some("Calculate square root"), schema(), SquareRoot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_roots_are_integers() {
        assert_eq!(number_value(3.0), json!(3));
        assert_eq!(number_value(0.0), json!(0));
        assert_eq!(serde_json::to_string(&number_value(3.0)).unwrap(), "3");
    }

    #[test]
    fn test_fractional_and_huge_roots_stay_floats() {
        assert_eq!(number_value(1.5), json!(1.5));
        assert!(number_value(1e300).is_f64());
    }
}
