//! Numeric capabilities.

use crate::types::{ToyError, ToyResult};

/// Square root of a non-negative, finite number.
pub fn square_root(n: f64) -> ToyResult<f64> {
    if n.is_nan() {
        return Err(ToyError::Domain("n must be a number".to_string()));
    }
    if n < 0.0 {
        return Err(ToyError::Domain("n must be non-negative".to_string()));
    }
    Ok(n.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_square() {
        assert_eq!(square_root(9.0).unwrap(), 3.0);
    }

    #[test]
    fn test_zero() {
        assert_eq!(square_root(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_fractional() {
        let r = square_root(2.0).unwrap();
        assert!((r - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_negative_is_domain_error() {
        let err = square_root(-4.0).unwrap_err();
        assert_eq!(err, ToyError::Domain("n must be non-negative".to_string()));
        assert_eq!(err.to_string(), "n must be non-negative");
    }

    #[test]
    fn test_infinity() {
        assert_eq!(square_root(f64::INFINITY).unwrap(), f64::INFINITY);
        assert!(square_root(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(square_root(f64::NAN).is_err());
    }
}
