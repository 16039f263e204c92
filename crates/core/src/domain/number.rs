// Number validation rules shared by every hard operation

use crate::domain::error::{OperationError, Result};

/// Accept an operand only if it is finite and not NaN.
pub fn ensure_operand(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OperationError::Overflow)
    }
}

/// Validate every operand of a sequence before any of them is combined.
pub fn ensure_operands(values: &[f64]) -> Result<()> {
    values.iter().try_for_each(|&v| ensure_operand(v).map(|_| ()))
}

/// Accept a computed value only if it is finite.
///
/// NaN is rejected here too: finite operands cannot produce it for the hard
/// operations, so seeing one means the computation went wrong.
pub fn ensure_result(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OperationError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_accepts_finite_values() {
        assert_eq!(ensure_operand(0.0), Ok(0.0));
        assert_eq!(ensure_operand(-0.0), Ok(-0.0));
        assert_eq!(ensure_operand(f64::MAX), Ok(f64::MAX));
        assert_eq!(ensure_operand(f64::MIN_POSITIVE / 2.0), Ok(f64::MIN_POSITIVE / 2.0));
    }

    #[test]
    fn test_operand_rejects_non_finite_values() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(ensure_operand(value), Err(OperationError::Overflow));
        }
    }

    #[test]
    fn test_operands_rejects_any_bad_member() {
        assert!(ensure_operands(&[1.0, 2.0, 3.0]).is_ok());
        assert!(ensure_operands(&[]).is_ok());
        assert_eq!(
            ensure_operands(&[1.0, f64::NAN, 3.0]),
            Err(OperationError::Overflow)
        );
    }

    #[test]
    fn test_result_rejects_nan_and_infinity() {
        assert_eq!(ensure_result(42.5), Ok(42.5));
        assert_eq!(ensure_result(f64::INFINITY), Err(OperationError::Overflow));
        assert_eq!(ensure_result(f64::NAN), Err(OperationError::Overflow));
    }
}
