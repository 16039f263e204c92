// Operations - overflow-safe arithmetic engine
use crate::domain::error::{OperationError, Result};
use crate::domain::number::{ensure_operand, ensure_operands, ensure_result};
use crate::domain::{Arity, OperationKind, OperationRequest, Outcome};
use tracing::debug;

/// Stateless arithmetic engine
///
/// Every hard operation (add, subtract, multiply, divide) runs two passes:
/// - operands are validated (finite, non-NaN) before they are combined
/// - the combined value is validated (finite) before it is returned
///
/// Power and square root never fail; an undefined real result is reported
/// as [`Outcome::Uncomputable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Operations;

impl Operations {
    pub fn new() -> Self {
        Self
    }

    /// Add two terms together and return the sum
    pub fn add(&self, first_term: f64, second_term: f64) -> Result<f64> {
        self.add_all(&[first_term, second_term])
    }

    /// Sum a non-empty sequence of terms
    ///
    /// Terms are accumulated left to right; an intermediate sum that reaches
    /// ±∞ stays there, so `[MAX, MAX, -MAX]` overflows even though its exact
    /// sum is finite.
    ///
    /// # Errors
    /// - `InvalidArgument` if `terms` is empty
    /// - `Overflow` if any term is ±∞/NaN or the sum is not finite
    pub fn add_all(&self, terms: &[f64]) -> Result<f64> {
        if terms.is_empty() {
            return Err(OperationError::InvalidArgument(
                "addition needs at least one term".to_string(),
            ));
        }
        ensure_operands(terms)?;

        let sum = terms.iter().sum::<f64>();
        debug!(terms = terms.len(), sum, "performing addition");
        ensure_result(sum)
    }

    /// Subtract the subtrahend from the minuend and return the difference
    pub fn subtract(&self, minuend: f64, subtrahend: f64) -> Result<f64> {
        self.subtract_all(&[minuend, subtrahend])
    }

    /// Subtract every following term from the first one, left to right
    ///
    /// `terms[0]` is the minuend; `[5, 1, 2]` evaluates to `5 - 1 - 2`.
    /// Like [`Operations::add_all`], an intermediate ±∞ is final:
    /// `[MAX, -MAX, MAX]` overflows.
    ///
    /// # Errors
    /// Same as [`Operations::add_all`].
    pub fn subtract_all(&self, terms: &[f64]) -> Result<f64> {
        let Some((&minuend, subtrahends)) = terms.split_first() else {
            return Err(OperationError::InvalidArgument(
                "subtraction needs a minuend".to_string(),
            ));
        };
        ensure_operands(terms)?;

        let difference = subtrahends.iter().fold(minuend, |acc, &t| acc - t);
        debug!(terms = terms.len(), difference, "performing subtraction");
        ensure_result(difference)
    }

    /// Multiply the multiplicand with the multiplier and return the product
    pub fn multiply(&self, multiplicand: f64, multiplier: f64) -> Result<f64> {
        let multiplicand = ensure_operand(multiplicand)?;
        let multiplier = ensure_operand(multiplier)?;

        let product = multiplicand * multiplier;
        debug!(multiplicand, multiplier, product, "performing multiplication");
        ensure_result(product)
    }

    /// Divide the dividend with the divisor and return the quotient
    ///
    /// A zero divisor is reported as `DivideByZero` before any other check,
    /// whatever the dividend is.
    pub fn divide(&self, dividend: f64, divisor: f64) -> Result<f64> {
        if divisor == 0.0 {
            return Err(OperationError::DivideByZero);
        }
        let dividend = ensure_operand(dividend)?;
        let divisor = ensure_operand(divisor)?;

        let quotient = dividend / divisor;
        debug!(dividend, divisor, quotient, "performing division");
        ensure_result(quotient)
    }

    /// Raise `base` to the power of `exponent`
    pub fn power(&self, base: f64, exponent: f64) -> Outcome {
        let outcome = Outcome::from_soft(base.powf(exponent));
        debug!(base, exponent, ?outcome, "performing exponentiation");
        outcome
    }

    /// Extract the square root of `radicand`
    pub fn square_root(&self, radicand: f64) -> Outcome {
        let outcome = Outcome::from_soft(radicand.sqrt());
        debug!(radicand, ?outcome, "performing square root extraction");
        outcome
    }

    /// Evaluate a request by dispatching on its operation kind
    ///
    /// The operand count must match the kind's [`Arity`]: exactly one for
    /// square root, exactly two for multiply/divide/power, one or more for
    /// add/subtract.
    ///
    /// # Example
    /// ```text
    /// let req = OperationRequest::new(OperationKind::Add, vec![1.0, 2.0, 3.0]);
    /// assert_eq!(Operations::new().evaluate(&req), Ok(Outcome::Value(6.0)));
    /// ```
    pub fn evaluate(&self, request: &OperationRequest) -> Result<Outcome> {
        let operands = request.operands.as_slice();

        let outcome = match (request.kind, operands) {
            (OperationKind::Add, terms) => Outcome::Value(self.add_all(terms)?),
            (OperationKind::Subtract, terms) => Outcome::Value(self.subtract_all(terms)?),
            (OperationKind::Multiply, &[a, b]) => Outcome::Value(self.multiply(a, b)?),
            (OperationKind::Divide, &[a, b]) => Outcome::Value(self.divide(a, b)?),
            (OperationKind::Power, &[a, b]) => self.power(a, b),
            (OperationKind::SquareRoot, &[a]) => self.square_root(a),
            (kind, _) => {
                return Err(OperationError::InvalidArgument(format!(
                    "{} expects {} operand(s), got {}",
                    kind,
                    expected_count(kind.arity()),
                    operands.len()
                )));
            }
        };

        Ok(outcome)
    }
}

fn expected_count(arity: Arity) -> &'static str {
    match arity {
        Arity::Unary => "1",
        Arity::Binary => "2",
        Arity::Variadic => "at least 1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    fn non_finite_pairs() -> Vec<(f64, f64)> {
        vec![
            (f64::INFINITY, 1.0),
            (1.0, f64::INFINITY),
            (f64::NEG_INFINITY, 1.0),
            (1.0, f64::NEG_INFINITY),
            (f64::NAN, 1.0),
            (1.0, f64::NAN),
        ]
    }

    #[test]
    fn test_add_correctly() {
        let ops = Operations::new();
        assert_close(ops.add(5.0, 5.0).unwrap(), 10.0);
        assert_close(ops.add(-5.0, -5.0).unwrap(), -10.0);
        assert_close(ops.add(5.0, -5.0).unwrap(), 0.0);
        assert_close(ops.add(5.001, 5.0).unwrap(), 10.001);
    }

    #[test]
    fn test_subtract_correctly() {
        let ops = Operations::new();
        assert_close(ops.subtract(5.0, 5.0).unwrap(), 0.0);
        assert_close(ops.subtract(-5.0, -5.0).unwrap(), 0.0);
        assert_close(ops.subtract(5.0, -5.0).unwrap(), 10.0);
        assert_close(ops.subtract(5.001, 5.0).unwrap(), 0.001);
    }

    #[test]
    fn test_multiply_correctly() {
        let ops = Operations::new();
        assert_close(ops.multiply(5.0, 5.0).unwrap(), 25.0);
        assert_close(ops.multiply(-5.0, -5.0).unwrap(), 25.0);
        assert_close(ops.multiply(5.0, -5.0).unwrap(), -25.0);
        assert_close(ops.multiply(5.001, 5.0).unwrap(), 25.005);
    }

    #[test]
    fn test_divide_correctly() {
        let ops = Operations::new();
        assert_close(ops.divide(5.0, 5.0).unwrap(), 1.0);
        assert_close(ops.divide(-5.0, -5.0).unwrap(), 1.0);
        assert_close(ops.divide(5.0, -5.0).unwrap(), -1.0);
        assert_close(ops.divide(5.001, 5.0).unwrap(), 1.0);
    }

    #[test]
    fn test_variadic_add_and_subtract() {
        let ops = Operations::new();
        let terms = [5.001, 5.0, -24.752, 0.14, -3174.225];

        assert_eq!(ops.add_all(&[5.0, 5.0]), Ok(10.0));
        assert_close(ops.add_all(&terms).unwrap(), -3188.836);
        assert_close(ops.subtract_all(&terms).unwrap(), 3198.838);
        assert_eq!(ops.add_all(&[7.5]), Ok(7.5));
        assert_eq!(ops.subtract_all(&[7.5]), Ok(7.5));
    }

    #[test]
    fn test_variadic_empty_is_invalid_argument() {
        let ops = Operations::new();
        assert!(matches!(
            ops.add_all(&[]),
            Err(OperationError::InvalidArgument(_))
        ));
        assert!(matches!(
            ops.subtract_all(&[]),
            Err(OperationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_divide_by_zero_checked_first() {
        let ops = Operations::new();
        assert_eq!(ops.divide(100.0, 0.0), Err(OperationError::DivideByZero));
        assert_eq!(ops.divide(100.0, -0.0), Err(OperationError::DivideByZero));
        assert_eq!(ops.divide(f64::NAN, 0.0), Err(OperationError::DivideByZero));
        assert_eq!(
            ops.divide(f64::INFINITY, 0.0),
            Err(OperationError::DivideByZero)
        );
    }

    #[test]
    fn test_non_finite_inputs_overflow() {
        let ops = Operations::new();
        for (a, b) in non_finite_pairs() {
            assert_eq!(ops.add(a, b), Err(OperationError::Overflow), "add({a}, {b})");
            assert_eq!(ops.subtract(a, b), Err(OperationError::Overflow));
            assert_eq!(ops.multiply(a, b), Err(OperationError::Overflow));
            assert_eq!(ops.divide(a, b), Err(OperationError::Overflow));
            assert_eq!(ops.add_all(&[a, b]), Err(OperationError::Overflow));
            assert_eq!(ops.subtract_all(&[a, b]), Err(OperationError::Overflow));
        }
    }

    #[test]
    fn test_finite_inputs_with_infinite_result_overflow() {
        let ops = Operations::new();
        assert_eq!(ops.multiply(f64::MAX, f64::MAX), Err(OperationError::Overflow));
        assert_eq!(
            ops.divide(f64::MAX, 1.0 / f64::MAX),
            Err(OperationError::Overflow)
        );
        assert_eq!(ops.add(f64::MAX, f64::MAX), Err(OperationError::Overflow));
        assert_eq!(ops.subtract(f64::MIN, f64::MAX), Err(OperationError::Overflow));
    }

    #[test]
    fn test_intermediate_overflow_is_final() {
        let ops = Operations::new();
        assert_eq!(
            ops.add_all(&[f64::MAX, f64::MAX, -f64::MAX]),
            Err(OperationError::Overflow)
        );
        assert_eq!(
            ops.subtract_all(&[f64::MAX, -f64::MAX, f64::MAX]),
            Err(OperationError::Overflow)
        );
        // Same terms ordered so no partial result leaves the finite range
        assert_eq!(ops.add_all(&[f64::MAX, -f64::MAX, f64::MAX]), Ok(f64::MAX));
    }

    #[test]
    fn test_power() {
        let ops = Operations::new();
        assert_eq!(ops.power(2.0, 10.0), Outcome::Value(1024.0));
        assert_eq!(ops.power(-1.0, 0.5), Outcome::Uncomputable);
        assert_eq!(ops.power(3.0, 2.0), Outcome::Value(9.0));
    }

    #[test]
    fn test_square_root() {
        let ops = Operations::new();
        assert_eq!(ops.square_root(16.0), Outcome::Value(4.0));
        assert_eq!(ops.square_root(-1.0), Outcome::Uncomputable);
        assert_eq!(ops.square_root(0.0), Outcome::Value(0.0));
    }

    #[test]
    fn test_evaluate_dispatches_by_kind() {
        let ops = Operations::new();
        let cases = [
            (OperationKind::Add, vec![1.0, 2.0, 3.0], Outcome::Value(6.0)),
            (OperationKind::Subtract, vec![10.0, 2.0, 3.0], Outcome::Value(5.0)),
            (OperationKind::Multiply, vec![3.0, 4.0], Outcome::Value(12.0)),
            (OperationKind::Divide, vec![12.0, 4.0], Outcome::Value(3.0)),
            (OperationKind::Power, vec![2.0, 3.0], Outcome::Value(8.0)),
            (OperationKind::SquareRoot, vec![-4.0], Outcome::Uncomputable),
        ];

        for (kind, operands, expected) in cases {
            let req = OperationRequest::new(kind, operands);
            assert_eq!(ops.evaluate(&req), Ok(expected), "{kind}");
        }
    }

    #[test]
    fn test_evaluate_propagates_hard_failures() {
        let ops = Operations::new();
        let req = OperationRequest::binary(OperationKind::Divide, 1.0, 0.0);
        assert_eq!(ops.evaluate(&req), Err(OperationError::DivideByZero));

        let req = OperationRequest::binary(OperationKind::Multiply, f64::MAX, 2.0);
        assert_eq!(ops.evaluate(&req), Err(OperationError::Overflow));
    }

    #[test]
    fn test_evaluate_rejects_wrong_operand_count() {
        let ops = Operations::new();
        let bad = [
            OperationRequest::new(OperationKind::Multiply, vec![1.0]),
            OperationRequest::new(OperationKind::Divide, vec![1.0, 2.0, 3.0]),
            OperationRequest::new(OperationKind::Power, Vec::new()),
            OperationRequest::binary(OperationKind::SquareRoot, 4.0, 9.0),
            OperationRequest::new(OperationKind::Add, Vec::new()),
        ];

        for req in bad {
            let err = ops.evaluate(&req).unwrap_err();
            assert!(
                matches!(err, OperationError::InvalidArgument(_)),
                "{:?} gave {err:?}",
                req.kind
            );
        }
    }
}
