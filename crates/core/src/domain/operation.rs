// Operation Domain Model

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

/// How many operands an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    /// One or more operands
    Variadic,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
        OperationKind::SquareRoot,
    ];

    pub fn arity(&self) -> Arity {
        match self {
            OperationKind::Add | OperationKind::Subtract => Arity::Variadic,
            OperationKind::Multiply | OperationKind::Divide | OperationKind::Power => Arity::Binary,
            OperationKind::SquareRoot => Arity::Unary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
            OperationKind::Power => "power",
            OperationKind::SquareRoot => "square-root",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(OperationKind::Add),
            "subtract" | "sub" => Ok(OperationKind::Subtract),
            "multiply" | "mul" => Ok(OperationKind::Multiply),
            "divide" | "div" => Ok(OperationKind::Divide),
            "power" | "pow" => Ok(OperationKind::Power),
            "square-root" | "sqrt" => Ok(OperationKind::SquareRoot),
            _ => Err(DomainError::UnknownOperation(s.to_string())),
        }
    }
}

/// A single operation invocation: operator tag plus ordered operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub kind: OperationKind,
    pub operands: Vec<f64>,
}

impl OperationRequest {
    pub fn new(kind: OperationKind, operands: impl Into<Vec<f64>>) -> Self {
        Self {
            kind,
            operands: operands.into(),
        }
    }

    pub fn unary(kind: OperationKind, operand: f64) -> Self {
        Self::new(kind, vec![operand])
    }

    pub fn binary(kind: OperationKind, left: f64, right: f64) -> Self {
        Self::new(kind, vec![left, right])
    }
}

/// Successful result of an operation.
///
/// `Uncomputable` is the soft tier: power and square root return it when the
/// real-valued result is undefined (e.g. the root of a negative number).
///
/// Power may still yield an infinite `Value`; it serializes as `"inf"` /
/// `"-inf"` since JSON has no number for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Value(#[serde(with = "float_repr")] f64),
    Uncomputable,
}

impl Outcome {
    /// Map a raw soft-operation result: NaN becomes `Uncomputable`.
    pub fn from_soft(value: f64) -> Self {
        if value.is_nan() {
            Outcome::Uncomputable
        } else {
            Outcome::Value(value)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(*v),
            Outcome::Uncomputable => None,
        }
    }
}

/// Finite floats as JSON numbers, non-finite ones as `"inf"`, `"-inf"`, `"NaN"`
mod float_repr {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid number: {text}"))),
        }
    }
}
