// Domain Error Types

use thiserror::Error;

/// Hard failures raised by the arithmetic engine.
///
/// `Uncomputable` results of power/square root are not errors; see
/// [`crate::domain::Outcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Division by zero")]
    DivideByZero,

    #[error("Value outside the representable finite range")]
    Overflow,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

pub type Result<T> = std::result::Result<T, OperationError>;
