// Domain Layer - Pure arithmetic types and validation rules

pub mod error;
pub mod number;
pub mod operation;

// Re-exports
pub use error::{DomainError, OperationError};
pub use operation::{Arity, OperationKind, OperationRequest, Outcome};
