// Port Layer - Interfaces for external dependencies

pub mod console;

// Re-exports
pub use console::{TextInput, TextOutput};
