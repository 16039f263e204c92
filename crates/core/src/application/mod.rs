// Application Layer - Use Cases and Business Logic

pub mod operations;
pub mod shell;

// Re-exports
pub use operations::Operations;
pub use shell::{OverflowPolicy, Shell, ShellConfig};
