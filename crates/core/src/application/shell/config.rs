// Shell configuration

use serde::{Deserialize, Serialize};

/// What the shell does when an operation overflows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Show the failure and return to the menu, like a division by zero
    #[default]
    Retry,
    /// End the session with `AppError::Operation(Overflow)`
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Clear the screen before every view
    pub clear_screen: bool,
    pub overflow_policy: OverflowPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            overflow_policy: OverflowPolicy::Retry,
        }
    }
}
