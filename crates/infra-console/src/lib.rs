// Calculator Infrastructure - Console Adapters
// Implements: TextInput, TextOutput

pub mod memory;
pub mod stream;

pub use memory::{BufferedOutput, ScriptedInput};
pub use stream::{stdin, stdout, LineReader, LineWriter};
