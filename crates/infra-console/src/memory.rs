// In-memory console adapters (scripted sessions, embedding, tests)
use std::collections::VecDeque;
use std::io;

use calculator_core::port::{TextInput, TextOutput};

/// Replays a fixed list of lines, then reports end of input
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl TextInput for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Records every written line; a clear is recorded as a screen boundary
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    lines: Vec<String>,
    clears: usize,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// How many times `line` was written
    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| *l == line).count()
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl TextOutput for BufferedOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
