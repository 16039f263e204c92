// Console Ports (text input/output capability injected into the shell)

use std::io;

/// Line-oriented text source (allows scripting in tests)
#[cfg_attr(test, mockall::automock)]
pub trait TextInput {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Line-oriented text sink
#[cfg_attr(test, mockall::automock)]
pub trait TextOutput {
    /// Write one line of text followed by a line terminator
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Clear the visible screen before a new view is drawn
    fn clear(&mut self) -> io::Result<()>;
}

impl<T: TextInput + ?Sized> TextInput for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

impl<T: TextOutput + ?Sized> TextOutput for &mut T {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }
}
