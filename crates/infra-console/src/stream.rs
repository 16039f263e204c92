// Stream console adapters (stdin/stdout or any BufRead/Write pair)
use std::io::{self, BufRead, Write};

use calculator_core::port::{TextInput, TextOutput};
use tracing::trace;

/// ANSI: erase display, move cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Reads newline-terminated lines from any buffered reader
pub struct LineReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> TextInput for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            trace!("End of input");
            return Ok(None);
        }

        // Strip "\n" or "\r\n"
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }

        // Invalid UTF-8 is handed on as replacement characters; callers
        // treat it like any other unparsable line
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// Writes lines to any writer, flushing after each one so prompts show up
/// before the next blocking read
pub struct LineWriter<W: Write> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextOutput for LineWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.writer.write_all(CLEAR_SCREEN.as_bytes())?;
        self.writer.flush()
    }
}

/// Console input bound to the process stdin
pub fn stdin() -> LineReader<io::StdinLock<'static>> {
    LineReader::new(io::stdin().lock())
}

/// Console output bound to the process stdout
pub fn stdout() -> LineWriter<io::Stdout> {
    LineWriter::new(io::stdout())
}
