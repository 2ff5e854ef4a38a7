//! Console seam between the game engines and the player.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

/// Line-oriented player I/O.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Reads one line of input without its line terminator.
    ///
    /// A line that is not valid UTF-8 carries no usable token and is returned
    /// as an empty line.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - The next line.
    /// * `Ok(None)` - Input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes a full line of narration.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Writes a prompt without a line break and flushes it.
    fn prompt(&mut self, text: &str) -> io::Result<()>;
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }

        match String::from_utf8(bytes) {
            Ok(line) => Ok(Some(line)),
            Err(e) => {
                warn!(error = %e.utf8_error(), "Discarding input line that is not valid UTF-8");
                Ok(Some(String::new()))
            }
        }
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_until_eof() {
        let mut console = TerminalConsole::new(Cursor::new("e\r\nd\ns"), Vec::new());

        assert_eq!(console.read_line().unwrap(), Some("e".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("d".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("s".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_line_reads_as_empty() {
        let input: &[u8] = b"\xff\xfe\r\n\xffAlfredo\nBerta\n";
        let mut console = TerminalConsole::new(Cursor::new(input), Vec::new());

        assert_eq!(console.read_line().unwrap(), Some(String::new()));
        assert_eq!(console.read_line().unwrap(), Some(String::new()));
        assert_eq!(console.read_line().unwrap(), Some("Berta".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_output() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new());
        console.say("Saguão Principal").unwrap();
        console.prompt("> ").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Saguão Principal\n> ");
    }
}
