use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{ReminderError, Result};

pub type Terminal = Console<StdinLock<'static>, Stdout>;

pub fn init() -> Terminal {
    Console::new(io::stdin().lock(), io::stdout())
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "\n{}", prompt)?;
        self.writer.flush()
    }

    /// Read one line without its terminator. End of input is an error.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(ReminderError::InputClosed(None)),
            Err(e) => Err(ReminderError::InputClosed(Some(e))),
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_and_read() {
        let input = b"va\r\nvt+3\nq";
        let mut output = Vec::new();
        let mut console = Console::new(input.as_slice(), &mut output);

        console.prompt("> ").unwrap();
        assert_eq!(console.read_line().unwrap(), "va");
        assert_eq!(console.read_line().unwrap(), "vt+3");
        assert_eq!(console.read_line().unwrap(), "q");
        assert!(matches!(console.read_line(), Err(ReminderError::InputClosed(None))));

        assert_eq!(String::from_utf8(output).unwrap(), "\n> ");
    }

    #[test]
    fn test_unreadable_line_keeps_cause() {
        let input = b"caf\xe9\n";
        let mut console = Console::new(input.as_slice(), Vec::new());
        let err = console.read_line().unwrap_err();

        assert!(matches!(err, ReminderError::InputClosed(Some(_))));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        let input = b"a  two spaces @1-1-2030 \n";
        let mut console = Console::new(input.as_slice(), Vec::new());
        assert_eq!(console.read_line().unwrap(), "a  two spaces @1-1-2030 ");
    }
}
