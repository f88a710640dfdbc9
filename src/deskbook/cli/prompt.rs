use deskbook::error::Result;
use std::io::{BufRead, Write};

/// Answer to [`Terminal::ask_or_keep`] that empties the field.
pub const CLEAR: &str = "-";

/// Line-oriented terminal: reads answers from `input`, writes to `output`.
///
/// Generic so sessions can be driven from memory in tests. `None` from any
/// reading method means the input is exhausted.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next line without its line terminator. Bytes that are not valid UTF-8
    /// become U+FFFD.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Writes `label` without a newline, then reads the answer.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Like [`Terminal::ask`], showing `current` and keeping it on an empty
    /// answer. Answering [`CLEAR`] yields an empty value.
    pub fn ask_or_keep(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let answer = self.ask(&format!("{} [{}]: ", label, current))?;
        Ok(answer.map(|a| match a.as_str() {
            "" => current.to_string(),
            CLEAR => String::new(),
            _ => a,
        }))
    }

    /// Yes/no question; anything but `y`/`yes` (any case) is a no.
    pub fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        let answer = self.ask(&format!("{} [y/N] ", question))?;
        Ok(answer.map(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")))
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
