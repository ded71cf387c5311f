/// Best-effort clipboard access. The session treats the clipboard as an
/// optional capability: writes may fail and callers ignore the failure.
use std::io::{self, Write};

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard over the OSC 52 escape sequence, which most terminal
/// emulators forward to the system clipboard.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let payload = STANDARD.encode(text);
        write!(self.writer, "\x1b]52;c;{payload}\x1b\\")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_the_osc52_sequence() {
        let mut buffer = Vec::new();
        Osc52Clipboard::new(&mut buffer)
            .write_text("#aabbcc, #112233")
            .unwrap();
        let expected = format!("\x1b]52;c;{}\x1b\\", STANDARD.encode("#aabbcc, #112233"));
        assert_eq!(buffer, expected.as_bytes());
    }
}
