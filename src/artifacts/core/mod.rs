//! Core utilities and shared types

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it for commands that write long output, such as `log`.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination of a command's output
///
/// Paged output is buffered in the pager and shown by [`Output::finish`].
pub enum Output {
    Stdout,
    Paged(Pager),
}

impl Output {
    /// Page only when asked to and stdout is an interactive terminal
    pub fn select(wants_pager: bool, no_pager: bool) -> Self {
        if wants_pager && !no_pager && io::stdout().is_terminal() {
            Output::Paged(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Stdout => io::stdout().flush()?,
            Output::Paged(pager) => minus::page_all(pager)?,
        }

        Ok(())
    }
}
