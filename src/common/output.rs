//! Output sinks and the formatting strategy used by every report.
//!
//! The colour decision is made once by the caller and injected as an
//! [`OutputStyle`]; nothing in the crate toggles colour globally.

use crate::domain::value_objects::change_kind::ChangeKind;
use std::io::{self, Write};

/// Semantic role of a piece of output text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Repository,
    Revision,
    Branch,
    Date,
    Author,
    Highlight,
    Change(ChangeKind),
    Warning,
    Failure,
}

/// Strategy turning toned text into its final representation
pub trait OutputStyle: Send + Sync {
    fn paint(&self, text: &str, tone: Tone) -> String;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl OutputStyle for PlainStyle {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// Standard output and diagnostic output, each with its own style.
///
/// The diagnostic stream is plain unless [`Console::with_err_style`] says
/// otherwise.
pub struct Console {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    style: Box<dyn OutputStyle>,
    err_style: Box<dyn OutputStyle>,
    partial_line: bool,
}

impl Console {
    pub fn new(
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
        style: Box<dyn OutputStyle>,
    ) -> Self {
        Self {
            out,
            err,
            style,
            err_style: Box::new(PlainStyle),
            partial_line: false,
        }
    }

    pub fn with_err_style(mut self, style: Box<dyn OutputStyle>) -> Self {
        self.err_style = style;
        self
    }

    /// Console bound to the process stdout/stderr
    pub fn stdio(style: Box<dyn OutputStyle>) -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()), style)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        self.style.paint(text, tone)
    }

    /// Paints text meant for [`Console::warn`]
    pub fn paint_err(&self, text: &str, tone: Tone) -> String {
        self.err_style.paint(text, tone)
    }

    /// Writes without a trailing newline and flushes, for progress prefixes
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.partial_line = !text.is_empty() && !text.ends_with('\n');
        self.out.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.partial_line = false;
        writeln!(self.out, "{}", text)
    }

    /// Terminates a progress prefix left open by [`Console::write`]
    pub fn finish_line(&mut self) -> io::Result<()> {
        if self.partial_line {
            self.line("")?;
        }
        Ok(())
    }

    /// Writes a line on the diagnostic stream
    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.err, "{}", text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
