/*!
 * Aggregator header writer
 */

use std::io::Write;

use crate::error::Result;
use crate::types::HeaderFile;

/// Guard line opening every generated header
pub const PRAGMA_ONCE: &str = "#pragma once";

/// Writes the aggregator header to any output stream
pub struct HeaderWriter<W: Write> {
    out: W,
}

impl<W: Write> HeaderWriter<W> {
    /// Create a new header writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the guard, a blank line, one include per header and a
    /// trailing blank line
    pub fn write(&mut self, prefix: &str, headers: &[HeaderFile]) -> Result<()> {
        writeln!(self.out, "{}", PRAGMA_ONCE)?;
        writeln!(self.out)?;

        for header in headers {
            writeln!(self.out, "#include <{}>", header.include_path(prefix))?;
        }

        writeln!(self.out)?;
        self.out.flush()?;

        Ok(())
    }

    /// Consume the writer and return the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }
}
