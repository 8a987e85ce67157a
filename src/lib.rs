/*!
 * dir2h - Generate an aggregator header for a directory of headers
 *
 * This library walks a directory, collects every `.h` file and writes a
 * header that includes each of them by bare name under a prefix.
 */

use std::io::Write;

pub mod config;
pub mod error;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{Dir2hError, Result};
pub use scanner::Scanner;
pub use types::HeaderFile;
pub use writer::HeaderWriter;

/// Scan `config.root` and write the aggregator header to `out`.
///
/// Returns the number of include lines written.
pub fn generate<W: Write>(config: &Config, out: W) -> Result<usize> {
    let headers = Scanner::new(config.clone()).scan()?;
    HeaderWriter::new(out).write(&config.prefix, &headers)?;
    Ok(headers.len())
}
