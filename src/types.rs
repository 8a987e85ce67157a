/*!
 * Core types for dir2h
 */

use std::path::PathBuf;

/// A header file found while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    /// Bare file name, the only part used in the generated include
    pub name: String,
    /// Full path where the file was found
    pub path: PathBuf,
}

impl HeaderFile {
    /// Create a header entry from its bare name and location
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Include path for this header under `prefix`.
    ///
    /// Joined with `/` regardless of platform. An empty prefix yields the
    /// bare name and a trailing `/` on the prefix is not doubled.
    pub fn include_path(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.name.clone()
        } else if prefix.ends_with('/') {
            format!("{}{}", prefix, self.name)
        } else {
            format!("{}/{}", prefix, self.name)
        }
    }
}
