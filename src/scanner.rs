/*!
 * Directory scanning for header files
 */

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{Config, HEADER_EXTENSION};
use crate::error::Result;
use crate::types::HeaderFile;

/// Scanner collecting header files under the configured root
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Walk the root recursively and return every header found, in
    /// traversal order.
    ///
    /// Within a directory, files are listed before subdirectories are
    /// descended into; otherwise the directory listing order is kept.
    /// A root that does not exist or is not a directory yields no headers.
    pub fn scan(&self) -> Result<Vec<HeaderFile>> {
        let root = &self.config.root;
        if !root.is_dir() {
            warn!(root = %root.display(), "scan root is not a directory, no headers found");
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        let mut headers = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !is_header(&entry) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let header = HeaderFile::new(name, entry.path());
            debug!(path = %header.path.display(), "found header");
            headers.push(header);
        }

        info!(
            root = %root.display(),
            count = headers.len(),
            "scan complete"
        );
        Ok(headers)
    }
}

/// Whether a walk entry is a non-directory whose name ends with `.h`
fn is_header(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    // Symlinked directories are skipped, dangling links still count
    if entry.path_is_symlink() && entry.path().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_string_lossy()
        .ends_with(HEADER_EXTENSION)
}
