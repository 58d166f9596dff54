//! Page discovery by filesystem walking.
//!
//! Walks a markdown source tree and maps each `.md` file to the route the
//! site generator will publish it under. Only file locations are read; page
//! content is never opened.

use std::fs;
use std::path::{Path, PathBuf};

use crate::index::PageSet;

/// Directories that never contain routable pages.
const SKIPPED_DIRS: [&str; 2] = ["node_modules", "public"];

/// Error returned when the source tree cannot be scanned.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    /// Source directory does not exist.
    #[error("Pages directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Source path exists but is not a directory.
    #[error("Pages path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error reading the source directory.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Directory being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Builds a [`PageSet`] from a markdown source directory.
///
/// Routes follow the clean-URL convention:
/// - `index.md` -> `/`
/// - `guide/getting-started.md` -> `/guide/getting-started`
/// - `guide/index.md` -> `/guide/`
///
/// Hidden entries (leading `.`) and asset directories (`public`,
/// `node_modules`) are skipped.
#[derive(Debug, Clone)]
pub struct SourcePages {
    source_dir: PathBuf,
}

impl SourcePages {
    /// Create a scanner rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Scan the source tree and collect page routes.
    ///
    /// Unreadable subdirectories are logged and skipped; only a missing or
    /// unreadable root is an error.
    pub fn scan(&self) -> Result<PageSet, PagesError> {
        if !self.source_dir.exists() {
            return Err(PagesError::NotFound(self.source_dir.clone()));
        }
        if !self.source_dir.is_dir() {
            return Err(PagesError::NotADirectory(self.source_dir.clone()));
        }

        let entries = fs::read_dir(&self.source_dir).map_err(|source| PagesError::Io {
            path: self.source_dir.clone(),
            source,
        })?;

        let mut pages = PageSet::new();
        Self::scan_entries(entries, "", &mut pages);

        tracing::debug!(
            source_dir = %self.source_dir.display(),
            page_count = pages.len(),
            "Page scan completed"
        );
        Ok(pages)
    }

    fn scan_directory(dir_path: &Path, url_prefix: &str, pages: &mut PageSet) {
        match fs::read_dir(dir_path) {
            Ok(entries) => Self::scan_entries(entries, url_prefix, pages),
            Err(e) => {
                tracing::warn!(path = %dir_path.display(), error = %e, "Failed to read directory");
            }
        }
    }

    fn scan_entries(entries: fs::ReadDir, url_prefix: &str, pages: &mut PageSet) {
        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                if SKIPPED_DIRS.contains(&name.as_str()) {
                    continue;
                }
                let child_prefix = if url_prefix.is_empty() {
                    name
                } else {
                    format!("{url_prefix}/{name}")
                };
                Self::scan_directory(&path, &child_prefix, pages);
            } else if path.extension().is_some_and(|e| e == "md") {
                pages.insert(&file_path_to_route(Path::new(&name), url_prefix));
            }
        }
    }
}

/// Convert a markdown file name to its route under `base`.
///
/// Examples:
/// - `index.md`, base `""` -> `"/"`
/// - `guide.md`, base `""` -> `"/guide"`
/// - `index.md`, base `"guide"` -> `"/guide/"`
/// - `setup.md`, base `"guide"` -> `"/guide/setup"`
pub(crate) fn file_path_to_route(rel_path: &Path, base: &str) -> String {
    let path_str = rel_path.to_string_lossy();
    let stem = path_str.strip_suffix(".md").unwrap_or(&path_str);

    match (base.is_empty(), stem == "index") {
        (true, true) => "/".to_owned(),
        (true, false) => format!("/{stem}"),
        (false, true) => format!("/{base}/"),
        (false, false) => format!("/{base}/{stem}"),
    }
}
