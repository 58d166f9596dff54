//! Page-path index for docnav.
//!
//! This crate answers one question for the config validator: does a page
//! exist at a given route? It provides:
//!
//! - [`PageIndex`] trait used by link checks
//! - [`PageSet`] in-memory implementation
//! - [`SourcePages`] scanner that builds a [`PageSet`] from a markdown source tree
//! - [`normalize_route`] shared route normalisation
//!
//! # Route Convention
//!
//! Routes are root-relative clean URLs:
//! - `"/"` - site root (`index.md`)
//! - `"/guide/getting-started"` - standalone page (`guide/getting-started.md`)
//! - `"/guide/"` - directory landing page (`guide/index.md`)
//!
//! # Example
//!
//! ```
//! use docnav_pages::{PageIndex, PageSet};
//!
//! let pages: PageSet = ["/guide/getting-started", "/ops/deployment.md"]
//!     .into_iter()
//!     .collect();
//!
//! assert!(pages.contains("/guide/getting-started"));
//! assert!(pages.contains("/ops/deployment.html"));
//! assert!(pages.has_pages_under("/ops/"));
//! ```

mod index;
mod route;
mod scanner;

pub use index::{PageIndex, PageSet};
pub use route::normalize_route;
pub use scanner::{PagesError, SourcePages};
