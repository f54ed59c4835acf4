//! Constants used throughout the site core crate.
//!
//! Path and filename constants live here so the store, the server and the CLI agree on the
//! on-disk layout.

/// Default directory for page documents when no explicit directory is configured.
pub const DEFAULT_CONTENT_DIR: &str = "content/pages";

/// File extension of a stored page document.
pub const PAGE_FILE_EXTENSION: &str = "json";

/// Maximum slug length in bytes. Keeps `{slug}.json` within common filename limits.
pub const MAX_SLUG_LEN: usize = 250;
