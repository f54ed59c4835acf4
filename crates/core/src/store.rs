//! File-backed content store.
//!
//! Page documents are authored out-of-band and stored flat under the configured content root:
//!
//! ```text
//! <content_dir>/
//! ├── home.json
//! ├── pricing.json
//! └── about-us.json
//! ```
//!
//! The store is read-only and does no caching. Every read goes to disk, so edits to a document
//! are visible on the next request.

use crate::constants::PAGE_FILE_EXTENSION;
use crate::{ContentError, ContentResult, CoreConfig, PageContentDocument, PageSlug};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read-only lookup of page documents by slug.
#[derive(Clone, Debug)]
pub struct ContentStore {
    cfg: Arc<CoreConfig>,
}

impl ContentStore {
    /// Creates a store over `cfg.content_dir()`. Performs no I/O.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// The content root documents are read from.
    pub fn root(&self) -> &Path {
        self.cfg.content_dir()
    }

    /// Path of the document for `slug`. The file may not exist.
    pub fn document_path(&self, slug: &PageSlug) -> PathBuf {
        self.root().join(slug.file_name())
    }

    /// Reads and parses the document for `slug`.
    ///
    /// # Errors
    ///
    /// - [`ContentError::NotFound`] if no document exists for the slug (the path is absent or is
    ///   not a regular file).
    /// - [`ContentError::Read`] if the file exists but cannot be read.
    /// - [`ContentError::Malformed`] if the file is not valid JSON.
    pub fn read(&self, slug: &PageSlug) -> ContentResult<PageContentDocument> {
        let path = self.document_path(slug);

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::NotFound(slug.to_string()));
            }
            Err(source) => return Err(ContentError::Read { path, source }),
        };
        if !metadata.is_file() {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            // Removed between the metadata check and the read.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::NotFound(slug.to_string()));
            }
            Err(source) => return Err(ContentError::Read { path, source }),
        };

        PageContentDocument::from_raw(raw).map_err(|source| ContentError::Malformed { path, source })
    }

    /// Lists the slugs of all documents under the content root, sorted.
    ///
    /// Files whose stem is not a valid slug are skipped with a warning. A missing content root
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Read`] if the content root exists but cannot be listed.
    pub fn list_slugs(&self) -> ContentResult<Vec<PageSlug>> {
        let root = self.root();
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ContentError::Read {
                    path: root.to_path_buf(),
                    source,
                })
            }
        };

        let mut slugs = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(PAGE_FILE_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match PageSlug::parse(stem) {
                // A stem with surrounding whitespace would not map back to this file.
                Ok(slug) if slug.as_str() == stem => slugs.push(slug),
                _ => tracing::warn!("skipping content file with invalid slug: {}", path.display()),
            }
        }

        slugs.sort();
        Ok(slugs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &Path) -> ContentStore {
        ContentStore::new(Arc::new(CoreConfig::new(dir.to_path_buf()).unwrap()))
    }

    fn slug(s: &str) -> PageSlug {
        PageSlug::parse(s).unwrap()
    }

    #[test]
    fn test_read_returns_document_unmodified() {
        let temp = TempDir::new().unwrap();
        let raw = r#"{"sections":[{"sectionId":"hero","component":"Hero","props":{}}]}"#;
        fs::write(temp.path().join("home.json"), raw).unwrap();

        let doc = store_in(temp.path()).read(&slug("home")).unwrap();

        assert_eq!(doc.raw(), raw);
        assert_eq!(doc.value()["sections"][0]["sectionId"], json!("hero"));
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp = TempDir::new().unwrap();

        let result = store_in(temp.path()).read(&slug("missing-page"));

        assert!(matches!(result, Err(ContentError::NotFound(ref s)) if s == "missing-page"));
    }

    #[test]
    fn test_read_missing_root_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp.path().join("does-not-exist"));

        assert!(matches!(
            store.read(&slug("home")),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("home.json")).unwrap();

        assert!(matches!(
            store_in(temp.path()).read(&slug("home")),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_read_invalid_json_is_read_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.json"), "{ not json").unwrap();

        let err = store_in(temp.path()).read(&slug("broken")).unwrap_err();

        assert!(matches!(err, ContentError::Malformed { .. }));
        assert!(err.is_read_error());
    }

    #[test]
    fn test_read_invalid_utf8_is_read_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("binary.json"), [0xff, 0xfe, 0x00]).unwrap();

        let err = store_in(temp.path()).read(&slug("binary")).unwrap_err();

        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.is_read_error());
    }

    #[test]
    fn test_read_accepts_documents_without_sections() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("plain.json"), r#"{"title":"Plain"}"#).unwrap();

        let doc = store_in(temp.path()).read(&slug("plain")).unwrap();

        assert!(doc.sections().unwrap().is_empty());
    }

    #[test]
    fn test_list_slugs_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pricing.json"), "{}").unwrap();
        fs::write(temp.path().join("home.json"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(temp.path().join(".hidden.json"), "{}").unwrap();
        fs::create_dir(temp.path().join("nested.json")).unwrap();

        let slugs = store_in(temp.path()).list_slugs().unwrap();

        assert_eq!(slugs, vec![slug("home"), slug("pricing")]);
    }

    #[test]
    fn test_list_slugs_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp.path().join("nope"));

        assert!(store.list_slugs().unwrap().is_empty());
    }
}
