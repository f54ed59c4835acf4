//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store and the
//! server. Request handling never reads process-wide environment variables, which keeps lookups
//! consistent across threads and lets tests point the store at a temporary directory.

use crate::constants::DEFAULT_CONTENT_DIR;
use crate::{ContentError, ContentResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    content_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns [`ContentError::InvalidConfig`] if `content_dir` is empty.
    pub fn new(content_dir: PathBuf) -> ContentResult<Self> {
        if content_dir.as_os_str().is_empty() {
            return Err(ContentError::InvalidConfig(
                "content_dir cannot be empty".into(),
            ));
        }

        Ok(Self { content_dir })
    }

    /// Directory holding one `{slug}.json` document per page.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}

/// Resolve the content directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_CONTENT_DIR`].
pub fn content_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_dir() {
        let result = CoreConfig::new(PathBuf::new());
        assert!(matches!(result, Err(ContentError::InvalidConfig(_))));
    }

    #[test]
    fn test_new_keeps_dir() {
        let cfg = CoreConfig::new(PathBuf::from("/srv/content")).unwrap();
        assert_eq!(cfg.content_dir(), Path::new("/srv/content"));
    }

    #[test]
    fn test_content_dir_from_env_value_defaults() {
        assert_eq!(
            content_dir_from_env_value(None),
            PathBuf::from(DEFAULT_CONTENT_DIR)
        );
        assert_eq!(
            content_dir_from_env_value(Some("   ".into())),
            PathBuf::from(DEFAULT_CONTENT_DIR)
        );
    }

    #[test]
    fn test_content_dir_from_env_value_trims() {
        assert_eq!(
            content_dir_from_env_value(Some(" /data/pages ".into())),
            PathBuf::from("/data/pages")
        );
    }
}
