//! Page slugs.
//!
//! A slug is the opaque identifier naming one page's content. It is supplied by callers (query
//! parameters, CLI arguments) and used as the key into the content store, where it maps to
//! `{slug}.json` directly under the content root.
//!
//! The store treats slugs as opaque, but a slug must still name exactly one file inside the
//! content root. [`PageSlug::parse`] therefore rejects anything that could escape the root or
//! address a hidden file.

use crate::constants::MAX_SLUG_LEN;
use crate::{ContentError, ContentResult};

/// A validated page identifier.
///
/// The slug is kept exactly as supplied; no normalisation is applied. Once constructed, it is safe
/// to join onto the content root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSlug(String);

impl PageSlug {
    /// Validates and wraps a caller-supplied slug.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MissingSlug`] if the input is empty or whitespace only.
    ///
    /// Returns [`ContentError::InvalidSlug`] if the input:
    /// - exceeds [`MAX_SLUG_LEN`] bytes,
    /// - contains a path separator (`/` or `\`) or a NUL byte,
    /// - contains `..` or starts with `.`.
    pub fn parse(input: impl AsRef<str>) -> ContentResult<Self> {
        let slug = input.as_ref();
        if slug.trim().is_empty() {
            return Err(ContentError::MissingSlug);
        }

        if slug.len() > MAX_SLUG_LEN {
            return Err(ContentError::InvalidSlug(format!(
                "slug exceeds maximum length of {} bytes",
                MAX_SLUG_LEN
            )));
        }

        if slug.contains(['/', '\\', '\0']) {
            return Err(ContentError::InvalidSlug(format!(
                "slug must not contain path separators: '{}'",
                slug
            )));
        }

        if slug.starts_with('.') || slug.contains("..") {
            return Err(ContentError::InvalidSlug(format!(
                "slug must not start with '.' or contain '..': '{}'",
                slug
            )));
        }

        Ok(Self(slug.to_owned()))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename of this slug's document inside the content root.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, crate::constants::PAGE_FILE_EXTENSION)
    }
}

impl std::fmt::Display for PageSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PageSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PageSlug {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for PageSlug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PageSlug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PageSlug::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_slugs() {
        for input in ["home", "missing-page", "about_us", "pricing.v2", "Über"] {
            let slug = PageSlug::parse(input).unwrap();
            assert_eq!(slug.as_str(), input);
        }
    }

    #[test]
    fn test_parse_keeps_surrounding_whitespace() {
        let slug = PageSlug::parse(" home").unwrap();
        assert_eq!(slug.as_str(), " home");
        assert_eq!(slug.file_name(), " home.json");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(PageSlug::parse(""), Err(ContentError::MissingSlug)));
        assert!(matches!(
            PageSlug::parse("   "),
            Err(ContentError::MissingSlug)
        ));
    }

    #[test]
    fn test_parse_rejects_traversal() {
        for input in [
            "../etc/passwd",
            "..",
            "a..b",
            ".hidden",
            "nested/page",
            "nested\\page",
            "nul\0byte",
        ] {
            assert!(
                matches!(PageSlug::parse(input), Err(ContentError::InvalidSlug(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_overlong() {
        let input = "a".repeat(MAX_SLUG_LEN + 1);
        assert!(matches!(
            PageSlug::parse(&input),
            Err(ContentError::InvalidSlug(_))
        ));
        assert!(PageSlug::parse("a".repeat(MAX_SLUG_LEN)).is_ok());
    }

    #[test]
    fn test_file_name() {
        let slug = PageSlug::parse("home").unwrap();
        assert_eq!(slug.file_name(), "home.json");
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let slug: PageSlug = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"home\"");
        assert!(serde_json::from_str::<PageSlug>("\"../x\"").is_err());
    }
}
