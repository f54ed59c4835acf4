//! Page content types.
//!
//! Stored documents are schema-less JSON. The only shape this crate relies on is an optional,
//! ordered `sections` array whose entries name a presentation `component` and carry arbitrary
//! `props`. Validation of `props` per component belongs to the presentation layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One renderable block of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Identifier of the section within its page.
    pub section_id: String,

    /// Presentation variant used to render this section.
    pub component: String,

    /// Component-specific data. Any JSON value; `null` when the document omits it.
    #[serde(default)]
    pub props: Value,
}

/// The section-bearing view of a page document.
///
/// Every other top-level field of the document is ignored here.
#[derive(Debug, Default)]
pub struct PageBody {
    pub sections: Vec<Section>,
}

impl PageBody {
    /// Parses the sections out of a JSON document body.
    ///
    /// The document and every section must be JSON objects; serde's positional reading of
    /// arrays into structs is not accepted. A missing `sections` field yields an empty list. A
    /// `sections` field of the wrong shape is an error.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let mut document: Map<String, Value> = serde_json::from_slice(body)?;
        let sections = match document.remove("sections") {
            None => Vec::new(),
            Some(value) => {
                let entries: Vec<Map<String, Value>> = serde_json::from_value(value)?;
                entries
                    .into_iter()
                    .map(|entry| serde_json::from_value(Value::Object(entry)))
                    .collect::<serde_json::Result<_>>()?
            }
        };
        Ok(Self { sections })
    }
}

/// A page document exactly as read from the content store.
///
/// The raw text is kept so the document can be served back byte for byte; the parsed value is
/// kept so callers can inspect it without reparsing.
#[derive(Debug, Clone)]
pub struct PageContentDocument {
    raw: String,
    value: Value,
}

impl PageContentDocument {
    /// Parses `raw` as JSON and wraps both forms.
    pub fn from_raw(raw: String) -> serde_json::Result<Self> {
        let value = serde_json::from_str(&raw)?;
        Ok(Self { raw, value })
    }

    /// The document text as stored.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Consumes the document, returning the stored text.
    pub fn into_raw(self) -> String {
        self.raw
    }

    /// The parsed document.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Parses the document's sections. See [`PageBody::from_slice`].
    pub fn sections(&self) -> serde_json::Result<Vec<Section>> {
        PageBody::from_slice(self.raw.as_bytes()).map(|body| body.sections)
    }
}

/// Where a [`ResolvedContent`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Served by the page content API.
    Master,
    /// The API could not serve the page; the caller renders its own legacy path.
    Legacy,
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Master => f.write_str("master"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

/// The outcome of resolving one page.
///
/// `source` is [`ContentSource::Master`] only when the API answered with a success status and a
/// parseable body. A legacy result never carries sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContent {
    pub slug: String,
    pub sections: Vec<Section>,
    pub source: ContentSource,
}

impl ResolvedContent {
    /// Master content with the given sections.
    pub fn master(slug: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            slug: slug.into(),
            sections,
            source: ContentSource::Master,
        }
    }

    /// The legacy signal: no sections, caller falls back to its own rendering.
    pub fn legacy(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            sections: Vec::new(),
            source: ContentSource::Legacy,
        }
    }

    pub fn is_master(&self) -> bool {
        self.source == ContentSource::Master
    }
}
