//! # Site Core
//!
//! Core content logic for the site content API.
//!
//! This crate contains the data model and the file-backed content store:
//! - Page slugs and their validation
//! - Page documents, sections and resolved content
//! - Read-only JSON document lookup under `SITE_CONTENT_DIR`
//!
//! **No API concerns**: HTTP routing, response mapping and clients belong in `api-rest`,
//! `api-shared` or `site-client`.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod slug;
pub mod store;

pub use config::CoreConfig;
pub use constants::DEFAULT_CONTENT_DIR;
pub use content::{ContentSource, PageBody, PageContentDocument, ResolvedContent, Section};
pub use error::{ContentError, ContentResult};
pub use slug::PageSlug;
pub use store::ContentStore;
