//! # Site Client
//!
//! Client side of the site content API.
//!
//! - [`ContentClient`] resolves a page slug to its sections, preferring master content from the
//!   API and degrading to a legacy signal on any failure. It never returns an error.
//! - [`MutationClient`] performs state-changing form submissions, each carrying a fresh
//!   [`IdempotencyKey`] so a receiver can deduplicate transport-level retries. It surfaces every
//!   failure to the caller.
//!
//! Both clients are cheap to clone and share one connection pool per instance.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod idempotency;
pub mod mutation;
pub mod resolve;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, MutationError, MutationResult};
pub use idempotency::IdempotencyKey;
pub use mutation::MutationClient;
pub use resolve::ContentClient;
pub use site_core::{ContentSource, ResolvedContent, Section};
