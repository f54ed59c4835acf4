//! Idempotency keys for state-changing requests.
//!
//! Each logical submission gets its own key, generated client-side and sent in the
//! `Idempotency-Key` header. A receiver that sees the same key twice knows the second delivery is
//! a transport retry of the first, not a new submission.
//!
//! ## Key form
//! - A random (version 4) UUID from the operating system's CSPRNG
//! - Rendered hyphenated and lowercase, e.g. `550e8400-e29b-41d4-a716-446655440000`
//!
//! Keys are never persisted, logged or reused. Collisions between concurrently generated keys
//! are negligible (122 random bits per key).

use std::fmt;
use uuid::Uuid;

/// A single-use idempotency token.
///
/// # Construction
/// - [`IdempotencyKey::new`] generates a fresh key for a new submission.
/// - [`IdempotencyKey::parse`] validates a key received in a header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(Uuid);

impl Default for IdempotencyKey {
    fn default() -> Self {
        Self::new()
    }
}

impl IdempotencyKey {
    /// Generates a new random key.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a received header value.
    ///
    /// Returns `None` unless `input` is a version 4 UUID.
    pub fn parse(input: &str) -> Option<Self> {
        let uuid = Uuid::parse_str(input.trim()).ok()?;
        (uuid.get_version_num() == 4).then_some(Self(uuid))
    }

    /// Returns the underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
