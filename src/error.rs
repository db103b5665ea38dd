//! Error types for the entity-cache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache is constructed with an invalid
//!   capacity (zero or negative).
//! - [`InvariantError`]: Returned by `check_invariants` diagnostics when the
//!   key index and the recency list disagree.
//!
//! Absence of a key is never an error: lookups and removals return
//! `Option::None`.
//!
//! ## Example Usage
//!
//! ```
//! use entity_cache::error::ConfigError;
//! use entity_cache::BoundedLruCache;
//!
//! let cache: Result<BoundedLruCache<u64, String>, ConfigError> = BoundedLruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = BoundedLruCache::<u64, String>::try_new(-1);
//! assert_eq!(bad.unwrap_err(), ConfigError::InvalidCapacity);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache construction parameters are invalid.
///
/// The capacity is the only construction parameter, so there is a single
/// variant. Construction is deterministic: retrying with the same input
/// fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Capacity was zero, negative, or not representable as `usize`.
    InvalidCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity => f.write_str("capacity must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of the broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache invariant violated: {}", self.0)
    }
}

impl std::error::Error for InvariantError {}
