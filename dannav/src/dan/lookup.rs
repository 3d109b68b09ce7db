//! Exact-coordinate lookup collaborator.
//!
//! Grid encoding is lossy, so the only way to recover an exact position for a
//! DAN is to ask whoever recorded it. The codec consults an optional
//! [`CoordinateLookup`] before falling back to the approximate inverse.

use thiserror::Error;

use super::number::Dan;
use crate::coord::Coordinate;

/// Failure of the lookup backend itself. A missing record is `Ok(None)`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup backend unavailable: {0}")]
    Unavailable(String),

    #[error("Lookup failed: {0}")]
    Backend(String),
}

/// A source of authoritative coordinates for previously recorded DANs.
pub trait CoordinateLookup: Send + Sync {
    /// Returns the recorded coordinate, `Ok(None)` if this DAN is unknown.
    fn lookup(&self, dan: &Dan) -> Result<Option<Coordinate>, LookupError>;
}

impl<T: CoordinateLookup + ?Sized> CoordinateLookup for std::sync::Arc<T> {
    fn lookup(&self, dan: &Dan) -> Result<Option<Coordinate>, LookupError> {
        (**self).lookup(dan)
    }
}
