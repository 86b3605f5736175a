//! Screen services
//!
//! One service per console screen. Each resolves a strategy from the
//! session's role and dispatches only the active role family; the inactive
//! family is skipped entirely (no request, no error, no cache entry) rather
//! than fired and ignored. Results come back in a single shape so the
//! rendering layer stays role-agnostic.

pub mod dashboard;
pub mod licenses;
pub mod profile;
pub mod resellers;
pub mod salons;

use crate::api::error::ApiError;

/// Outcome of one screen query.
#[derive(Debug)]
pub enum ScreenQuery<T> {
    /// The active role family answered.
    Ready(T),
    /// This data does not exist for the session's role. Neutral, not an
    /// error.
    Skipped,
    /// The active family was dispatched and failed.
    Failed(ApiError),
}

impl<T> ScreenQuery<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ScreenQuery::Skipped)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ScreenQuery::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ScreenQuery::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<crate::api::error::Result<T>> for ScreenQuery<T> {
    fn from(result: crate::api::error::Result<T>) -> Self {
        match result {
            Ok(data) => ScreenQuery::Ready(data),
            Err(err) => ScreenQuery::Failed(err),
        }
    }
}
