//! HTTP access layer: typed client, response envelope handling, tag-based
//! response cache and the endpoint surface grouped by resource.

pub mod cache;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod types;

pub use cache::{QueryCache, ResourceTag};
pub use client::{ApiClient, Navigator, NullNavigator};
pub use endpoints::export::ExportResource;
pub use envelope::{Pagination, Payload, unwrap_envelope};
pub use error::{ApiError, Result};
