//! Lookup service port and its adapters.
//!
//! Modules:
//! - `http`: lookup over HTTP via [`relist_api::RelistClient`]
//! - `fixed`: in-memory lookup returning a preset outcome

mod fixed;
mod http;

pub use fixed::StaticLookup;
pub use http::{DEFAULT_LOOKUP_PATH, HttpRecordLookup, rejection_from_response};

use relist_types::{LookupRejection, LookupRequest, RawRecord};

/// Retrieves the records related to a parent record.
///
/// Implementations resolve with at most `request.limit_size` records, each
/// carrying a unique `Id`, or reject with a [`LookupRejection`].
#[async_trait::async_trait]
pub trait RecordLookup: Send + Sync {
    async fn fetch_related(&self, request: &LookupRequest) -> Result<Vec<RawRecord>, LookupRejection>;
}
