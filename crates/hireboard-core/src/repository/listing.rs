//! Listing service trait definition.

use hireboard_types::error::ListingError;
use hireboard_types::filter::FilterSpec;
use hireboard_types::provider::ServiceProvider;

/// The external directory the orchestrator queries.
///
/// Implementations must honour every predicate of the filter: substring
/// match on name, membership on skills, exclusion on availability and the
/// hourly-rate range. Results come back in the service's own order.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ListingService: Send + Sync {
    fn query_listings(
        &self,
        filter: &FilterSpec,
    ) -> impl std::future::Future<Output = Result<Vec<ServiceProvider>, ListingError>> + Send;
}
