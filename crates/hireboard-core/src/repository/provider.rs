//! Provider repository trait definition.

use hireboard_types::error::RepositoryError;
use hireboard_types::provider::{ProviderId, ServiceProvider};

/// Repository trait for maintaining the provider listings.
///
/// Implementations live in hireboard-infra (e.g., SqliteProviderRepository).
pub trait ProviderRepository: Send + Sync {
    /// Insert a provider, replacing any existing one with the same id.
    fn upsert(
        &self,
        provider: &ServiceProvider,
    ) -> impl std::future::Future<Output = Result<ServiceProvider, RepositoryError>> + Send;

    /// Get a provider by id regardless of availability.
    fn get_by_id(
        &self,
        id: &ProviderId,
    ) -> impl std::future::Future<Output = Result<Option<ServiceProvider>, RepositoryError>> + Send;

    /// Every stored provider, including busy and offline ones.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ServiceProvider>, RepositoryError>> + Send;

    /// Permanently delete a provider by id.
    fn delete(
        &self,
        id: &ProviderId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
