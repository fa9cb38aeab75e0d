//! Provider listing management.
//!
//! Validates and normalizes provider records before they reach the
//! repository: trimmed names, finite non-negative rates, de-duplicated
//! skills.

use hireboard_types::error::RepositoryError;
use hireboard_types::provider::{
    AvailabilityStatus, CreateProviderRequest, ProviderId, ServiceProvider, validate_hourly_rate,
};

use crate::repository::provider::ProviderRepository;

/// Result of a bulk import. Rejected entries do not abort the import.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<ServiceProvider>,
    /// `(name, reason)` for each entry that failed validation or storage.
    pub rejected: Vec<(String, String)>,
}

/// Availability counts across every stored provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilitySummary {
    pub available: usize,
    pub busy: usize,
    pub offline: usize,
}

impl AvailabilitySummary {
    pub fn total(&self) -> usize {
        self.available + self.busy + self.offline
    }
}

pub struct ProviderService<R: ProviderRepository> {
    repo: R,
}

impl<R: ProviderRepository> ProviderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate a request and store the resulting provider.
    pub async fn add_provider(
        &self,
        request: CreateProviderRequest,
    ) -> Result<ServiceProvider, RepositoryError> {
        let provider = normalize(request)?;
        let stored = self.repo.upsert(&provider).await?;
        tracing::info!(id = %stored.id, name = %stored.name, "provider listed");
        Ok(stored)
    }

    /// Import many providers, collecting per-entry failures.
    pub async fn import_providers(&self, requests: Vec<CreateProviderRequest>) -> ImportReport {
        let mut report = ImportReport::default();

        for request in requests {
            let name = request.name.clone();
            match self.add_provider(request).await {
                Ok(provider) => report.imported.push(provider),
                Err(e) => {
                    tracing::warn!(name = %name, error = %e, "provider rejected during import");
                    report.rejected.push((name, e.to_string()));
                }
            }
        }

        report
    }

    pub async fn remove_provider(&self, id: &ProviderId) -> Result<(), RepositoryError> {
        self.repo.delete(id).await?;
        tracing::info!(id = %id, "provider removed");
        Ok(())
    }

    pub async fn get_provider(&self, id: &ProviderId) -> Result<ServiceProvider, RepositoryError> {
        self.repo.get_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    pub async fn summary(&self) -> Result<AvailabilitySummary, RepositoryError> {
        let all = self.repo.list_all().await?;
        let mut summary = AvailabilitySummary::default();
        for provider in &all {
            match provider.availability {
                AvailabilityStatus::Available => summary.available += 1,
                AvailabilityStatus::Busy => summary.busy += 1,
                AvailabilityStatus::Offline => summary.offline += 1,
            }
        }
        Ok(summary)
    }
}

/// Turn a raw request into a valid provider record.
fn normalize(request: CreateProviderRequest) -> Result<ServiceProvider, RepositoryError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(RepositoryError::Invalid("name cannot be empty".to_string()));
    }

    let hourly_rate = validate_hourly_rate(request.hourly_rate).map_err(RepositoryError::Invalid)?;

    let mut skills: Vec<String> = Vec::with_capacity(request.skills.len());
    for skill in request.skills {
        let skill = skill.trim();
        if !skill.is_empty() && !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            skills.push(skill.to_string());
        }
    }

    let id = match request.id.map(|id| id.trim().to_string()) {
        Some(id) if !id.is_empty() => ProviderId(id),
        _ => ProviderId::new(),
    };

    Ok(ServiceProvider {
        id,
        name,
        hourly_rate,
        skills,
        availability: request.availability.unwrap_or_default(),
        image_url: request.image_url.unwrap_or_default(),
    })
}
