//! Provider search and listing maintenance handlers.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use hireboard_core::filter::FilterBuilder;
use hireboard_core::repository::listing::ListingService;
use hireboard_types::error::ListingError;
use hireboard_types::filter::FilterSpec;
use hireboard_types::provider::{CreateProviderRequest, ProviderId, ServiceProvider};

use crate::http::error::AppError;
use crate::http::extractors::query::ProviderSearchQuery;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Payload of the search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    /// Compact rendering of the applied filter.
    pub query: String,
    pub filter: FilterSpec,
    pub providers: Vec<ServiceProvider>,
}

/// GET /api/v1/providers - Search available providers.
///
/// `q` matches names (substring) and skills (membership); `price` selects a
/// rate bucket. Busy and offline providers are never returned.
pub async fn search_providers(
    State(state): State<AppState>,
    Query(query): Query<ProviderSearchQuery>,
) -> Result<Json<ApiResponse<SearchResults>>, AppError> {
    let start = Instant::now();

    let filter = FilterBuilder::build(&query.q, query.price_bucket()?);
    let providers = tokio::time::timeout(
        state.config.query_timeout(),
        state.listings.query_listings(&filter),
    )
    .await
    .unwrap_or(Err(ListingError::Timeout))?;

    let providers: Vec<ServiceProvider> = providers
        .into_iter()
        .filter(|p| p.availability.is_listable())
        .collect();

    tracing::debug!(filter = %filter, count = providers.len(), "provider search served");

    let results = SearchResults {
        query: filter.to_string(),
        filter,
        providers,
    };
    Ok(Json(
        ApiResponse::timed(results, start).with_link("self", "/api/v1/providers"),
    ))
}

/// GET /api/v1/providers/{id} - Fetch one provider regardless of availability.
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ServiceProvider>>, AppError> {
    let start = Instant::now();
    let provider = state
        .provider_service
        .get_provider(&ProviderId::from(id.as_str()))
        .await?;

    let href = format!("/api/v1/providers/{}", provider.id);
    Ok(Json(ApiResponse::timed(provider, start).with_link("self", &href)))
}

/// POST /api/v1/providers - List a new provider (or replace one by id).
pub async fn create_provider(
    State(state): State<AppState>,
    Json(body): Json<CreateProviderRequest>,
) -> Result<Json<ApiResponse<ServiceProvider>>, AppError> {
    let start = Instant::now();
    let provider = state.provider_service.add_provider(body).await?;

    let href = format!("/api/v1/providers/{}", provider.id);
    Ok(Json(ApiResponse::timed(provider, start).with_link("self", &href)))
}

/// DELETE /api/v1/providers/{id} - Remove a provider.
pub async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let id = ProviderId::from(id.as_str());
    state.provider_service.remove_provider(&id).await?;

    Ok(Json(ApiResponse::timed(
        serde_json::json!({ "deleted": true, "id": id }),
        start,
    )))
}
