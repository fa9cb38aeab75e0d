//! Bulk import of provider listings from a JSON file.
//!
//! The file holds a JSON array of provider objects, the same shape the
//! listing API returns (`status` is accepted as an alias for
//! `availability`, and `id` is optional).

use std::path::Path;

use hireboard_types::provider::CreateProviderRequest;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid provider JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of providers.
pub fn parse_providers(json: &str) -> Result<Vec<CreateProviderRequest>, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an import file.
pub async fn load_import_file(path: &Path) -> Result<Vec<CreateProviderRequest>, ImportError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let requests = parse_providers(&content)?;
    tracing::debug!(path = %path.display(), count = requests.len(), "parsed import file");
    Ok(requests)
}
