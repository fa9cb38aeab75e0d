//! Query parameter extractors for list endpoints.

use serde::Deserialize;

use hireboard_types::filter::PriceBucket;

use crate::http::error::AppError;

/// Query parameters for the provider search endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct ProviderSearchQuery {
    /// Name or skill text; blank means no text filter.
    #[serde(default)]
    pub q: String,
    /// Price bucket (low, medium, high).
    pub price: Option<String>,
}

impl ProviderSearchQuery {
    /// Parse `price`, treating a blank value as "any price".
    pub fn price_bucket(&self) -> Result<Option<PriceBucket>, AppError> {
        match self.price.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(AppError::Validation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_bucket_parsing() {
        let query = ProviderSearchQuery {
            q: String::new(),
            price: Some("HIGH".to_string()),
        };
        assert_eq!(query.price_bucket().unwrap(), Some(PriceBucket::High));

        let blank = ProviderSearchQuery {
            q: String::new(),
            price: Some("  ".to_string()),
        };
        assert_eq!(blank.price_bucket().unwrap(), None);

        let bad = ProviderSearchQuery {
            q: String::new(),
            price: Some("cheap".to_string()),
        };
        assert!(matches!(bad.price_bucket(), Err(AppError::Validation(_))));
    }
}
