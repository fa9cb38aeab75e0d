//! SQLite provider repository and listing service.
//!
//! Implements `ProviderRepository` and `ListingService` from `hireboard-core`
//! using sqlx with split read/write pools.

use hireboard_core::repository::listing::ListingService;
use hireboard_core::repository::provider::ProviderRepository;
use hireboard_types::error::{ListingError, RepositoryError};
use hireboard_types::filter::FilterSpec;
use hireboard_types::provider::{
    validate_hourly_rate, AvailabilityStatus, ProviderId, ServiceProvider,
};
use sqlx::Row;

use super::pool::DatabasePool;
use super::query::{Bind, SqlFilter};

const SELECT_COLUMNS: &str = "SELECT id, name, hourly_rate, skills, status, image_url FROM providers";

/// SQLite-backed implementation of `ProviderRepository` and `ListingService`.
#[derive(Clone)]
pub struct SqliteProviderRepository {
    pool: DatabasePool,
}

impl SqliteProviderRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain providers.
struct ProviderRow {
    id: String,
    name: String,
    hourly_rate: f64,
    skills: String,
    status: String,
    image_url: String,
}

impl ProviderRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            hourly_rate: row.try_get("hourly_rate")?,
            skills: row.try_get("skills")?,
            status: row.try_get("status")?,
            image_url: row.try_get("image_url")?,
        })
    }

    /// Validate the stored record. Errors carry the offending provider id.
    fn into_provider(self) -> Result<ServiceProvider, String> {
        let hourly_rate =
            validate_hourly_rate(self.hourly_rate).map_err(|e| format!("{}: {e}", self.id))?;

        let availability: AvailabilityStatus = self
            .status
            .parse()
            .map_err(|e: String| format!("{}: {e}", self.id))?;

        let skills: Vec<String> = serde_json::from_str(&self.skills)
            .map_err(|e| format!("{}: invalid skills JSON: {e}", self.id))?;

        Ok(ServiceProvider {
            id: ProviderId(self.id),
            name: self.name,
            hourly_rate,
            skills,
            availability,
            image_url: self.image_url,
        })
    }
}

fn map_repo_rows(rows: &[sqlx::sqlite::SqliteRow]) -> Result<Vec<ServiceProvider>, RepositoryError> {
    rows.iter()
        .map(|row| {
            ProviderRow::from_row(row)
                .map_err(|e| RepositoryError::Query(e.to_string()))?
                .into_provider()
                .map_err(RepositoryError::Query)
        })
        .collect()
}

impl ListingService for SqliteProviderRepository {
    async fn query_listings(&self, filter: &FilterSpec) -> Result<Vec<ServiceProvider>, ListingError> {
        let sql_filter = SqlFilter::from_spec(filter);
        let sql = format!(
            "{SELECT_COLUMNS} WHERE {} ORDER BY name COLLATE NOCASE, id",
            sql_filter.clause
        );
        tracing::debug!(filter = %filter, "querying listings");

        let mut query = sqlx::query(&sql);
        for bind in &sql_filter.binds {
            query = match bind {
                Bind::Text(s) => query.bind(s.clone()),
                Bind::Real(v) => query.bind(*v),
            };
        }

        let rows = query
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| ListingError::Backend(e.to_string()))?;

        rows.iter()
            .map(|row| {
                ProviderRow::from_row(row)
                    .map_err(|e| ListingError::Backend(e.to_string()))?
                    .into_provider()
                    .map_err(ListingError::InvalidRecord)
            })
            .collect()
    }
}

impl ProviderRepository for SqliteProviderRepository {
    async fn upsert(&self, provider: &ServiceProvider) -> Result<ServiceProvider, RepositoryError> {
        let skills_json = serde_json::to_string(&provider.skills)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query(
            "INSERT INTO providers (id, name, hourly_rate, skills, status, image_url)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                hourly_rate = excluded.hourly_rate,
                skills = excluded.skills,
                status = excluded.status,
                image_url = excluded.image_url,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        )
        .bind(provider.id.as_str())
        .bind(&provider.name)
        .bind(provider.hourly_rate)
        .bind(&skills_json)
        .bind(provider.availability.to_string())
        .bind(&provider.image_url)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tracing::debug!(id = %provider.id, "provider upserted");
        Ok(provider.clone())
    }

    async fn get_by_id(&self, id: &ProviderId) -> Result<Option<ServiceProvider>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.as_str())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => Ok(map_repo_rows(std::slice::from_ref(&row))?.pop()),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<ServiceProvider>, RepositoryError> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY name COLLATE NOCASE, id"))
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        map_repo_rows(&rows)
    }

    async fn delete(&self, id: &ProviderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;
    use hireboard_core::filter::FilterBuilder;
    use hireboard_types::filter::PriceBucket;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_provider(
        id: &str,
        name: &str,
        rate: f64,
        skills: &[&str],
        availability: AvailabilityStatus,
    ) -> ServiceProvider {
        ServiceProvider {
            id: ProviderId::from(id),
            name: name.to_string(),
            hourly_rate: rate,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability,
            image_url: format!("https://img.example/{id}.png"),
        }
    }

    fn fixture() -> Vec<ServiceProvider> {
        use AvailabilityStatus::*;
        vec![
            make_provider("d1", "Reactor Rae", 0.10, &["vue"], Available),
            make_provider("d2", "Ben", 0.30, &["React", "node"], Available),
            make_provider("d3", "Cleo", 0.45, &["rust"], Available),
            make_provider("d4", "Dan", 0.59, &["react"], Busy),
            make_provider("d5", "Eve", 0.60, &["go", "react"], Available),
            make_provider("d6", "Finn", 0.90, &["react"], Offline),
            make_provider("d7", "Gus_100%", 0.20, &["sql"], Available),
            make_provider("d8", "Hal", 0.00, &[], Available),
        ]
    }

    async fn seeded_repo() -> SqliteProviderRepository {
        let repo = SqliteProviderRepository::new(test_pool().await);
        for provider in fixture() {
            repo.upsert(&provider).await.unwrap();
        }
        repo
    }

    fn ids(providers: &[ServiceProvider]) -> Vec<&str> {
        providers.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_upsert_and_get_by_id() {
        let repo = SqliteProviderRepository::new(test_pool().await);
        let provider = make_provider("p1", "Ada", 0.5, &["rust"], AvailabilityStatus::Available);

        repo.upsert(&provider).await.unwrap();
        let fetched = repo.get_by_id(&provider.id).await.unwrap().unwrap();
        assert_eq!(fetched, provider);

        let updated = ServiceProvider {
            availability: AvailabilityStatus::Busy,
            hourly_rate: 0.7,
            ..provider.clone()
        };
        repo.upsert(&updated).await.unwrap();
        let fetched = repo.get_by_id(&provider.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = SqliteProviderRepository::new(test_pool().await);
        assert!(repo.get_by_id(&ProviderId::from("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = seeded_repo().await;
        repo.delete(&ProviderId::from("d1")).await.unwrap();
        assert!(repo.get_by_id(&ProviderId::from("d1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = SqliteProviderRepository::new(test_pool().await);
        let err = repo.delete(&ProviderId::from("ghost")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_list_all_includes_unlisted_in_name_order() {
        let repo = seeded_repo().await;
        let all = repo.list_all().await.unwrap();
        assert_eq!(
            ids(&all),
            vec!["d2", "d3", "d4", "d5", "d6", "d7", "d8", "d1"]
        );
    }

    #[tokio::test]
    async fn test_empty_filter_excludes_busy_and_offline() {
        let repo = seeded_repo().await;
        let results = repo.query_listings(&FilterBuilder::build("", None)).await.unwrap();
        assert!(results.iter().all(|p| p.availability.is_listable()));
        assert_eq!(ids(&results), vec!["d2", "d3", "d5", "d7", "d8", "d1"]);
    }

    #[tokio::test]
    async fn test_text_and_medium_bucket() {
        let repo = seeded_repo().await;
        let filter = FilterBuilder::build("react", Some(PriceBucket::Medium));
        let results = repo.query_listings(&filter).await.unwrap();
        // d2 matches on skill (case-insensitive) at the 0.3 floor, d4 is busy.
        assert_eq!(ids(&results), vec!["d2"]);
    }

    #[tokio::test]
    async fn test_text_matches_name_substring_case_insensitively() {
        let repo = seeded_repo().await;
        let filter = FilterBuilder::build("REACT", Some(PriceBucket::Low));
        let results = repo.query_listings(&filter).await.unwrap();
        assert_eq!(ids(&results), vec!["d1"]);
    }

    #[tokio::test]
    async fn test_wildcards_match_literally() {
        let repo = seeded_repo().await;

        let results = repo
            .query_listings(&FilterBuilder::build("_100%", None))
            .await
            .unwrap();
        assert_eq!(ids(&results), vec!["d7"]);

        let results = repo
            .query_listings(&FilterBuilder::build("%", None))
            .await
            .unwrap();
        assert_eq!(ids(&results), vec!["d7"]);
    }

    #[tokio::test]
    async fn test_sql_agrees_with_in_memory_matching() {
        let repo = seeded_repo().await;
        let providers = fixture();
        let buckets = [
            None,
            Some(PriceBucket::Low),
            Some(PriceBucket::Medium),
            Some(PriceBucket::High),
        ];

        for text in ["", "react", "Rust", "e", "node", "zzz"] {
            for bucket in buckets {
                let filter = FilterBuilder::build(text, bucket);
                let from_sql = repo.query_listings(&filter).await.unwrap();

                let mut expected: Vec<&str> = providers
                    .iter()
                    .filter(|p| filter.matches(p))
                    .map(|p| p.id.as_str())
                    .collect();
                let mut actual = ids(&from_sql);
                expected.sort_unstable();
                actual.sort_unstable();
                assert_eq!(actual, expected, "filter: {filter}");
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO providers (id, name, hourly_rate, skills) VALUES ('bad', 'Bad', 0.1, 'not json')")
            .execute(&pool.writer)
            .await
            .unwrap();
        let repo = SqliteProviderRepository::new(pool);

        let err = repo
            .query_listings(&FilterBuilder::build("", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::InvalidRecord(ref msg) if msg.starts_with("bad:")));

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}
