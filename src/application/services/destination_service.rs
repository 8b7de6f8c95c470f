//! Destination listings aggregated from per-country tables.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::json;

use crate::domain::entities::{
    AggregatedDestination, CountryCatalog, CountrySource, PageRequest, PaginatedResult, Place,
};
use crate::domain::repositories::PlaceRepository;
use crate::error::AppError;
use crate::utils::row_id::RowIdMode;

/// Service producing destination feeds from the configured country sources.
///
/// The catalog is passed in explicitly; declaration order is the order of
/// the aggregated feed.
pub struct DestinationService<P: PlaceRepository + ?Sized> {
    repository: Arc<P>,
    catalog: CountryCatalog,
    id_mode: RowIdMode,
}

impl<P: PlaceRepository + ?Sized> DestinationService<P> {
    /// Creates a new destination service.
    pub fn new(repository: Arc<P>, catalog: CountryCatalog, id_mode: RowIdMode) -> Self {
        Self {
            repository,
            catalog,
            id_mode,
        }
    }

    /// Returns the configured country sources in declaration order.
    pub fn countries(&self) -> &[CountrySource] {
        self.catalog.sources()
    }

    /// Lists one page of destinations drawn from every country source.
    ///
    /// All sources are read concurrently and the call waits for every read to
    /// settle. A source that fails contributes zero rows, so this never fails.
    /// Rows are concatenated in catalog order and the page is sliced from that
    /// snapshot; `total` is the length of the whole concatenation.
    pub async fn list_destinations(&self, page: PageRequest) -> PaginatedResult<AggregatedDestination> {
        let reads = self
            .catalog
            .sources()
            .iter()
            .map(|source| self.read_source(source));

        let all: Vec<AggregatedDestination> = join_all(reads).await.into_iter().flatten().collect();

        let total = all.len() as u64;
        tracing::debug!(total, page = page.page(), "Aggregated destinations");

        PaginatedResult::new(page.slice(all), total, page)
    }

    /// Lists one page of destinations from a single country.
    ///
    /// Count and ranged select are pushed down to the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] before any query if `slug` matches no
    /// configured source, and propagates count or select failures.
    pub async fn list_by_country(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> Result<PaginatedResult<AggregatedDestination>, AppError> {
        let source = self.catalog.find(slug).ok_or_else(|| {
            AppError::not_found("Country not found", json!({ "country": slug }))
        })?;

        let (total, rows) = tokio::try_join!(
            self.repository.count(source),
            self.repository
                .fetch_range(source, page.offset(), page.limit())
        )?;

        let items = self.tag(source, rows, page.offset());
        Ok(PaginatedResult::new(items, total, page))
    }

    /// Reads a whole source, turning failure into an empty result.
    async fn read_source(&self, source: &CountrySource) -> Vec<AggregatedDestination> {
        match self.repository.fetch_all(source).await {
            Ok(rows) => self.tag(source, rows, 0),
            Err(e) => {
                tracing::warn!(
                    country = %source.slug,
                    table = %source.table,
                    error = %e,
                    "Country source unavailable, treating as empty"
                );
                metrics::counter!(
                    "destination_source_failures_total",
                    "country" => source.slug.clone()
                )
                .increment(1);
                Vec::new()
            }
        }
    }

    fn tag(&self, source: &CountrySource, rows: Vec<Place>, first_position: u64) -> Vec<AggregatedDestination> {
        rows.into_iter()
            .zip(first_position..)
            .map(|(place, position)| {
                let id = self.id_mode.synthesize(&source.slug, position, &place.name);
                AggregatedDestination::from_place(place, source, id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPlaceRepository;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    fn catalog() -> CountryCatalog {
        CountryCatalog::new(vec![
            CountrySource::new("A", "Alpha", "a"),
            CountrySource::new("B", "Beta", "b"),
        ])
        .unwrap()
    }

    fn places(prefix: &str, n: usize) -> Vec<Place> {
        (0..n)
            .map(|i| Place::new(format!("{prefix}{i}"), None, None))
            .collect()
    }

    fn mock_with(a: Result<usize, ()>, b: Result<usize, ()>) -> MockPlaceRepository {
        let mut repo = MockPlaceRepository::new();
        repo.expect_fetch_all().returning(move |source| {
            let outcome = if source.slug == "a" { a } else { b };
            match outcome {
                Ok(n) => Ok(places(&source.table, n)),
                Err(()) => Err(AppError::internal("relation does not exist", json!({}))),
            }
        });
        repo
    }

    fn names(result: &PaginatedResult<AggregatedDestination>) -> Vec<&str> {
        result.items.iter().map(|d| d.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_aggregates_in_declaration_order_across_pages() {
        let service = DestinationService::new(
            Arc::new(mock_with(Ok(2), Ok(3))),
            catalog(),
            RowIdMode::Random,
        );

        let first = service
            .list_destinations(PageRequest::new(Some(1), Some(4), 12).unwrap())
            .await;
        assert_eq!(names(&first), vec!["A0", "A1", "B0", "B1"]);
        assert_eq!(first.total, 5);
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, 4);

        let second = service
            .list_destinations(PageRequest::new(Some(2), Some(4), 12).unwrap())
            .await;
        assert_eq!(names(&second), vec!["B2"]);
        assert_eq!(second.total, 5);
    }

    #[tokio::test]
    async fn test_failed_source_counts_as_empty() {
        let service = DestinationService::new(
            Arc::new(mock_with(Ok(2), Err(()))),
            catalog(),
            RowIdMode::Random,
        );

        let result = service
            .list_destinations(PageRequest::new(None, None, 12).unwrap())
            .await;

        assert_eq!(result.total, 2);
        assert_eq!(names(&result), vec!["A0", "A1"]);
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty_page() {
        let service = DestinationService::new(
            Arc::new(mock_with(Err(()), Err(()))),
            catalog(),
            RowIdMode::Random,
        );

        let result = service
            .list_destinations(PageRequest::new(None, None, 12).unwrap())
            .await;

        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let service = DestinationService::new(
            Arc::new(mock_with(Ok(2), Ok(3))),
            catalog(),
            RowIdMode::Random,
        );

        let result = service
            .list_destinations(PageRequest::new(Some(3), Some(4), 12).unwrap())
            .await;

        assert!(result.items.is_empty());
        assert_eq!(result.total, 5);
    }

    #[tokio::test]
    async fn test_rows_are_tagged_with_country_and_id() {
        let service = DestinationService::new(
            Arc::new(mock_with(Ok(1), Ok(1))),
            catalog(),
            RowIdMode::Stable,
        );

        let result = service
            .list_destinations(PageRequest::new(None, None, 12).unwrap())
            .await;

        let beta = &result.items[1];
        assert_eq!(beta.country, "Beta");
        assert_eq!(beta.country_slug, "b");
        assert!(beta.id.starts_with("b-0-"));

        let again = service
            .list_destinations(PageRequest::new(None, None, 12).unwrap())
            .await;
        assert_eq!(result.items, again.items);
    }

    /// Source A only completes after source B has finished.
    struct SlowFirstSource {
        release_a: Mutex<Option<oneshot::Receiver<()>>>,
        signal_a: Mutex<Option<oneshot::Sender<()>>>,
    }

    #[async_trait]
    impl PlaceRepository for SlowFirstSource {
        async fn fetch_all(&self, source: &CountrySource) -> Result<Vec<Place>, AppError> {
            if source.slug == "a" {
                let rx = self.release_a.lock().unwrap().take();
                if let Some(rx) = rx {
                    let _ = rx.await;
                }
                Ok(places("A", 1))
            } else {
                let tx = self.signal_a.lock().unwrap().take();
                if let Some(tx) = tx {
                    let _ = tx.send(());
                }
                Ok(places("B", 1))
            }
        }

        async fn fetch_range(&self, _: &CountrySource, _: u64, _: u32) -> Result<Vec<Place>, AppError> {
            Ok(Vec::new())
        }

        async fn count(&self, _: &CountrySource) -> Result<u64, AppError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_order_ignores_completion_order() {
        let (tx, rx) = oneshot::channel();
        let repo = SlowFirstSource {
            release_a: Mutex::new(Some(rx)),
            signal_a: Mutex::new(Some(tx)),
        };
        let service = DestinationService::new(Arc::new(repo), catalog(), RowIdMode::Random);

        let result = service
            .list_destinations(PageRequest::new(None, None, 12).unwrap())
            .await;

        assert_eq!(names(&result), vec!["A0", "B0"]);
    }

    #[tokio::test]
    async fn test_list_by_country_pushes_down_pagination() {
        let mut repo = MockPlaceRepository::new();
        repo.expect_count()
            .withf(|source| source.table == "B")
            .times(1)
            .returning(|_| Ok(7));
        repo.expect_fetch_range()
            .withf(|source, offset, limit| source.table == "B" && *offset == 4 && *limit == 4)
            .times(1)
            .returning(|_, _, _| Ok(places("B", 3)));
        repo.expect_fetch_all().times(0);

        let service = DestinationService::new(Arc::new(repo), catalog(), RowIdMode::Random);

        let result = service
            .list_by_country("B", PageRequest::new(Some(2), Some(4), 12).unwrap())
            .await
            .unwrap();

        assert_eq!(result.total, 7);
        assert_eq!(result.items.len(), 3);
        assert!(result.items[0].id.starts_with("b-4-"));
        assert!(result.items[2].id.starts_with("b-6-"));
        assert_eq!(result.items[0].country, "Beta");
    }

    #[tokio::test]
    async fn test_list_by_unknown_country_issues_no_query() {
        let mut repo = MockPlaceRepository::new();
        repo.expect_count().times(0);
        repo.expect_fetch_range().times(0);

        let service = DestinationService::new(Arc::new(repo), catalog(), RowIdMode::Random);

        let err = service
            .list_by_country("libya", PageRequest::new(None, None, 12).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_by_country_propagates_query_failure() {
        let mut repo = MockPlaceRepository::new();
        repo.expect_count().returning(|_| Ok(3));
        repo.expect_fetch_range()
            .returning(|_, _, _| Err(AppError::internal("Database error", json!({}))));

        let service = DestinationService::new(Arc::new(repo), catalog(), RowIdMode::Random);

        let err = service
            .list_by_country("a", PageRequest::new(None, None, 12).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_countries_in_declaration_order() {
        let service = DestinationService::new(
            Arc::new(MockPlaceRepository::new()),
            catalog(),
            RowIdMode::Random,
        );
        let slugs: Vec<_> = service.countries().iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }
}
