mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tourism_directory::domain::entities::CountrySource;
use tourism_directory::domain::repositories::PlaceRepository;
use tourism_directory::infrastructure::persistence::PgPlaceRepository;

fn rwanda() -> CountrySource {
    CountrySource::new("Rwanda", "Rwanda", "rwanda")
}

#[sqlx::test]
async fn test_fetch_all_reads_mixed_case_table(pool: PgPool) {
    common::create_test_place(&pool, "Rwanda", "Volcanoes").await;
    common::create_test_place(&pool, "Rwanda", "Akagera").await;
    let repo = PgPlaceRepository::new(Arc::new(pool));

    let places = repo.fetch_all(&rwanda()).await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Volcanoes");
    assert_eq!(places[0].description.as_deref(), Some("About Volcanoes"));
    assert_eq!(places[0].image_url.as_deref(), Some("volcanoes.jpg"));
}

#[sqlx::test]
async fn test_fetch_range_and_count(pool: PgPool) {
    for name in ["A", "B", "C", "D", "E"] {
        common::create_test_place(&pool, "benin", name).await;
    }
    let repo = PgPlaceRepository::new(Arc::new(pool));
    let benin = CountrySource::new("benin", "benin", "benin");

    assert_eq!(repo.count(&benin).await.unwrap(), 5);

    let range = repo.fetch_range(&benin, 2, 2).await.unwrap();
    assert_eq!(range.len(), 2);

    let past_end = repo.fetch_range(&benin, 10, 2).await.unwrap();
    assert!(past_end.is_empty());
}

#[sqlx::test]
async fn test_missing_table_is_error(pool: PgPool) {
    let repo = PgPlaceRepository::new(Arc::new(pool));
    let ghost = CountrySource::new("ghana", "Ghana", "ghana");

    assert!(repo.fetch_all(&ghost).await.is_err());
    assert!(repo.count(&ghost).await.is_err());
}

#[sqlx::test]
async fn test_table_name_is_quoted(pool: PgPool) {
    let repo = PgPlaceRepository::new(Arc::new(pool.clone()));
    let hostile = CountrySource::new("benin\"; DROP TABLE posts; --", "x", "x");

    assert!(repo.fetch_all(&hostile).await.is_err());

    let posts_exist: bool = sqlx::query_scalar("SELECT to_regclass('posts') IS NOT NULL")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(posts_exist);
}
