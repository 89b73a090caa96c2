//! Static source integration tests.
//!
//! These run against the bundled datasets, with the simulated latency either
//! disabled or observed on a paused clock.

mod common;

use std::io::Write;
use std::time::Duration;

use access_catalog::backends::static_source::{EMPTY_COLLECTIONS, StaticSourceConfig};
use access_catalog::types::{QueryOptions, SortDirection};
use access_catalog::{CatalogError, DataProvider, ProviderKind, StaticSource};

use common::bundled_source;

fn ids(page: &access_catalog::ResultEnvelope) -> Vec<String> {
    page.records
        .iter()
        .filter_map(|r| r.id().map(ToString::to_string))
        .collect()
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_first_page_of_computers() {
    let source = bundled_source();
    let options = QueryOptions::new().with_page(1).with_page_size(10);

    let page = source.fetch_all("computers", &options).await.unwrap();

    assert_eq!(page.records.len(), 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let source = bundled_source();
    let page = source
        .fetch_all("computers", &QueryOptions::new().with_page(3))
        .await
        .unwrap();
    assert_eq!(page.records.len(), 5);
    assert!(!page.has_next());
    assert!(page.has_previous());
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let source = bundled_source();
    let page = source
        .fetch_all("computers", &QueryOptions::new().with_page(9))
        .await
        .unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_unknown_resource_type_fails() {
    let source = bundled_source();
    let err = source
        .fetch_all("nonexistent-type", &QueryOptions::new())
        .await
        .unwrap_err();
    assert!(err.is_unknown_resource_type());
    assert_eq!(err.to_string(), "unknown resource type: nonexistent-type");
}

#[tokio::test]
async fn test_empty_collections_list_successfully() {
    let source = bundled_source();
    for key in EMPTY_COLLECTIONS {
        let page = source.fetch_all(key, &QueryOptions::new()).await.unwrap();
        assert_eq!(page.total, 0, "{key}");
        assert_eq!(page.total_pages, 0, "{key}");
    }
}

// ============================================================================
// Search and sort
// ============================================================================

#[tokio::test]
async fn test_search_across_all_text_fields() {
    let source = bundled_source();

    let computers = source
        .fetch_all("computers", &QueryOptions::new().with_search("PATRICK"))
        .await
        .unwrap();
    assert_eq!(ids(&computers), vec!["8", "16", "24"]);

    let users = source
        .fetch_all("users", &QueryOptions::new().with_search("ck pa"))
        .await
        .unwrap();
    assert_eq!(ids(&users), vec!["1"]);
}

#[tokio::test]
async fn test_search_restricted_to_fields() {
    let source = bundled_source();
    let options = QueryOptions::new()
        .with_search("patrick")
        .with_searchable_fields(["name"]);
    let page = source.fetch_all("computers", &options).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_blank_search_returns_everything() {
    let source = bundled_source();
    let page = source
        .fetch_all("computers", &QueryOptions::new().with_search("   "))
        .await
        .unwrap();
    assert_eq!(page.total, 25);
}

#[tokio::test]
async fn test_sort_by_localized_end_date() {
    let source = bundled_source();

    let ascending = QueryOptions::new()
        .with_sort("endDate", SortDirection::Ascending)
        .with_page_size(25);
    let page = source.fetch_all("computers", &ascending).await.unwrap();
    let order = ids(&page);
    assert_eq!(order.first().map(String::as_str), Some("4"));
    assert_eq!(order.last().map(String::as_str), Some("19"));

    let descending = QueryOptions::new()
        .with_sort("endDate", SortDirection::Descending)
        .with_page_size(25);
    let page = source.fetch_all("computers", &descending).await.unwrap();
    let mut reversed = ids(&page);
    reversed.reverse();
    assert_eq!(reversed, order);
}

#[tokio::test]
async fn test_sort_nulls_first() {
    let source = bundled_source();
    let options = QueryOptions::new()
        .with_sort("owner", SortDirection::Ascending)
        .with_page_size(2);
    let page = source.fetch_all("computers", &options).await.unwrap();
    assert_eq!(ids(&page), vec!["9", "18"]);
}

// ============================================================================
// Lookup, count, health
// ============================================================================

#[tokio::test]
async fn test_fetch_by_id() {
    let source = bundled_source();
    let record = source.fetch_by_id("users", "1").await.unwrap();
    assert_eq!(
        record.get("name").and_then(|v| v.as_text()),
        Some("Patrick Parker")
    );

    let err = source.fetch_by_id("users", "404").await.unwrap_err();
    assert_eq!(err.to_string(), "resource not found: users with ID 404");
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_count_and_health() {
    let source = bundled_source();
    assert_eq!(source.kind(), ProviderKind::Static);
    assert_eq!(source.count("computers").await.unwrap(), 25);
    assert_eq!(source.count("users").await.unwrap(), 12);
    assert_eq!(source.count("mailboxes").await.unwrap(), 0);
    assert!(matches!(
        source.count("printers").await,
        Err(CatalogError::Resource(_))
    ));
    assert!(source.health_check().await);
}

// ============================================================================
// Simulated latency
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_operations_wait_out_the_delay() {
    let source = StaticSource::new(StaticSourceConfig::default()).unwrap();

    let start = tokio::time::Instant::now();
    source.count("users").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(300));

    let start = tokio::time::Instant::now();
    let _ = source.fetch_all("nonexistent-type", &QueryOptions::new()).await;
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_requests_run_concurrently() {
    let source = StaticSource::new(StaticSourceConfig::default()).unwrap();

    let start = tokio::time::Instant::now();
    let opts_a = QueryOptions::new();
    let opts_b = QueryOptions::new();
    let (a, b) = tokio::join!(
        source.fetch_all("computers", &opts_a),
        source.fetch_all("users", &opts_b),
    );
    assert_eq!(a.unwrap().total, 25);
    assert_eq!(b.unwrap().total, 12);
    assert!(start.elapsed() < Duration::from_millis(600));
}

// ============================================================================
// Data directory
// ============================================================================

#[tokio::test]
async fn test_data_dir_adds_and_replaces_collections() {
    let dir = tempfile::tempdir().unwrap();
    let mut printers = std::fs::File::create(dir.path().join("printers.json")).unwrap();
    write!(
        printers,
        r#"[{{"id": 1, "name": "PRN-1"}}, {{"id": 2, "name": "PRN-2"}}]"#
    )
    .unwrap();
    std::fs::write(dir.path().join("users.json"), r#"[{"id": "u1", "name": "Solo"}]"#).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let config = StaticSourceConfig {
        delay_ms: 0,
        data_dir: Some(dir.path().to_path_buf()),
    };
    let source = StaticSource::new(config).unwrap();

    assert_eq!(source.count("printers").await.unwrap(), 2);
    assert_eq!(source.count("users").await.unwrap(), 1);
    assert_eq!(source.count("computers").await.unwrap(), 25);
    assert!(source.resource_types().any(|key| key == "printers"));
    assert!(!source.resource_types().any(|key| key == "notes"));
}

#[test]
fn test_data_dir_with_bad_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "[{").unwrap();

    let mut source = StaticSource::empty(StaticSourceConfig::without_delay());
    let err = source.load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
    assert!(err.to_string().contains("broken"));
}

#[test]
fn test_missing_data_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let mut source = StaticSource::empty(StaticSourceConfig::without_delay());
    assert!(source.load_dir(&missing).is_err());
}
