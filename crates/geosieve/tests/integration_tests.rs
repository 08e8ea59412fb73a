//! Integration tests for Geosieve result refinement
//!
//! These tests run against the full public API, feeding result lists shaped
//! like the ones the search engine hands to the API layer.
#![cfg(feature = "serde")]

use geosieve::{
    Category, GeosieveError, OsmObject, RefineConfig, ResultDeduplicator, SearchResult,
    SearchResults, SourceTable, deduplicate_bulk, deduplicate_results, zoom_to_rank,
};

const HAMBURG_FIXTURE: &str = include_str!("fixtures/hamburg_postcodes.json");

fn setup_test_env() {
    let _ = geosieve::init_logging(tracing::Level::WARN);
}

fn hamburg_results() -> SearchResults {
    serde_json::from_str(HAMBURG_FIXTURE).expect("fixture should parse")
}

#[test]
fn test_full_workflow() {
    setup_test_env();

    let results = hamburg_results();
    assert_eq!(results.len(), 8);

    let deduped = deduplicate_results(&results, 10).expect("Deduplication should work");
    let expected: SearchResults = [1, 2, 3, 5, 7].iter().map(|&i| results[i].clone()).collect();
    assert_eq!(deduped, expected);
}

#[test]
fn test_postcode_without_relation_survives() {
    setup_test_env();

    let deduped = deduplicate_results(&hamburg_results(), 10).unwrap();
    let postcodes: Vec<_> = deduped
        .iter()
        .filter(|r| r.source_table == SourceTable::Postcode)
        .filter_map(SearchResult::postcode_ref)
        .collect();
    assert_eq!(postcodes, vec!["20097"]);
}

#[test]
fn test_limit_applies_after_deduplication() {
    setup_test_env();

    let results = hamburg_results();
    let deduped = deduplicate_results(&results, 3).unwrap();
    assert_eq!(deduped, results[1..4].to_vec());
}

#[test]
fn test_output_roundtrips_through_json() {
    setup_test_env();

    let deduped = deduplicate_results(&hamburg_results(), 10).unwrap();
    let json = serde_json::to_string(&deduped).unwrap();
    let reparsed: SearchResults = serde_json::from_str(&json).unwrap();

    // Deduplicating an already deduplicated list changes nothing.
    assert_eq!(deduplicate_results(&reparsed, 10).unwrap(), deduped);
}

#[test]
fn test_serialized_shape() {
    let relation = SearchResult::new(
        SourceTable::Placex,
        Category::new("boundary", "postal_code"),
        "12345",
        21,
    )
    .with_osm_object(OsmObject::relation(9));

    let value = serde_json::to_value(&relation).unwrap();
    assert_eq!(value["source_table"], "placex");
    assert_eq!(value["osm_object"]["osm_type"], "R");
    assert_eq!(value["category"]["type"], "postal_code");
}

#[test]
fn test_malformed_postcode_fails_request() {
    setup_test_env();

    let broken: SearchResults = serde_json::from_str(
        r#"[{
            "source_table": "postcode",
            "category": { "class": "place", "type": "postcode" },
            "display_name": "20095",
            "rank_address": 25
        }]"#,
    )
    .unwrap();

    let err = deduplicate_results(&broken, 10).unwrap_err();
    assert!(matches!(err, GeosieveError::MissingPostcodeRef { position: 0 }));
    assert!(err.to_string().contains("position 0"));
}

#[test]
fn test_batch_operations() {
    setup_test_env();

    let batches = vec![hamburg_results(), hamburg_results()[..4].to_vec(), vec![]];
    let config = RefineConfig::builder().max_results(2).build();

    let bulk = deduplicate_bulk(&batches, &config).expect("Batch deduplication should work");
    assert_eq!(bulk.len(), 3);
    assert_eq!(bulk[0].len(), 2);
    assert_eq!(bulk[1].len(), 2);
    assert!(bulk[2].is_empty());

    let deduplicator = ResultDeduplicator::new(config);
    assert_eq!(deduplicator.deduplicate_bulk(&batches).unwrap(), bulk);
}

#[test]
fn test_zoom_scenarios() {
    assert_eq!(zoom_to_rank(12), 18);
    assert_eq!(zoom_to_rank(0), 2);
    assert_eq!(zoom_to_rank(18), 30);
    assert_eq!(zoom_to_rank(-5), 2);
    assert_eq!(zoom_to_rank(100), 30);
}
