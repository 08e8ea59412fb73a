//! Basic result deduplication
//!
//! This example demonstrates the fundamental refinement operations:
//! - Loading a result list as the search engine would hand it over
//! - Deduplicating it with the default and a custom configuration
//! - Working with the surviving results

use geosieve::{RefineConfig, SearchResult, SearchResults, deduplicate_results, deduplicate_with_config};

const RESULTS: &str = r#"[
  {
    "source_table": "postcode",
    "category": { "class": "place", "type": "postcode" },
    "display_name": "20095, Hamburg, Deutschland",
    "rank_address": 25,
    "names": { "ref": "20095" }
  },
  {
    "source_table": "placex",
    "osm_object": { "osm_type": "R", "osm_id": 1422871 },
    "category": { "class": "boundary", "type": "postal_code" },
    "display_name": "20095, Hamburg-Altstadt, Hamburg, Deutschland",
    "rank_address": 21,
    "names": { "ref": "20095" }
  },
  {
    "source_table": "placex",
    "osm_object": { "osm_type": "N", "osm_id": 564068 },
    "category": { "class": "place", "type": "city" },
    "display_name": "Hamburg, Deutschland",
    "rank_address": 16
  },
  {
    "source_table": "placex",
    "osm_object": { "osm_type": "N", "osm_id": 564069 },
    "category": { "class": "place", "type": "city" },
    "display_name": "Hamburg, Deutschland",
    "rank_address": 16
  }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = geosieve::init_logging(tracing::Level::INFO);

    let results: SearchResults = serde_json::from_str(RESULTS)?;
    println!("Search engine returned {} results:", results.len());
    print_results(&results, 10);

    // Default refinement as done by the search endpoint
    println!("\nAfter deduplication:");
    let deduped = deduplicate_results(&results, 10)?;
    print_results(&deduped, 10);

    // Keep postcode entries even if a boundary relation covers them
    println!("\nWithout postcode suppression, limited to 2 results:");
    let config = RefineConfig::builder()
        .max_results(2)
        .postcode_suppression(false)
        .build();
    let deduped = deduplicate_with_config(&results, &config)?;
    print_results(&deduped, 10);

    Ok(())
}

fn print_results(results: &[SearchResult], limit: usize) {
    for (i, result) in results.iter().take(limit).enumerate() {
        let osm = result
            .osm_object
            .map_or_else(|| "-".to_string(), |obj| obj.to_string());

        println!(
            "  {}. {} ({}) - OSM: {}, Rank: {}",
            i + 1,
            result.display_name,
            result.category,
            osm,
            result.rank_address
        );
    }

    if results.len() > limit {
        println!("  ... and {} more results", results.len() - limit);
    }
}
