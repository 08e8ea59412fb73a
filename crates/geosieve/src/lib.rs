//! Geosieve - Geocoder Result Refinement
//!
//! Geosieve holds the last steps a geocoding API applies before answering a
//! request: translating a map zoom level into the address rank the search
//! should stop at, and removing duplicate entries from the ranked list of
//! results the search engine produced.
//!
//! # Quick Start
//!
//! ```rust
//! use geosieve::{Category, OsmObject, SearchResult, SourceTable, deduplicate_results, zoom_to_rank};
//!
//! // Reverse lookups at town zoom stop at address rank 18
//! assert_eq!(zoom_to_rank(12), 18);
//!
//! let postcode = SearchResult::new(
//!     SourceTable::Postcode,
//!     Category::new("place", "postcode"),
//!     "20095",
//!     25,
//! )
//! .with_name("ref", "20095");
//! let boundary = SearchResult::new(
//!     SourceTable::Placex,
//!     Category::new("boundary", "postal_code"),
//!     "20095, Hamburg",
//!     21,
//! )
//! .with_osm_object(OsmObject::relation(1_234_567))
//! .with_name("ref", "20095");
//!
//! // The boundary relation wins over the plain postcode entry
//! let results = deduplicate_results(&[postcode, boundary.clone()], 10)?;
//! assert_eq!(results, vec![boundary]);
//! # Ok::<(), geosieve::error::GeosieveError>(())
//! ```
//!
//! # Features
//!
//! - **Zoom conversion**: total mapping from any integer zoom to an address rank
//! - **Deduplication**: drops results with the same OSM object or the same
//!   user-visible classification, keeping the order of the survivors
//! - **Postcode suppression**: prefers postcode boundary relations over plain
//!   postcode entries for the same code
//! - **Batch Processing**: deduplicate many independent result lists in parallel
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod dedup;
pub mod error;
mod rank;
mod result;

pub use config::{API_MAX_RESULTS, DEFAULT_MAX_RESULTS, RefineConfig, RefineConfigBuilder};
pub use dedup::{
    ResultDeduplicator, deduplicate_bulk, deduplicate_refs, deduplicate_results,
    deduplicate_with_config,
};
pub use error::GeosieveError;
pub use rank::{MAX_ZOOM, REVERSE_MAX_RANKS, ZoomBand, zoom_band, zoom_to_rank};
pub use result::{
    Category, Classification, OsmObject, OsmType, POSTCODE_REF_KEY, SearchResult, SearchResults,
    SourceTable,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Geosieve library.
///
/// This sets up structured logging with configurable levels and filtering.
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than
/// once is harmless; only the first call installs a subscriber.
///
/// # Arguments
///
/// * `level` - The minimum log level to display
///
/// # Examples
///
/// ```rust
/// use geosieve::init_logging;
/// use tracing::Level;
///
/// // Initialize with info-level logging
/// init_logging(Level::INFO)?;
/// # Ok::<(), geosieve::error::GeosieveError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), GeosieveError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("rayon=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_init_logging_twice() {
        setup_test_env();
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }

    #[test]
    fn test_zoom_and_dedup_are_independent() {
        setup_test_env();

        let town = SearchResult::new(
            SourceTable::Placex,
            Category::new("place", "town"),
            "Husum",
            zoom_to_rank(12),
        )
        .with_osm_object(OsmObject::node(240_086_000));

        let results = deduplicate_results(&[town.clone(), town.clone()], 10).unwrap();
        assert_eq!(results, vec![town]);
    }

    #[test]
    fn test_default_config_limit() {
        setup_test_env();

        let results: SearchResults = (0..20)
            .map(|i| {
                SearchResult::new(
                    SourceTable::Placex,
                    Category::new("place", "village"),
                    format!("Village {i}"),
                    19,
                )
                .with_osm_object(OsmObject::node(i))
            })
            .collect();

        let deduped = deduplicate_with_config(&results, &RefineConfig::default()).unwrap();
        assert_eq!(deduped.len(), DEFAULT_MAX_RESULTS);
        assert_eq!(deduped[..], results[..DEFAULT_MAX_RESULTS]);
    }
}
