//! Removal of duplicate search results.
//!
//! Two results are considered the same if they share the same OSM object or
//! if they look the same to a user, i.e. have the same OSM type, category,
//! display name and address rank. The first of a group of equivalent results
//! wins; the relative order of the survivors is never changed.
//!
//! Postcode results get special treatment: when the same result list also
//! contains the `boundary=postal_code` relation for the same postcode, the
//! plain postcode entry is dropped in favour of the relation.

use ahash::AHashSet as HashSet;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::{
    config::RefineConfig,
    error::{GeosieveError, Result},
    result::{Classification, OsmObject, SearchResult, SearchResults},
};

/// Postcodes for which the result list holds a boundary relation, built once
/// per call from the whole list.
#[derive(Debug, Default)]
struct PostcodeRelations<'a> {
    postcodes: HashSet<&'a str>,
}

impl<'a> PostcodeRelations<'a> {
    fn from_results(results: &'a [SearchResult]) -> Self {
        Self {
            postcodes: results
                .iter()
                .filter_map(SearchResult::postcode_relation_ref)
                .collect(),
        }
    }

    fn covers(&self, postcode: &str) -> bool {
        self.postcodes.contains(postcode)
    }
}

/// Filters result lists according to a [`RefineConfig`].
///
/// # Examples
///
/// ```rust
/// use geosieve::{Category, OsmObject, RefineConfig, ResultDeduplicator, SearchResult, SourceTable};
///
/// let hamburg = SearchResult::new(
///     SourceTable::Placex,
///     Category::new("place", "city"),
///     "Hamburg, Deutschland",
///     16,
/// )
/// .with_osm_object(OsmObject::relation(62782));
/// let results = vec![hamburg.clone(), hamburg];
///
/// let deduplicator = ResultDeduplicator::new(RefineConfig::default());
/// assert_eq!(deduplicator.deduplicate(&results)?.len(), 1);
/// # Ok::<(), geosieve::error::GeosieveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultDeduplicator {
    config: RefineConfig,
}

impl ResultDeduplicator {
    pub fn new(config: RefineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RefineConfig {
        &self.config
    }

    /// Deduplicate a single result list.
    pub fn deduplicate(&self, results: &[SearchResult]) -> Result<SearchResults> {
        deduplicate_with_config(results, &self.config)
    }

    /// Deduplicate many independent result lists in parallel.
    pub fn deduplicate_bulk<R>(&self, batches: &[R]) -> Result<Vec<SearchResults>>
    where
        R: AsRef<[SearchResult]> + Sync,
    {
        deduplicate_bulk(batches, &self.config)
    }
}

/// Remove results that look like duplicates, returning at most `max_results`.
///
/// Postcode suppression is always on. Fails with
/// [`GeosieveError::MissingPostcodeRef`] if a postcode result without a `ref`
/// name is reached before the output is full.
pub fn deduplicate_results(
    results: &[SearchResult],
    max_results: usize,
) -> Result<SearchResults> {
    let config = RefineConfig {
        max_results,
        ..RefineConfig::default()
    };
    deduplicate_with_config(results, &config)
}

/// Remove duplicate results using the given configuration.
pub fn deduplicate_with_config(
    results: &[SearchResult],
    config: &RefineConfig,
) -> Result<SearchResults> {
    Ok(deduplicate_refs(results, config)?
        .into_iter()
        .cloned()
        .collect())
}

/// Like [`deduplicate_with_config`] but borrows the surviving results instead
/// of cloning them.
#[instrument(
    name = "Deduplicate results",
    level = "debug",
    skip_all,
    fields(input = results.len(), max_results = config.max_results)
)]
pub fn deduplicate_refs<'a>(
    results: &'a [SearchResult],
    config: &RefineConfig,
) -> Result<Vec<&'a SearchResult>> {
    let postcode_relations = if config.suppress_postcodes {
        PostcodeRelations::from_results(results)
    } else {
        PostcodeRelations::default()
    };

    let mut seen_objects: HashSet<Option<OsmObject>> = HashSet::new();
    let mut seen_classes: HashSet<Classification<'a>> = HashSet::new();
    let mut deduped = Vec::with_capacity(config.max_results.min(results.len()));

    for (position, result) in results.iter().enumerate() {
        if deduped.len() >= config.max_results {
            debug!(position, "Result limit reached, skipping remaining results");
            break;
        }

        // Suppressed postcodes must not leave a trace in the seen sets.
        if config.suppress_postcodes && result.is_postcode() {
            let postcode = result
                .postcode_ref()
                .ok_or(GeosieveError::MissingPostcodeRef { position })?;
            if postcode_relations.covers(postcode) {
                debug!(
                    position,
                    postcode, "Dropping postcode result in favour of boundary relation"
                );
                continue;
            }
        }

        let classification = result.classification();
        if !seen_objects.contains(&result.osm_object) && !seen_classes.contains(&classification)
        {
            deduped.push(result);
        } else {
            trace!(position, %result, "Dropping duplicate result");
        }
        seen_objects.insert(result.osm_object);
        seen_classes.insert(classification);
    }

    debug!(
        input = results.len(),
        output = deduped.len(),
        "Deduplicated results"
    );
    Ok(deduped)
}

/// Deduplicate many independent result lists in parallel.
///
/// Each list is processed on its own, exactly as [`deduplicate_with_config`]
/// would. The first error encountered fails the whole batch.
#[instrument(name = "Bulk deduplicate results", level = "debug", skip_all, fields(batches = batches.len()))]
pub fn deduplicate_bulk<R>(batches: &[R], config: &RefineConfig) -> Result<Vec<SearchResults>>
where
    R: AsRef<[SearchResult]> + Sync,
{
    batches
        .par_iter()
        .map(|batch| deduplicate_with_config(batch.as_ref(), config))
        .collect()
}
