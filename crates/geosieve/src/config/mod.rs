use crate::error::GeosieveError;

/// Default number of results returned by the v1 API.
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Largest `limit` the v1 API accepts.
pub const API_MAX_RESULTS: usize = 50;

/// Configuration for result refinement.
///
/// Use [`RefineConfigBuilder`] for an ergonomic way to create configurations
/// with sensible defaults.
///
/// # Examples
///
/// ```rust
/// use geosieve::RefineConfig;
///
/// let config = RefineConfig::builder().max_results(5).build();
/// assert_eq!(config.max_results, 5);
/// assert!(config.suppress_postcodes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineConfig {
    /// Maximum number of results to return
    pub max_results: usize,
    /// Drop postcode results that have a matching `boundary=postal_code` relation
    pub suppress_postcodes: bool,
}

impl RefineConfig {
    pub fn builder() -> RefineConfigBuilder {
        RefineConfigBuilder::default()
    }
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            suppress_postcodes: true,
        }
    }
}

/// Builder for creating refinement configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct RefineConfigBuilder {
    config: RefineConfig,
}

impl RefineConfigBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self {
            config: RefineConfig::default(),
        }
    }

    /// Create a builder matching the v1 search endpoint defaults
    pub fn api_default() -> Self {
        Self::new()
    }

    /// Create a builder for lookups, which may return up to the API maximum
    pub fn lookup() -> Self {
        let mut builder = Self::new();
        builder.config.max_results = API_MAX_RESULTS;
        builder
    }

    /// Set the maximum number of results to return
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    /// Set the maximum number of results, rejecting values the v1 API would refuse
    pub fn max_results_checked(mut self, max_results: usize) -> Result<Self, GeosieveError> {
        if !(1..=API_MAX_RESULTS).contains(&max_results) {
            return Err(GeosieveError::ConfigError(format!(
                "max_results must be between 1 and {API_MAX_RESULTS}, got {max_results}"
            )));
        }
        self.config.max_results = max_results;
        Ok(self)
    }

    /// Enable or disable postcode suppression
    pub fn postcode_suppression(mut self, enabled: bool) -> Self {
        self.config.suppress_postcodes = enabled;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> RefineConfig {
        self.config
    }
}
