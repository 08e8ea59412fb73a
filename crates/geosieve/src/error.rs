use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeosieveError {
    /// A postcode-table result arrived without a `ref` name. The upstream
    /// search engine guarantees this key, so hitting it means corrupt data.
    #[error("Postcode result at position {position} has no 'ref' name")]
    MissingPostcodeRef { position: usize },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GeosieveError>;
