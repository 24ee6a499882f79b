use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("Unrecognized sort key: '{0}'")]
    UnknownSortKey(String),

    #[error("Failed to read fixture file: {0}")]
    FixtureIo(#[from] std::io::Error),

    #[error("Failed to parse fixture file: {0}")]
    FixtureFormat(#[from] serde_json::Error),
}
