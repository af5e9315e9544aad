use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Response body is not valid JSON")]
    JsonParse(#[source] serde_json::Error),

    // Valid JSON, but not the instantaneous-values document layout
    #[error("Response JSON does not match the instantaneous values schema")]
    UnexpectedShape(#[source] serde_json::Error),

    #[error("Expected at least one element in '{path}' (time series #{series})")]
    MissingElement { path: &'static str, series: usize },

    #[error("Failed to parse timestamp '{value}' for parameter {parameter}")]
    DateParsing {
        value: String,
        parameter: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed building DataFrame for site {site}: {source}")]
    DataFrameProcessing {
        site: String,
        #[source]
        source: PolarsError,
    },
}
