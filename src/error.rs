use crate::query::error::QueryError;
use crate::response::error::ParseError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsgsError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
