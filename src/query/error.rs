use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Site id must not be empty")]
    EmptySiteId,

    #[error("At least one parameter code is required for site '{0}'")]
    NoParameterCodes(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),
}

/// Turns the error of `error_for_status` into a [`QueryError`].
///
/// Shared by the async and the blocking client. An error without a status
/// is reported as a network failure.
pub(crate) fn status_error(site: &str, url: String, source: reqwest::Error) -> QueryError {
    warn!("HTTP error for site {} at {}: {:?}", site, url, source);
    match source.status() {
        Some(status) => QueryError::HttpStatus {
            url,
            status,
            source,
        },
        None => QueryError::NetworkRequest(url, source),
    }
}
