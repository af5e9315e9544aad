use bon::Builder;
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Per-request options handed straight to the HTTP layer.
///
/// Nothing here changes the query itself; a timeout is the only way to
/// cancel an in-flight request.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use usgs::TransportOptions;
///
/// let options = TransportOptions::builder()
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(options.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct TransportOptions {
    pub timeout: Option<Duration>,
    #[builder(default)]
    pub headers: HeaderMap,
}

impl TransportOptions {
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.headers(self.headers.clone());
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    pub(crate) fn apply_blocking(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        let request = request.headers(self.headers.clone());
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }
}
