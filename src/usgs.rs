//! This module provides the main entry point for fetching instantaneous values
//! from the USGS water services. A request is built from a site, one or more
//! parameter codes and an optional date range, sent once, and the response is
//! parsed into an [`IvFrame`].

use crate::error::UsgsError;
use crate::query::error::{status_error, QueryError};
use crate::query::iv_query::{IvQuery, IV_BASE_URL};
use crate::query::transport::TransportOptions;
use crate::response::parser::{decode_body, parse_instantaneous_values};
use crate::types::iv_frame::IvFrame;
use crate::types::parameter_codes::ParameterCodes;
use bon::bon;
use reqwest::{Client, Response};

/// The async client for the USGS instantaneous values service.
///
/// Holds nothing but the HTTP client and the endpoint, so a single instance can
/// serve any number of concurrent requests. Every call is independent: no
/// caching and no retries. Retrying is left to the caller.
///
/// For synchronous code see [`crate::blocking::Usgs`].
///
/// # Examples
///
/// ```no_run
/// # use usgs::{Usgs, UsgsError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), UsgsError> {
/// let usgs = Usgs::new();
///
/// let values = usgs
///     .instantaneous_values()
///     .site("0204295505")
///     .parameter_codes(["62620", "00045"])
///     .start_date("2022-02-22")
///     .end_date("2022-02-23")
///     .call()
///     .await?;
///
/// println!("{}", values.frame);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Usgs {
    client: Client,
    base_url: String,
}

impl Default for Usgs {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl Usgs {
    /// Creates a client for the public endpoint, `https://waterservices.usgs.gov/nwis/iv/`.
    pub fn new() -> Self {
        Self::with_base_url(IV_BASE_URL)
    }

    /// Creates a client for another endpoint serving the same API (a mirror,
    /// a proxy or a local test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client on top of an existing `reqwest::Client`, e.g. one with
    /// a proxy or a shared connection pool configured.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `query` and returns the raw response if the status is 2xx.
    ///
    /// The body is left unread, so this is also the way to get at the JSON
    /// text itself.
    ///
    /// # Errors
    ///
    /// * [`QueryError::EmptySiteId`] / [`QueryError::NoParameterCodes`] before anything is sent.
    /// * [`QueryError::NetworkRequest`] on connection failures and timeouts.
    /// * [`QueryError::HttpStatus`] on any non-success status.
    pub async fn query_instantaneous_values(
        &self,
        query: &IvQuery,
        options: &TransportOptions,
    ) -> Result<Response, QueryError> {
        let url = query.prepare(&self.base_url)?;

        let response = options
            .apply(self.client.get(&url))
            .send()
            .await
            .map_err(|e| QueryError::NetworkRequest(url.clone(), e))?;

        response
            .error_for_status()
            .map_err(|e| status_error(query.site(), url, e))
    }

    /// Sends `query` and parses the response into an [`IvFrame`].
    ///
    /// Every requested parameter code is a column of the result, even when the
    /// service returned no readings for it.
    pub async fn fetch(
        &self,
        query: &IvQuery,
        options: &TransportOptions,
    ) -> Result<IvFrame, UsgsError> {
        let response = self.query_instantaneous_values(query, options).await?;
        let url = response.url().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::ResponseBody(url, e))?;

        let data = decode_body(&body)?;
        Ok(parse_instantaneous_values(
            &data,
            query.parameter_codes().as_slice(),
        )?)
    }

    /// Fetches the instantaneous values of one site.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.site(&str)`: **Required.** The site number, e.g. `"05568500"`.
    /// * `.parameter_codes(..)`: **Required.** One code (`"00060"`) or a list of codes
    ///   (`["00060", "00065"]`, `Vec<String>`, ...). Order is kept.
    /// * `.start_date(&str)`: Optional. ISO 8601 start of the period.
    /// * `.end_date(&str)`: Optional. ISO 8601 end of the period; without it the period
    ///   runs up to now.
    /// * `.agency(&str)`: Optional. Agency code, defaults to `"USGS"`.
    /// * `.transport(TransportOptions)`: Optional. Timeout and extra headers for this request.
    ///
    /// # Errors
    ///
    /// [`UsgsError::Query`] for anything that went wrong before a 2xx response was in hand,
    /// [`UsgsError::Parse`] when the body is not the expected document.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use usgs::{Usgs, UsgsError, TransportOptions, PARAM_DISCHARGE, PARAM_GAGE_HEIGHT};
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), UsgsError> {
    /// let usgs = Usgs::new();
    ///
    /// // Kingston Mines, everything since the first of May
    /// let values = usgs
    ///     .instantaneous_values()
    ///     .site("05568500")
    ///     .parameter_codes([PARAM_DISCHARGE, PARAM_GAGE_HEIGHT])
    ///     .start_date("2024-05-01")
    ///     .transport(TransportOptions::builder().timeout(Duration::from_secs(10)).build())
    ///     .call()
    ///     .await?;
    ///
    /// assert_eq!(values.parameter_codes(), [PARAM_DISCHARGE, PARAM_GAGE_HEIGHT]);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn instantaneous_values(
        &self,
        #[builder(into)] site: String,
        #[builder(into)] parameter_codes: ParameterCodes,
        #[builder(into)] start_date: Option<String>,
        #[builder(into)] end_date: Option<String>,
        #[builder(into)] agency: Option<String>,
        transport: Option<TransportOptions>,
    ) -> Result<IvFrame, UsgsError> {
        let query = IvQuery::builder()
            .site(site)
            .parameter_codes(parameter_codes)
            .maybe_start_date(start_date)
            .maybe_end_date(end_date)
            .maybe_agency(agency)
            .build();

        self.fetch(&query, &transport.unwrap_or_default()).await
    }
}
