//! A blocking variant of [`crate::Usgs`].
//!
//! Same requests, same parsing; the calling thread waits for the response.
//! Do not use it from inside an async runtime.

use crate::error::UsgsError;
use crate::query::error::{status_error, QueryError};
use crate::query::iv_query::{IvQuery, IV_BASE_URL};
use crate::query::transport::TransportOptions;
use crate::response::parser::{decode_body, parse_instantaneous_values};
use crate::types::iv_frame::IvFrame;
use crate::types::parameter_codes::ParameterCodes;
use bon::bon;
use reqwest::blocking::{Client, Response};

/// Blocking client for the USGS instantaneous values service.
///
/// # Examples
///
/// ```no_run
/// # use usgs::UsgsError;
/// use usgs::blocking::Usgs;
///
/// # fn main() -> Result<(), UsgsError> {
/// let values = Usgs::new()
///     .instantaneous_values()
///     .site("0204295505")
///     .parameter_codes(["62620", "00045"])
///     .start_date("2022-02-22")
///     .end_date("2022-02-23")
///     .call()?;
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
    pub fn new() -> Self {
        Self::with_base_url(IV_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `query`, returning the unread response on a 2xx status.
    pub fn query_instantaneous_values(
        &self,
        query: &IvQuery,
        options: &TransportOptions,
    ) -> Result<Response, QueryError> {
        let url = query.prepare(&self.base_url)?;

        let response = options
            .apply_blocking(self.client.get(&url))
            .send()
            .map_err(|e| QueryError::NetworkRequest(url.clone(), e))?;

        response
            .error_for_status()
            .map_err(|e| status_error(query.site(), url, e))
    }

    pub fn fetch(
        &self,
        query: &IvQuery,
        options: &TransportOptions,
    ) -> Result<IvFrame, UsgsError> {
        let response = self.query_instantaneous_values(query, options)?;
        let url = response.url().to_string();
        let body = response
            .bytes()
            .map_err(|e| QueryError::ResponseBody(url, e))?;

        let data = decode_body(&body)?;
        Ok(parse_instantaneous_values(
            &data,
            query.parameter_codes().as_slice(),
        )?)
    }

    /// Fetches the instantaneous values of one site.
    /// Takes the same arguments as [`crate::Usgs::instantaneous_values`].
    #[builder]
    pub fn instantaneous_values(
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

        self.fetch(&query, &transport.unwrap_or_default())
    }
}
