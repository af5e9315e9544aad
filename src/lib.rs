pub mod blocking;
mod error;
mod query;
mod response;
mod types;
mod usgs;

#[cfg(test)]
mod test_server;
#[cfg(test)]
mod test_logger;

pub use error::UsgsError;
pub use usgs::*;

pub use query::error::QueryError;
pub use query::iv_query::{IvQuery, DEFAULT_AGENCY, IV_BASE_URL};
pub use query::transport::TransportOptions;

pub use response::error::ParseError;
pub use response::parser::{decode_body, parse_instantaneous_values, parse_response};
pub use response::raw::*;

pub use types::iv_frame::{IvFrame, DATETIME_COLUMN};
pub use types::parameter_codes::*;
