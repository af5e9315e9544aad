pub mod error;
pub mod iv_query;
pub mod transport;
