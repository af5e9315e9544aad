pub mod error;
pub mod parser;
pub mod raw;

#[cfg(test)]
pub(crate) mod fixtures;
