//! Parameter codes identify the measured quantity (discharge, gage height, ...)
//! requested from a site. A query always carries an ordered list of them; the
//! `From` conversions let call sites pass a single code or any list of codes.

use std::collections::HashSet;
use std::fmt;

/// Discharge (streamflow), cubic feet per second.
pub const PARAM_DISCHARGE: &str = "00060";
/// Gage height (stage), feet.
pub const PARAM_GAGE_HEIGHT: &str = "00065";
/// Precipitation, total, inches.
pub const PARAM_PRECIPITATION: &str = "00045";
/// Lake or reservoir water surface elevation above NAVD 1988, feet.
pub const PARAM_RESERVOIR_ELEVATION: &str = "62620";
/// Wind speed, miles per hour.
pub const PARAM_WIND_SPEED: &str = "00035";
/// Wind direction, degrees clockwise from north.
pub const PARAM_WIND_DIRECTION: &str = "00036";
/// Water temperature, degrees Celsius.
pub const PARAM_WATER_TEMPERATURE: &str = "00010";

/// An ordered list of USGS parameter codes.
///
/// Order is preserved exactly as given and duplicates are kept, since the
/// service accepts them. See [`ParameterCodes::duplicates`] for detecting them.
///
/// # Examples
///
/// ```
/// use usgs::{ParameterCodes, PARAM_DISCHARGE, PARAM_GAGE_HEIGHT};
///
/// let single = ParameterCodes::from(PARAM_DISCHARGE);
/// assert_eq!(single.len(), 1);
///
/// let both = ParameterCodes::from([PARAM_DISCHARGE, PARAM_GAGE_HEIGHT]);
/// assert_eq!(both.joined(), "00060,00065");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParameterCodes(Vec<String>);

impl ParameterCodes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(codes.into_iter().map(Into::into).collect())
    }

    pub fn single(code: impl Into<String>) -> Self {
        Self(vec![code.into()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma separated, in input order. This is the `parameterCd` query value.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    /// Codes that occur more than once, each reported once, in order of first repeat.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.iter()
            .filter(|code| !seen.insert(*code) && reported.insert(*code))
            .collect()
    }
}

impl fmt::Display for ParameterCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl From<&str> for ParameterCodes {
    fn from(code: &str) -> Self {
        Self::single(code)
    }
}

impl From<String> for ParameterCodes {
    fn from(code: String) -> Self {
        Self::single(code)
    }
}

impl From<Vec<String>> for ParameterCodes {
    fn from(codes: Vec<String>) -> Self {
        Self(codes)
    }
}

impl From<Vec<&str>> for ParameterCodes {
    fn from(codes: Vec<&str>) -> Self {
        Self::new(codes)
    }
}

impl From<&[&str]> for ParameterCodes {
    fn from(codes: &[&str]) -> Self {
        Self::new(codes.iter().copied())
    }
}

impl From<&[String]> for ParameterCodes {
    fn from(codes: &[String]) -> Self {
        Self(codes.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for ParameterCodes {
    fn from(codes: [&str; N]) -> Self {
        Self::new(codes)
    }
}

impl<'a> IntoIterator for &'a ParameterCodes {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
