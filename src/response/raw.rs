//! Typed view of the instantaneous-values JSON document.
//!
//! Only the members the parser reads are declared; everything else in the
//! document is ignored. A missing declared member is a schema violation and
//! surfaces as [`ParseError::UnexpectedShape`](crate::ParseError::UnexpectedShape).

use serde::Deserialize;
use serde_json::Value;

const DISCLAIMER_TITLE: &str = "disclaimer";

#[derive(Debug, Clone, Deserialize)]
pub struct IvResponse {
    pub value: IvValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IvValue {
    pub query_info: QueryInfo,
    pub time_series: Vec<TimeSeries>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryInfo {
    #[serde(default)]
    pub note: Vec<Note>,
    pub criteria: Criteria,
}

impl QueryInfo {
    /// Text of the first note titled `"disclaimer"`.
    pub fn disclaimer(&self) -> Option<&str> {
        self.note
            .iter()
            .find(|note| note.title == DISCLAIMER_TITLE)
            .map(|note| note.value.as_str())
    }
}

/// A titled remark attached to the query, e.g. the `"disclaimer"` note.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub location_param: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeries {
    pub variable: Variable,
    pub values: Vec<ValueSet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub variable_code: Vec<VariableCode>,
    /// Sentinel used by the service for a missing reading, usually `-999999.0`.
    #[serde(default)]
    pub no_data_value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariableCode {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueSet {
    pub value: Vec<Observation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub date_time: String,
    /// Usually a decimal string (`"4.52"`), occasionally a bare number.
    pub value: Value,
    #[serde(default)]
    pub qualifiers: Vec<String>,
}

impl Observation {
    /// The reading as a float, `None` when it is not numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        match &self.value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}
