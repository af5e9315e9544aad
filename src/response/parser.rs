//! Turns an instantaneous-values JSON document into an [`IvFrame`].
//!
//! Every series becomes a two column frame (`datetime`, code); the frames are
//! then full-joined on `datetime`. Parameters without readings, and requested
//! parameters the service left out entirely, are appended as null columns so
//! the table always has one column per parameter.

use crate::response::error::ParseError;
use crate::response::raw::{IvResponse, Observation};
use crate::types::iv_frame::{IvFrame, DATETIME_COLUMN};
use chrono::DateTime;
use log::{debug, error, info, warn};
use polars::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Decodes a raw response body into JSON without checking its layout.
pub fn decode_body(body: &[u8]) -> Result<Value, ParseError> {
    serde_json::from_slice(body).map_err(ParseError::JsonParse)
}

/// Parses a decoded instantaneous-values document.
///
/// `requested` are the parameter codes that were asked for. Any of them that
/// has no series in the response still gets a (null) column; pass an empty
/// slice to only get columns for what the service returned.
///
/// # Errors
///
/// * [`ParseError::UnexpectedShape`] if a member the parser relies on is absent.
/// * [`ParseError::MissingElement`] if `variableCode` or `values` is an empty array.
/// * [`ParseError::DateParsing`] if a `dateTime` is not RFC 3339.
/// * [`ParseError::DataFrameProcessing`] if Polars fails building the table.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use usgs::parse_instantaneous_values;
///
/// let body = json!({
///     "value": {
///         "queryInfo": {
///             "criteria": { "locationParam": "[ALL:05568500]" },
///             "note": []
///         },
///         "timeSeries": [{
///             "variable": {
///                 "variableCode": [{ "value": "00060" }],
///                 "noDataValue": -999999.0
///             },
///             "values": [{ "value": [{
///                 "dateTime": "2024-05-01T12:00:00.000-05:00",
///                 "value": "42300",
///                 "qualifiers": ["P"]
///             }]}]
///         }]
///     }
/// });
///
/// let table = parse_instantaneous_values(&body, &[]).unwrap();
/// assert_eq!(table.parameter_codes(), ["00060"]);
/// assert_eq!(table.height(), 1);
/// ```
pub fn parse_instantaneous_values(
    data: &Value,
    requested: &[String],
) -> Result<IvFrame, ParseError> {
    let response = IvResponse::deserialize(data).map_err(ParseError::UnexpectedShape)?;
    parse_response(&response, requested)
}

/// Same as [`parse_instantaneous_values`], for an already typed document.
pub fn parse_response(response: &IvResponse, requested: &[String]) -> Result<IvFrame, ParseError> {
    let query_info = &response.value.query_info;
    let site = query_info.criteria.location_param.as_str();

    if let Some(disclaimer) = query_info.disclaimer() {
        warn!("{} (site {})", disclaimer, site);
    }

    // Column order follows the response; `None` marks a parameter without readings.
    let mut columns: Vec<(String, Option<DataFrame>)> = Vec::new();

    for (index, series) in response.value.time_series.iter().enumerate() {
        let code = series
            .variable
            .variable_code
            .first()
            .ok_or(ParseError::MissingElement {
                path: "variable.variableCode",
                series: index,
            })?
            .value
            .clone();
        let observations = &series
            .values
            .first()
            .ok_or(ParseError::MissingElement {
                path: "values",
                series: index,
            })?
            .value;

        let frame = if observations.is_empty() {
            error!(
                "No data found for parameter code {} at site {}, adding null column",
                code, site
            );
            None
        } else {
            let frame = series_frame(site, &code, observations, series.variable.no_data_value)?;
            debug!(
                "Values ({}) acquired from {} at site {}",
                frame.height(),
                code,
                site
            );
            Some(frame)
        };

        match columns.iter_mut().find(|(existing, _)| *existing == code) {
            Some(slot) => {
                warn!(
                    "Parameter code {} returned more than once for site {}, \
                     keeping the later series",
                    code, site
                );
                slot.1 = frame;
            }
            None => columns.push((code, frame)),
        }
    }

    for code in requested {
        if !columns.iter().any(|(existing, _)| existing == code) {
            error!(
                "Parameter code {} was requested but not returned for site {}, adding null column",
                code, site
            );
            columns.push((code.clone(), None));
        }
    }

    let mut data_frames = Vec::new();
    let mut empty_codes = Vec::new();
    for (code, frame) in columns {
        match frame {
            Some(frame) => data_frames.push(frame),
            None => empty_codes.push(code),
        }
    }

    let mut frame = merge_on_datetime(data_frames).map_err(frame_error(site))?;
    for code in &empty_codes {
        let nulls = Series::full_null(code.as_str().into(), frame.height(), &DataType::Float64);
        frame.with_column(nulls).map_err(frame_error(site))?;
    }

    info!(
        "Returning DataFrame (rows: {}) from site {}",
        frame.height(),
        site
    );
    Ok(IvFrame::new(site, frame))
}

fn frame_error(site: &str) -> impl Fn(PolarsError) -> ParseError + '_ {
    move |source| ParseError::DataFrameProcessing {
        site: site.to_string(),
        source,
    }
}

fn datetime_dtype() -> DataType {
    DataType::Datetime(TimeUnit::Milliseconds, None)
}

/// Two column frame for one series, sorted by time with one row per timestamp.
fn series_frame(
    site: &str,
    code: &str,
    observations: &[Observation],
    no_data_value: Option<f64>,
) -> Result<DataFrame, ParseError> {
    let mut readings = BTreeMap::new();

    for observation in observations {
        let timestamp = DateTime::parse_from_rfc3339(&observation.date_time).map_err(|source| {
            ParseError::DateParsing {
                value: observation.date_time.clone(),
                parameter: code.to_string(),
                source,
            }
        })?;

        let value = match observation.numeric_value() {
            Some(value) if Some(value) == no_data_value => None,
            Some(value) => Some(value),
            None => {
                warn!(
                    "Non-numeric value {} for parameter {} at {} (site {}), storing null",
                    observation.value, code, observation.date_time, site
                );
                None
            }
        };
        readings.insert(timestamp.timestamp_millis(), value);
    }

    let (stamps, values): (Vec<i64>, Vec<Option<f64>>) = readings.into_iter().unzip();

    let datetime = Series::new(DATETIME_COLUMN.into(), stamps)
        .cast(&datetime_dtype())
        .map_err(frame_error(site))?;
    let values = Series::new(code.into(), values);

    DataFrame::new(vec![datetime.into(), values.into()]).map_err(frame_error(site))
}

/// Full join of all frames on `datetime`, ascending.
fn merge_on_datetime(frames: Vec<DataFrame>) -> PolarsResult<DataFrame> {
    let mut frames = frames.into_iter();
    let Some(first) = frames.next() else {
        let datetime = Series::new_empty(DATETIME_COLUMN.into(), &datetime_dtype());
        return DataFrame::new(vec![datetime.into()]);
    };

    frames
        .fold(first.lazy(), |merged, frame| {
            merged.join(
                frame.lazy(),
                [col(DATETIME_COLUMN)],
                [col(DATETIME_COLUMN)],
                JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
            )
        })
        .sort([DATETIME_COLUMN], SortMultipleOptions::default())
        .collect()
}
