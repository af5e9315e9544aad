//! Instantaneous-values documents shaped like the live service output, trimmed
//! to what the parser reads plus a few members it must ignore.

use serde_json::{json, Value};

pub const DISCLAIMER: &str = "Provisional data are subject to revision. Go to \
    http://waterdata.usgs.gov/nwis/help/?provisional for more information.";

/// One `timeSeries` entry for `code` with the given `(dateTime, value)` readings.
pub fn series(code: &str, readings: &[(&str, &str)]) -> Value {
    let values: Vec<Value> = readings
        .iter()
        .map(|(date_time, value)| {
            json!({
                "value": value,
                "qualifiers": ["P"],
                "dateTime": date_time,
            })
        })
        .collect();

    json!({
        "sourceInfo": { "siteName": "TEST SITE" },
        "variable": {
            "variableCode": [{
                "value": code,
                "network": "NWIS",
                "vocabulary": "NWIS:UnitValues",
                "variableID": 45807202,
                "default": true,
            }],
            "variableName": format!("Parameter {code}"),
            "noDataValue": -999999.0,
        },
        "values": [{
            "value": values,
            "qualifier": [{ "qualifierCode": "P" }],
            "method": [{ "methodID": 69928 }],
        }],
        "name": format!("USGS:TEST:{code}:00000"),
    })
}

/// A series descriptor whose observation array is empty.
pub fn empty_series(code: &str) -> Value {
    series(code, &[])
}

/// A complete response document for `site` holding `time_series`.
pub fn iv_json(site: &str, time_series: &[Value]) -> Value {
    json!({
        "name": "ns1:timeSeriesResponseType",
        "declaredType": "org.cuahsi.waterml.TimeSeriesResponseType",
        "scope": "javax.xml.bind.JAXBElement$GlobalScope",
        "value": {
            "queryInfo": {
                "queryURL": "http://waterservices.usgs.gov/nwis/iv/format=json",
                "criteria": {
                    "locationParam": format!("[ALL:{site}]"),
                    "variableParam": "[ALL]",
                    "parameter": [],
                },
                "note": [
                    { "value": format!("[ALL:{site}]"), "title": "filter:sites" },
                    { "value": "[mode=RANGE]", "title": "filter:timeRange" },
                    { "value": "methodIds=[ALL]", "title": "filter:methodId" },
                    { "value": DISCLAIMER, "title": "disclaimer" },
                    { "value": "vaas01", "title": "Server" },
                ],
            },
            "timeSeries": time_series,
        },
        "nil": false,
        "globalScope": true,
        "typeSubstituted": false,
    })
}

/// Four parameters at a reservoir site, all reporting on the same 15 minute grid.
pub fn reservoir_site_json() -> Value {
    let stamps = [
        "2022-02-22T00:00:00.000-05:00",
        "2022-02-22T00:15:00.000-05:00",
        "2022-02-22T00:30:00.000-05:00",
    ];
    let readings = |values: [&'static str; 3]| -> Vec<(&'static str, &'static str)> {
        stamps.iter().copied().zip(values).collect()
    };

    iv_json(
        "0204295505",
        &[
            series("62620", &readings(["1.72", "1.75", "1.79"])),
            series("00045", &readings(["0.00", "0.01", "0.00"])),
            series("00036", &readings(["210", "215", "208"])),
            series("00035", &readings(["8.1", "7.9", "9.4"])),
        ],
    )
}
