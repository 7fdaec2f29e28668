use super::error::PmError;
use super::TS_FORMAT;
use chrono::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One raw measurement as sent by the management endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PmSample {
    pub time_stamp: String,
    pub value: f64,
}

/// The PM series of one module network interface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PmObject {
    pub class: String,
    pub data: Vec<PmSample>,
    pub module_id: u8,
    pub nw_intf_id: u8,
    pub resource: String,
    #[serde(rename = "Type")]
    pub kind: String,
}

/// Response envelope of the `DWDMModuleNwIntfPM` state query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PmResponse {
    pub object: PmObject,
    #[serde(default)]
    pub object_id: String,
}

/// A sample placed on the chart: seconds relative to the last sample, and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub offset: f64,
    pub value: f64,
}

impl PmResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<PmResponse, PmError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Init a PmResponse from a json file previously saved from the endpoint.
    pub fn from_json_file<P: AsRef<Path>>(fin: P) -> Result<PmResponse, PmError> {
        let bytes = fs::read(fin)?;
        PmResponse::from_slice(&bytes)
    }
}

impl PmObject {
    /// Converts the samples to plot points, keeping their order.
    /// The offset is taken against the last sample in the array,
    /// which is not necessarily the latest one in time.
    pub fn points(&self) -> Result<Vec<PlotPoint>, PmError> {
        let seconds = self
            .data
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                parse_timestamp(&sample.time_stamp)
                    .map(|dt| dt.timestamp())
                    .map_err(|source| PmError::Timestamp {
                        index,
                        value: sample.time_stamp.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<i64>, PmError>>()?;
        let last = match seconds.last() {
            Some(&s) => s,
            None => return Ok(Vec::new()),
        };
        let points = seconds
            .iter()
            .zip(self.data.iter())
            .map(|(&s, sample)| PlotPoint {
                offset: (s - last) as f64,
                value: sample.value,
            })
            .collect();
        Ok(points)
    }

    pub fn title(&self) -> String {
        format!(
            "ModuleId: {}, NwIntfId: {}, Resource:{}, Type:{}, Class:{}",
            self.module_id, self.nw_intf_id, self.resource, self.kind, self.class
        )
    }

    pub fn value_label(&self) -> String {
        format!("Resource:{}, Type: {} In(dB)", self.resource, self.kind)
    }
}

/// Parses a timestamp such as `2017-03-01 10:15:30.123456789 -0800 PST`.
/// The zone abbreviation and anything after it are ignored,
/// the numeric offset decides the instant.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let fields: Vec<&str> = s.split_whitespace().take(3).collect();
    DateTime::parse_from_str(&fields.join(" "), TS_FORMAT)
}
