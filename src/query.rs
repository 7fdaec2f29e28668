use super::error::PmError;
use super::PM_STATE_PATH;
use serde::Serialize;

/// The body of a PM state query, serialized with the wire field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PmQuery {
    pub module_id: u8,
    pub nw_intf_id: u8,
    pub resource: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub class: String,
}

impl PmQuery {
    /// Builds the query from the textual CLI values,
    /// rejecting ids that are not small decimal integers.
    pub fn from_strs(
        module_id: &str,
        nw_intf_id: &str,
        resource: &str,
        kind: &str,
        class: &str,
    ) -> Result<PmQuery, PmError> {
        Ok(PmQuery {
            module_id: parse_id("ModuleId", module_id)?,
            nw_intf_id: parse_id("NwIntfId", nw_intf_id)?,
            resource: resource.to_string(),
            kind: kind.to_string(),
            class: class.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<Vec<u8>, PmError> {
        Ok(serde_json::to_vec(self)?)
    }
}

pub fn parse_id(name: &'static str, value: &str) -> Result<u8, PmError> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|e| PmError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Full url of the PM state endpoint on the given host and port.
pub fn pm_url(ip: &str, port: &str) -> String {
    format!("http://{}:{}{}", ip, port, PM_STATE_PATH)
}
