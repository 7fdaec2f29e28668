use super::error::PmError;
use super::query::PmQuery;
use reqwest::header::ACCEPT;
use tracing::{debug, info, warn};

/// Sends the PM query as the body of a GET request and returns the raw response body.
///
/// The body is returned whatever the status code is, the decoder reports
/// a more useful error for an unexpected payload.
/// Connection level failures are returned as `PmError::Transport`.
pub fn fetch_pm(url: &str, query: &PmQuery) -> Result<Vec<u8>, PmError> {
    let payload = query.to_json()?;
    debug!(
        "GET {} with payload {}",
        url,
        String::from_utf8_lossy(&payload)
    );
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .body(payload)
        .send()?;

    let status = response.status();
    info!("response Status: {}", status);
    info!("response Headers: {:?}", response.headers());
    if !status.is_success() {
        warn!("PM endpoint answered with status {}", status);
    }

    // consumes the response, the connection is released here
    let body = response.bytes()?;
    debug!("read {} bytes of response body", body.len());
    Ok(body.to_vec())
}
