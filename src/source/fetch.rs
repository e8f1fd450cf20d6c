//! Download and decode the published range document.

use crate::error::{Result, RoutesError};
use crate::models::RangeDocument;
use reqwest::StatusCode;

/// GET `url` and decode the body as a [`RangeDocument`].
///
/// Any status other than 200 is an error. No retry and no timeout.
pub async fn fetch_range_document(client: &reqwest::Client, url: &str) -> Result<RangeDocument> {
    log::info!("Fetching IP ranges from {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| RoutesError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(RoutesError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|source| RoutesError::Body {
        url: url.to_string(),
        source,
    })?;
    log::debug!("Got {} bytes from {url}", body.len());

    let doc = decode_range_document(url, &body)?;
    log::info!(
        "Range document syncToken={} creationTime={} records={}",
        doc.sync_token,
        doc.created_at()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| doc.creation_time.clone()),
        doc.prefixes.len()
    );
    Ok(doc)
}

/// Decode a range document, reporting the JSON path where decoding stopped.
pub fn decode_range_document(url: &str, body: &[u8]) -> Result<RangeDocument> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let doc: RangeDocument =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| RoutesError::Decode {
            url: url.to_string(),
            path: e.path().to_string(),
            source: e.into_inner(),
        })?;
    deserializer.end().map_err(|source| RoutesError::Decode {
        url: url.to_string(),
        path: ".".to_string(),
        source,
    })?;
    Ok(doc)
}
