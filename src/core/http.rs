//! HTTP utilities shared by the fetchers

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use std::time::Duration;
use tracing::debug;

/// User agent sent to FantasyPros; the site serves an empty shell to unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a client with the given user agent and timeout.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?)
}

/// GET a page and return its body, failing on non-2xx.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    debug!(url, "GET");
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}

/// Build bearer auth headers for JSON APIs.
pub fn bearer_header_map(token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    Ok(h)
}

/// A successfully fetched image body.
#[derive(Debug)]
pub struct ImageBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// GET binary content. Returns `Ok(None)` for anything but a 200 with a
/// non-empty body; transport errors are returned as `Err`.
pub async fn fetch_image(client: &Client, url: &str) -> Result<Option<ImageBody>> {
    let resp = client.get(url).send().await?;
    if resp.status() != StatusCode::OK {
        debug!(url, status = %resp.status(), "no image");
        return Ok(None);
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = resp.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageBody {
        bytes: bytes.to_vec(),
        content_type,
    }))
}
