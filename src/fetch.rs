use anyhow::{Context, Result};
use log::info;
use url::Url;

use crate::constants::USER_AGENT;

/// Downloads a page and returns its body as text.
///
/// # Arguments
///
/// * `url` - The URL of the page to download
///
/// # Errors
///
/// This function will return an error if the request fails, the server answers with a
/// non-success status, or the body cannot be decoded.
pub async fn fetch_page(url: &Url) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Unable to build HTTP client")?;

    info!("Fetching {url}");
    let response = client
        .get(url.as_str())
        .send()
        .await
        .context(format!("Request to {url} failed"))?
        .error_for_status()?;
    info!("Fetched {url} with {}", response.status());

    response
        .text()
        .await
        .context(format!("Unable to read body of {url}"))
}
