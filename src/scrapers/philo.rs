//! philo52.com page fetcher.
//!
//! Quotation pages live at sequential indexes on the mobile site, e.g.
//! `https://www.philo52.com/mobile/articles.php?lng=fr&pg=42`. Many indexes
//! in the range are unassigned and answer with an error status; those are
//! reported as errors and the caller skips the page.

use reqwest::Client;
use std::error::Error;
use tracing::{debug, instrument};

/// Build the URL for one page index.
///
/// The index is appended verbatim to the template prefix, matching the
/// site's `...articles.php?lng=fr&pg={index}` addressing.
pub fn page_url(base_url: &str, index: u32) -> String {
    format!("{base_url}{index}")
}

/// Fetch one page of raw HTML.
///
/// Any non-2xx status is an error; there are no retries. The body is
/// returned as text for the extraction pipeline.
#[instrument(level = "debug", skip_all, fields(index))]
pub async fn fetch_page(
    client: &Client,
    base_url: &str,
    index: u32,
) -> Result<String, Box<dyn Error>> {
    let url = page_url(base_url, index);
    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(%url, bytes = body.len(), "Fetched page");
    Ok(body)
}
