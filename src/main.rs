//! # philo_quotes
//!
//! A scraper that archives the quotation collection of philo52.com as plain
//! text files, one file per quotation, organized into per-author folders.
//!
//! ## Features
//!
//! - Walks the site's numeric page index range sequentially
//! - Peels quotation text and attribution out of loosely structured HTML
//!   with string-splitting and regex heuristics
//! - Writes `Texte`/`Auteur`/`Livre` (or `Texte`/`Source`) text files with
//!   collision-free numbered names; re-runs extend, never overwrite
//!
//! ## Usage
//!
//! ```sh
//! philo_quotes -o ./quotes
//! ```
//!
//! ## Architecture
//!
//! A fetch-parse-save loop, fully sequential: one page is fetched, parsed,
//! and written before the next begins. Pages that fail (HTTP error on an
//! unassigned index, or anything else) are logged and skipped; the
//! filesystem is the only state carried between pages or runs.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod extract;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use models::RunStats;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("philo_quotes starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.out_dir, ?args.base_url, args.start_page, args.end_page, "Parsed CLI arguments");

    // The index is appended to the template, so only the prefix needs to be
    // a valid URL.
    if let Err(e) = Url::parse(&scrapers::philo::page_url(&args.base_url, args.start_page)) {
        error!(base_url = %args.base_url, error = %e, "Base URL is not a valid URL template");
        return Err(Box::new(e) as Box<dyn Error>);
    }

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&args.out_dir).await {
        error!(
            path = %args.out_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let client = Client::new();
    let mut stats = RunStats::default();

    // ---- Sequential fetch-parse-save loop ----
    for index in args.start_page..=args.end_page {
        match process_page(&client, &args.base_url, &args.out_dir, index).await {
            Ok(written) => {
                stats.pages_ok += 1;
                stats.quotations_written += written;
                info!(page = index, quotations = written, "Processed page");
            }
            Err(e) => {
                stats.pages_failed += 1;
                if let Some(http) = e.downcast_ref::<reqwest::Error>() {
                    warn!(page = index, error = %http, "Failed to fetch page; skipping");
                } else {
                    error!(page = index, error = %e, "Error while processing page; skipping");
                }
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        pages_ok = stats.pages_ok,
        pages_failed = stats.pages_failed,
        quotations_written = stats.quotations_written,
        ?elapsed,
        secs = elapsed.as_secs(),
        "Execution complete"
    );

    Ok(())
}

/// Fetch, parse, and persist one page.
///
/// Returns the number of quotation files written. Errors from the fetch or
/// from any file write bubble up so the caller can skip the page; a page
/// whose chunks parse to nothing is a success with zero records.
#[instrument(level = "debug", skip_all, fields(page = index))]
async fn process_page(
    client: &Client,
    base_url: &str,
    out_dir: &str,
    index: u32,
) -> Result<u64, Box<dyn Error>> {
    let html = scrapers::philo::fetch_page(client, base_url, index).await?;
    let quotations = extract::extract_quotations(&html);
    debug!(count = quotations.len(), "Extracted quotations");

    let mut written = 0u64;
    for quotation in &quotations {
        outputs::text::write_quotation(out_dir, quotation).await?;
        written += 1;
    }
    Ok(written)
}
