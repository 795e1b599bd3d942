//! Command-line interface definitions for philo_quotes.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every flag has a default that reproduces the site's canonical scrape: the
//! full page range against philo52.com, writing into the current directory.

use clap::Parser;

/// Command-line arguments for the philo_quotes scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape the whole site into ./quotes
/// philo_quotes -o ./quotes
///
/// # Re-scrape a narrow page window
/// philo_quotes -o ./quotes --start-page 120 --end-page 140
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the quotation text files
    #[arg(short, long, default_value = ".")]
    pub out_dir: String,

    /// URL template prefix; the page index is appended verbatim
    #[arg(
        long,
        default_value = "https://www.philo52.com/mobile/articles.php?lng=fr&pg="
    )]
    pub base_url: String,

    /// First page index to fetch
    #[arg(long, default_value_t = 0)]
    pub start_page: u32,

    /// Last page index to fetch (inclusive)
    #[arg(long, default_value_t = 99_998)]
    pub end_page: u32,
}
