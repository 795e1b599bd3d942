//! Plain-text quotation files, one file per quotation.
//!
//! Author/book citations get a folder named after the sanitized author, with
//! files `{author}_{NNN}.txt` inside. Bare sources land directly in the
//! output directory as `{source}_{NNN}.txt`. The numeric suffix is chosen by
//! a linear probe over existing files, so nothing is ever overwritten.

use crate::models::{Attribution, Quotation};
use crate::utils::{next_free_path, sanitize_name};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

/// Write one quotation to its own text file under `out_dir`.
///
/// # Returns
///
/// The path of the file written.
///
/// # File body
///
/// ```text
/// Texte : ...
/// Auteur : ...
/// Livre : ...
/// ```
///
/// or, for a bare source:
///
/// ```text
/// Texte : ...
/// Source : ...
/// ```
#[instrument(level = "debug", skip_all)]
pub async fn write_quotation(
    out_dir: &str,
    quotation: &Quotation,
) -> Result<PathBuf, Box<dyn Error>> {
    let (path, body) = match &quotation.attribution {
        Attribution::Cited { author, book } => {
            let stem = sanitize_name(author);
            let author_dir = Path::new(out_dir).join(&stem);
            fs::create_dir_all(&author_dir).await?;
            let path = next_free_path(&author_dir, &stem);
            let body = format!(
                "Texte : {}\nAuteur : {}\nLivre : {}\n",
                quotation.text, author, book
            );
            (path, body)
        }
        Attribution::Bare(source) => {
            let stem = sanitize_name(source);
            let path = next_free_path(Path::new(out_dir), &stem);
            let body = format!("Texte : {}\nSource : {}\n", quotation.text, source);
            (path, body)
        }
    };

    fs::write(&path, body).await?;
    debug!(path = %path.display(), "Wrote quotation file");
    Ok(path)
}
