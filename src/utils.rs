//! Utility functions for name sanitization, file naming, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Filesystem-safe name sanitization for author/source strings
//! - Collision-free output filename generation
//! - String truncation for logging
//! - File system validation for the output directory

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Sanitize an author or source string into a filesystem-safe name.
///
/// Every run of non-word characters (anything outside letters, digits, and
/// `_`, Unicode-aware, so accented letters survive) collapses to a single
/// underscore.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_name("Jean-Paul Sartre"), "Jean_Paul_Sartre");
/// assert_eq!(sanitize_name("Éthique à Nicomaque"), "Éthique_à_Nicomaque");
/// ```
pub fn sanitize_name(name: &str) -> String {
    NON_WORD.replace_all(name, "_").into_owned()
}

/// Find the next free numbered output path in a directory.
///
/// Probes `{stem}_001.txt`, `{stem}_002.txt`, ... until a path that does not
/// exist is found. Existing files are never overwritten; a re-run extends the
/// numbering instead.
///
/// # Arguments
///
/// * `dir` - Directory the file will live in
/// * `stem` - Sanitized base filename, without suffix
pub fn next_free_path(dir: &Path, stem: &str) -> PathBuf {
    let mut counter = 1u32;
    loop {
        let candidate = dir.join(format!("{stem}_{counter:03}.txt"));
        if !candidate.is_file() {
            return candidate;
        }
        counter += 1;
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte count
/// indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
