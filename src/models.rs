//! Data models for extracted quotations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Quotation`]: a single quotation with its attribution
//! - [`Attribution`]: author/book citation or a bare free-form source
//! - [`RunStats`]: counters accumulated over a scraping run
//!
//! A quotation on philo52.com looks like
//! `"Le doute est le commencement de la sagesse." Aristote, Éthique à Nicomaque`
//! once the surrounding markup is stripped. The citation tail after the last
//! quote character either has a `", "`-separated author/book structure or is
//! kept verbatim as a source string.

/// A single quotation extracted from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotation {
    /// The quoted text. The closing quote character is consumed by the
    /// citation split; an opening quote, when present, stays in the text.
    pub text: String,
    /// Who said or wrote it, as far as the citation tail tells us.
    pub attribution: Attribution,
}

/// How a quotation is attributed.
///
/// The citation tail is split into author and book on the first `", "` when
/// one is present. Tails with no comma structure are kept whole; they are
/// often a bare author name, sometimes an editorial note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    /// A `"Author, Book"` style citation.
    Cited {
        /// The author name, before the first comma.
        author: String,
        /// The book or work title, everything after the first comma.
        book: String,
    },
    /// A free-form source string with no comma-separated structure.
    Bare(String),
}

impl Attribution {
    /// Parse a citation tail.
    ///
    /// Splits on the first comma when the tail contains `", "`, removing a
    /// leading `.` or `;` from each piece. Anything else is an
    /// [`Attribution::Bare`] source.
    pub fn parse(tail: &str) -> Self {
        if tail.contains(", ") {
            let (author, book) = tail.split_once(',').unwrap_or((tail, ""));
            Attribution::Cited {
                author: strip_leading_period(author).trim().to_string(),
                book: strip_leading_period(book).trim().to_string(),
            }
        } else {
            Attribution::Bare(tail.to_string())
        }
    }

    /// The name the output folder and filename are derived from.
    pub fn label(&self) -> &str {
        match self {
            Attribution::Cited { author, .. } => author,
            Attribution::Bare(source) => source,
        }
    }
}

/// Remove one leading `.` or `;` left behind by the markup stripping.
pub fn strip_leading_period(text: &str) -> &str {
    text.strip_prefix('.')
        .or_else(|| text.strip_prefix(';'))
        .unwrap_or(text)
}

/// Counters for a full scraping run, reported at the end.
#[derive(Debug, Default)]
pub struct RunStats {
    /// Pages fetched and parsed without error.
    pub pages_ok: u64,
    /// Pages skipped because of an HTTP or parsing error.
    pub pages_failed: u64,
    /// Quotation files written.
    pub quotations_written: u64,
}
