//! Quotation extraction from raw page HTML.
//!
//! philo52.com serves quotations as loosely structured HTML: each quotation
//! sits in a `<div style="text-align:justify...">` block after an `<hr />`,
//! with the quoted text wrapped in plain `"` characters and the citation
//! trailing after the closing quote. Nothing here is a real document model,
//! so this module works on the raw markup with string splitting and a couple
//! of regexes rather than a DOM parser.
//!
//! The pipeline per page:
//!
//! 1. **Normalize**: scrub decorative quotes on right-aligned citation lines,
//!    collapse `<hr />` spacing, drop `&nbsp;` entities.
//! 2. **Chunk**: split on the literal block delimiter.
//! 3. **Parse blocks**: trim boilerplate, strip tags, and apply the
//!    quote-counting heuristics that separate text from citation.

use crate::models::{strip_leading_period, Attribution, Quotation};
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Marks the start of each quotation block in the page HTML.
const CHUNK_DELIMITER: &str = r#"<hr /><div style="text-align:justify"#;

/// Navigation footer; everything from here on is site chrome, not content.
const MENU_MARKER: &str = "Retour au menu";

/// Page header boilerplate ends at the FAQ link.
const FAQ_MARKER: &str = "FAQ";

static HR_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<hr\s*/>\s*\n+").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Extract every quotation from one page of raw HTML.
///
/// A page yields zero or more quotations; malformed chunks contribute nothing
/// rather than failing the page.
pub fn extract_quotations(html: &str) -> Vec<Quotation> {
    let normalized = normalize_page(html);
    let mut quotations = Vec::new();
    for chunk in normalized.split(CHUNK_DELIMITER) {
        for block in parse_chunk(chunk) {
            debug!(block = %truncate_for_log(&block, 120), "Parsed quotation block");
            quotations.push(parse_record(&block));
        }
    }
    quotations
}

/// Strip known noise from raw page HTML before chunking.
///
/// Citation lines are right-aligned and sometimes carry decorative `"`
/// characters; those are deleted up front so the quote-counting heuristics
/// only ever see the quotes that delimit quotation text. `<hr />` spacing
/// variants are collapsed so the chunk delimiter matches literally.
pub fn normalize_page(html: &str) -> String {
    let descited = html
        .split('\n')
        .map(|line| {
            if line.contains("text-align:right") {
                line.replace('"', "")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    HR_BREAKS
        .replace_all(&descited, "<hr />")
        .replace("<hr />\t", "<hr />")
        .replace("text-align: ", "text-align:")
        .replace("&nbsp;", "")
        .replace("&#160;", "")
}

/// Reduce one chunk to its quotation blocks.
///
/// Returns zero blocks when the chunk holds no quoted text, one block for
/// the common case, and two when the four-quote heuristic detects a pair of
/// quotations sharing a chunk.
pub fn parse_chunk(chunk: &str) -> Vec<String> {
    let mut chunk = chunk;
    if let Some((content, _)) = chunk.split_once(MENU_MARKER) {
        chunk = content;
    }
    let mut text = if chunk.contains(FAQ_MARKER) {
        // Keep the segment between the first two FAQ markers; the header
        // boilerplate before the first one never holds a quotation.
        chunk.split(FAQ_MARKER).nth(1).unwrap_or_default().to_string()
    } else {
        chunk.to_string()
    };

    text = text
        .replace('\r', "")
        .replace('\n', "")
        .replace("text-autospace:none", "");
    let text = HTML_TAG
        .replace_all(&text, "")
        .replace("\">", "")
        .trim_start()
        .to_string();

    if !text.contains('"') {
        return Vec::new();
    }
    split_if_four_quotes(&text)
}

/// Split a block containing exactly four `"` characters after the third one.
///
/// Two quotations occasionally share one chunk; each contributes an opening
/// and a closing quote, so four quotes total means the boundary lies right
/// after the third. Any other quote count passes through unsplit.
pub fn split_if_four_quotes(block: &str) -> Vec<String> {
    let quote_positions: Vec<usize> = block
        .char_indices()
        .filter(|&(_, c)| c == '"')
        .map(|(i, _)| i)
        .collect();
    if quote_positions.len() == 4 {
        let boundary = quote_positions[2] + 1;
        vec![
            block[..boundary].trim().to_string(),
            block[boundary..].trim().to_string(),
        ]
    } else {
        vec![block.to_string()]
    }
}

/// Split a quotation block into text and citation at the last quote.
///
/// The quoted text ends at the last `"` in the block (after dropping a
/// trailing one); whatever follows is the citation tail. A block with no
/// remaining quote becomes an empty text with the whole block as its source.
pub fn parse_record(block: &str) -> Quotation {
    let block = block.strip_suffix('"').unwrap_or(block);
    let (text, tail) = match block.rfind('"') {
        Some(i) => (&block[..i], &block[i + 1..]),
        None => ("", block),
    };
    Quotation {
        text: strip_leading_period(text.trim()).trim().to_string(),
        attribution: Attribution::parse(tail.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_quotes_on_citation_lines() {
        let html = "<div>\"Une pensée.\"</div>\n<div style=\"text-align:right\">\"Alain\"</div>";
        let normalized = normalize_page(html);
        assert!(normalized.contains("\"Une pensée.\""));
        assert!(normalized.contains("<div style=text-align:right>Alain</div>"));
    }

    #[test]
    fn test_normalize_collapses_hr_spacing() {
        let normalized = normalize_page("<hr/>\n\n<div>x</div>");
        assert_eq!(normalized, "<hr /><div>x</div>");
        let tabbed = normalize_page("<hr />\tfoo");
        assert_eq!(tabbed, "<hr />foo");
    }

    #[test]
    fn test_normalize_removes_nbsp_entities() {
        assert_eq!(normalize_page("a&nbsp;b&#160;c"), "abc");
    }

    #[test]
    fn test_parse_chunk_truncates_at_menu_marker() {
        let chunk = "\">\"La vie est courte.\" Sénèque Retour au menu <a href=\"/\">menu</a>";
        let blocks = parse_chunk(chunk);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("La vie est courte."));
        assert!(!blocks[0].contains("Retour au menu"));
        assert!(!blocks[0].contains("menu"));
    }

    #[test]
    fn test_parse_chunk_strips_tags_and_leftovers() {
        let chunk = ";text-autospace:none\">\"Je pense, donc je suis.\" <i>Descartes, Discours de la méthode</i>";
        let blocks = parse_chunk(chunk);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            ";\"Je pense, donc je suis.\" Descartes, Discours de la méthode"
        );
    }

    #[test]
    fn test_parse_chunk_without_quotes_yields_nothing() {
        assert!(parse_chunk("<p>Page de garde sans citation</p>").is_empty());
        assert!(parse_chunk("").is_empty());
    }

    #[test]
    fn test_parse_chunk_keeps_segment_after_faq() {
        let chunk = "<a>FAQ</a>\"Tout passe.\" Héraclite FAQ footer";
        let blocks = parse_chunk(chunk);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("Tout passe."));
        assert!(!blocks[0].contains("footer"));
    }

    #[test]
    fn test_four_quotes_split_after_third() {
        // The boundary sits right after the third quote character, so the
        // first part ends with the second quotation's opening quote.
        let block = "\"Premier.\" Alain \"Second.\" Valéry";
        let blocks = split_if_four_quotes(block);
        assert_eq!(blocks, vec!["\"Premier.\" Alain \"", "Second.\" Valéry"]);
    }

    #[test]
    fn test_two_quotes_pass_through_unsplit() {
        let block = "\"Une seule citation.\" Alain";
        assert_eq!(split_if_four_quotes(block), vec![block.to_string()]);
    }

    #[test]
    fn test_parse_record_author_and_book() {
        // The split consumes the closing quote; the opening one stays part
        // of the text, as it always has in the output files.
        let quotation = parse_record("\"Le cœur a ses raisons.\" Pascal, Pensées");
        assert_eq!(quotation.text, "\"Le cœur a ses raisons.");
        assert_eq!(
            quotation.attribution,
            Attribution::Cited {
                author: "Pascal".to_string(),
                book: "Pensées".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_record_bare_source() {
        let quotation = parse_record("\"Connais-toi toi-même.\" Inscription de Delphes");
        assert_eq!(quotation.text, "\"Connais-toi toi-même.");
        assert_eq!(
            quotation.attribution,
            Attribution::Bare("Inscription de Delphes".to_string())
        );
    }

    #[test]
    fn test_parse_record_trailing_quote_only() {
        // One trailing quote and nothing else quoted: the whole block is a
        // citation tail with empty text.
        let quotation = parse_record("Sagesse populaire\"");
        assert_eq!(quotation.text, "");
        assert_eq!(
            quotation.attribution,
            Attribution::Bare("Sagesse populaire".to_string())
        );
    }

    #[test]
    fn test_extract_quotations_end_to_end() {
        let html = concat!(
            "<html><body><a href=\"faq.html\">FAQ</a>\n",
            "<hr/>\n\n",
            "<div style=\"text-align:justify;text-autospace:none\">",
            "\"La vraie éloquence se moque de l'éloquence.\"&nbsp;</div>\n",
            "<div style=\"text-align:right\">\"Pascal, Pensées\"</div>\n",
            "<hr/>\n",
            "<div style=\"text-align:justify\">\"Science sans conscience n'est que ruine de l'âme.\"</div>\n",
            "<div style=\"text-align:right\">Rabelais, Pantagruel</div>\n",
            "Retour au menu</body></html>",
        );
        let quotations = extract_quotations(html);
        assert_eq!(quotations.len(), 2);
        assert_eq!(
            quotations[0].text,
            "\"La vraie éloquence se moque de l'éloquence."
        );
        assert_eq!(
            quotations[0].attribution,
            Attribution::Cited {
                author: "Pascal".to_string(),
                book: "Pensées".to_string(),
            }
        );
        assert_eq!(
            quotations[1].attribution,
            Attribution::Cited {
                author: "Rabelais".to_string(),
                book: "Pantagruel".to_string(),
            }
        );
    }
}
