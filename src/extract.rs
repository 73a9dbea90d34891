use anyhow::Result;
use log::info;
use scraper::Selector as ScraperSelector;

use crate::accordion::accordion_text_within;
use crate::parse::parse_entries;
use crate::record::{Entry, Record};
use crate::vocabulary::Vocabulary;
use crate::InputFormat;

/// Extracts records from a document in the given format.
///
/// HTML documents are first flattened to accordion text; text documents are parsed as is.
///
/// # Arguments
///
/// * `content` - The document content
/// * `format` - Whether `content` is a text dump or an HTML page
/// * `vocabulary` - Labels and tokens to recognize
/// * `selector` - An optional CSS selector limiting the HTML searched for accordion items
///
/// # Errors
///
/// This function will return an error if accordion extraction fails for an HTML document.
pub fn extract_records(
    content: &str,
    format: InputFormat,
    vocabulary: &Vocabulary,
    selector: Option<&ScraperSelector>,
) -> Result<Vec<Record>> {
    let entries = extract_entries(content, format, vocabulary, selector)?;
    Ok(entries.into_iter().map(|entry| entry.record).collect())
}

/// Extracts entries, keeping the classification text and description of each record.
///
/// # Errors
///
/// This function will return an error if accordion extraction fails for an HTML document.
pub fn extract_entries(
    content: &str,
    format: InputFormat,
    vocabulary: &Vocabulary,
    selector: Option<&ScraperSelector>,
) -> Result<Vec<Entry>> {
    let text = match format {
        InputFormat::Text => content.to_string(),
        InputFormat::Html => accordion_text_within(content, selector, vocabulary)?,
    };

    let entries = parse_entries(&text, vocabulary);
    info!("Extracted {} records", entries.len());
    Ok(entries)
}
