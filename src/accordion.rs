//! The accordion module converts the rendered substance guide page into the plain text
//! layout the parser reads: one subject name line, one line per field, then a blank line.
//!
//! Item content is rendered one line per block element, so inline markup such as links or
//! emphasis stays on the line it belongs to. The lines are then folded into field blocks:
//! a paragraph that follows a labelled paragraph continues that field. Text following the
//! classification answer becomes the item's description.

use anyhow::Result;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector as ScraperSelector};

use crate::constants::{
    ACCORDION_CONTENT_SELECTOR, ACCORDION_ITEM_SELECTORS, ACCORDION_NAME_SELECTORS,
    BLOCK_ELEMENTS, WHITESPACE_COLLAPSER,
};
use crate::vocabulary::{Field, Vocabulary};

static WHITESPACE_COLLAPSER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(WHITESPACE_COLLAPSER).expect("Failed to compile WHITESPACE_COLLAPSER regex")
});

const LINE_BREAK_ELEMENT: &str = "br";

/// Extracts the text of every accordion item in the page.
///
/// # Arguments
///
/// * `html` - The HTML of the substance guide page
/// * `vocabulary` - Labels used to recognize and write field lines
///
/// # Errors
///
/// Returns an error if one of the built-in selectors fails to compile.
pub fn accordion_text(html: &str, vocabulary: &Vocabulary) -> Result<String> {
    accordion_text_within(html, None, vocabulary)
}

/// Extracts accordion text, limited to the parts of the page matching `selector`.
///
/// Items are looked up as `accordion-item` elements first, then as `div.accordion-item`.
/// Items missing a name or content block are skipped.
///
/// # Arguments
///
/// * `html` - The HTML of the substance guide page
/// * `selector` - An optional CSS selector to limit the HTML subset searched for items
/// * `vocabulary` - Labels used to recognize and write field lines
///
/// # Errors
///
/// Returns an error if one of the built-in selectors fails to compile.
pub fn accordion_text_within(
    html: &str,
    selector: Option<&ScraperSelector>,
    vocabulary: &Vocabulary,
) -> Result<String> {
    let selected_html = match selector {
        Some(sel) => {
            let document = Html::parse_document(html);
            let selected_content: Vec<String> = document.select(sel).map(|el| el.html()).collect();
            selected_content.join("\n")
        }
        None => html.to_string(),
    };

    let document = Html::parse_document(&selected_html);
    let mut items: Vec<ElementRef> = Vec::new();
    for item_selector in ACCORDION_ITEM_SELECTORS {
        items = document.select(&parse_selector(item_selector)?).collect();
        if !items.is_empty() {
            debug!("Found {} accordion items using {item_selector}", items.len());
            break;
        }
    }

    if items.is_empty() {
        warn!("No accordion items found");
    }

    let content_selector = parse_selector(ACCORDION_CONTENT_SELECTOR)?;
    let name_selectors = ACCORDION_NAME_SELECTORS
        .into_iter()
        .map(parse_selector)
        .collect::<Result<Vec<_>>>()?;

    let mut text = String::new();
    for (index, item) in items.iter().enumerate() {
        let name = name_selectors
            .iter()
            .find_map(|sel| item.select(sel).next())
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .filter(|name| !name.is_empty());
        let content = item.select(&content_selector).next();

        let (name, content) = match (name, content) {
            (Some(name), Some(content)) => (name, content),
            _ => {
                warn!("Skipping accordion item {index} without name or content");
                continue;
            }
        };

        text.push_str(&name);
        text.push('\n');
        for line in fold_fields(block_lines(content), vocabulary) {
            text.push_str(&line);
            text.push('\n');
        }
        text.push('\n');
    }

    Ok(text)
}

fn parse_selector(query: &str) -> Result<ScraperSelector> {
    ScraperSelector::parse(query).map_err(|e| anyhow::anyhow!("Invalid CSS selector {query}: {e}"))
}

/// One line per block element or `<br>`-separated run of inline content.
fn block_lines(element: ElementRef) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    collect_lines(element, &mut lines, &mut line);
    flush_line(&mut lines, &mut line);
    lines
}

fn collect_lines(element: ElementRef, lines: &mut Vec<String>, line: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            line.push_str(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };

        let name = child.value().name();
        if name == LINE_BREAK_ELEMENT {
            flush_line(lines, line);
            continue;
        }

        let is_block = BLOCK_ELEMENTS.contains(&name);
        if is_block {
            flush_line(lines, line);
        }
        collect_lines(child, lines, line);
        if is_block {
            flush_line(lines, line);
        }
    }
}

fn flush_line(lines: &mut Vec<String>, line: &mut String) {
    let collapsed = collapse_whitespace(line);
    line.clear();
    if !collapsed.is_empty() {
        lines.push(collapsed);
    }
}

/// A label line together with the unlabelled lines that follow it.
struct FieldBlock {
    field: Field,
    parts: Vec<String>,
}

/// Rewrites an item's lines so each field is a single label line.
///
/// Lines before the first label are kept as they are.
fn fold_fields(lines: Vec<String>, vocabulary: &Vocabulary) -> Vec<String> {
    let mut folded = Vec::new();
    let mut blocks: Vec<FieldBlock> = Vec::new();

    for line in lines {
        if let Some(label) = vocabulary.label(&line) {
            blocks.push(FieldBlock {
                field: label.field,
                parts: label
                    .inline
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .into_iter()
                    .collect(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.parts.push(line);
        } else {
            trace!("Keeping unlabelled line {line:?}");
            folded.push(line);
        }
    }

    for FieldBlock { field, mut parts } in blocks {
        if field != Field::Classification {
            push_field(&mut folded, vocabulary, field, &parts);
            continue;
        }

        let answered = parts
            .first()
            .is_some_and(|answer| vocabulary.answer(answer).is_known());
        if answered {
            let description = parts.split_off(1);
            push_field(&mut folded, vocabulary, Field::Classification, &parts);
            push_field(&mut folded, vocabulary, Field::Description, &description);
        } else if vocabulary.label_separator.is_empty() {
            // A bare unrecognized answer line would be read as the next subject.
            push_field(&mut folded, vocabulary, Field::Description, &parts);
        } else {
            push_field(&mut folded, vocabulary, Field::Classification, &parts);
        }
    }

    folded
}

/// Writes `Label: value`, or the label and value on separate lines when the vocabulary
/// has no label separator.
fn push_field(folded: &mut Vec<String>, vocabulary: &Vocabulary, field: Field, parts: &[String]) {
    if parts.is_empty() {
        return;
    }
    let Some(label) = vocabulary.label_text(field) else {
        debug!("Dropping {field:?} text without a configured label");
        return;
    };

    let value = parts.join(" ");
    if vocabulary.label_separator.is_empty() {
        folded.push(label.to_string());
        folded.push(value);
    } else {
        folded.push(format!("{label}{} {value}", vocabulary.label_separator));
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_COLLAPSER_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}
