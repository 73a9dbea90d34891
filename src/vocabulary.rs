//! The vocabulary module holds the language-specific literals the parser recognizes.
//!
//! Labels, answer tokens and the footer sentinel are plain data so the parser can be
//! pointed at another label vocabulary without touching its state machine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::constants::{
    AFFIRMATIVE_TOKEN, ANSWER_SEPARATOR, CLASSIFICATION_LABELS, COMMENT_LABELS,
    COMMENT_NAME_THRESHOLD, DESCRIPTION_LABELS, FOOTER_SENTINEL, LABEL_SEPARATOR, NEGATIVE_TOKEN,
    SYNONYMS_LABELS,
};
use crate::record::Classification;

/// The record field introduced by a label line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Synonyms,
    Classification,
    Comment,
    /// Free text following the classification answer on the guide page.
    Description,
}

impl Field {
    const ALL: [Field; 4] = [
        Field::Synonyms,
        Field::Classification,
        Field::Comment,
        Field::Description,
    ];
}

/// A recognized label line, with the text following `Label:` when present.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Label<'a> {
    pub field: Field,
    pub inline: Option<&'a str>,
}

/// Literal tokens recognized while parsing.
///
/// Missing keys in a JSON vocabulary file fall back to the Swedish defaults.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Labels introducing a synonyms block.
    pub synonyms: Vec<String>,
    /// Labels introducing a classification line.
    pub classification: Vec<String>,
    /// Labels introducing a comment block.
    pub comment: Vec<String>,
    /// Labels introducing a description block.
    pub description: Vec<String>,
    pub affirmative: String,
    pub negative: String,
    /// Separator following an answer token on data lines, as in `Ja, ...`.
    pub answer_separator: String,
    /// Separator between a label and its inline value, as in `Synonymer: ...`.
    pub label_separator: String,
    /// Everything at and after this string is discarded. Empty disables truncation.
    pub footer_sentinel: String,
    /// Maximum length in characters of a line that may end a comment block.
    pub comment_name_threshold: usize,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            synonyms: owned(&SYNONYMS_LABELS),
            classification: owned(&CLASSIFICATION_LABELS),
            comment: owned(&COMMENT_LABELS),
            description: owned(&DESCRIPTION_LABELS),
            affirmative: AFFIRMATIVE_TOKEN.to_string(),
            negative: NEGATIVE_TOKEN.to_string(),
            answer_separator: ANSWER_SEPARATOR.to_string(),
            label_separator: LABEL_SEPARATOR.to_string(),
            footer_sentinel: FOOTER_SENTINEL.to_string(),
            comment_name_threshold: COMMENT_NAME_THRESHOLD,
        }
    }
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

impl Vocabulary {
    /// Loads a vocabulary from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid vocabulary document.
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            fs::read_to_string(path).context(format!("Failed to read vocabulary file: {path}"))?;
        Self::from_json(&content).context(format!("Invalid vocabulary file: {path}"))
    }

    /// Parses a vocabulary from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or has mistyped keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the label a trimmed line represents, if any.
    ///
    /// A line is a label when it equals a configured label, or when it starts with a
    /// configured label immediately followed by the label separator.
    pub fn label<'a>(&self, line: &'a str) -> Option<Label<'a>> {
        Field::ALL.into_iter().find_map(|field| {
            self.labels(field)
                .iter()
                .find_map(|label| self.match_label(line, label))
                .map(|inline| Label { field, inline })
        })
    }

    /// The first configured label of a field, used when writing label lines.
    pub fn label_text(&self, field: Field) -> Option<&str> {
        self.labels(field)
            .iter()
            .map(String::as_str)
            .find(|label| !label.is_empty())
    }

    fn labels(&self, field: Field) -> &[String] {
        match field {
            Field::Synonyms => &self.synonyms,
            Field::Classification => &self.classification,
            Field::Comment => &self.comment,
            Field::Description => &self.description,
        }
    }

    /// `Some(None)` for an exact match, `Some(Some(rest))` for `label<separator>rest`.
    fn match_label<'a>(&self, line: &'a str, label: &str) -> Option<Option<&'a str>> {
        if label.is_empty() {
            return None;
        }
        if line == label {
            return Some(None);
        }
        if self.label_separator.is_empty() {
            return None;
        }

        line.strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(self.label_separator.as_str()))
            .map(|rest| Some(rest.trim()))
    }

    /// Returns `true` for answer data lines such as `Ja, ...`, `Nej, ...` or a bare token.
    pub fn is_answer(&self, line: &str) -> bool {
        [&self.affirmative, &self.negative]
            .into_iter()
            .filter(|token| !token.is_empty())
            .any(|token| {
                line.strip_prefix(token.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(&self.answer_separator))
            })
    }

    /// Reads the classification a line starts with.
    pub fn answer(&self, line: &str) -> Classification {
        if !self.affirmative.is_empty() && line.starts_with(&self.affirmative) {
            Classification::Yes
        } else if !self.negative.is_empty() && line.starts_with(&self.negative) {
            Classification::No
        } else {
            Classification::Unknown
        }
    }

    /// Returns the text before the first occurrence of the footer sentinel.
    pub fn strip_footer<'a>(&self, text: &'a str) -> &'a str {
        if self.footer_sentinel.is_empty() {
            return text;
        }

        match text.split_once(self.footer_sentinel.as_str()) {
            Some((body, _footer)) => body,
            None => text,
        }
    }

    /// Returns `true` when a line looks like the next subject's name rather than
    /// a comment continuation.
    pub(crate) fn looks_like_name(&self, line: &str) -> bool {
        line.chars().next().is_some_and(char::is_uppercase)
            && line.chars().count() < self.comment_name_threshold
    }
}
