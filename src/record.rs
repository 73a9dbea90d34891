//! The record module holds the structured substance data produced by the parser.

use serde::{Deserialize, Serialize};

/// Whether a substance is regulatorily classified as a medicine.
///
/// Serialized as JSON `true`, `false` or `null`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Classification {
    /// Classified as a medicine.
    Yes,
    /// Not classified as a medicine.
    No,
    /// No classification was found.
    #[default]
    Unknown,
}

impl Classification {
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl From<Option<bool>> for Classification {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<Classification> for Option<bool> {
    fn from(value: Classification) -> Self {
        match value {
            Classification::Yes => Some(true),
            Classification::No => Some(false),
            Classification::Unknown => None,
        }
    }
}

/// A single substance extracted from the guide text.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Record {
    /// The subject's label as it appeared in the source.
    pub name: String,
    /// Synonyms in the order they appeared.
    pub synonyms: Vec<String>,
    #[serde(rename = "is_medicine")]
    pub classification: Classification,
    pub comment: Option<String>,
}

impl Record {
    /// Opens a record with no fields populated yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synonyms: Vec::new(),
            classification: Classification::Unknown,
            comment: None,
        }
    }

    /// Returns `true` once any of synonyms, classification or comment carries data.
    ///
    /// Records without fields are never emitted.
    pub fn has_fields(&self) -> bool {
        self.classification.is_known() || !self.synonyms.is_empty() || self.comment.is_some()
    }
}

/// A record together with the free text that only the classified catalog carries.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub record: Record,
    /// The classification answer as written, such as `Nej, koffein är inte ett läkemedel`.
    #[serde(
        rename = "classification",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub classification_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Self {
            record,
            classification_text: None,
            description: None,
        }
    }
}
