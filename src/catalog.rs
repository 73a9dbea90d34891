//! The catalog module groups parsed records by classification and summarizes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Classification, Entry, Record};

/// Counts of records per classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "total_substances")]
    pub total: usize,
    #[serde(rename = "medicines_count")]
    pub medicines: usize,
    #[serde(rename = "not_medicines_count")]
    pub not_medicines: usize,
    #[serde(rename = "unknown_count")]
    pub unknown: usize,
}

impl Summary {
    pub fn of(records: &[Record]) -> Self {
        Self::from_classifications(records.iter().map(|record| record.classification))
    }

    pub fn from_classifications(classifications: impl IntoIterator<Item = Classification>) -> Self {
        classifications
            .into_iter()
            .fold(Self::default(), |mut summary, classification| {
                summary.total += 1;
                match classification {
                    Classification::Yes => summary.medicines += 1,
                    Classification::No => summary.not_medicines += 1,
                    Classification::Unknown => summary.unknown += 1,
                }
                summary
            })
    }
}

/// Describes where and when the records were collected.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub url: Option<String>,
    pub scraped_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Entries partitioned by classification, in source order.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ByClassification {
    pub medicines: Vec<Entry>,
    pub not_medicines: Vec<Entry>,
    pub unknown: Vec<Entry>,
}

/// The classified document written by `--catalog` output.
///
/// Unlike the plain records array, its entries carry the classification answer as written
/// and the description when the source has them.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: Metadata,
    pub substances: Vec<Entry>,
    pub by_classification: ByClassification,
}

impl Catalog {
    /// Builds a catalog stamped with the current time.
    pub fn new(entries: Vec<Entry>, source: &str, url: Option<&str>) -> Self {
        Self::with_timestamp(entries, source, url, Utc::now())
    }

    /// Builds a catalog stamped with `scraped_at`.
    pub fn with_timestamp(
        entries: Vec<Entry>,
        source: &str,
        url: Option<&str>,
        scraped_at: DateTime<Utc>,
    ) -> Self {
        let mut by_classification = ByClassification::default();
        for entry in &entries {
            let bucket = match entry.record.classification {
                Classification::Yes => &mut by_classification.medicines,
                Classification::No => &mut by_classification.not_medicines,
                Classification::Unknown => &mut by_classification.unknown,
            };
            bucket.push(entry.clone());
        }

        Self {
            metadata: Metadata {
                source: source.to_string(),
                url: url.map(str::to_string),
                scraped_at,
                summary: Summary::from_classifications(
                    entries.iter().map(|entry| entry.record.classification),
                ),
            },
            substances: entries,
            by_classification,
        }
    }

    pub fn summary(&self) -> Summary {
        self.metadata.summary
    }
}
