//! The amnesguide library extracts structured substance records from the text of the
//! Swedish Medical Products Agency's substance guide.

pub mod accordion;
pub mod catalog;
pub mod compose;
pub mod constants;
pub mod extract;
pub mod fetch;
pub mod parse;
pub mod record;
pub mod vocabulary;

/// Enum representing the layout of an input document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputFormat {
    /// A plain text dump of the guide
    #[default]
    Text,
    /// A saved or fetched HTML page with accordion items
    Html,
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "text" | "txt" => Ok(InputFormat::Text),
            "html" => Ok(InputFormat::Html),
            _ => Err(format!("Invalid input format: {}", input)),
        }
    }
}

pub use catalog::{Catalog, Summary};
pub use compose::{compose_catalog, compose_records};
pub use extract::{extract_entries, extract_records};
pub use parse::{parse_entries, parse_records};
pub use record::{Classification, Entry, Record};
pub use vocabulary::Vocabulary;
