pub const DEFAULT_GUIDE_URL: &str = "https://www.lakemedelsverket.se/sv/behandling-och-forskrivning/kopa-anvanda-och-hantera/vad-ar-ett-lakemedel/amnesguiden";

pub const DEFAULT_SOURCE_NAME: &str = "Läkemedelsverket Ämnesguiden";

pub(crate) const USER_AGENT: &str = "Amnesguide Bot";

pub(crate) const FOOTER_SENTINEL: &str = "Välj sidfotens innehåll";

pub(crate) const SYNONYMS_LABELS: [&str; 2] = ["Synonymer", "Synonym"];
pub(crate) const CLASSIFICATION_LABELS: [&str; 1] = ["Läkemedel"];
pub(crate) const COMMENT_LABELS: [&str; 1] = ["Kommentar"];
pub(crate) const DESCRIPTION_LABELS: [&str; 1] = ["Beskrivning"];

pub(crate) const AFFIRMATIVE_TOKEN: &str = "Ja";
pub(crate) const NEGATIVE_TOKEN: &str = "Nej";
pub(crate) const ANSWER_SEPARATOR: &str = ",";
pub(crate) const LABEL_SEPARATOR: &str = ":";

/// Lines shorter than this (in characters) that start uppercase end a comment block.
pub(crate) const COMMENT_NAME_THRESHOLD: usize = 80;

pub(crate) const WHITESPACE_COLLAPSER: &str = r"\s+";

pub(crate) const ACCORDION_ITEM_SELECTORS: [&str; 2] =
    ["accordion-item.accordion-item", "div.accordion-item"];
pub(crate) const ACCORDION_NAME_SELECTORS: [&str; 2] = [".accordion-item__top strong", "strong"];
pub(crate) const ACCORDION_CONTENT_SELECTOR: &str = ".accordion-item__content";

/// Elements rendered on their own line(s) when flattening accordion content.
pub(crate) const BLOCK_ELEMENTS: [&str; 17] = [
    "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "table", "tr", "section", "h1", "h2", "h3",
    "h4", "h5", "h6",
];
