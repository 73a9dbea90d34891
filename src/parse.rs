//! The parse module turns the substance guide text dump into structured records.
//!
//! Parsing is a single pass over trimmed lines driven by an explicit cursor. The scanner is
//! either seeking the next subject name or collecting fields for an open record. A line
//! only closes the open record once that record carries at least one field; until then
//! stray lines are skipped as noise.

use log::{debug, trace};

use crate::record::{Classification, Entry, Record};
use crate::vocabulary::{Field, Label, Vocabulary};

/// The role of a single trimmed line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LineRole<'a> {
    Blank,
    Label(Label<'a>),
    Answer,
    Candidate,
}

enum State {
    SeekingSubject,
    InFields(Entry),
}

struct Cursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().map(str::trim).collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_blank(&mut self) {
        while self.peek().is_some_and(str::is_empty) {
            self.advance();
        }
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    vocabulary: &'a Vocabulary,
    entries: Vec<Entry>,
}

/// Parses the guide text into records.
///
/// Text at and after the vocabulary's footer sentinel is ignored. Records without any
/// synonyms, classification or comment are dropped. The function never fails: input that
/// does not fit the expected layout is skipped or attributed to the nearest field.
///
/// # Arguments
///
/// * `text` - The raw text dump, newline delimited
/// * `vocabulary` - Labels, answer tokens and footer sentinel to recognize
pub fn parse_records(text: &str, vocabulary: &Vocabulary) -> Vec<Record> {
    parse_entries(text, vocabulary)
        .into_iter()
        .map(|entry| entry.record)
        .collect()
}

/// Parses the guide text like [`parse_records`], keeping the classification answer as
/// written and any description block alongside each record.
///
/// Descriptions never make a record valid on their own.
pub fn parse_entries(text: &str, vocabulary: &Vocabulary) -> Vec<Entry> {
    let body = vocabulary.strip_footer(text);
    let parser = Parser {
        cursor: Cursor::new(body),
        vocabulary,
        entries: Vec::new(),
    };

    let entries = parser.run();
    debug!("Parsed {} records", entries.len());
    entries
}

impl<'a> Parser<'a> {
    fn run(mut self) -> Vec<Entry> {
        let mut state = State::SeekingSubject;

        loop {
            state = match state {
                State::SeekingSubject => match self.cursor.peek() {
                    None => break,
                    Some(line) => self.seek_subject(line),
                },
                State::InFields(entry) => match self.cursor.peek() {
                    None => {
                        self.finish(entry);
                        break;
                    }
                    Some(line) => self.step_fields(entry, line),
                },
            };
        }

        self.entries
    }

    fn classify(&self, line: &'a str) -> LineRole<'a> {
        if line.is_empty() {
            LineRole::Blank
        } else if let Some(label) = self.vocabulary.label(line) {
            LineRole::Label(label)
        } else if self.vocabulary.is_answer(line) {
            LineRole::Answer
        } else {
            LineRole::Candidate
        }
    }

    fn seek_subject(&mut self, line: &'a str) -> State {
        self.cursor.advance();
        match self.classify(line) {
            LineRole::Candidate => {
                trace!("Opening subject {line:?}");
                State::InFields(Entry::from(Record::named(line)))
            }
            LineRole::Blank | LineRole::Label(_) | LineRole::Answer => State::SeekingSubject,
        }
    }

    fn step_fields(&mut self, mut entry: Entry, line: &'a str) -> State {
        match self.classify(line) {
            LineRole::Label(label) => {
                self.cursor.advance();
                self.read_field(&mut entry, label);
                State::InFields(entry)
            }
            // The boundary line is left under the cursor and reopened as the next subject.
            LineRole::Candidate if entry.record.has_fields() => {
                self.finish(entry);
                State::SeekingSubject
            }
            LineRole::Candidate => {
                trace!("Skipping {line:?} while {:?} has no fields", entry.record.name);
                self.cursor.advance();
                State::InFields(entry)
            }
            LineRole::Blank | LineRole::Answer => {
                self.cursor.advance();
                State::InFields(entry)
            }
        }
    }

    fn read_field(&mut self, entry: &mut Entry, label: Label<'a>) {
        let inline = label.inline.filter(|value| !value.is_empty());
        let record = &mut entry.record;

        match label.field {
            Field::Synonyms => {
                let synonyms = self.read_synonyms(inline);
                if !synonyms.is_empty() {
                    record.synonyms = synonyms;
                }
            }
            Field::Classification => {
                let (classification, text) = self.read_classification(inline);
                if classification.is_known() {
                    record.classification = classification;
                }
                if let Some(text) = text {
                    entry.classification_text = Some(text.to_string());
                }
            }
            Field::Comment => {
                if let Some(comment) = self.read_comment(inline) {
                    record.comment = Some(comment);
                }
            }
            Field::Description => {
                if let Some(description) = self.read_description(inline) {
                    entry.description = Some(description);
                }
            }
        }
    }

    /// Collects lines up to a blank, label or answer line and splits them on commas.
    fn read_synonyms(&mut self, inline: Option<&'a str>) -> Vec<String> {
        let mut parts: Vec<&str> = inline.into_iter().collect();

        while let Some(line) = self.cursor.peek() {
            if self.classify(line) != LineRole::Candidate {
                break;
            }
            parts.push(line);
            self.cursor.advance();
        }

        split_synonyms(&parts.join(" "))
    }

    /// Reads the first non-blank line. Only a recognized answer is consumed.
    ///
    /// Returns the classification with the text it was read from, when that text was consumed.
    fn read_classification(
        &mut self,
        inline: Option<&'a str>,
    ) -> (Classification, Option<&'a str>) {
        if let Some(value) = inline {
            return (self.vocabulary.answer(value), Some(value));
        }

        self.cursor.skip_blank();
        let Some(line) = self.cursor.peek() else {
            return (Classification::Unknown, None);
        };

        let classification = self.vocabulary.answer(line);
        if !classification.is_known() {
            return (classification, None);
        }
        self.cursor.advance();
        (classification, Some(line))
    }

    /// Collects lines up to a blank or label line, stopping early at a short
    /// capitalized line once some comment text is collected.
    fn read_comment(&mut self, inline: Option<&'a str>) -> Option<String> {
        let mut lines: Vec<&str> = inline.into_iter().collect();

        while let Some(line) = self.cursor.peek() {
            match self.classify(line) {
                LineRole::Blank | LineRole::Label(_) => break,
                LineRole::Candidate
                    if !lines.is_empty() && self.vocabulary.looks_like_name(line) =>
                {
                    break;
                }
                LineRole::Candidate | LineRole::Answer => {
                    lines.push(line);
                    self.cursor.advance();
                }
            }
        }

        (!lines.is_empty()).then(|| lines.join(" "))
    }

    /// Collects lines up to a blank or label line.
    fn read_description(&mut self, inline: Option<&'a str>) -> Option<String> {
        let mut lines: Vec<&str> = inline.into_iter().collect();

        while let Some(line) = self.cursor.peek() {
            if matches!(self.classify(line), LineRole::Blank | LineRole::Label(_)) {
                break;
            }
            lines.push(line);
            self.cursor.advance();
        }

        (!lines.is_empty()).then(|| lines.join(" "))
    }

    fn finish(&mut self, entry: Entry) {
        if entry.record.has_fields() {
            trace!("Emitting {:?}", entry.record.name);
            self.entries.push(entry);
        } else {
            debug!("Discarding {:?} without fields", entry.record.name);
        }
    }
}

/// Splits joined synonym text on commas, dropping empty tokens.
pub fn split_synonyms(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|synonym| !synonym.is_empty())
        .map(str::to_string)
        .collect()
}
