use crate::parse_extras::record;
use amnesguide::{
    Classification, Vocabulary,
    parse::{parse_entries, parse_records, split_synonyms},
};
use spectral::assert_that;
use spectral::prelude::*;

mod parse_extras;

assert_records![
    caffeine_and_paracetamol:
        text => "Koffein\nSynonymer\nkoffein, coffeinum\nLäkemedel\nNej, koffein är inte receptbelagt\nParacetamol\nLäkemedel\nJa, det är ett läkemedel\n",
        records => vec![
            record("Koffein", &["koffein", "coffeinum"], Classification::No, None),
            record("Paracetamol", &[], Classification::Yes, None),
        ],
    inline_synonyms:
        text => "Etanol\nSynonymer: A, B, C\n\n",
        records => vec![record("Etanol", &["A", "B", "C"], Classification::Unknown, None)],
    synonym_lines_joined_before_split:
        text => "Kamfer\nSynonymer\nkamfer, camphora,\nbornan-2-on\nLäkemedel\nJa, i vissa beredningar\n",
        records => vec![record("Kamfer", &["kamfer", "camphora", "bornan-2-on"], Classification::Yes, None)],
    synonyms_stop_at_answer_line:
        text => "Tein\nSynonymer\nkoffein\nJa, i drycker\nLäkemedel\nNej\n",
        records => vec![record("Tein", &["koffein"], Classification::No, None)],
    empty_synonyms_block_ignored:
        text => "Glycerol\nSynonymer\n\nLäkemedel\nJa\n",
        records => vec![record("Glycerol", &[], Classification::Yes, None)],
    name_followed_by_blank_lines_dropped:
        text => "Rubrik\n\n\n",
        records => Vec::<amnesguide::Record>::new(),
    bare_affirmative_token:
        text => "Mentol\nLäkemedel\nJa\n",
        records => vec![record("Mentol", &[], Classification::Yes, None)],
    bare_negative_token:
        text => "Mentol\nLäkemedel\nNej\n",
        records => vec![record("Mentol", &[], Classification::No, None)],
    unrecognized_answer_left_unknown:
        text => "Zink\nLäkemedel\nKanske\nKommentar\nberor på dos\n",
        records => vec![record("Zink", &[], Classification::Unknown, Some("beror på dos"))],
    classification_skips_blank_lines:
        text => "Kodein\nLäkemedel\n\n\nJa, narkotikaklassat\n",
        records => vec![record("Kodein", &[], Classification::Yes, None)],
    inline_classification:
        text => "Efedrin\nLäkemedel: Ja, narkotikaklassat\n",
        records => vec![record("Efedrin", &[], Classification::Yes, None)],
    unknown_answer_keeps_earlier_classification:
        text => "Koffein\nLäkemedel\nJa\nLäkemedel\nOklart\n",
        records => vec![record("Koffein", &[], Classification::Yes, None)],
    footer_text_ignored:
        text => "Koffein\nLäkemedel\nNej, inte receptbelagt\nVälj sidfotens innehåll\nFotnot\nLäkemedel\nJa, det är ett läkemedel\n",
        records => vec![record("Koffein", &[], Classification::No, None)],
    comment_stops_at_short_capitalized_line:
        text => "Melatonin\nKommentar\nreceptbelagt i Sverige\nsedan 2023\nValerianarot\nLäkemedel\nNej, växtbaserat\n",
        records => vec![
            record("Melatonin", &[], Classification::Unknown, Some("receptbelagt i Sverige sedan 2023")),
            record("Valerianarot", &[], Classification::No, None),
        ],
    comment_keeps_long_capitalized_line:
        text => "Johannesört\nKommentar: Se nedan.\nProdukter som innehåller johannesört kan klassas som läkemedel beroende på dos och användningsområde\n",
        records => vec![record(
            "Johannesört",
            &[],
            Classification::Unknown,
            Some("Se nedan. Produkter som innehåller johannesört kan klassas som läkemedel beroende på dos och användningsområde"),
        )],
    comment_consumes_answer_lines:
        text => "Taurin\nKommentar\nbegränsat\nJa, i vissa fall\n\n",
        records => vec![record("Taurin", &[], Classification::Unknown, Some("begränsat Ja, i vissa fall"))],
    comment_first_line_not_checked:
        text => "Kreatin\nKommentar\nKosttillskott\n",
        records => vec![record("Kreatin", &[], Classification::Unknown, Some("Kosttillskott"))],
    leading_noise_skipped:
        text => "Ja, löst\nKommentar\n\nAcetylsalicylsyra\nLäkemedel\nJa, receptfritt\n",
        records => vec![record("Acetylsalicylsyra", &[], Classification::Yes, None)],
    noise_before_first_field_skipped:
        text => "Ibuprofen\nUppdaterad 2024\nLäkemedel\nJa\n",
        records => vec![record("Ibuprofen", &[], Classification::Yes, None)],
    fieldless_subjects_merge_into_first:
        text => "Alfa\nBeta\nLäkemedel\nJa, läkemedel\n",
        records => vec![record("Alfa", &[], Classification::Yes, None)],
    crlf_and_indentation_trimmed:
        text => "  Koffein  \r\n\tLäkemedel\r\n Nej, inte receptbelagt \r\n",
        records => vec![record("Koffein", &[], Classification::No, None)],
    all_fields:
        text => "Nikotin\nSynonymer\nnicotinum\nLäkemedel\nJa, i nikotinersättning\nKommentar\ngäller ej tobak\n\nTyrosin\nLäkemedel\nNej\n",
        records => vec![
            record("Nikotin", &["nicotinum"], Classification::Yes, Some("gäller ej tobak")),
            record("Tyrosin", &[], Classification::No, None),
        ],
    classification_label_without_answer_dropped:
        text => "Mentol\nLäkemedel\n",
        records => Vec::<amnesguide::Record>::new(),
    description_alone_dropped:
        text => "Mentol\nBeskrivning\nen doft\n",
        records => Vec::<amnesguide::Record>::new(),
    description_lines_not_read_as_subjects:
        text => "Koffein\nLäkemedel\nNej\nBeskrivning\nKoffein räknas som livsmedel.\n\nTeofyllin\nLäkemedel\nJa\n",
        records => vec![
            record("Koffein", &[], Classification::No, None),
            record("Teofyllin", &[], Classification::Yes, None),
        ],
];

/// A capitalized line of `length` characters, two bytes each.
fn non_ascii_line(length: usize) -> String {
    std::iter::once('Ä')
        .chain(std::iter::repeat_n('ö', length.saturating_sub(1)))
        .collect()
}

#[test]
fn comment_stops_below_threshold_in_chars() {
    let line = non_ascii_line(79);
    let text = format!("Melatonin\nKommentar\nreceptbelagt\n{line}\n");

    let records = parse_records(&text, &Vocabulary::default());

    assert_that(&line.chars().count()).is_equal_to(79);
    assert_that(&records).is_equal_to(vec![record(
        "Melatonin",
        &[],
        Classification::Unknown,
        Some("receptbelagt"),
    )]);
}

#[test]
fn comment_continues_at_threshold_in_chars() {
    let line = non_ascii_line(80);
    let text = format!("Melatonin\nKommentar\nreceptbelagt\n{line}\n");

    let records = parse_records(&text, &Vocabulary::default());

    assert_that(&line.chars().count()).is_equal_to(80);
    let expected = format!("receptbelagt {line}");
    assert_that(&records).is_equal_to(vec![record(
        "Melatonin",
        &[],
        Classification::Unknown,
        Some(expected.as_str()),
    )]);
}

#[test]
fn entries_keep_classification_text_and_description() {
    let text = "Koffein\nLäkemedel\nNej, inte ett läkemedel\nBeskrivning: Koffein räknas\nsom livsmedel.\nKommentar\nfinns i kaffe\n";

    let entries = parse_entries(text, &Vocabulary::default());

    assert_that(&entries).has_length(1);
    let entry = entries.first().expect("Expected an entry.");
    assert_that(&entry.classification_text.as_deref()).is_equal_to(Some("Nej, inte ett läkemedel"));
    assert_that(&entry.description.as_deref())
        .is_equal_to(Some("Koffein räknas som livsmedel."));
    assert_that(&entry.record.comment.as_deref()).is_equal_to(Some("finns i kaffe"));
}

#[test]
fn unconsumed_answer_leaves_classification_text_empty() {
    let entries = parse_entries(
        "Koffein\nSynonymer: koffein\nLäkemedel\nOklart\n",
        &Vocabulary::default(),
    );

    assert_that(&entries).has_length(1);
    let entry = entries.first().expect("Expected an entry.");
    assert_that(&entry.record.classification).is_equal_to(Classification::Unknown);
    assert_that(&entry.classification_text).is_none();
}

#[test]
fn entries_match_records() {
    let records: Vec<amnesguide::Record> = parse_entries(GUIDE_DUMP, &Vocabulary::default())
        .into_iter()
        .map(|entry| entry.record)
        .collect();

    assert_that(&records).is_equal_to(parse_records(GUIDE_DUMP, &Vocabulary::default()));
}

const GUIDE_DUMP: &str = "Koffein
Synonymer
koffein, coffeinum
Läkemedel
Nej, koffein är inte receptbelagt
Kommentar
finns i livsmedel

Paracetamol
Läkemedel
Ja, det är ett läkemedel
Välj sidfotens innehåll
Kontakt
Läkemedel
Ja, det här ska inte synas
";

#[test]
fn every_record_has_a_field() {
    let records = parse_records(GUIDE_DUMP, &Vocabulary::default());

    assert_that(&records).has_length(2);
    for record in &records {
        assert_that(&record.has_fields()).is_true();
    }
}

#[test]
fn parsing_is_repeatable() {
    let vocabulary = Vocabulary::default();

    assert_that(&parse_records(GUIDE_DUMP, &vocabulary))
        .is_equal_to(parse_records(GUIDE_DUMP, &vocabulary));
}

#[test]
fn footer_lines_never_reach_records() {
    let records = parse_records(GUIDE_DUMP, &Vocabulary::default());
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();

    assert_that(&names).is_equal_to(vec!["Koffein", "Paracetamol"]);
    assert_that(&records.iter().any(|record| {
        record
            .comment
            .as_deref()
            .is_some_and(|comment| comment.contains("synas"))
    }))
    .is_false();
}

#[test]
fn empty_sentinel_keeps_whole_text() {
    let vocabulary = Vocabulary {
        footer_sentinel: String::new(),
        ..Vocabulary::default()
    };

    let records = parse_records(GUIDE_DUMP, &vocabulary);

    assert_that(&records).has_length(3);
}

#[test]
fn empty_input_yields_nothing() {
    assert_that(&parse_records("", &Vocabulary::default())).is_empty();
    assert_that(&parse_records("\n\n  \n", &Vocabulary::default())).is_empty();
}

#[test]
fn synonyms_split_on_commas() {
    assert_that(&split_synonyms(" a ,, b,c , ")).is_equal_to(vec![
        "a".to_owned(),
        "b".to_owned(),
        "c".to_owned(),
    ]);
}
