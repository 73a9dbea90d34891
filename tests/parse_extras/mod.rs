use amnesguide::{Classification, Record};

#[macro_export]
macro_rules! assert_records {
    (
        $(
            $test_name:ident : text => $text:expr, records => $records:expr
        ),+ $(,)?
    ) => {
        $(
            #[test]
            fn $test_name() {
                let records =
                    amnesguide::parse::parse_records($text, &amnesguide::Vocabulary::default());

                assert_that(&records).is_equal_to($records);
            }
        )+
    }
}

pub(crate) fn record(
    name: &str,
    synonyms: &[&str],
    classification: Classification,
    comment: Option<&str>,
) -> Record {
    Record {
        name: name.to_owned(),
        synonyms: synonyms.iter().map(|synonym| synonym.to_string()).collect(),
        classification,
        comment: comment.map(str::to_owned),
    }
}
