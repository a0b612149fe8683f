#![cfg(feature = "stopwords")]

use std::borrow::Cow;
use std::error::Error;

use serde_json::Value;
use textnorm::morph::Lemmatize;
use textnorm::segment::SplitSentences;
use textnorm::{
    normalize_document, normalize_records, normalize_single_text, normalize_table_column,
    FnColumn, InputError, NormalizeOptions, RankedWords, StopWords, Toolkit, MIN_UNIT_CHARS,
};

const REVIEWS: &str = r#"[
    {"id": 1, "review": "Wow... Loved this place."},
    {"id": 2, "review": "Crust is not good."},
    {"id": 3, "review": "Not tasty and the texture was just nasty."},
    {"id": 4, "review": "A."},
    {"id": 5, "review": "The selection on the menu was great and so were the prices."}
]"#;

fn records() -> Result<Vec<Value>, Box<dyn Error>> {
    Ok(serde_json::from_str(REVIEWS)?)
}

#[test]
fn no_short_entries_ever_survive() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let options = NormalizeOptions::new().lemmatizing(true);
    let text = "A b. I am. Oh no! It works. He ran, she hid; we won.";

    let corpora = normalize_document(&toolkit, text, &options)?;
    for entry in corpora.stems.iter().chain(corpora.lemmas.iter()) {
        assert!(entry.chars().count() > MIN_UNIT_CHARS, "{:?} should be dropped", entry);
    }
    Ok(())
}

#[test]
fn table_mode_keeps_row_order() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let options = NormalizeOptions::new()
        .pattern("[^a-zA-Z]")
        .stemming(false)
        .lemmatizing(true);

    let corpora = normalize_records(&toolkit, &records()?, "review", &options)?;

    assert!(corpora.stems.is_empty());
    assert_eq!(
        corpora.lemmas,
        vec![
            "wow loved place",
            "crust good",
            "tasty texture nasty",
            "selection menu great price",
        ]
    );
    Ok(())
}

#[test]
fn table_mode_rejects_missing_column() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let err = normalize_records(&toolkit, &records()?, "title", &NormalizeOptions::default())
        .unwrap_err();

    assert!(matches!(err, InputError::MissingColumn { row: 0, ref column } if column == "title"));
    assert_eq!(err.to_string(), "row 0 has no `title` field");
    Ok(())
}

#[test]
fn table_mode_rejects_non_text_values() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let err =
        normalize_records(&toolkit, &records()?, "id", &NormalizeOptions::default()).unwrap_err();

    assert!(matches!(err, InputError::NonTextValue { row: 0, .. }));
    Ok(())
}

#[test]
fn table_mode_through_accessor() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let rows = ["Fresh bread daily", "Cold soup"];
    let column = FnColumn::new(rows.len(), |row| Ok(rows[row].to_string()));

    let (stems, lemmas) = normalize_table_column(&toolkit, &column, &NormalizeOptions::default())?
        .into_pair();

    assert_eq!(stems, vec!["fresh bread daili", "cold soup"]);
    assert!(lemmas.is_empty());
    Ok(())
}

#[test]
fn both_corpora_align_with_same_survival() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let options = NormalizeOptions::new().pattern(r"[^\w\s]").lemmatizing(true);
    let text = "Parents bought toys. Kids played outside. Everyone laughed loudly.";

    let corpora = normalize_document(&toolkit, text, &options)?;

    assert_eq!(corpora.stems.len(), 3);
    assert_eq!(corpora.stems.len(), corpora.lemmas.len());
    assert_eq!(corpora.lemmas[0], "parent bought toy");
    Ok(())
}

#[test]
fn single_text_is_deterministic() {
    let toolkit = Toolkit::english();
    let text = "Big NEWS!!! @reporter says #markets rallied 5% today: https://news.example/a";

    let first = normalize_single_text(&toolkit, text);
    let second = normalize_single_text(&toolkit, text);

    assert_eq!(first, second);
    assert_eq!(first, "big news say rallied today");
}

#[test]
fn custom_capabilities_plug_in() -> Result<(), Box<dyn Error>> {
    struct Lines;
    impl SplitSentences for Lines {
        fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
            text.lines().filter(|l| !l.trim().is_empty()).collect()
        }
    }

    struct Shout;
    impl Lemmatize for Shout {
        fn lemmatize<'w>(&self, word: &'w str) -> Cow<'w, str> {
            Cow::Owned(word.to_uppercase())
        }
    }

    let mut stop_words = StopWords::new();
    stop_words.append_words("of the".split_whitespace());

    let toolkit = Toolkit::builder()
        .stop_words(stop_words)
        .sentence_splitter(Lines)
        .lemmatizer(Shout)
        .build();

    let options = NormalizeOptions::new().stemming(false).lemmatizing(true);
    let corpora = normalize_document(&toolkit, "edge of the map\n\nno. of rows", &options)?;

    assert_eq!(corpora.lemmas, vec!["EDGE MAP", "NO. ROWS"]);
    assert_eq!(normalize_single_text(&toolkit, "tip of the day"), "TIP DAY");
    Ok(())
}

#[test]
fn ranking_feeds_bag_of_words() -> Result<(), Box<dyn Error>> {
    let toolkit = Toolkit::english();
    let options = NormalizeOptions::new().pattern("[^a-zA-Z]");
    let text = "Dogs bark. The dog barked again. Cats ignore barking dogs.";

    let corpora = normalize_document(&toolkit, text, &options)?;
    let ranked = RankedWords::rank(&corpora.stems);

    assert_eq!(ranked.top(2)[0].content, "bark");
    assert_eq!(ranked.top(2)[0].count, 3);
    assert_eq!(ranked.top(2)[1].content, "dog");
    assert_eq!(ranked.top(2)[1].count, 3);
    Ok(())
}
