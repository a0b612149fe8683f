//! Token corpora from free-form text.
//!
//! Three entry points share one cleaning policy:
//! - **document**: one large text, cleaned sentence by sentence
//! - **table column**: one text per row of a column
//! - **single text**: one short text with a fixed cleanup, always lemmatized
//!
//! Per unit, the optional pattern is substituted on the original text, the
//! result is lower-cased, split on whitespace and stripped of stop words.
//! That word list then feeds the stem and/or lemma branch. A branch keeps the
//! joined result only if it is longer than two characters.

mod column;
mod options;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::InputError;
use crate::filtering::{strip_social, substitute, StopWordsIterator};
use crate::progress::{NoProgress, Progress};
use crate::toolkit::Toolkit;

pub use column::{ColumnSource, FnColumn, RecordColumn};
pub use options::NormalizeOptions;

/// A cleaned unit must be longer than this, in characters, to be kept.
pub const MIN_UNIT_CHARS: usize = 2;

/**
    The stem and lemma corpora of one call, in unit order. A corpus whose
    flag was off is empty.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpora {
    pub stems: Vec<String>,
    pub lemmas: Vec<String>,
}

impl Corpora {
    pub fn into_pair(self) -> (Vec<String>, Vec<String>) {
        (self.stems, self.lemmas)
    }
}

impl From<Corpora> for (Vec<String>, Vec<String>) {
    fn from(corpora: Corpora) -> Self {
        corpora.into_pair()
    }
}

struct CleaningPolicy<'a> {
    toolkit: &'a Toolkit,
    pattern: Option<Regex>,
    stemming: bool,
    lemmatizing: bool,
}

impl<'a> CleaningPolicy<'a> {
    fn new(toolkit: &'a Toolkit, options: &NormalizeOptions) -> Result<Self, InputError> {
        Ok(Self {
            toolkit,
            pattern: options.compiled_pattern()?,
            stemming: options.stemming,
            lemmatizing: options.lemmatizing,
        })
    }

    fn apply(&self, unit: &str, corpora: &mut Corpora) {
        let substituted = match &self.pattern {
            Some(pattern) => substitute(pattern, unit),
            None => unit.into(),
        };
        let lowered = substituted.to_lowercase();
        let words: Vec<&str> = lowered
            .split_whitespace()
            .filter_stop_words(self.toolkit.stop_words())
            .collect();

        if self.stemming {
            let stemmer = self.toolkit.stemmer();
            let joined = words.iter().map(|w| stemmer.stem(w)).join(" ");
            keep_if_long_enough(joined, &mut corpora.stems, "stem");
        }

        if self.lemmatizing {
            let lemmatizer = self.toolkit.lemmatizer();
            let joined = words.iter().map(|w| lemmatizer.lemmatize(w)).join(" ");
            keep_if_long_enough(joined, &mut corpora.lemmas, "lemma");
        }
    }
}

fn keep_if_long_enough(cleaned: String, corpus: &mut Vec<String>, branch: &'static str) {
    if cleaned.chars().count() > MIN_UNIT_CHARS {
        corpus.push(cleaned);
    } else {
        trace!(branch, cleaned = %cleaned, "dropping short unit");
    }
}

/**
    Runs the cleaning policy over documents, table columns and single texts
    with a shared [`Toolkit`], reporting to an optional [`Progress`] observer.
*/
pub struct Normalizer<'a> {
    toolkit: &'a Toolkit,
    progress: &'a dyn Progress,
}

impl<'a> Normalizer<'a> {
    pub fn new(toolkit: &'a Toolkit) -> Self {
        Self {
            toolkit,
            progress: &NoProgress,
        }
    }

    pub fn progress(mut self, progress: &'a dyn Progress) -> Self {
        self.progress = progress;
        self
    }

    /**
        Splits `text` into sentences and cleans each one in order.
        Empty text yields two empty corpora.
    */
    pub fn document(&self, text: &str, options: &NormalizeOptions) -> Result<Corpora, InputError> {
        let policy = CleaningPolicy::new(self.toolkit, options)?;
        let sentences = self.toolkit.sentences().split(text);

        let mut corpora = Corpora::default();
        self.progress.start(sentences.len());
        for sentence in &sentences {
            policy.apply(sentence, &mut corpora);
            self.progress.advance();
        }
        self.progress.finish();

        debug!(
            sentences = sentences.len(),
            stems = corpora.stems.len(),
            lemmas = corpora.lemmas.len(),
            "normalized document"
        );
        Ok(corpora)
    }

    /**
        Cleans the text of every row of `column` in row order. The first row
        that cannot be read aborts the whole call.
    */
    pub fn table_column<C>(&self, column: &C, options: &NormalizeOptions) -> Result<Corpora, InputError>
    where
        C: ColumnSource + ?Sized,
    {
        let policy = CleaningPolicy::new(self.toolkit, options)?;
        let rows = column.row_count();

        let mut corpora = Corpora::default();
        self.progress.start(rows);
        for row in 0..rows {
            let text = match column.text_at(row) {
                Ok(text) => text,
                Err(e) => {
                    self.progress.finish();
                    return Err(e);
                }
            };
            policy.apply(&text, &mut corpora);
            self.progress.advance();
        }
        self.progress.finish();

        debug!(
            rows,
            stems = corpora.stems.len(),
            lemmas = corpora.lemmas.len(),
            "normalized table column"
        );
        Ok(corpora)
    }

    /**
        Fixed cleanup for one short text: lower-case, blank out mentions,
        hashtags, links, digits and punctuation, drop stop words and lemmatize.
        No length filter, the result may be empty.
    */
    pub fn single_text(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = strip_social(&lowered);
        let lemmatizer = self.toolkit.lemmatizer();

        cleaned
            .split_whitespace()
            .filter_stop_words(self.toolkit.stop_words())
            .map(|w| lemmatizer.lemmatize(w))
            .join(" ")
    }
}

/// [`Normalizer::document`] without progress reporting.
pub fn normalize_document(
    toolkit: &Toolkit,
    text: &str,
    options: &NormalizeOptions,
) -> Result<Corpora, InputError> {
    Normalizer::new(toolkit).document(text, options)
}

/// [`Normalizer::table_column`] without progress reporting.
pub fn normalize_table_column<C>(
    toolkit: &Toolkit,
    column: &C,
    options: &NormalizeOptions,
) -> Result<Corpora, InputError>
where
    C: ColumnSource + ?Sized,
{
    Normalizer::new(toolkit).table_column(column, options)
}

/// Table mode over the `column` field of JSON records.
pub fn normalize_records(
    toolkit: &Toolkit,
    records: &[Value],
    column: &str,
    options: &NormalizeOptions,
) -> Result<Corpora, InputError> {
    normalize_table_column(toolkit, &RecordColumn::new(records, column), options)
}

/// [`Normalizer::single_text`].
pub fn normalize_single_text(toolkit: &Toolkit, text: &str) -> String {
    Normalizer::new(toolkit).single_text(text)
}

#[cfg(all(test, feature = "stopwords"))]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting {
        total: Cell<usize>,
        advanced: Cell<usize>,
        finished: Cell<bool>,
    }

    impl Progress for Counting {
        fn start(&self, total: usize) {
            self.total.set(total);
        }
        fn advance(&self) {
            self.advanced.set(self.advanced.get() + 1);
        }
        fn finish(&self) {
            self.finished.set(true);
        }
    }

    #[test]
    fn test_document_stems() {
        let toolkit = Toolkit::english();
        let options = NormalizeOptions::new().pattern("[^a-zA-Z]");
        let corpora = normalize_document(&toolkit, "Dogs are running. Cats sleep.", &options).unwrap();

        assert_eq!(corpora.stems, vec!["dog run", "cat sleep"]);
        assert!(corpora.lemmas.is_empty());
    }

    #[test]
    fn test_document_without_pattern_keeps_punctuation() {
        let toolkit = Toolkit::english();
        let corpora =
            normalize_document(&toolkit, "Dogs are running. Cats sleep.", &NormalizeOptions::default())
                .unwrap();

        assert_eq!(corpora.stems, vec!["dog running.", "cat sleep."]);
    }

    #[test]
    fn test_short_units_are_dropped() {
        let toolkit = Toolkit::english();
        let options = NormalizeOptions::new().pattern(r"[^\w\s]").lemmatizing(true);
        let corpora =
            normalize_document(&toolkit, "It is what it is. Go! Birds fly south.", &options).unwrap();

        // nothing but stop words, then "go"
        assert_eq!(corpora.stems, vec!["bird fli south"]);
        assert_eq!(corpora.lemmas, vec!["bird fly south"]);
    }

    #[test]
    fn test_pronoun_and_no_end_sentences() {
        let toolkit = Toolkit::english();
        let options = NormalizeOptions::new().pattern("[^a-zA-Z]");
        let corpora = normalize_document(&toolkit, "I said no. He left.", &options).unwrap();

        assert_eq!(corpora.stems, vec!["said", "left"]);
    }

    #[test]
    fn test_pattern_applies_to_original_sentence() {
        let toolkit = Toolkit::english();
        let options = NormalizeOptions::new()
            .pattern("[^a-zA-Z]")
            .stemming(false)
            .lemmatizing(true);
        let corpora = normalize_document(&toolkit, "The Wolves howled, twice! Ok.", &options).unwrap();

        assert_eq!(corpora.lemmas, vec!["wolf howled twice"]);
        assert!(corpora.stems.is_empty());
    }

    #[test]
    fn test_both_flags_share_word_list() {
        let toolkit = Toolkit::english();
        let options = NormalizeOptions::new().pattern(r"[^\w\s]").lemmatizing(true);
        let text = "Children were playing games. The churches opened. Rain fell.";
        let corpora = normalize_document(&toolkit, text, &options).unwrap();

        assert_eq!(corpora.stems.len(), corpora.lemmas.len());
        assert_eq!(corpora.lemmas, vec!["child playing game", "church opened", "rain fell"]);
        assert_eq!(corpora.stems[2], "rain fell");
    }

    #[test]
    fn test_empty_document() {
        let toolkit = Toolkit::english();
        let options = NormalizeOptions::new().lemmatizing(true);
        let corpora = normalize_document(&toolkit, "", &options).unwrap();
        assert_eq!(corpora.into_pair(), (vec![], vec![]));
    }

    #[test]
    fn test_invalid_pattern_fails_before_processing() {
        let toolkit = Toolkit::english();
        let progress = Counting::default();
        let result = Normalizer::new(&toolkit)
            .progress(&progress)
            .document("Some text here.", &NormalizeOptions::new().pattern("("));

        assert!(matches!(result, Err(InputError::InvalidPattern(_))));
        assert_eq!(progress.advanced.get(), 0);
    }

    #[test]
    fn test_table_column_in_row_order() {
        let toolkit = Toolkit::english();
        let rows = vec!["Loved the pasta", "ok", "Terrible service, slow waiters"];
        let options = NormalizeOptions::new().pattern("[^a-zA-Z]").lemmatizing(true);
        let corpora = normalize_table_column(&toolkit, &rows, &options).unwrap();

        assert_eq!(corpora.stems, vec!["love pasta", "terribl servic slow waiter"]);
        assert_eq!(corpora.lemmas, vec!["loved pasta", "terrible service slow waiter"]);
    }

    #[test]
    fn test_table_column_aborts_on_bad_row() {
        let toolkit = Toolkit::english();
        let records: Vec<Value> =
            serde_json::from_str(r#"[{"text": "Fine dining"}, {"text": 42}, {"text": "Never reached"}]"#)
                .unwrap();
        let progress = Counting::default();
        let result = Normalizer::new(&toolkit).progress(&progress).table_column(
            &RecordColumn::new(&records, "text"),
            &NormalizeOptions::default(),
        );

        assert!(matches!(
            result,
            Err(InputError::NonTextValue { row: 1, .. })
        ));
        assert_eq!(progress.advanced.get(), 1);
        assert!(progress.finished.get());
    }

    #[test]
    fn test_progress_over_sentences() {
        let toolkit = Toolkit::english();
        let progress = Counting::default();
        Normalizer::new(&toolkit)
            .progress(&progress)
            .document("One sentence. Two sentences. Three.", &NormalizeOptions::default())
            .unwrap();

        assert_eq!(progress.total.get(), 3);
        assert_eq!(progress.advanced.get(), 3);
        assert!(progress.finished.get());
    }

    #[test]
    fn test_single_text() {
        let toolkit = Toolkit::english();
        let text = "Check this out! @user #cool https://x.co 123";

        assert_eq!(normalize_single_text(&toolkit, text), "check");
        assert_eq!(
            normalize_single_text(&toolkit, "The CATS were chasing 3 mice!!"),
            "cat chasing mouse"
        );
    }

    #[test]
    fn test_single_text_may_be_empty() {
        let toolkit = Toolkit::english();
        assert_eq!(normalize_single_text(&toolkit, ""), "");
        assert_eq!(normalize_single_text(&toolkit, "it is a #tag"), "");
        assert_eq!(normalize_single_text(&toolkit, "ok"), "ok");
    }
}
