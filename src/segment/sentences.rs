use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use super::SplitSentences;

static ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "vs.", "e.g.", "i.e.",
    "cf.", "inc.", "ltd.", "corp.", "vol.", "ch.", "pp.", "gen.", "gov.", "sen.", "sgt.",
    "capt.", "lt.", "dept.", "univ.", "approx.", "jan.", "feb.", "apr.", "jun.", "jul.", "aug.",
    "sep.", "sept.", "oct.", "nov.", "dec.", "a.m.", "p.m.", "u.s.", "u.k.",
];

/// Only abbreviations when a number follows, as in "No. 5".
static NUMBER_ABBREVIATIONS: &[&str] = &["no.", "nos."];

static ABBREVIATIONS_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ABBREVIATIONS.iter().copied().collect());

const LEADING_PUNCTUATION: &[char] = &['"', '\'', '(', '[', '{', '\u{201c}', '\u{2018}'];

/**
    English sentence boundaries: Unicode (UAX #29) sentence breaks, with
    fragments re-joined when a break falls right after a known abbreviation
    or a single-letter initial.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    pub fn new() -> Self {
        UnicodeSentenceSplitter
    }
}

impl SplitSentences for UnicodeSentenceSplitter {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, fragment) in text.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(idx);
            let end = idx + fragment.len();

            if end < text.len() && ends_with_abbreviation(fragment, &text[end..]) {
                continue;
            }

            push_trimmed(&mut sentences, &text[begin..end]);
            start = None;
        }

        if let Some(begin) = start {
            push_trimmed(&mut sentences, &text[begin..]);
        }

        sentences
    }
}

fn push_trimmed<'t>(sentences: &mut Vec<&'t str>, sentence: &'t str) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn ends_with_abbreviation(fragment: &str, rest: &str) -> bool {
    let Some(last) = fragment.split_whitespace().last() else {
        return false;
    };
    let last = last.trim_start_matches(LEADING_PUNCTUATION);
    if !last.ends_with('.') {
        return false;
    }

    let lower = last.to_lowercase();
    if NUMBER_ABBREVIATIONS.contains(&lower.as_str()) {
        return rest.trim_start().starts_with(|c: char| c.is_ascii_digit());
    }

    is_initial(last) || ABBREVIATIONS_SET.contains(lower.as_str())
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_alphabetic() && c != 'I' && c != 'i'
    )
}

#[test]
fn test_splits_simple_sentences() {
    let splitter = UnicodeSentenceSplitter::new();
    assert_eq!(
        splitter.split("Dogs are running. Cats sleep."),
        vec!["Dogs are running.", "Cats sleep."]
    );
}

#[test]
fn test_keeps_abbreviations_together() {
    let splitter = UnicodeSentenceSplitter::new();
    assert_eq!(
        splitter.split("Mr. Smith met Dr. J. Watson. They talked."),
        vec!["Mr. Smith met Dr. J. Watson.", "They talked."]
    );
}

#[test]
fn test_question_exclamation_and_paragraphs() {
    let splitter = UnicodeSentenceSplitter::new();
    assert_eq!(
        splitter.split("Is it late? Yes!\n\nGo home"),
        vec!["Is it late?", "Yes!", "Go home"]
    );
}

#[test]
fn test_empty_and_blank_input() {
    let splitter = UnicodeSentenceSplitter::new();
    assert!(splitter.split("").is_empty());
    assert!(splitter.split("   \n\t ").is_empty());
}

#[test]
fn test_trailing_abbreviation_closes_input() {
    let splitter = UnicodeSentenceSplitter::new();
    assert_eq!(
        splitter.split("We met Mr."),
        vec!["We met Mr."]
    );
}

#[test]
fn test_pronoun_i_ends_a_sentence() {
    let splitter = UnicodeSentenceSplitter::new();
    assert_eq!(
        splitter.split("So did I. Then we left."),
        vec!["So did I.", "Then we left."]
    );
}

#[test]
fn test_no_is_an_abbreviation_only_before_a_number() {
    let splitter = UnicodeSentenceSplitter::new();
    assert_eq!(
        splitter.split("I said no. He left."),
        vec!["I said no.", "He left."]
    );
    assert_eq!(
        splitter.split("No. 5 Main Street is closed. We left."),
        vec!["No. 5 Main Street is closed.", "We left."]
    );
}

#[test]
fn test_common_sentence_final_words_close_sentences() {
    let splitter = UnicodeSentenceSplitter::new();
    for ending in ["co", "est", "mar", "sec", "col", "rep", "fig"] {
        let text = format!("It ended with {}. Next one.", ending);
        assert_eq!(splitter.split(&text).len(), 2, "{:?}", text);
    }
}
