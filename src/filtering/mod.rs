mod stop_word_iterators;
mod stop_words;

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub use stop_word_iterators::StopWordsIterator;
pub use stop_words::StopWords;

/// Mentions, hashtags, links, digit runs, then any leftover punctuation.
const SOCIAL_NOISE: &str = r"(?:@\w+|#\w+|https?://\S+|\d+|[^\w\s])";

static SOCIAL_NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(SOCIAL_NOISE).unwrap());

/**
    Replaces every match of `pattern` in `text` with a single space.
    Borrows the input when nothing matched.
*/
pub fn substitute<'t>(pattern: &Regex, text: &'t str) -> Cow<'t, str> {
    pattern.replace_all(text, " ")
}

/**
    Blanks out social media noise in one pass. Expects already lower-cased input.
*/
pub fn strip_social(text: &str) -> Cow<'_, str> {
    substitute(&SOCIAL_NOISE_RE, text)
}

#[test]
fn test_substitute_keeps_word_boundaries() {
    let re = Regex::new("[^a-zA-Z]").unwrap();
    assert_eq!(substitute(&re, "well-known, isn't it?"), "well known  isn t it ");
}

#[test]
fn test_substitute_borrows_without_match() {
    let re = Regex::new(r"\d").unwrap();
    assert!(matches!(substitute(&re, "no digits"), Cow::Borrowed(_)));
}

#[test]
fn test_strip_social() {
    let cleaned = strip_social("check this out! @user #cool https://x.co/a?b=1 123abc");
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    assert_eq!(words, vec!["check", "this", "out", "abc"]);
}
