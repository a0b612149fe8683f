use crate::io::file::read_string_from_file;
use std::borrow::Cow;
use std::collections::HashMap;
use std::io;
use std::path::Path;

use super::Lemmatize;

static NOUN_EXCEPTIONS: &str = include_str!("../../assets/lemmas/en_noun_exceptions.tsv");

/// Plural endings and their replacement, longest first.
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("xes", "x"),
    ("s", ""),
];

/// Singular words that merely look plural.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

const MIN_LEMMA_CHARS: usize = 3;

/**
    Noun lemmatizer: an exception table for irregular forms, then plural
    suffix detachment. Words it has no rule for are returned unchanged.
*/
#[derive(Clone, Debug)]
pub struct RuleLemmatizer {
    exceptions: HashMap<String, String>,
}

impl RuleLemmatizer {
    /// Without any exceptions, suffix rules only.
    pub fn new() -> Self {
        Self {
            exceptions: HashMap::new(),
        }
    }

    /// With the embedded English irregular noun table.
    pub fn english() -> Self {
        let mut lemmatizer = Self::new();
        lemmatizer.append_exceptions(NOUN_EXCEPTIONS);
        lemmatizer
    }

    pub fn insert(&mut self, form: &str, lemma: &str) {
        self.exceptions
            .insert(form.trim().to_lowercase(), lemma.trim().to_lowercase());
    }

    /**
        Adds `form<TAB>lemma` lines. Blank lines, `#` comments and lines
        without a tab are ignored.
    */
    pub fn append_exceptions(&mut self, table: &str) {
        for line in table.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((form, lemma)) = line.split_once('\t') {
                self.insert(form, lemma);
            }
        }
    }

    pub fn append_file(&mut self, filename: impl AsRef<Path>) -> io::Result<()> {
        let contents = read_string_from_file(filename)?;
        self.append_exceptions(&contents);
        Ok(())
    }

    fn detach_suffix(word: &str) -> Option<String> {
        if word.chars().count() <= MIN_LEMMA_CHARS
            || SINGULAR_ENDINGS.iter().any(|e| word.ends_with(e))
        {
            return None;
        }

        NOUN_SUFFIXES.iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix)?;
            if stem.chars().count() + replacement.chars().count() < MIN_LEMMA_CHARS {
                return None;
            }
            Some(format!("{}{}", stem, replacement))
        })
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatize for RuleLemmatizer {
    fn lemmatize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if let Some(lemma) = self.exceptions.get(word) {
            return Cow::Owned(lemma.clone());
        }

        match RuleLemmatizer::detach_suffix(word) {
            Some(lemma) => Cow::Owned(lemma),
            None => Cow::Borrowed(word),
        }
    }
}

#[test]
fn test_regular_plurals() {
    let wn = RuleLemmatizer::english();

    assert_eq!(wn.lemmatize("dogs"), "dog");
    assert_eq!(wn.lemmatize("classes"), "class");
    assert_eq!(wn.lemmatize("churches"), "church");
    assert_eq!(wn.lemmatize("bushes"), "bush");
    assert_eq!(wn.lemmatize("stories"), "story");
    assert_eq!(wn.lemmatize("boxes"), "box");
    assert_eq!(wn.lemmatize("movies"), "movie");
    assert_eq!(wn.lemmatize("calories"), "calorie");
}

#[test]
fn test_words_left_alone() {
    let wn = RuleLemmatizer::english();

    for word in [
        "check", "glass", "status", "analysis", "gas", "running", "cat", "always", "perhaps",
        "towards", "physics", "bias",
    ] {
        assert_eq!(wn.lemmatize(word), word);
    }
}

#[test]
fn test_irregular_forms() {
    let wn = RuleLemmatizer::english();

    assert_eq!(wn.lemmatize("children"), "child");
    assert_eq!(wn.lemmatize("women"), "woman");
    assert_eq!(wn.lemmatize("leaves"), "leaf");
    assert_eq!(wn.lemmatize("buses"), "bus");
}

#[test]
fn test_custom_exceptions() {
    let mut wn = RuleLemmatizer::new();
    wn.append_exceptions("# form\tlemma\nbetter\tgood\nmalformed line\n");

    assert_eq!(wn.lemmatize("better"), "good");
    assert_eq!(wn.lemmatize("malformed"), "malformed");
    assert_eq!(wn.lemmatize("children"), "children");
}
