use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;
use std::fmt;

use super::Stem;

/**
    Snowball stemmer, English (Porter2) unless another [`Algorithm`] is chosen.
*/
pub struct SnowballStemmer {
    algorithm: Algorithm,
    stemmer: Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            stemmer: Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Stem for SnowballStemmer {
    fn stem<'w>(&self, word: &'w str) -> Cow<'w, str> {
        self.stemmer.stem(word)
    }
}

#[test]
fn test_english_stems() {
    let stemmer = SnowballStemmer::english();
    assert_eq!(stemmer.stem("dogs"), "dog");
    assert_eq!(stemmer.stem("running"), "run");
    assert_eq!(stemmer.stem("cats"), "cat");
    assert_eq!(stemmer.stem("sleep"), "sleep");
    assert_eq!(stemmer.stem("connection"), "connect");
}
