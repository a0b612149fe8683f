mod lemma;
mod stem;

use std::borrow::Cow;

pub use lemma::RuleLemmatizer;
pub use stem::SnowballStemmer;

/// Reduces a lower-case word to its stem.
pub trait Stem: Send + Sync {
    fn stem<'w>(&self, word: &'w str) -> Cow<'w, str>;
}

/// Maps a lower-case word to its dictionary form.
pub trait Lemmatize: Send + Sync {
    fn lemmatize<'w>(&self, word: &'w str) -> Cow<'w, str>;
}
