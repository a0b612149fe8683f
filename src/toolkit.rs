use crate::morph::{Lemmatize, RuleLemmatizer, SnowballStemmer, Stem};
use crate::segment::{SplitSentences, UnicodeSentenceSplitter};
use crate::StopWords;

/**
    The read-only linguistic resources every normalization call borrows:
    stop words, sentence splitter, stemmer and lemmatizer.

    Build it once and share it. Nothing in here is mutated by a call.
*/
pub struct Toolkit {
    stop_words: StopWords,
    sentences: Box<dyn SplitSentences>,
    stemmer: Box<dyn Stem>,
    lemmatizer: Box<dyn Lemmatize>,
}

impl Toolkit {
    /// Embedded English stop words, Unicode sentence splitting, Snowball
    /// stemming and rule based noun lemmatization.
    #[cfg(feature = "stopwords")]
    pub fn english() -> Self {
        ToolkitBuilder::new().build()
    }

    pub fn builder() -> ToolkitBuilder {
        ToolkitBuilder::new()
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn sentences(&self) -> &dyn SplitSentences {
        self.sentences.as_ref()
    }

    pub fn stemmer(&self) -> &dyn Stem {
        self.stemmer.as_ref()
    }

    pub fn lemmatizer(&self) -> &dyn Lemmatize {
        self.lemmatizer.as_ref()
    }
}

#[cfg(feature = "stopwords")]
impl Default for Toolkit {
    fn default() -> Self {
        Toolkit::english()
    }
}

/**
    Builder for a [`Toolkit`]. Slots left unset get the English defaults,
    except the stop words when the `stopwords` feature is off: those start empty.
*/
#[derive(Default)]
pub struct ToolkitBuilder {
    stop_words: Option<StopWords>,
    sentences: Option<Box<dyn SplitSentences>>,
    stemmer: Option<Box<dyn Stem>>,
    lemmatizer: Option<Box<dyn Lemmatize>>,
}

impl ToolkitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    pub fn sentence_splitter(mut self, splitter: impl SplitSentences + 'static) -> Self {
        self.sentences = Some(Box::new(splitter));
        self
    }

    pub fn stemmer(mut self, stemmer: impl Stem + 'static) -> Self {
        self.stemmer = Some(Box::new(stemmer));
        self
    }

    pub fn lemmatizer(mut self, lemmatizer: impl Lemmatize + 'static) -> Self {
        self.lemmatizer = Some(Box::new(lemmatizer));
        self
    }

    pub fn build(self) -> Toolkit {
        Toolkit {
            stop_words: self.stop_words.unwrap_or_else(default_stop_words),
            sentences: self
                .sentences
                .unwrap_or_else(|| Box::new(UnicodeSentenceSplitter::new())),
            stemmer: self
                .stemmer
                .unwrap_or_else(|| Box::new(SnowballStemmer::english())),
            lemmatizer: self
                .lemmatizer
                .unwrap_or_else(|| Box::new(RuleLemmatizer::english())),
        }
    }
}

#[cfg(feature = "stopwords")]
fn default_stop_words() -> StopWords {
    StopWords::default()
}

#[cfg(not(feature = "stopwords"))]
fn default_stop_words() -> StopWords {
    StopWords::new()
}

#[test]
fn test_builder_overrides_slots() {
    use std::borrow::Cow;

    struct Upper;
    impl Stem for Upper {
        fn stem<'w>(&self, word: &'w str) -> Cow<'w, str> {
            Cow::Owned(word.to_uppercase())
        }
    }

    let mut sw = StopWords::new();
    sw.append_words(vec!["zebra"].into_iter());

    let toolkit = Toolkit::builder().stop_words(sw).stemmer(Upper).build();

    assert!(toolkit.stop_words().is_included("zebra"));
    assert!(!toolkit.stop_words().is_included("the"));
    assert_eq!(toolkit.stemmer().stem("dogs"), "DOGS");
    assert_eq!(toolkit.lemmatizer().lemmatize("dogs"), "dog");
}

#[test]
fn test_toolkit_is_shareable() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Toolkit>();
}
