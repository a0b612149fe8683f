mod sentences;

pub use sentences::UnicodeSentenceSplitter;

/**
    Splits a document into its sentences, in reading order.
    Returned slices borrow from the input and are never blank.
*/
pub trait SplitSentences: Send + Sync {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str>;
}
