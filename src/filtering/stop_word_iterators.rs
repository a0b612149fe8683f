use crate::StopWords;

pub struct StopWordsIteratorInner<'a, I>
where
    I: Iterator,
{
    sw: &'a StopWords,
    underlying: I,
}

impl<'a, I> Iterator for StopWordsIteratorInner<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.underlying
            .by_ref()
            .find(|next| !self.sw.is_included(next.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.underlying.size_hint().1)
    }
}

/**
    Trait implementing an [`Iterator`] function to filter out StopWords out of an Iterator
*/
pub trait StopWordsIterator: Iterator {
    fn filter_stop_words(self, sw: &StopWords) -> StopWordsIteratorInner<'_, Self>
    where
        Self: Sized,
    {
        StopWordsIteratorInner {
            sw,
            underlying: self,
        }
    }
}

impl<I: Iterator> StopWordsIterator for I {}

#[test]
fn test_stop_word_filter() {
    let mut sw = StopWords::new();
    sw.append_words(vec!["StopWord"].into_iter());

    let filtered: Vec<_> = "a stopword d STOPWORD e"
        .split_whitespace()
        .filter_stop_words(&sw)
        .collect();

    assert_eq!(filtered, vec!["a", "d", "e"]);
}

#[test]
fn test_stop_word_filter_owned() {
    let mut sw = StopWords::new();
    sw.append_words(vec!["is"].into_iter());

    let c: Vec<String> = vec!["it", "is", "raining"]
        .into_iter()
        .map(String::from)
        .collect();

    let filtered: Vec<String> = c.into_iter().filter_stop_words(&sw).collect();
    assert_eq!(filtered, vec!["it".to_string(), "raining".to_string()]);
}
