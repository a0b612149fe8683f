use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use serde::Serialize;
use std::collections::HashMap;

/// A token of a cleaned corpus and how often it occurs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Word {
    pub content: String,
    pub count: usize,
}

/**
    Bag-of-words vocabulary of a corpus, most frequent token first.
    Ties are ordered alphabetically so the ranking is stable.
*/
#[derive(Clone, Debug, Default, Serialize)]
pub struct RankedWords(pub Vec<Word>);

impl RankedWords {
    pub fn rank<S>(corpus: &[S]) -> RankedWords
    where
        S: AsRef<str> + Sync,
    {
        let counts = corpus
            .par_iter()
            .fold(HashMap::<&str, usize>::new, |mut hs, entry| {
                let text: &str = entry.as_ref();
                for token in text.split_whitespace() {
                    *hs.entry(token).or_insert(0) += 1;
                }
                hs
            })
            .reduce(HashMap::new, |mut a, b| {
                for (token, count) in b {
                    *a.entry(token).or_insert(0) += count;
                }
                a
            });

        let mut n = counts
            .into_iter()
            .map(|(content, count)| Word {
                content: content.to_string(),
                count,
            })
            .collect::<Vec<Word>>();

        n.sort_by(|w, w2| w2.count.cmp(&w.count).then_with(|| w.content.cmp(&w2.content)));

        RankedWords(n)
    }

    pub fn words(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `n` most frequent tokens.
    pub fn top(&self, n: usize) -> &[Word] {
        &self.0[..n.min(self.0.len())]
    }
}

#[test]
fn test_rank_corpus() {
    let corpus = vec!["dog run", "cat sleep", "dog sleep", "dog"];
    let ranked = RankedWords::rank(&corpus);

    let counts: Vec<(&str, usize)> = ranked
        .words()
        .iter()
        .map(|w| (w.content.as_str(), w.count))
        .collect();
    assert_eq!(
        counts,
        vec![("dog", 3), ("sleep", 2), ("cat", 1), ("run", 1)]
    );
    assert_eq!(ranked.top(1), &[Word { content: "dog".into(), count: 3 }]);
    assert_eq!(ranked.top(10).len(), 4);
}

#[test]
fn test_rank_empty_corpus() {
    let corpus: Vec<String> = Vec::new();
    assert!(RankedWords::rank(&corpus).is_empty());
}
