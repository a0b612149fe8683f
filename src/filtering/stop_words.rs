use crate::io::file::read_string_from_file;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;
use unicode_script::{Script, UnicodeScript};

/**
    Stop word membership set. Words are grouped by the script of their first
    character and compared trimmed and lower-cased, so lookups are case-insensitive.
*/
#[derive(Clone, Debug)]
pub struct StopWords {
    stop_word_map: HashMap<Script, HashSet<String>>,
}

impl StopWords {
    fn used_script(word: &str) -> Script {
        match word.chars().next() {
            None => Script::Unknown,
            Some(c) => c.script(),
        }
    }

    pub fn is_included(&self, word: &str) -> bool {
        let l: String = word.trim().to_lowercase();
        let script = StopWords::used_script(&l);
        match self.stop_word_map.get(&script) {
            None => false,
            Some(w) => w.contains(&l),
        }
    }

    pub fn new() -> Self {
        Self {
            stop_word_map: Default::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.stop_word_map.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append_words<'a>(&mut self, words: impl Iterator<Item = &'a str>) {
        let filtered_words = words
            .map(|x| x.trim().to_lowercase())
            .filter(|x| !x.is_empty())
            .map(|x| (StopWords::used_script(&x), x));

        for (script, word) in filtered_words {
            self.stop_word_map.entry(script).or_default().insert(word);
        }
    }

    /**
        Appends the whitespace separated words of a file.
    */
    pub fn append_file(&mut self, filename: impl AsRef<Path>) -> io::Result<()> {
        let contents = read_string_from_file(filename)?;
        self.append_words(contents.split_whitespace());
        Ok(())
    }
}

#[cfg(feature = "stopwords")]
use include_dir::{include_dir, Dir};

#[cfg(feature = "stopwords")]
impl Default for StopWords {
    /**
        The embedded English list.
    */
    fn default() -> Self {
        static DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/stopwords");

        let mut sw = StopWords::new();

        for entry in DIR.find("*.txt").into_iter().flatten() {
            if let Some(contents) = entry.as_file().and_then(|f| f.contents_utf8()) {
                sw.append_words(contents.split_whitespace());
            }
        }

        sw
    }
}

#[test]
fn test_case_insensitive_membership() {
    let mut sw = StopWords::new();
    sw.append_words(vec!["The", " and "].into_iter());

    assert!(sw.is_included("the"));
    assert!(sw.is_included("THE"));
    assert!(sw.is_included("and"));
    assert!(!sw.is_included("dog"));
    assert!(!sw.is_included(""));
    assert_eq!(sw.len(), 2);
}

#[test]
fn test_append_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "foo bar\nbaz").unwrap();

    let mut sw = StopWords::new();
    sw.append_file(file.path()).unwrap();
    assert!(sw.is_included("baz"));
    assert_eq!(sw.len(), 3);

    assert!(sw.append_file("does/not/exist.txt").is_err());
}

#[cfg(feature = "stopwords")]
#[test]
fn test_embedded_english_list() {
    let sw = StopWords::default();

    assert_eq!(sw.len(), 179);
    for word in ["are", "this", "out", "don't", "the"] {
        assert!(sw.is_included(word), "{} should be a stop word", word);
    }
    assert!(!sw.is_included("dogs"));
}
