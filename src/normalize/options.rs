use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::error::InputError;
use crate::io::file::read_string_from_file;

/**
    How each unit is cleaned: an optional substitution pattern and which
    corpora (stems, lemmas, or both) are produced.
*/
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeOptions {
    pub pattern: Option<String>,
    pub stemming: bool,
    pub lemmatizing: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            pattern: None,
            stemming: true,
            lemmatizing: false,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn stemming(mut self, enable: bool) -> Self {
        self.stemming = enable;
        self
    }

    pub fn lemmatizing(mut self, enable: bool) -> Self {
        self.lemmatizing = enable;
        self
    }

    pub fn from_json_file(filename: impl AsRef<Path>) -> io::Result<Self> {
        let contents = read_string_from_file(filename)?;
        serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub(crate) fn compiled_pattern(&self) -> Result<Option<Regex>, InputError> {
        self.pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(InputError::from)
    }
}

#[test]
fn test_defaults_match_document_mode() {
    let options: NormalizeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, NormalizeOptions::default());
    assert!(options.stemming);
    assert!(!options.lemmatizing);
    assert!(options.pattern.is_none());
}

#[test]
fn test_partial_json() {
    let options: NormalizeOptions =
        serde_json::from_str(r#"{"pattern": "[^a-zA-Z]", "lemmatizing": true}"#).unwrap();
    assert_eq!(
        options,
        NormalizeOptions::new().pattern("[^a-zA-Z]").lemmatizing(true)
    );
    assert!(serde_json::from_str::<NormalizeOptions>(r#"{"stem": true}"#).is_err());
}

#[test]
fn test_invalid_pattern() {
    let options = NormalizeOptions::new().pattern("[unclosed");
    assert!(matches!(
        options.compiled_pattern(),
        Err(InputError::InvalidPattern(_))
    ));
    assert!(NormalizeOptions::new().compiled_pattern().unwrap().is_none());
}
