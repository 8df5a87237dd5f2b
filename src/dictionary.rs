use serde::Serialize;
use std::collections::HashMap;

/// Which of the two dictionaries resolved a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// A phrase-to-phrase mapping for one translation direction.
///
/// Keys and values are stored normalized: trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(HashMap<String, String>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(HashMap::new())
    }

    /// Parses the line-oriented `key1,key2,...=translation` format.
    ///
    /// Lines without `=` are skipped. A later definition of a key replaces an
    /// earlier one.
    pub fn parse(content: &str) -> Self {
        Self::parse_counting(content).0
    }

    /// Same as [`Dictionary::parse`], also returning how many lines were skipped.
    pub(crate) fn parse_counting(content: &str) -> (Self, usize) {
        let mut dictionary = Dictionary::new();
        let mut skipped = 0;

        for line in content.lines() {
            let line = line.trim();
            let Some((keys, value)) = line.split_once('=') else {
                if !line.is_empty() {
                    skipped += 1;
                }
                continue;
            };
            for key in keys.split(',') {
                dictionary.with_entry(key, value);
            }
        }

        (dictionary, skipped)
    }

    pub fn with_entry(&mut self, phrase: &str, translation: &str) -> &mut Self {
        self.0.insert(normalize(phrase), normalize(translation));
        self
    }

    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.0.get(phrase).map(String::as_str)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.0.contains_key(phrase)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized `(phrase, translation)` pairs in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(phrase, translation)| (phrase.as_str(), translation.as_str()))
    }

    /// Number of words in the longest key
    pub fn longest_phrase(&self) -> usize {
        self.entries()
            .map(|(phrase, _)| phrase.split_whitespace().count())
            .max()
            .unwrap_or(0)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (phrase, translation) in iter {
            dictionary.with_entry(phrase.as_ref(), translation.as_ref());
        }
        dictionary
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
