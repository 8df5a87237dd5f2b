use crate::error::{TranslatorError, TranslatorResult};
use crate::matcher::{DictionaryPair, PhraseMatcher, UnitSource, WordUnit};
use crate::reassembly::restore_punctuation;
use crate::tokenizer::{extract_words, tokenize};
use serde::Serialize;
use tracing::debug;

/// Outcome of translating one line, with the units that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub source: String,
    pub result: String,
    pub units: Vec<WordUnit>,
}

impl Translation {
    /// Units that had no dictionary entry in either direction
    pub fn pass_through_count(&self) -> usize {
        self.units
            .iter()
            .filter(|unit| unit.source == UnitSource::PassThrough)
            .count()
    }

    pub fn to_json(&self) -> TranslatorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TranslatorError::SerializationError(e.to_string()))
    }
}

/// Translates text in both directions against a fixed pair of dictionaries
pub struct Translator {
    matcher: PhraseMatcher,
}

impl Translator {
    pub fn new(dictionaries: DictionaryPair) -> Self {
        Translator {
            matcher: PhraseMatcher::new(dictionaries),
        }
    }

    pub fn dictionaries(&self) -> &DictionaryPair {
        self.matcher.dictionaries()
    }

    pub fn matcher(&self) -> &PhraseMatcher {
        &self.matcher
    }

    /// Translate a line of text. Never fails; unknown words pass through capitalized.
    pub fn translate(&self, text: &str) -> String {
        self.translate_detailed(text).result
    }

    pub fn translate_detailed(&self, text: &str) -> Translation {
        let tokens = tokenize(text);
        let words = extract_words(text);

        let units = self.matcher.match_words(&words);
        let translated: Vec<&str> = units.iter().map(|unit| unit.text.as_str()).collect();
        let result = restore_punctuation(&translated, &tokens);

        debug!(
            words = words.len(),
            units = units.len(),
            tokens = tokens.len(),
            "translated line"
        );

        Translation {
            source: text.to_string(),
            result,
            units,
        }
    }
}
