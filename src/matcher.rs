//! Greedy longest-phrase matching
//!
//! At each position the longest run of words that is a key in either
//! dictionary wins. The forward dictionary is consulted before the reverse one
//! at every length. Matched words are never reconsidered. A word that starts
//! no phrase in either dictionary is passed through capitalized.

use crate::dictionary::{Dictionary, Direction};
use serde::Serialize;
use tracing::trace;

/// The two read-only dictionaries a translation runs against
#[derive(Debug, Clone, Default)]
pub struct DictionaryPair {
    pub forward: Dictionary,
    pub reverse: Dictionary,
}

impl DictionaryPair {
    pub fn new(forward: Dictionary, reverse: Dictionary) -> Self {
        DictionaryPair { forward, reverse }
    }

    /// Look up a phrase, forward dictionary first
    pub fn lookup(&self, phrase: &str) -> Option<(Direction, &str)> {
        self.forward
            .get(phrase)
            .map(|translation| (Direction::Forward, translation))
            .or_else(|| {
                self.reverse
                    .get(phrase)
                    .map(|translation| (Direction::Reverse, translation))
            })
    }
}

/// How a word unit was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "direction")]
pub enum UnitSource {
    Dictionary(Direction),
    PassThrough,
}

/// One translated unit, covering one or more consecutive input words
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordUnit {
    pub text: String,
    pub source: UnitSource,
    /// Number of input words this unit replaced
    pub consumed: usize,
}

/// Matches words against a dictionary pair.
///
/// The longest key length is measured once at construction.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    dictionaries: DictionaryPair,
    max_phrase_words: usize,
}

impl PhraseMatcher {
    pub fn new(dictionaries: DictionaryPair) -> Self {
        let max_phrase_words = dictionaries
            .forward
            .longest_phrase()
            .max(dictionaries.reverse.longest_phrase());
        PhraseMatcher {
            dictionaries,
            max_phrase_words,
        }
    }

    pub fn dictionaries(&self) -> &DictionaryPair {
        &self.dictionaries
    }

    /// Word count of the longest key in either dictionary
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Resolve lower-cased words into translated units.
    ///
    /// The result never has more units than there are words.
    pub fn match_words(&self, words: &[String]) -> Vec<WordUnit> {
        let mut units = Vec::with_capacity(words.len());
        let mut cursor = 0;

        while cursor < words.len() {
            let unit = self
                .longest_match(&words[cursor..])
                .unwrap_or_else(|| WordUnit {
                    text: capitalize(&words[cursor]),
                    source: UnitSource::PassThrough,
                    consumed: 1,
                });
            trace!(
                position = cursor,
                consumed = unit.consumed,
                text = %unit.text,
                "resolved word unit"
            );
            cursor += unit.consumed;
            units.push(unit);
        }

        units
    }

    fn longest_match(&self, remaining: &[String]) -> Option<WordUnit> {
        // No key has more words than max_phrase_words, so longer phrases cannot match.
        let longest = remaining.len().min(self.max_phrase_words);
        (1..=longest).rev().find_map(|length| {
            let phrase = remaining[..length].join(" ");
            self.dictionaries
                .lookup(&phrase)
                .map(|(direction, translation)| WordUnit {
                    text: translation.to_string(),
                    source: UnitSource::Dictionary(direction),
                    consumed: length,
                })
        })
    }
}

/// Title-case the first character and lower-case the rest.
///
/// Title case differs from upper case for the Latin digraphs (`ǆ` becomes
/// `ǅ`), for characters whose upper case expands to several letters (`ß`
/// becomes `Ss`, `ﬁ` becomes `Fi`) and for Greek letters with iota subscript.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = title_case(first);
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

fn title_case(c: char) -> String {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        '\u{0149}' => "\u{02BC}N".to_string(),
        // Greek with iota subscript: lower-case forms sit 8 below their title-case forms.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).into_iter().collect()
        }
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => c.to_string(),
        '\u{1FB3}' => '\u{1FBC}'.to_string(),
        '\u{1FC3}' => '\u{1FCC}'.to_string(),
        '\u{1FF3}' => '\u{1FFC}'.to_string(),
        '\u{1FB2}' => "\u{1FBA}\u{0345}".to_string(),
        '\u{1FB4}' => "\u{0386}\u{0345}".to_string(),
        '\u{1FC2}' => "\u{1FCA}\u{0345}".to_string(),
        '\u{1FC4}' => "\u{0389}\u{0345}".to_string(),
        '\u{1FF2}' => "\u{1FFA}\u{0345}".to_string(),
        '\u{1FF4}' => "\u{038F}\u{0345}".to_string(),
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}".to_string(),
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}".to_string(),
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}".to_string(),
        _ => {
            // Multi-letter expansions (ß, ligatures) keep only the first letter upper-case.
            let mut upper = c.to_uppercase();
            upper
                .next()
                .into_iter()
                .chain(upper.flat_map(char::to_lowercase))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn texts(units: &[WordUnit]) -> Vec<&str> {
        units.iter().map(|u| u.text.as_str()).collect()
    }

    fn pair(forward: &[(&str, &str)], reverse: &[(&str, &str)]) -> DictionaryPair {
        DictionaryPair::new(
            forward.iter().copied().collect(),
            reverse.iter().copied().collect(),
        )
    }

    fn matcher(forward: &[(&str, &str)], reverse: &[(&str, &str)]) -> PhraseMatcher {
        PhraseMatcher::new(pair(forward, reverse))
    }

    #[test]
    fn test_longest_phrase_wins() {
        let matcher = matcher(&[("new york", "nova iorque"), ("new", "novo")], &[]);
        let units = matcher.match_words(&words("new york"));
        assert_eq!(texts(&units), vec!["nova iorque"]);
        assert_eq!(units[0].consumed, 2);
        assert_eq!(units[0].source, UnitSource::Dictionary(Direction::Forward));
    }

    #[test]
    fn test_shorter_phrase_when_longer_missing() {
        let matcher = matcher(&[("new", "novo"), ("car", "carro")], &[]);
        assert_eq!(
            texts(&matcher.match_words(&words("new car"))),
            vec!["novo", "carro"]
        );
    }

    #[test]
    fn test_forward_preferred_over_reverse() {
        let matcher = matcher(&[("casa", "house")], &[("casa", "home")]);
        let units = matcher.match_words(&words("casa"));
        assert_eq!(texts(&units), vec!["house"]);
    }

    #[test]
    fn test_longer_reverse_beats_shorter_forward() {
        // Length is decided before direction.
        let matcher = matcher(&[("bom", "good")], &[("bom dia", "good morning")]);
        let units = matcher.match_words(&words("bom dia"));
        assert_eq!(texts(&units), vec!["good morning"]);
        assert_eq!(units[0].source, UnitSource::Dictionary(Direction::Reverse));
    }

    #[test]
    fn test_reverse_fallback() {
        let matcher = matcher(&[("cat", "gato")], &[("cachorro", "dog")]);
        assert_eq!(
            texts(&matcher.match_words(&words("cat cachorro"))),
            vec!["gato", "dog"]
        );
    }

    #[test]
    fn test_pass_through_capitalizes() {
        let matcher = PhraseMatcher::new(DictionaryPair::default());
        let units = matcher.match_words(&words("xyzabc lisboa"));
        assert_eq!(texts(&units), vec!["Xyzabc", "Lisboa"]);
        assert!(units.iter().all(|u| u.source == UnitSource::PassThrough));
    }

    #[test]
    fn test_greedy_does_not_backtrack() {
        // "a b" commits first, leaving "c" unmatched even though "b c" exists.
        let matcher = matcher(&[("a b", "ab"), ("b c", "bc")], &[]);
        assert_eq!(
            texts(&matcher.match_words(&words("a b c"))),
            vec!["ab", "C"]
        );
    }

    #[test]
    fn test_match_restarts_after_pass_through() {
        let matcher = matcher(&[("good morning", "bom dia")], &[]);
        assert_eq!(
            texts(&matcher.match_words(&words("maria good morning"))),
            vec!["Maria", "bom dia"]
        );
    }

    #[test]
    fn test_empty_input() {
        let matcher = matcher(&[("cat", "gato")], &[]);
        assert!(matcher.match_words(&[]).is_empty());
    }

    #[test]
    fn test_unit_count_never_exceeds_word_count() {
        let matcher = matcher(&[("the cat", "o gato"), ("sat", "sentou")], &[]);
        let input = words("the cat sat on the mat");
        let units = matcher.match_words(&input);
        assert!(units.len() <= input.len());
        assert_eq!(units.iter().map(|u| u.consumed).sum::<usize>(), input.len());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("42abc"), "42abc");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_uses_title_case() {
        assert_eq!(capitalize("ǆemal"), "ǅemal");
        assert_eq!(capitalize("ǉubljana"), "ǈubljana");
        assert_eq!(capitalize("ßa"), "Ssa");
        assert_eq!(capitalize("ﬁne"), "Fine");
        assert_eq!(capitalize("ᾳ"), "ᾼ");
        assert_eq!(capitalize("ŉ"), "ʼN");
    }

    #[test]
    fn test_capitalize_lowercases_rest() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("σοφοσ"), "Σοφοσ");
    }

    #[test]
    fn test_max_phrase_words_covers_both_dictionaries() {
        let matcher = matcher(&[("cat", "gato")], &[("muito obrigado mesmo", "x")]);
        assert_eq!(matcher.max_phrase_words(), 3);
        assert_eq!(PhraseMatcher::new(DictionaryPair::default()).max_phrase_words(), 0);
    }
}
