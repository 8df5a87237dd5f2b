use regex::Regex;
use std::sync::LazyLock;

/// Group 1 is a maximal run of word characters, group 2 a single character
/// that is neither a word character nor whitespace.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\b\w+\b)|([^\w\s])").expect("token pattern is valid"));

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_comma(&self) -> bool {
        self.kind == TokenKind::Punctuation && self.text == ","
    }
}

/// Split text into word and punctuation tokens in source order.
///
/// Whitespace separates tokens but never becomes one.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let (kind, m) = match (caps.get(1), caps.get(2)) {
                (Some(word), _) => (TokenKind::Word, word),
                (None, Some(symbol)) => (TokenKind::Punctuation, symbol),
                (None, None) => return None,
            };
            Some(Token {
                kind,
                text: m.as_str().to_string(),
            })
        })
        .collect()
}

/// The word tokens of `text`, trimmed and lower-cased, punctuation dropped
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim().to_lowercase())
        .collect()
}
