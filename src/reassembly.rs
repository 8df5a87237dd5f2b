//! Punctuation restoration
//!
//! Rebuilds one output line from the translated units and the original mixed
//! token stream. Every word position in the stream takes the next unit in
//! order. Positions left over once the units run out (multi-word phrases
//! collapse several words into one unit) emit nothing. Punctuation is emitted
//! where it stood, except that a comma is dropped unless the last emitted item
//! exists and is not itself a comma.

use crate::tokenizer::Token;

/// Reassemble translated units and punctuation into a single line.
///
/// Items are joined with single spaces and every `" ,"` is then tightened
/// to `","`.
pub fn restore_punctuation<S: AsRef<str>>(translated: &[S], tokens: &[Token]) -> String {
    let mut result: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut units = translated.iter();

    for token in tokens {
        if token.is_word() {
            if let Some(unit) = units.next() {
                result.push(unit.as_ref());
            }
        } else if token.is_comma() {
            if result.last().is_some_and(|last| *last != ",") {
                result.push(&token.text);
            }
        } else {
            result.push(&token.text);
        }
    }

    result.join(" ").replace(" ,", ",")
}
