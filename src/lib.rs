//! Bidirectional dictionary-based phrase translation
//!
//! Text is split into words and punctuation, the words are resolved greedily
//! against two phrase dictionaries (longest phrase first, forward direction
//! before reverse), and the punctuation is put back around the translated
//! units.
//!
//! ```ignore
//! use tradutor::{Dictionary, DictionaryPair, Translator};
//!
//! let forward = Dictionary::parse("new york=nova iorque\nhello=olá\n");
//! let reverse = Dictionary::parse("obrigado=thank you\n");
//! let translator = Translator::new(DictionaryPair::new(forward, reverse));
//!
//! assert_eq!(translator.translate("Hello, New York"), "olá, nova iorque");
//! ```

pub mod dictionary;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod reassembly;
pub mod tokenizer;
pub mod translator;


pub use dictionary::{Dictionary, Direction};
pub use error::{TranslatorError, TranslatorResult};
pub use loader::{
    DEFAULT_FORWARD_PATH, DEFAULT_REVERSE_PATH, load_dictionary_from_file, load_dictionary_pair,
};
pub use matcher::{DictionaryPair, PhraseMatcher, UnitSource, WordUnit, capitalize};
pub use reassembly::restore_punctuation;
pub use tokenizer::{Token, TokenKind, extract_words, tokenize};
pub use translator::{Translation, Translator};
