use crate::dictionary::Dictionary;
use crate::error::{TranslatorError, TranslatorResult};
use crate::matcher::DictionaryPair;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default dictionary path for the forward direction, relative to the working directory
pub const DEFAULT_FORWARD_PATH: &str = "us_pt.txt";
/// Default dictionary path for the reverse direction, relative to the working directory
pub const DEFAULT_REVERSE_PATH: &str = "pt_us.txt";

/// Load a dictionary from a single UTF-8 text file
///
/// Each line has the form `key1,key2,...=translation`; see [`Dictionary::parse`].
///
/// # Arguments
/// * `path` - Path to the dictionary file
///
/// # Errors
/// - File not found or unreadable
/// - Path is not a regular file
/// - File is not valid UTF-8
pub fn load_dictionary_from_file(path: &Path) -> TranslatorResult<Dictionary> {
    if path.exists() && !path.is_file() {
        return Err(TranslatorError::InvalidDictionaryPath(format!(
            "'{}' is not a file",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TranslatorError::DictionaryReadError(format!(
            "Failed to read file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let (dictionary, skipped) = Dictionary::parse_counting(&content);
    if skipped > 0 {
        debug!(
            path = %path.display(),
            skipped,
            "ignored dictionary lines without '='"
        );
    }
    if dictionary.is_empty() {
        warn!(path = %path.display(), "dictionary contains no entries");
    }
    info!(path = %path.display(), entries = dictionary.len(), "loaded dictionary");

    Ok(dictionary)
}

/// Load both translation directions
pub fn load_dictionary_pair(forward: &Path, reverse: &Path) -> TranslatorResult<DictionaryPair> {
    Ok(DictionaryPair::new(
        load_dictionary_from_file(forward)?,
        load_dictionary_from_file(reverse)?,
    ))
}
