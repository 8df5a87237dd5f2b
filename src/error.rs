/// Error types for dictionary loading and report rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// A dictionary file is missing or could not be read
    DictionaryReadError(String),
    /// The dictionary path exists but does not point at a regular file
    InvalidDictionaryPath(String),
    /// A translation report could not be rendered
    SerializationError(String),
}

impl std::fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslatorError::DictionaryReadError(msg) => {
                write!(f, "Dictionary read error: {}", msg)
            }
            TranslatorError::InvalidDictionaryPath(msg) => {
                write!(f, "Invalid dictionary path: {}", msg)
            }
            TranslatorError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TranslatorError {}

/// Result type for translator operations
pub type TranslatorResult<T> = Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = TranslatorError::DictionaryReadError("us_pt.txt: not found".to_string());
        assert_eq!(err.to_string(), "Dictionary read error: us_pt.txt: not found");

        let err = TranslatorError::InvalidDictionaryPath("'dicts' is not a file".to_string());
        assert_eq!(err.to_string(), "Invalid dictionary path: 'dicts' is not a file");
    }
}
