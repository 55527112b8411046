/// Rejected insert; the trie is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("Word must not be empty")]
    EmptyWord,

    #[error("Invalid letter {letter:?} at position {position} in {word:?}, expected a-z")]
    InvalidLetter {
        word: String,
        letter: char,
        position: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported dictionary format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
