pub mod error;
pub mod loader;
pub mod trie;

pub use error::{LoadError, TrieError};
pub use loader::{DictionaryFormat, DictionaryLoader, LoadReport};
pub use trie::{ALPHABET_SIZE, MAX_DUMP_DEPTH, SEARCH_LIMIT, Trie, TrieNode};

#[cfg(test)]
mod tests;
