use std::path::Path;

use anyhow::Context;
use wordtrie_config::dictionary::DictionaryConfig;
use wordtrie_core::{DictionaryLoader, Trie};

/// Build the startup trie from the configured dictionary files
pub fn load_dictionaries(config: &DictionaryConfig) -> anyhow::Result<Trie> {
    let mut trie = Trie::new();

    if !config.enabled {
        tracing::warn!("Dictionary loading disabled, starting with an empty trie");
        return Ok(trie);
    }

    for path in &config.paths {
        DictionaryLoader::load_from_file(&mut trie, Path::new(path))
            .with_context(|| format!("failed to load dictionary {path}"))?;
    }

    tracing::info!("Dictionary ready with {} words", trie.len());
    Ok(trie)
}
