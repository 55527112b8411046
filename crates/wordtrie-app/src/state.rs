use std::sync::Arc;

use tokio::sync::RwLock;
use wordtrie_config::Config;
use wordtrie_core::Trie;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Single writer for `add`, shared readers for queries
    pub dictionary: RwLock<Trie>,
}

impl AppState {
    pub fn new(config: Config, dictionary: Trie) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            dictionary: RwLock::new(dictionary),
        }
    }
}
