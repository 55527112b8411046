use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load dictionary files at startup
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// `.tsv`, `.txt` or `.json` dictionary files, loaded in order
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let paths = env::var_os("WORDTRIE_DICT_PATHS")
            .map(|v| {
                env::split_paths(&v)
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.display().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            enabled: default_enabled(),
            paths,
        }
    }
}
