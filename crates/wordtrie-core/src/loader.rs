use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::trie::Trie;

/// On-disk dictionary layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    /// `word<TAB>explanation` per line, `#` comments
    Tsv,
    /// `{"words": [{"word": ..., "explanation": ...}]}`
    Json,
}

impl DictionaryFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "tsv" | "txt" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct DictionaryJson {
    words: Vec<DictionaryJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct DictionaryJsonEntry {
    word: String,
    #[serde(default)]
    explanation: String,
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load a dictionary file into `trie`
    pub fn load_from_file(trie: &mut Trie, path: &Path) -> Result<LoadReport, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let format = DictionaryFormat::from_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

        tracing::info!("Loading dictionary from file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let report = Self::load_str(trie, &content, format)?;
        tracing::info!(
            "Loaded {} dictionary entries from {} ({} skipped)",
            report.inserted,
            path.display(),
            report.skipped
        );
        Ok(report)
    }

    /// Load dictionary text into `trie`. Malformed entries are skipped, not fatal.
    pub fn load_str(
        trie: &mut Trie,
        content: &str,
        format: DictionaryFormat,
    ) -> Result<LoadReport, LoadError> {
        match format {
            DictionaryFormat::Tsv => Ok(load_tsv(trie, content)),
            DictionaryFormat::Json => load_json(trie, content),
        }
    }
}

fn load_tsv(trie: &mut Trie, content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((word, explanation)) = line.split_once('\t') else {
            tracing::warn!("Line {}: missing tab separator, skipping", line_no + 1);
            report.skipped += 1;
            continue;
        };

        match trie.insert(word.trim(), explanation) {
            Ok(()) => report.inserted += 1,
            Err(e) => {
                tracing::warn!("Line {}: {}", line_no + 1, e);
                report.skipped += 1;
            }
        }
    }

    report
}

fn load_json(trie: &mut Trie, content: &str) -> Result<LoadReport, LoadError> {
    let data: DictionaryJson = serde_json::from_str(content)?;
    let mut report = LoadReport::default();

    for entry in data.words {
        match trie.insert(&entry.word, entry.explanation) {
            Ok(()) => report.inserted += 1,
            Err(e) => {
                tracing::warn!("Skipping dictionary entry: {}", e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
