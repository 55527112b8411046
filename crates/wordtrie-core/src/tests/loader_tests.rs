//! Dictionary file loading

use std::path::{Path, PathBuf};

use crate::{DictionaryFormat, DictionaryLoader, LoadError, LoadReport, Trie};

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wordtrie-{}-{name}", std::process::id()));
    std::fs::write(&path, content).expect("write temp dictionary");
    path
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        DictionaryFormat::from_path(Path::new("words.tsv")),
        Some(DictionaryFormat::Tsv)
    );
    assert_eq!(
        DictionaryFormat::from_path(Path::new("dir/words.TXT")),
        Some(DictionaryFormat::Tsv)
    );
    assert_eq!(
        DictionaryFormat::from_path(Path::new("words.json")),
        Some(DictionaryFormat::Json)
    );
    assert_eq!(DictionaryFormat::from_path(Path::new("words.xml")), None);
    assert_eq!(DictionaryFormat::from_path(Path::new("words")), None);
}

#[test]
fn test_load_tsv_skips_bad_lines() {
    let content = "# sample dictionary\n\
                   apple\ta fruit\n\
                   \n\
                   banana\n\
                   Cherry\ta red fruit\n\
                   date\t\r\n\
                   apricot\tstone fruit, orange\n";
    let mut trie = Trie::new();

    let report = DictionaryLoader::load_str(&mut trie, content, DictionaryFormat::Tsv).unwrap();

    assert_eq!(
        report,
        LoadReport {
            inserted: 3,
            skipped: 2,
        }
    );
    assert_eq!(
        trie.search_prefix("a"),
        vec!["apple -> a fruit", "apricot -> stone fruit, orange"]
    );
    assert_eq!(trie.lookup("date"), Some(""));
    assert_eq!(trie.lookup("banana"), None);
}

#[test]
fn test_load_json() {
    let content = r#"{
        "words": [
            {"word": "moon", "explanation": "natural satellite"},
            {"word": "Mars", "explanation": "planet"},
            {"word": "mop"}
        ]
    }"#;
    let mut trie = Trie::new();

    let report = DictionaryLoader::load_str(&mut trie, content, DictionaryFormat::Json).unwrap();

    assert_eq!(report.inserted, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(trie.search_prefix("mo"), vec!["moon -> natural satellite", "mop -> "]);
}

#[test]
fn test_load_json_malformed() {
    let mut trie = Trie::new();
    let result = DictionaryLoader::load_str(&mut trie, "{\"words\": [", DictionaryFormat::Json);

    assert!(matches!(result, Err(LoadError::JsonError(_))));
    assert!(trie.is_empty());
}

#[test]
fn test_load_from_file() {
    let path = temp_file("fruits.tsv", "kiwi\tfuzzy fruit\nkumquat\ttiny citrus\n");
    let mut trie = Trie::new();

    let report = DictionaryLoader::load_from_file(&mut trie, &path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(report.inserted, 2);
    assert_eq!(
        trie.search_prefix("k"),
        vec!["kiwi -> fuzzy fruit", "kumquat -> tiny citrus"]
    );
}

#[test]
fn test_load_missing_file() {
    let mut trie = Trie::new();
    let result = DictionaryLoader::load_from_file(&mut trie, Path::new("/nonexistent/words.tsv"));

    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

#[test]
fn test_load_unsupported_extension() {
    let path = temp_file("words.csv", "a,b\n");
    let mut trie = Trie::new();

    let result = DictionaryLoader::load_from_file(&mut trie, &path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
}
