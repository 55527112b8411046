use crate::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.dictionary.enabled);
    assert!(config.dictionary.paths.is_empty());
    assert_eq!(config.log.level, "info");
    assert!(!config.log.json);
    assert_eq!(config.channel_capacity, 64);
    assert_eq!(config.prompt, "> ");
}

#[test]
fn test_partial_json_takes_defaults() {
    let config = Config::from_json(
        r#"{
            "dictionary": { "paths": ["words.tsv", "extra.json"] },
            "log": { "json": true }
        }"#,
    )
    .unwrap();

    assert!(config.dictionary.enabled);
    assert_eq!(config.dictionary.paths, vec!["words.tsv", "extra.json"]);
    assert!(config.log.json);
    assert_eq!(config.log.level, "info");
    assert_eq!(config.channel_capacity, 64);
}

#[test]
fn test_round_trip_through_file() {
    let mut config = Config::default();
    config.dictionary.enabled = false;
    config.channel_capacity = 8;

    let path = std::env::temp_dir().join(format!("wordtrie-config-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(!loaded.dictionary.enabled);
    assert_eq!(loaded.channel_capacity, 8);
}

#[test]
fn test_missing_file() {
    let err = Config::from_file(std::path::Path::new("/nonexistent/wordtrie.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/wordtrie.json"));
}
