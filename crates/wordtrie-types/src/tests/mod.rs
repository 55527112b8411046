use crate::{Command, Reply};

#[test]
fn test_parse_add() {
    assert_eq!(
        Command::parse("add apple a round fruit"),
        Some(Command::Add {
            word: "apple".to_string(),
            explanation: "a round fruit".to_string(),
        })
    );
    assert_eq!(
        Command::parse("  add   kiwi   fuzzy  "),
        Some(Command::Add {
            word: "kiwi".to_string(),
            explanation: "fuzzy  ".to_string(),
        })
    );
    assert_eq!(
        Command::parse("add fig"),
        Some(Command::Add {
            word: "fig".to_string(),
            explanation: String::new(),
        })
    );
}

#[test]
fn test_parse_queries() {
    assert_eq!(Command::parse("find ap"), Some(Command::Find("ap".to_string())));
    assert_eq!(Command::parse("find"), Some(Command::Find(String::new())));
    assert_eq!(Command::parse("get apple"), Some(Command::Get("apple".to_string())));
    assert_eq!(Command::parse("count"), Some(Command::Count(String::new())));
    assert_eq!(Command::parse("ap"), Some(Command::Find("ap".to_string())));
}

#[test]
fn test_parse_keywords() {
    assert_eq!(Command::parse("dump"), Some(Command::Dump));
    assert_eq!(Command::parse("help"), Some(Command::Help));
    assert_eq!(Command::parse("quit"), Some(Command::Quit));
    assert_eq!(Command::parse("exit\n"), Some(Command::Quit));
    assert_eq!(Command::parse("   "), None);
    assert_eq!(Command::parse("what is this"), Some(Command::Help));
}

#[test]
fn test_reply_display() {
    assert_eq!(Reply::Results(vec![]).to_string(), "(no matches)");
    assert_eq!(
        Reply::Results(vec!["ban -> forbid".into(), "bar -> pub".into()]).to_string(),
        "ban -> forbid\nbar -> pub"
    );
    assert_eq!(
        Reply::Explanation {
            word: "cat".into(),
            explanation: None,
        }
        .to_string(),
        "cat: not found"
    );
    assert_eq!(
        Reply::Count {
            prefix: "ca".into(),
            count: 3,
        }
        .to_string(),
        "3 under \"ca\""
    );
    assert_eq!(Reply::Error("bad".into()).to_string(), "error: bad");
}

#[test]
fn test_parse_keeps_explanation_verbatim() {
    assert_eq!(
        Command::parse("add note ends with two spaces  "),
        Some(Command::Add {
            word: "note".to_string(),
            explanation: "ends with two spaces  ".to_string(),
        })
    );
    assert_eq!(
        Command::parse("add fig   "),
        Some(Command::Add {
            word: "fig".to_string(),
            explanation: String::new(),
        })
    );
}

#[test]
fn test_parse_trims_other_arguments() {
    assert_eq!(Command::parse("find ca  "), Some(Command::Find("ca".to_string())));
    assert_eq!(Command::parse("get cat\t"), Some(Command::Get("cat".to_string())));
    assert_eq!(Command::parse("count   "), Some(Command::Count(String::new())));
    assert_eq!(Command::parse("dump  "), Some(Command::Dump));
    assert_eq!(Command::parse("ca "), Some(Command::Find("ca".to_string())));
}
