use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Command(Command),
    Reply(Reply),
}

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { word: String, explanation: String },
    Find(String),
    Get(String),
    Count(String),
    Dump,
    Help,
    Quit,
}

impl Command {
    /// Parse a REPL line. Blank lines yield `None`; a lone token is a search.
    ///
    /// The explanation of `add` is kept as typed, trailing whitespace included.
    /// Every other argument is trimmed.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_start();
        if line.is_empty() {
            return None;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (line, ""),
        };

        if head == "add" {
            return Some(parse_add(rest));
        }

        let command = match (head, rest.trim_end()) {
            ("find", prefix) => Command::Find(prefix.to_string()),
            ("get", word) => Command::Get(word.to_string()),
            ("count", prefix) => Command::Count(prefix.to_string()),
            ("dump", "") => Command::Dump,
            ("help", "") => Command::Help,
            ("quit" | "exit", "") => Command::Quit,
            (token, "") => Command::Find(token.to_string()),
            _ => Command::Help,
        };
        Some(command)
    }
}

fn parse_add(rest: &str) -> Command {
    match rest.split_once(char::is_whitespace) {
        Some((word, explanation)) => Command::Add {
            word: word.to_string(),
            explanation: explanation.trim_start().to_string(),
        },
        None => Command::Add {
            word: rest.to_string(),
            explanation: String::new(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Results(Vec<String>),
    Added(String),
    Explanation {
        word: String,
        explanation: Option<String>,
    },
    Count {
        prefix: String,
        count: u32,
    },
    Dump(String),
    Help,
    Error(String),
}

pub const HELP: &str = "\
commands:
  add <word> <explanation>   store a word (a-z only)
  find [prefix]              list up to 15 completions
  get <word>                 show the explanation of a word
  count [prefix]             number of inserts under a prefix
  dump                       print the tree as JSON
  quit                       leave
leading whitespace is ignored; the explanation of add is stored as typed,
trailing spaces included, while other arguments are trimmed";

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Results(entries) if entries.is_empty() => write!(f, "(no matches)"),
            Reply::Results(entries) => write!(f, "{}", entries.join("\n")),
            Reply::Added(word) => write!(f, "added {word}"),
            Reply::Explanation {
                word,
                explanation: Some(explanation),
            } => write!(f, "{word} -> {explanation}"),
            Reply::Explanation {
                word,
                explanation: None,
            } => write!(f, "{word}: not found"),
            Reply::Count { prefix, count } => write!(f, "{count} under {prefix:?}"),
            Reply::Dump(json) => write!(f, "{json}"),
            Reply::Help => write!(f, "{HELP}"),
            Reply::Error(message) => write!(f, "error: {message}"),
        }
    }
}
