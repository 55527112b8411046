use std::fmt;

use serde::Serialize;
use serde::ser::{Error as _, SerializeMap, Serializer};

use crate::error::TrieError;

/// Maximum number of entries returned by a prefix search
pub const SEARCH_LIMIT: usize = 15;

/// One child slot per letter `a..=z`
pub const ALPHABET_SIZE: usize = 26;

/// Deepest tree the JSON dump will serialize; serde recurses once per level
pub const MAX_DUMP_DEPTH: usize = 256;

const ENTRY_SEPARATOR: &str = " -> ";

type Slots = [Option<Box<TrieNode>>; ALPHABET_SIZE];

/// One position in the trie.
///
/// A node is a stored word iff it carries an explanation.
#[derive(Debug, Default, Serialize)]
pub struct TrieNode {
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    ch: Option<char>,
    #[serde(rename = "prefix")]
    prefix_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
    #[serde(rename = "slot", serialize_with = "serialize_slots")]
    children: Slots,
}

impl TrieNode {
    fn with_char(ch: char) -> Self {
        Self {
            ch: Some(ch),
            ..Self::default()
        }
    }

    /// Whether an insert terminated at this node
    pub fn is_word(&self) -> bool {
        self.explanation.is_some()
    }

    /// Number of insert calls whose word passes through this node
    pub fn prefix_count(&self) -> u32 {
        self.prefix_count
    }

    /// Explanation of the most recent insert that terminated here
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Letter on the edge from the parent, `None` for the root
    pub fn character(&self) -> Option<char> {
        self.ch
    }

    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        let idx = letter_index(u8::try_from(letter).ok()?)?;
        self.children[idx].as_deref()
    }

    /// Existing children in alphabetical order
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_deref().map(|child| (index_letter(idx), child)))
    }
}

/// Prefix tree over lowercase ASCII words, each carrying a free-form explanation.
///
/// Every instance owns its own root, so independent dictionaries can coexist.
/// There is no internal synchronization; wrap it in a lock to share it.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
    /// Length of the longest inserted word
    depth: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `word` with `explanation`, overwriting the explanation of an existing word.
    ///
    /// Every node on the path has its prefix count bumped, including on re-insert,
    /// so counts track insert calls rather than distinct words.
    pub fn insert(&mut self, word: &str, explanation: impl Into<String>) -> Result<(), TrieError> {
        validate_word(word)?;

        let mut node = &mut self.root;
        node.prefix_count += 1;
        for byte in word.bytes() {
            let idx = usize::from(byte - b'a');
            node = &mut **node.children[idx]
                .get_or_insert_with(|| Box::new(TrieNode::with_char(char::from(byte))));
            node.prefix_count += 1;
        }

        if node.explanation.is_none() {
            self.words += 1;
        }
        self.depth = self.depth.max(word.len());
        node.explanation = Some(explanation.into());
        Ok(())
    }

    /// Up to [`SEARCH_LIMIT`] entries formatted as `word -> explanation`, in dictionary order.
    ///
    /// Enumeration starts one letter below the prefix node, so a prefix that is
    /// itself a stored word is not part of its own results. Prefixes containing
    /// anything other than `a..=z` match nothing.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let Some(anchor) = self.descend(prefix) else {
            return results;
        };
        if anchor.prefix_count == 0 {
            return results;
        }

        let mut buffer = String::from(prefix);
        for (letter, child) in anchor.children() {
            buffer.push(letter);
            collect(child, &mut buffer, &mut results, SEARCH_LIMIT);
            buffer.pop();
            if results.len() >= SEARCH_LIMIT {
                break;
            }
        }
        results
    }

    /// Explanation stored for exactly `word`
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.descend(word)?.explanation()
    }

    /// Number of insert calls whose word starts with `prefix`; the empty prefix counts all inserts
    pub fn count_prefix(&self, prefix: &str) -> u32 {
        self.descend(prefix).map_or(0, TrieNode::prefix_count)
    }

    /// Number of distinct stored words
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Debug dump of the whole tree. The layout is not stable.
    ///
    /// Fails for trees deeper than [`MAX_DUMP_DEPTH`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        if self.depth > MAX_DUMP_DEPTH {
            return Err(serde_json::Error::custom(format!(
                "tree depth {} exceeds dump limit {MAX_DUMP_DEPTH}",
                self.depth
            )));
        }
        serde_json::to_string(&self.root)
    }

    fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.bytes().try_fold(&self.root, |node, byte| {
            node.children[letter_index(byte)?].as_deref()
        })
    }
}

// Default drop recurses once per level and overflows on long words
impl Drop for Trie {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => write!(f, "Trie: {json}"),
            Err(e) => write!(f, "Trie: <{e}>"),
        }
    }
}

/// Depth-first pre-order walk below `node`, `buffer` holding the word spelled so far.
///
/// Iterative, so depth is bounded by the heap rather than the call stack.
/// `buffer` is restored before returning.
fn collect(node: &TrieNode, buffer: &mut String, out: &mut Vec<String>, limit: usize) {
    let base = buffer.len();
    if let Some(explanation) = &node.explanation {
        out.push(format_entry(buffer, explanation));
    }

    // (node, next slot to visit)
    let mut stack: Vec<(&TrieNode, usize)> = vec![(node, 0)];
    while let Some(frame) = stack.last_mut() {
        if out.len() >= limit {
            break;
        }

        let Some((idx, child)) = next_child(frame.0, frame.1) else {
            stack.pop();
            if !stack.is_empty() {
                buffer.pop();
            }
            continue;
        };
        frame.1 = idx + 1;

        buffer.push(index_letter(idx));
        if let Some(explanation) = &child.explanation {
            out.push(format_entry(buffer, explanation));
        }
        stack.push((child, 0));
    }

    buffer.truncate(base);
}

/// First existing child at or after slot `from`
fn next_child(node: &TrieNode, from: usize) -> Option<(usize, &TrieNode)> {
    node.children
        .iter()
        .enumerate()
        .skip(from)
        .find_map(|(idx, slot)| slot.as_deref().map(|child| (idx, child)))
}

fn format_entry(word: &str, explanation: &str) -> String {
    format!("{word}{ENTRY_SEPARATOR}{explanation}")
}

fn validate_word(word: &str) -> Result<(), TrieError> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }
    match word
        .chars()
        .enumerate()
        .find(|(_, letter)| !letter.is_ascii_lowercase())
    {
        Some((position, letter)) => Err(TrieError::InvalidLetter {
            word: word.to_string(),
            letter,
            position,
        }),
        None => Ok(()),
    }
}

fn letter_index(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

fn index_letter(idx: usize) -> char {
    char::from(b'a' + idx as u8)
}

// Empty slots are left out of the dump
fn serialize_slots<S: Serializer>(slots: &Slots, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    for (idx, slot) in slots.iter().enumerate() {
        if let Some(child) = slot {
            map.serialize_entry(&index_letter(idx), child)?;
        }
    }
    map.end()
}
