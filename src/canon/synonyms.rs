// src/canon/synonyms.rs
use std::borrow::Cow;
use std::collections::HashMap;

use regex::{Captures, Regex};

/// One synonym table compiled for lookup.
///
/// Word-mode substitution builds a single alternation of every key, longest
/// first, bounded by `\b`. The scan is one pass, so a replacement is never
/// re-matched and a long synonym ("entero_rhino") wins over the shorter one it
/// contains ("rhino").
pub struct SynonymMatcher {
    map: HashMap<&'static str, &'static str>,
    words: Regex,
}

impl SynonymMatcher {
    pub fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        let map: HashMap<_, _> = table.iter().copied().collect();

        let mut keys: Vec<&str> = map.keys().copied().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = keys.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
        let words = Regex::new(&format!(r"\b(?:{alternation})\b")).expect("escaped synonym alternation");

        Self { map, words }
    }

    /// Replace every whole-word occurrence of a key. Input is matched as-is;
    /// callers lowercase first.
    pub fn replace_words<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.words.replace_all(text, |caps: &Captures| {
            let hit = &caps[0];
            s!(self.map.get(hit).copied().unwrap_or(hit))
        })
    }

    /// Whole-string lookup: `Some(code)` only when the entire text is a key.
    pub fn lookup(&self, text: &str) -> Option<&'static str> {
        self.map.get(text).copied()
    }
}
