//! Shared word→count table and the tokenization feeding it.

use hashbrown::HashMap;
use std::sync::Mutex;

/// Split a line into normalized words: ASCII punctuation acts as a
/// separator (the same effect as replacing it with whitespace first) and
/// every token is lowercased. Empty tokens are dropped.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Word-occurrence counts, shared by all consumer workers.
///
/// Every update takes the table lock for a single increment, so no update
/// is ever lost regardless of how line processing interleaves.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    words: Mutex<HashMap<String, u64>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `word` (starting from zero).
    pub fn increment(&self, word: String) {
        let mut words = self.words.lock().expect("frequency table lock poisoned");
        *words.entry(word).or_insert(0) += 1;
    }

    /// Current count for `word`.
    pub fn count(&self, word: &str) -> u64 {
        let words = self.words.lock().expect("frequency table lock poisoned");
        words.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words seen so far.
    pub fn distinct(&self) -> usize {
        let words = self.words.lock().expect("frequency table lock poisoned");
        words.len()
    }

    /// Consume the table into its (word, count) pairs.
    ///
    /// Called only after the worker barrier, when no other handle exists.
    pub fn into_entries(self) -> Vec<(String, u64)> {
        self.words
            .into_inner()
            .expect("frequency table lock poisoned")
            .into_iter()
            .collect()
    }
}
