//! Deterministic top-K extraction from the finished frequency table.

use serde::{Deserialize, Serialize};

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

/// Order the (word, count) pairs by count descending and return the top
/// `k`. Equal counts are broken by word, lexicographic ascending, so the
/// output is identical across runs on identical input.
pub fn rank_top(entries: Vec<(String, u64)>, k: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = entries
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();

    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn orders_by_count_descending() {
        let ranked = rank_top(entries(&[("low", 1), ("high", 9), ("mid", 4)]), 10);
        let words: Vec<_> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["high", "mid", "low"]);
    }

    #[test]
    fn ties_break_lexicographically_ascending() {
        let ranked = rank_top(entries(&[("dog", 2), ("bird", 3), ("cat", 2)]), 3);
        let rows: Vec<_> = ranked
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect();
        assert_eq!(rows, [("bird", 3), ("cat", 2), ("dog", 2)]);
    }

    #[test]
    fn truncates_to_k() {
        let ranked = rank_top(entries(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "d");
    }

    #[test]
    fn fewer_than_k_returns_all() {
        let ranked = rank_top(entries(&[("only", 7)]), 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn deterministic_across_input_orderings() {
        let forward = rank_top(entries(&[("a", 1), ("b", 1), ("c", 1)]), 10);
        let backward = rank_top(entries(&[("c", 1), ("b", 1), ("a", 1)]), 10);
        assert_eq!(forward, backward);
    }
}
