use core::borrow::Borrow;
use core::hash::Hash;
use std::collections::HashMap;

/// Ordered `(key, count)` entries produced by grouping records on a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountView<K> {
    entries: Vec<(K, u64)>,
}

impl<K> CountView<K> {
    #[must_use]
    pub const fn from_entries(entries: Vec<(K, u64)>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[(K, u64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().find(|(k, _)| Borrow::<Q>::borrow(k) == key).map(|&(_, count)| count)
    }

    /// Keep the first `k` entries.
    #[must_use]
    pub fn top_k(mut self, k: usize) -> Self {
        self.entries.truncate(k);
        self
    }

    /// Order entries by count, highest first; ties keep their current relative order.
    #[must_use]
    pub fn ranked(mut self) -> Self {
        self.entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        self
    }
}

impl<K: Eq + Hash + Clone> CountView<K> {
    /// Count occurrences of each key, listing keys in the order they are first seen.
    pub fn tally(keys: impl IntoIterator<Item = K>) -> Self {
        let mut positions: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, u64)> = Vec::new();

        for key in keys {
            if let Some(&position) = positions.get(&key) {
                entries[position].1 += 1;
            } else {
                let _ = positions.insert(key.clone(), entries.len());
                entries.push((key, 1));
            }
        }

        Self { entries }
    }
}

impl<K: Ord> CountView<K> {
    /// Order entries by key, ascending.
    #[must_use]
    pub fn sorted_by_key(mut self) -> Self {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let view = CountView::tally(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(view.entries(), &[("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(view.total(), 6);
    }

    #[test]
    fn test_ranked_breaks_ties_by_first_seen() {
        let genres = ["Horror"; 7]
            .into_iter()
            .chain(["Dramas"; 10])
            .chain(["Comedies"; 7])
            .map(str::to_string);

        let top = CountView::tally(genres).ranked().top_k(2);
        assert_eq!(top.entries(), &[("Dramas".to_string(), 10), ("Horror".to_string(), 7)]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let keys = ["x", "y", "z", "y", "x", "z"];
        let first = CountView::tally(keys).ranked();
        let second = CountView::tally(keys).ranked();
        assert_eq!(first, second);
        assert_eq!(first.entries(), &[("x", 2), ("y", 2), ("z", 2)]);
    }

    #[test]
    fn test_sorted_by_key() {
        let view = CountView::tally([2021, 2019, 2021, 2020]).sorted_by_key();
        assert_eq!(view.entries(), &[(2019, 1), (2020, 1), (2021, 2)]);
    }

    #[test]
    fn test_top_k_larger_than_len() {
        let view = CountView::tally(["a"]).top_k(10);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_get_by_borrowed_key() {
        let view = CountView::tally(["Dramas".to_string()]);
        assert_eq!(view.get("Dramas"), Some(1));
        assert_eq!(view.get("Horror"), None);
    }

    #[test]
    fn test_empty() {
        let view = CountView::<String>::tally([]);
        assert!(view.is_empty());
        assert_eq!(view.total(), 0);
    }
}
