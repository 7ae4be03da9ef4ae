//! Bounded transposition cache — one per heuristic level, §4.G step 6,
//! §5. Keyed on `(state_hash, n)` per the Design Notes' resolved open
//! question: a hit at a smaller `n` than what was cached for that hash
//! is still a hit, because the key carries `n` directly.
//!
//! Capped at 5000 entries; once full, further inserts are silently
//! dropped rather than evicting anything (§5: "cache overflow is
//! silent"; §7 repeats this). This is deliberately not an LRU: the
//! cache is a heuristic accelerator, not a memo of truth, so dropping
//! new entries once full is as sound as evicting old ones.

use fxhash::FxHashSet;

pub const CACHE_CAPACITY: usize = 5000;

#[derive(Debug, Default)]
pub struct TranspositionCache {
    seen: FxHashSet<(u64, i32)>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self { seen: FxHashSet::default() }
    }

    /// True if `(hash, n)` was already recorded. Does not insert.
    pub fn contains(&self, hash: u64, n: i32) -> bool {
        self.seen.contains(&(hash, n))
    }

    /// Records `(hash, n)` unless the cache is already at capacity.
    pub fn insert(&mut self, hash: u64, n: i32) {
        if self.seen.len() >= CACHE_CAPACITY && !self.seen.contains(&(hash, n)) {
            return;
        }
        self.seen.insert((hash, n));
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_contains() {
        let mut cache = TranspositionCache::new();
        assert!(!cache.contains(1, 2));
        cache.insert(1, 2);
        assert!(cache.contains(1, 2));
    }

    #[test]
    fn different_n_is_a_different_key() {
        let mut cache = TranspositionCache::new();
        cache.insert(1, 2);
        assert!(!cache.contains(1, 3));
    }

    #[test]
    fn overflow_stops_inserting_new_keys_but_keeps_old_ones() {
        let mut cache = TranspositionCache::new();
        for i in 0..CACHE_CAPACITY as u64 {
            cache.insert(i, 0);
        }
        assert_eq!(cache.len(), CACHE_CAPACITY);
        cache.insert(999_999, 0);
        assert_eq!(cache.len(), CACHE_CAPACITY);
        assert!(!cache.contains(999_999, 0));
        assert!(cache.contains(0, 0));
    }
}
