//! Single-slot keyed memo owned by a view.
//!
//! Holds at most one `(key, value)` pair. Asking for the stored key returns the
//! stored value; asking for any other key drops the old pair and derives a new
//! one. There is no eviction policy beyond that.

use std::borrow::Borrow;
use std::fmt::Debug;
use tracing::trace;

#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, deriving it with `derive` when the stored
    /// key differs (or nothing is stored yet).
    pub fn get_or_insert_with<Q>(&mut self, key: &Q, derive: impl FnOnce() -> V) -> &V
    where
        K: Borrow<Q>,
        Q: PartialEq + ToOwned<Owned = K> + Debug + ?Sized,
    {
        let hit = matches!(&self.entry, Some((stored, _)) if <K as Borrow<Q>>::borrow(stored) == key);
        if hit {
            trace!(?key, "Memo hit");
        } else {
            trace!(?key, replaced = self.entry.is_some(), "Memo miss");
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (key.to_owned(), derive()));
        &*value
    }

    pub fn key(&self) -> Option<&K> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    pub fn get(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, value)| value)
    }

    /// Drops the stored pair so the next lookup derives again.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_reuses_value() {
        let mut memo: Memo<String, u32> = Memo::new();
        let mut derived = 0;

        let first = *memo.get_or_insert_with("a", || {
            derived += 1;
            10
        });
        let second = *memo.get_or_insert_with("a", || {
            derived += 1;
            20
        });

        assert_eq!(first, 10);
        assert_eq!(second, 10);
        assert_eq!(derived, 1);
        assert_eq!(memo.key().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_new_key_replaces_value() {
        let mut memo: Memo<String, u32> = Memo::new();
        memo.get_or_insert_with("a", || 1);
        let value = *memo.get_or_insert_with("b", || 2);

        assert_eq!(value, 2);
        assert_eq!(memo.key().map(String::as_str), Some("b"));

        // Going back to the old key derives again; only one slot is kept.
        assert_eq!(*memo.get_or_insert_with("a", || 3), 3);
    }

    #[test]
    fn test_returned_reference_survives_miss_then_hit() {
        let mut memo: Memo<String, Vec<u32>> = Memo::new();

        let fresh = memo.get_or_insert_with("posts/1", || vec![1, 2, 3]);
        assert_eq!(fresh.len(), 3);
        let fresh_ptr: *const Vec<u32> = fresh;

        let cached = memo.get_or_insert_with("posts/1", || unreachable!("key unchanged"));
        assert_eq!(cached, &vec![1, 2, 3]);
        assert!(std::ptr::eq(fresh_ptr, cached));
    }

    #[test]
    fn test_clear_forces_rederive() {
        let mut memo: Memo<String, u32> = Memo::new();
        memo.get_or_insert_with("a", || 1);
        memo.clear();

        assert!(memo.get().is_none());
        assert_eq!(*memo.get_or_insert_with("a", || 5), 5);
    }
}
