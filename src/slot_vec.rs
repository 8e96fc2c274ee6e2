use std::{
    fmt::Debug,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

/// A key into a [`SlotVec`].  Stable across insertions and removals, and never
/// reused once its slot has been vacated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(usize);

impl Debug for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An append-only arena.  Removing a value leaves a tombstone behind so that
/// the keys of the remaining values, and the key of the removed value, keep
/// their meaning.
///
/// A clone shares its key counter with the original.  Keys issued before the
/// clone mean the same thing in both copies; keys issued afterwards by either
/// copy are unknown to the other.
#[derive(Clone)]
pub struct SlotVec<T> {
    slots: Vec<Option<T>>,
    len: usize,
    next_key: Arc<AtomicUsize>,
}

impl<T> SlotVec<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            next_key: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores a value and returns its key.
    pub fn insert(&mut self, value: T) -> SlotKey {
        let index = self.next_key.fetch_add(1, Ordering::Relaxed);
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(value);
        self.len += 1;
        SlotKey(index)
    }

    /// Removes the value at `key`, returning it if the slot was live.
    pub fn remove(&mut self, key: SlotKey) -> Option<T> {
        let removed = self.slots.get_mut(key.0).and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn get(&self, key: SlotKey) -> Option<&T> {
        self.slots.get(key.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, key: SlotKey) -> Option<&mut T> {
        self.slots.get_mut(key.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, key: SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|value| (SlotKey(i), value)))
    }
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SlotVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_survive_removal() {
        let mut slots = SlotVec::new();
        let a = slots.insert("a");
        let b = slots.insert("b");
        let c = slots.insert("c");
        assert_eq!(slots.remove(b), Some("b"));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get(a), Some(&"a"));
        assert_eq!(slots.get(c), Some(&"c"));
        assert_eq!(slots.iter().map(|(key, _)| key).collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn test_removed_key_is_never_reused() {
        let mut slots = SlotVec::new();
        let a = slots.insert(1);
        slots.remove(a);
        let b = slots.insert(2);
        assert_ne!(a, b);
        assert!(!slots.contains(a));
        assert_eq!(slots.remove(a), None);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_clones_never_issue_the_same_key() {
        let mut original = SlotVec::new();
        let shared = original.insert("shared");
        let mut copy = original.clone();
        let mine = original.insert("mine");
        let theirs = copy.insert("theirs");
        assert_ne!(mine, theirs);
        assert_eq!(copy.get(shared), Some(&"shared"));
        assert!(!copy.contains(mine));
        assert!(!original.contains(theirs));
        assert_eq!(copy.remove(mine), None);
        assert_eq!(copy.len(), 2);
        assert_eq!(
            copy.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            vec![shared, theirs]
        );
    }
}
