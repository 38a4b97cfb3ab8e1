//! Growable slot arena backing the list's nodes.
//!
//! Nodes live in slots addressed by [`Index`] values. Slots stay put for
//! their entire lifetime, so an index remains valid until the slot is
//! explicitly removed. Freed slots are recycled through a LIFO free list
//! threaded through the vacant entries themselves.
//!
//! This is what lets the list hand out copyable cursors: a cursor is just
//! a slot index, and erasing one node never relocates any other.

use crate::Index;

/// One arena slot: either a live value or a link in the free list.
#[derive(Debug)]
enum Slot<T, Idx: Index> {
    Vacant { next_free: Idx },
    Occupied(T),
}

/// Growable slot store with stable indices and slot reuse.
///
/// Insertion is infallible: when no freed slot is available the backing
/// vector grows, and allocation failure aborts through the global handler.
#[derive(Debug)]
pub(crate) struct Arena<T, Idx: Index = u32> {
    slots: Vec<Slot<T, Idx>>,
    free_head: Idx,
    len: usize,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an empty arena. Does not allocate until the first insert.
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Inserts a value, returning its stable index.
    ///
    /// Reuses the most recently freed slot if one exists.
    ///
    /// # Panics
    ///
    /// Panics if the arena outgrows the index type's addressable range.
    pub(crate) fn insert(&mut self, value: T) -> Idx {
        let idx = if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = core::mem::replace(&mut self.slots[idx.as_usize()], Slot::Occupied(value));
            match slot {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            idx
        } else {
            let idx = Idx::from_usize(self.slots.len());
            assert!(idx.is_some(), "arena exceeds index type maximum");
            self.slots.push(Slot::Occupied(value));
            idx
        };

        self.len += 1;
        idx
    }

    /// Removes and returns the value at `idx`, if the slot is occupied.
    ///
    /// The slot joins the free list and may be reused by a later insert.
    pub(crate) fn remove(&mut self, idx: Idx) -> Option<T> {
        let slot = self.slots.get_mut(idx.as_usize())?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let slot = core::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = idx;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!("slot vacancy checked above"),
        }
    }

    /// Returns a reference to the value at `idx`, if the slot is occupied.
    #[inline]
    pub(crate) fn get(&self, idx: Idx) -> Option<&T> {
        match self.slots.get(idx.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `idx`, if occupied.
    #[inline]
    pub(crate) fn get_mut(&mut self, idx: Idx) -> Option<&mut T> {
        match self.slots.get_mut(idx.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let arena: Arena<u64> = Arena::new();
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(42);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(idx), Some(&42));

        assert_eq!(arena.remove(idx), Some(42));
        assert_eq!(arena.get(idx), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(10);
        *arena.get_mut(idx).unwrap() = 20;

        assert_eq!(arena.get(idx), Some(&20));
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let b = arena.insert(2);

        arena.remove(a);
        arena.remove(b);

        // Most recently freed slot comes back first
        assert_eq!(arena.insert(3), b);
        assert_eq!(arena.insert(4), a);
    }

    #[test]
    fn double_remove_returns_none() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(42);
        assert_eq!(arena.remove(idx), Some(42));
        assert_eq!(arena.remove(idx), None);
    }

    #[test]
    fn none_index_is_never_occupied() {
        let mut arena: Arena<u64> = Arena::new();
        arena.insert(1);

        assert!(arena.get(u32::NONE).is_none());
        assert!(arena.remove(u32::NONE).is_none());
    }

    #[test]
    fn indices_stay_stable_across_removal() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);

        arena.remove(b);

        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    #[should_panic(expected = "arena exceeds index type maximum")]
    fn u8_index_overflow_panics() {
        let mut arena: Arena<u64, u8> = Arena::new();
        // u8::MAX is the sentinel, so 255 slots fit
        for i in 0..255u64 {
            arena.insert(i);
        }
        arena.insert(255);
    }
}
