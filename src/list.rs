//! Singly-linked list with sentinel boundaries and forward cursors.
//!
//! Nodes are slots in an internal arena; links are indices, not
//! pointers. Two permanently allocated sentinel slots bound the chain:
//! a head anchor that precedes the first element and a tail marker that
//! follows the last. Neither ever holds user data, and their presence
//! removes every empty-list special case from insert and erase.
//!
//! # Cursors
//!
//! A [`Cursor`] is a copyable handle on a single node. It borrows nothing,
//! so any number of cursors can be live at once; the list resolves them on
//! each access. Structural mutation invalidates exactly the cursor whose
//! node was erased - nodes never move, so every other cursor stays valid.
//!
//! # Insert-after semantics
//!
//! [`List::insert_after`] places the new element as the *successor* of the
//! given position, not its predecessor. Most container libraries insert
//! before the position; this one deliberately does not. See the method
//! docs before reaching for it.

use core::fmt;

use crate::arena::Arena;
use crate::{Error, Index, Result};

/// One stored element plus its forward link.
///
/// `value` is `None` exactly for the two sentinel slots; that variant tag,
/// not a null check, is what distinguishes a boundary from data.
#[derive(Debug)]
struct Node<T, Idx: Index> {
    value: Option<T>,
    next: Idx,
}

/// A copyable handle on a single list position.
///
/// Holds the node's arena index and nothing else. Equality is *identity*:
/// two cursors compare equal iff they sit on the same node, regardless of
/// the stored values.
///
/// ```
/// use forward_list::List;
///
/// let mut list: List<u64> = List::new();
/// let a = list.push_front(7);
/// let b = list.push_front(7);
///
/// // Same value, different nodes
/// assert_ne!(a, b);
/// assert_eq!(a, a);
/// ```
///
/// A default-constructed cursor is *null*: it references nothing and must
/// be reassigned before use. Dereferencing or advancing it reports
/// [`Error::NullCursor`].
///
/// # Caller obligation
///
/// A cursor must only be handed back to the list that produced it. The
/// list does not (and cannot) check this; a cursor from another list may
/// resolve to an arbitrary element or panic. Same discipline as index
/// handles into a shared slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<Idx: Index = u32> {
    node: Idx,
}

impl<Idx: Index> Default for Cursor<Idx> {
    /// Returns the null cursor.
    fn default() -> Self {
        Self { node: Idx::NONE }
    }
}

/// A singly-linked sequence container with front-biased operations.
///
/// | Operation | Cost |
/// |-----------|------|
/// | `push_front`, `pop_front`, `front` | O(1) |
/// | `insert_after`, `advance`, `get` | O(1) |
/// | `erase` | O(n) - predecessor found by scan, see [`erase`](List::erase) |
/// | `clear` | O(n) |
///
/// # Example
///
/// ```
/// use forward_list::List;
///
/// let mut list: List<u64> = List::new();
/// list.push_front(1);
/// list.push_front(2);
/// list.push_front(3);
///
/// // Each push becomes the new front
/// let values: Vec<u64> = list.iter().copied().collect();
/// assert_eq!(values, vec![3, 2, 1]);
///
/// assert_eq!(list.pop_front(), Ok(3));
/// assert_eq!(list.front(), Ok(&2));
/// ```
///
/// # Thread safety
///
/// All operations are synchronous and single-threaded. A `List` must not
/// be mutated from multiple threads without external synchronization;
/// that is the caller's obligation, not something the container provides.
pub struct List<T, Idx: Index = u32> {
    arena: Arena<Node<T, Idx>, Idx>,
    head: Idx,
    tail: Idx,
    len: usize,
}

impl<T, Idx: Index> List<T, Idx> {
    /// Creates an empty list.
    ///
    /// Allocates the two sentinel slots; they live until the list is
    /// dropped.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let tail = arena.insert(Node {
            value: None,
            next: Idx::NONE,
        });
        let head = arena.insert(Node {
            value: None,
            next: tail,
        });

        Self {
            arena,
            head,
            tail,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn node(&self, idx: Idx) -> &Node<T, Idx> {
        self.arena.get(idx).expect("invalid cursor")
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut Node<T, Idx> {
        self.arena.get_mut(idx).expect("invalid cursor")
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Returns a cursor on the first element, or the end cursor if empty.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<Idx> {
        Cursor {
            node: self.node(self.head).next,
        }
    }

    /// Returns the end cursor: one past the last element.
    ///
    /// The end cursor is a loop boundary, never a dereferenceable
    /// position. It stays valid and equal to itself for the life of the
    /// list.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<Idx> {
        Cursor { node: self.tail }
    }

    /// Returns a reference to the element under the cursor.
    ///
    /// # Errors
    ///
    /// - [`Error::NullCursor`] if `at` was never positioned.
    /// - [`Error::InvalidCursor`] if `at` sits on a boundary position
    ///   (dereferencing the end cursor is a contract violation; it fails
    ///   loudly here instead of being left undefined).
    pub fn get(&self, at: Cursor<Idx>) -> Result<&T> {
        if at.node.is_none() {
            return Err(Error::NullCursor);
        }
        match self.arena.get(at.node) {
            Some(node) => node.value.as_ref().ok_or(Error::InvalidCursor),
            None => Err(Error::InvalidCursor),
        }
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](List::get).
    pub fn get_mut(&mut self, at: Cursor<Idx>) -> Result<&mut T> {
        if at.node.is_none() {
            return Err(Error::NullCursor);
        }
        match self.arena.get_mut(at.node) {
            Some(node) => node.value.as_mut().ok_or(Error::InvalidCursor),
            None => Err(Error::InvalidCursor),
        }
    }

    /// Moves the cursor to its successor.
    ///
    /// The expected idiom is to compare against
    /// [`cursor_end`](List::cursor_end) before advancing:
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list: List<u64> = [3, 2, 1].into_iter().collect(); // 1, 2, 3
    /// let mut cur = list.cursor_front();
    /// let mut sum = 0;
    /// while cur != list.cursor_end() {
    ///     sum += *list.get(cur).unwrap();
    ///     list.advance(&mut cur).unwrap();
    /// }
    /// assert_eq!(sum, 6);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::PastEnd`] if the position has no successor (the cursor
    ///   is at the end). The cursor is left unchanged.
    /// - [`Error::NullCursor`] if `at` was never positioned.
    /// - [`Error::InvalidCursor`] if the node under `at` no longer exists.
    pub fn advance(&self, at: &mut Cursor<Idx>) -> Result<()> {
        if at.node.is_none() {
            return Err(Error::NullCursor);
        }
        let next = self.arena.get(at.node).ok_or(Error::InvalidCursor)?.next;
        if next.is_none() {
            return Err(Error::PastEnd);
        }
        at.node = next;
        Ok(())
    }

    /// Advances the cursor and returns its previous position.
    ///
    /// The returned cursor is a plain independent snapshot; it has no
    /// further connection to `at`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`advance`](List::advance); on error the cursor
    /// is left unchanged and no snapshot is returned.
    pub fn advance_post(&self, at: &mut Cursor<Idx>) -> Result<Cursor<Idx>> {
        let before = *at;
        self.advance(at)?;
        Ok(before)
    }

    // ========================================================================
    // Front operations
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list has no elements.
    pub fn front(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let first = self.node(self.head).next;
        Ok(self
            .node(first)
            .value
            .as_ref()
            .expect("first node holds a value when the list is non-empty"))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list has no elements.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let first = self.node(self.head).next;
        Ok(self
            .node_mut(first)
            .value
            .as_mut()
            .expect("first node holds a value when the list is non-empty"))
    }

    /// Inserts `value` as the new first element.
    ///
    /// Links the node directly after the internal head anchor, so the
    /// value always becomes the front. Returns a cursor on the new node.
    /// Infallible; the arena grows as needed.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Cursor<Idx> {
        self.link_after(self.head, value)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let first = self.node(self.head).next;
        let rest = self.node(first).next;
        self.node_mut(self.head).next = rest;
        self.len -= 1;

        let node = self
            .arena
            .remove(first)
            .expect("first node is live when the list is non-empty");
        Ok(node
            .value
            .expect("first node holds a value when the list is non-empty"))
    }

    // ========================================================================
    // Positional operations
    // ========================================================================

    /// Inserts `value` immediately **after** the node under `at` and
    /// returns a cursor on the new node.
    ///
    /// This is insert-*after*, a deliberate deviation from the
    /// insert-before convention of most container libraries: the new
    /// element becomes the successor of `at`, never its predecessor. With
    /// `at` at the front of `[a, b]`, inserting `x` yields `[a, x, b]` -
    /// `x` does not become the new front.
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list: List<&str> = ["b", "a"].into_iter().collect(); // a, b
    /// let front = list.cursor_front();
    /// list.insert_after(front, "x");
    ///
    /// let values: Vec<&str> = list.iter().copied().collect();
    /// assert_eq!(values, vec!["a", "x", "b"]);
    /// ```
    ///
    /// `len` grows by one. No node is relocated, so every existing cursor
    /// remains valid.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the end cursor (no position exists after the
    /// end), the null cursor, or does not resolve in this list.
    pub fn insert_after(&mut self, at: Cursor<Idx>, value: T) -> Cursor<Idx> {
        assert!(at.node != self.tail, "cannot insert after the end cursor");
        self.link_after(at.node, value)
    }

    fn link_after(&mut self, at: Idx, value: T) -> Cursor<Idx> {
        let next = self.node(at).next;
        let node = self.arena.insert(Node {
            value: Some(value),
            next,
        });
        self.node_mut(at).next = node;
        self.len += 1;

        Cursor { node }
    }

    /// Removes the node under `at` and returns a cursor on its former
    /// successor (the end cursor if the last element was erased).
    ///
    /// The list has no backward links, so the predecessor is located by a
    /// linear scan from the head anchor: **erase is O(n)** in list length.
    /// That cost is part of the contract, the trade for single-word nodes.
    ///
    /// The erased node's slot is recycled; `at` and any copy of it are
    /// invalidated. All other cursors remain valid - surviving nodes do
    /// not move.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCursor`] if `at` is the end cursor.
    /// - [`Error::NullCursor`] if `at` was never positioned.
    ///
    /// # Panics
    ///
    /// Panics if `at` does not resolve to a node of this list.
    pub fn erase(&mut self, at: Cursor<Idx>) -> Result<Cursor<Idx>> {
        if at.node == self.tail {
            return Err(Error::InvalidCursor);
        }
        if at.node.is_none() {
            return Err(Error::NullCursor);
        }

        // Find the predecessor; the scan falls off the chain (and panics
        // in node()) if the cursor is not part of this list.
        let mut prev = self.head;
        while self.node(prev).next != at.node {
            prev = self.node(prev).next;
        }

        let next = self.node(at.node).next;
        self.node_mut(prev).next = next;
        self.len -= 1;
        self.arena.remove(at.node);

        Ok(Cursor { node: next })
    }

    /// Removes every element, front first.
    ///
    /// O(n) time, O(1) working memory. A no-op on an empty list.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
        // Only the two sentinel slots survive a clear
        debug_assert_eq!(self.arena.len(), 2);
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a forward iterator over references, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            list: self,
            at: self.node(self.head).next,
        }
    }

    /// Returns a forward iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        let at = self.node(self.head).next;
        IterMut {
            arena: &mut self.arena,
            at,
        }
    }
}

impl<T, Idx: Index> Default for List<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> FromIterator<T> for List<T, Idx> {
    /// Builds a list by pushing each element to the front, in sequence
    /// order - so the resulting list order is the **reverse** of the
    /// source. Each element becomes the new front; this reversal is part
    /// of the contract, not an accident.
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list: List<u64> = [1, 2, 3].into_iter().collect();
    /// let values: Vec<u64> = list.iter().copied().collect();
    /// assert_eq!(values, vec![3, 2, 1]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_front(value);
        }
        list
    }
}

impl<T: fmt::Display, Idx: Index> fmt::Display for List<T, Idx> {
    /// Renders elements front to back, space separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for List<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Forward iterator over references to list elements.
pub struct Iter<'a, T, Idx: Index> {
    list: &'a List<T, Idx>,
    at: Idx,
}

impl<'a, T, Idx: Index> Iterator for Iter<'a, T, Idx> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.arena.get(self.at)?;
        // The tail sentinel carries no value and terminates the walk
        let value = node.value.as_ref()?;
        self.at = node.next;
        Some(value)
    }
}

/// Forward iterator over mutable references to list elements.
pub struct IterMut<'a, T, Idx: Index> {
    arena: &'a mut Arena<Node<T, Idx>, Idx>,
    at: Idx,
}

impl<'a, T, Idx: Index> Iterator for IterMut<'a, T, Idx> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get_mut(self.at)?;
        let next = node.next;
        let value = node.value.as_mut()?;
        self.at = next;
        // Extend lifetime - safe because each node is visited exactly once
        Some(unsafe { &mut *(value as *mut T) })
    }
}

/// Consuming iterator; pops elements front to back.
pub struct IntoIter<T, Idx: Index> {
    list: List<T, Idx>,
}

impl<T, Idx: Index> Iterator for IntoIter<T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }
}

impl<T, Idx: Index> IntoIterator for List<T, Idx> {
    type Item = T;
    type IntoIter = IntoIter<T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a List<T, Idx> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a mut List<T, Idx> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
