//! Singly-linked sequence container with forward cursors.
//!
//! This crate provides one thing: [`List`], a generic singly-linked list
//! with front-biased insertion/removal and arbitrary-position
//! insert-after/erase, built as a reusable block for other data structures.
//!
//! # Design
//!
//! Traditional linked lists chain owning pointers:
//!
//! ```text
//! Box<Node> -> Box<Node> -> Box<Node>   - self-referential ownership,
//!                                         hand-written destructor
//! ```
//!
//! This crate stores nodes as slots in an internal arena and links them
//! with integer indices:
//!
//! ```text
//! Arena slots: [tail][head][n2][n0][n1]
//! Chain:        head -> n0 -> n1 -> n2 -> tail
//! ```
//!
//! Benefits:
//! - **Copyable cursors**: a cursor is a slot index, not a borrow, so any
//!   number can be live at once
//! - **Stable positions**: erasing a node never relocates another, so only
//!   the erased node's cursor is invalidated
//! - **Trivial teardown**: dropping the arena drops every node; no
//!   recursive destructor, no leak on any path
//!
//! Two permanently allocated sentinel slots bound the chain. The head
//! anchor precedes the first element and the tail marker follows the last;
//! neither holds data, and their presence means insert and erase never
//! need an empty-list branch.
//!
//! # Quick start
//!
//! ```
//! use forward_list::List;
//!
//! let mut list: List<u64> = List::new();
//! list.push_front(1);
//! list.push_front(2);
//! list.push_front(3);
//!
//! // Each push becomes the new front: traversal is 3, 2, 1
//! let values: Vec<u64> = list.iter().copied().collect();
//! assert_eq!(values, vec![3, 2, 1]);
//!
//! // Cursor walk, the long way
//! let mut cur = list.cursor_front();
//! while cur != list.cursor_end() {
//!     let _ = list.get(cur).unwrap();
//!     list.advance(&mut cur).unwrap();
//! }
//! ```
//!
//! # Insert-after semantics
//!
//! [`List::insert_after`] places the new element as the *successor* of the
//! given position. Most container libraries insert before the position;
//! this one deliberately does not, and [`List::push_front`] exists
//! precisely because "insert before the front" cannot be expressed through
//! `insert_after` on a public cursor.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front` / `pop_front` / `front` | O(1) |
//! | `insert_after` / `advance` / `get` | O(1) |
//! | `erase` | O(n) - no back links; predecessor found by scan |
//! | `clear` | O(n) |
//!
//! # Thread safety
//!
//! Every operation is synchronous and completes immediately; nothing
//! blocks or schedules background work. A `List` is not safe for
//! concurrent access from multiple threads without external
//! synchronization - that is the caller's obligation.
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with an [`Error`] kind
//! (empty-list access, erase at the boundary, advance past the end,
//! null-cursor dereference). Allocation failure during node creation is
//! fatal and never surfaces as an [`Error`].

#![warn(missing_docs)]

mod arena;
pub mod error;
pub mod index;
pub mod list;

pub use error::{Error, Result};
pub use index::Index;
pub use list::{Cursor, IntoIter, Iter, IterMut, List};
