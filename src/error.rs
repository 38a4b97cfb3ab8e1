//! Error types for list and cursor operations.
//!
//! Every failure here is immediate, synchronous, and caller-recoverable.
//! Allocation failure during node creation is *not* represented: arena
//! growth goes through the global allocation handler and is treated as
//! fatal, never converted into an [`Error`].

use core::fmt;

/// Failure modes of list and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The list has no elements.
    ///
    /// Returned by [`front`](crate::List::front),
    /// [`front_mut`](crate::List::front_mut), and
    /// [`pop_front`](crate::List::pop_front). Check
    /// [`is_empty`](crate::List::is_empty) first to avoid it.
    Empty,

    /// The cursor sits on a boundary position that holds no element.
    ///
    /// Returned by [`erase`](crate::List::erase) when given the end cursor,
    /// and by [`get`](crate::List::get)/[`get_mut`](crate::List::get_mut)
    /// when dereferencing a sentinel position.
    InvalidCursor,

    /// The cursor has no successor to advance to.
    ///
    /// Returned by [`advance`](crate::List::advance) and
    /// [`advance_post`](crate::List::advance_post) at the end of the list.
    /// The expected idiom is to compare against
    /// [`cursor_end`](crate::List::cursor_end) before advancing.
    PastEnd,

    /// The cursor was default-constructed and never positioned on a list.
    ///
    /// Indicates a caller logic error; not expected in normal operation.
    NullCursor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "list is empty"),
            Error::InvalidCursor => write!(f, "cursor holds no element"),
            Error::PastEnd => write!(f, "cannot advance past the end of the list"),
            Error::NullCursor => write!(f, "cursor was never positioned"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias for list operation results.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::Empty.to_string(), "list is empty");
        assert_eq!(Error::InvalidCursor.to_string(), "cursor holds no element");
        assert_eq!(
            Error::PastEnd.to_string(),
            "cannot advance past the end of the list"
        );
        assert_eq!(Error::NullCursor.to_string(), "cursor was never positioned");
    }
}
