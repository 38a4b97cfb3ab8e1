//! Sentinel-based index trait for node links.
//!
//! Links between nodes are plain integer indices into the list's arena.
//! A reserved sentinel value (e.g., `u32::MAX`) stands in for "no index"
//! instead of `Option<Idx>`, keeping every node link a single word.

/// An integer-like slot index with a reserved null value.
///
/// Node links in [`List`](crate::List) are `Index` values rather than
/// pointers: the tail sentinel's forward link and the null
/// [`Cursor`](crate::Cursor) are both `NONE`, so a link never costs more
/// than the bare integer. The default index type is `u32`, which halves
/// link size compared to `usize` on 64-bit targets while still addressing
/// around four billion nodes; narrower types shrink links further at the
/// cost of capacity.
///
/// ```
/// use forward_list::{Cursor, Index, List};
///
/// // A list over u16 links; its cursors carry u16 indices
/// let mut list: List<&str, u16> = List::new();
/// list.push_front("front");
///
/// let null: Cursor<u16> = Cursor::default();
/// assert_ne!(list.cursor_front(), null);
/// assert!(u16::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// The reserved null index.
    ///
    /// Integer impls reserve `MAX`, trading one slot of addressable range
    /// for a link that needs no discriminant.
    const NONE: Self;

    /// Converts to a `usize` for slot addressing.
    fn as_usize(self) -> usize;

    /// Builds an index for the slot at position `val`.
    fn from_usize(val: usize) -> Self;

    /// Returns `true` for the reserved null index.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` for any index other than the reserved null.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

// The widths the list is actually instantiated with; u64 links would be
// strictly worse than usize on every supported target.
macro_rules! impl_index {
    ($($ty:ty),+ $(,)?) => {$(
        impl Index for $ty {
            const NONE: Self = <$ty>::MAX;

            #[inline]
            fn as_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn from_usize(val: usize) -> Self {
                val as $ty
            }
        }
    )+};
}

impl_index!(u8, u16, u32, usize);
