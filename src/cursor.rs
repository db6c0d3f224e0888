//! Traversal capabilities
//!
//! Every algorithm in this crate asks for the weakest capability it needs:
//! [`InputCursor`] plus a [`Bound`] to read, [`OutputCursor`] to write.
//! Stronger cursors satisfy those requirements through the supertrait chain
//!
//! ```text
//! Cursor ─► InputCursor ─► ForwardCursor ─► BidirectionalCursor ─► RandomAccessCursor
//!   └────► Writable<T> ──(blanket)──► OutputCursor<T>
//! ```

/// A position that can step forward one element at a time.
pub trait Cursor {
    /// Move to the next position (prefix increment).
    fn advance(&mut self);
}

/// One-pass readable cursor.
///
/// Nothing is promised about a copy of the cursor once the original has
/// advanced, so algorithms built on this trait read each position once.
pub trait InputCursor: Cursor {
    /// Element produced at each position.
    type Item;

    /// Read the element at the current position.
    ///
    /// Calling this on a cursor that has reached its bound is a caller bug.
    fn read(&self) -> Self::Item;
}

/// Multi-pass cursor: clones traverse independently and compare equal
/// exactly when they sit at the same position.
pub trait ForwardCursor: InputCursor + Clone + PartialEq {}

/// Forward cursor that can also step backwards.
pub trait BidirectionalCursor: ForwardCursor {
    /// Move to the previous position (prefix decrement).
    fn retreat(&mut self);
}

/// Bidirectional cursor with constant-time jumps and distances.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move `n` positions (negative moves backwards).
    fn jump(&mut self, n: isize);

    /// Signed number of steps from `origin` to `self`.
    fn offset_from(&self, origin: &Self) -> isize;
}

/// Cursor whose current position can be assigned.
pub trait Writable<T>: Cursor {
    /// Assign `value` to the current position without moving.
    fn store(&mut self, value: T);
}

/// Single-pass write position: assign, then advance.
///
/// There is no bound and no read-back. The caller guarantees capacity for
/// every element an algorithm will emit.
pub trait OutputCursor<T> {
    /// Assign `value` at the current position and step past it.
    fn put(&mut self, value: T);
}

impl<T, C: Writable<T>> OutputCursor<T> for C {
    #[inline]
    fn put(&mut self, value: T) {
        self.store(value);
        self.advance();
    }
}

/// End-of-traversal marker for cursors of type `C`.
///
/// A bound is either another cursor of the same kind or a sentinel that can
/// only tell whether a cursor has arrived.
pub trait Bound<C: ?Sized> {
    /// Whether `cursor` sits at this bound.
    fn is_reached(&self, cursor: &C) -> bool;
}

impl<C: Cursor + PartialEq> Bound<C> for C {
    #[inline]
    fn is_reached(&self, cursor: &C) -> bool {
        self == cursor
    }
}

/// Bound that knows how many steps remain before a cursor reaches it.
pub trait SizedBound<C: ?Sized>: Bound<C> {
    /// Number of `advance` calls that take `cursor` to this bound.
    fn remaining(&self, cursor: &C) -> usize;
}

impl<C: RandomAccessCursor> SizedBound<C> for C {
    #[inline]
    fn remaining(&self, cursor: &C) -> usize {
        self.offset_from(cursor).max(0) as usize
    }
}

/// Range-like value: anything that can hand out a start cursor and a bound.
pub trait CursorRange {
    /// Cursor positioned at the first element.
    type Cursor: Cursor;
    /// Bound marking the end of the range.
    type Bound: Bound<Self::Cursor>;

    /// Split the range into its start cursor and bound.
    fn into_bounds(self) -> (Self::Cursor, Self::Bound);
}

/// Number of steps from `first` to `last`, found by advancing a cursor.
///
/// Works for any cursor; prefer [`SizedBound::remaining`] when available.
pub fn distance<C, B>(mut first: C, last: &B) -> usize
where
    C: Cursor,
    B: Bound<C>,
{
    let mut steps = 0;
    while !last.is_reached(&first) {
        first.advance();
        steps += 1;
    }
    steps
}
