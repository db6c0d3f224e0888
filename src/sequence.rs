//! Concrete cursors over host-program sequences
//!
//! Slices get random-access read cursors and write cursors, any
//! [`Iterator`] can be driven as a one-pass cursor, and a `Vec` can be
//! appended to through [`BackInserter`].

use std::fmt;

use crate::cursor::{
    BidirectionalCursor, Bound, Cursor, CursorRange, ForwardCursor, InputCursor,
    RandomAccessCursor, SizedBound, Writable,
};

/// Random-access read cursor over a slice.
///
/// Reads clone the element out of the slice.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        Self::at(slice, 0)
    }

    /// Cursor at index `pos` of `slice` (`pos == slice.len()` is the end).
    pub fn at(slice: &'a [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    /// Cursor one past the last element of `slice`.
    pub fn end(slice: &'a [T]) -> Self {
        Self::at(slice, slice.len())
    }

    /// Index of the current position.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slice.as_ptr() == other.slice.as_ptr() && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T: Clone> InputCursor for SliceCursor<'_, T> {
    type Item = T;

    #[inline]
    fn read(&self) -> T {
        self.slice[self.pos].clone()
    }
}

impl<T: Clone> ForwardCursor for SliceCursor<'_, T> {}

impl<T: Clone> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.pos -= 1;
    }
}

impl<T: Clone> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }
}

/// One-pass read/write cursor over a mutable slice.
///
/// Only [`Cursor`], [`InputCursor`] and [`Writable`]: it holds the unique
/// borrow of the slice, so it cannot be duplicated and is bounded by a
/// [`Sentinel`] rather than by a second cursor. Writing past the end of the
/// slice panics.
#[derive(Debug)]
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Cursor at the first element of `slice`.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Index of the current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Sentinel for the end of the underlying slice.
    pub fn end(&self) -> Sentinel {
        Sentinel(self.slice.len())
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T: Clone> InputCursor for SliceCursorMut<'_, T> {
    type Item = T;

    #[inline]
    fn read(&self) -> T {
        self.slice[self.pos].clone()
    }
}

impl<T, U: Into<T>> Writable<U> for SliceCursorMut<'_, T> {
    #[inline]
    fn store(&mut self, value: U) {
        self.slice[self.pos] = value.into();
    }
}

/// Index sentinel: reached when a slice cursor's position equals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sentinel(pub usize);

impl Sentinel {
    /// Sentinel at index `pos`.
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}

impl<T> Bound<SliceCursor<'_, T>> for Sentinel {
    #[inline]
    fn is_reached(&self, cursor: &SliceCursor<'_, T>) -> bool {
        cursor.pos == self.0
    }
}

impl<T> SizedBound<SliceCursor<'_, T>> for Sentinel {
    fn remaining(&self, cursor: &SliceCursor<'_, T>) -> usize {
        self.0.saturating_sub(cursor.pos)
    }
}

impl<T> Bound<SliceCursorMut<'_, T>> for Sentinel {
    #[inline]
    fn is_reached(&self, cursor: &SliceCursorMut<'_, T>) -> bool {
        cursor.pos == self.0
    }
}

impl<T> SizedBound<SliceCursorMut<'_, T>> for Sentinel {
    fn remaining(&self, cursor: &SliceCursorMut<'_, T>) -> usize {
        self.0.saturating_sub(cursor.pos)
    }
}

/// One-pass cursor over any [`Iterator`].
///
/// The element under the cursor is pulled eagerly so the [`Exhausted`]
/// bound can be checked without consuming anything.
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Cursor at the first element produced by `iter`.
    pub fn new(iter: I) -> Self {
        let mut iter = iter;
        let current = iter.next();
        Self { iter, current }
    }

    /// Range over `iter` usable with every `*_range` algorithm.
    pub fn range<T>(iter: T) -> Subrange<Self, Exhausted>
    where
        T: IntoIterator<IntoIter = I>,
    {
        Subrange::new(Self::new(iter.into_iter()), Exhausted)
    }

    /// Whether the underlying iterator has run dry.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> fmt::Debug for IterCursor<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    #[inline]
    fn advance(&mut self) {
        self.current = self.iter.next();
    }
}

impl<I> InputCursor for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    /// # Panics
    ///
    /// Panics when the iterator is exhausted.
    #[inline]
    fn read(&self) -> I::Item {
        self.current
            .clone()
            .expect("IterCursor read past the end of its iterator")
    }
}

/// Bound reached once an [`IterCursor`]'s iterator is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhausted;

impl<I: Iterator> Bound<IterCursor<I>> for Exhausted {
    #[inline]
    fn is_reached(&self, cursor: &IterCursor<I>) -> bool {
        cursor.is_exhausted()
    }
}

/// Output cursor that appends to a `Vec`.
///
/// `store` pushes; `advance` has nothing left to do.
#[derive(Debug)]
pub struct BackInserter<'a, T> {
    vec: &'a mut Vec<T>,
    written: usize,
}

impl<'a, T> BackInserter<'a, T> {
    /// Append to the end of `vec`.
    pub fn new(vec: &'a mut Vec<T>) -> Self {
        Self { vec, written: 0 }
    }

    /// Number of elements appended through this cursor.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<T> Cursor for BackInserter<'_, T> {
    #[inline]
    fn advance(&mut self) {}
}

impl<T, U: Into<T>> Writable<U> for BackInserter<'_, T> {
    #[inline]
    fn store(&mut self, value: U) {
        self.vec.push(value.into());
        self.written += 1;
    }
}

/// Explicit cursor/bound pair usable wherever a range is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrange<C, B> {
    /// Start cursor.
    pub first: C,
    /// End bound.
    pub last: B,
}

impl<C, B> Subrange<C, B> {
    /// Range from `first` up to (not including) `last`.
    pub fn new(first: C, last: B) -> Self {
        Self { first, last }
    }
}

impl<C: Cursor, B: Bound<C>> CursorRange for Subrange<C, B> {
    type Cursor = C;
    type Bound = B;

    fn into_bounds(self) -> (C, B) {
        (self.first, self.last)
    }
}

impl<'a, T> CursorRange for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type Bound = SliceCursor<'a, T>;

    fn into_bounds(self) -> (Self::Cursor, Self::Bound) {
        (SliceCursor::new(self), SliceCursor::end(self))
    }
}

impl<'a, T, const N: usize> CursorRange for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type Bound = SliceCursor<'a, T>;

    fn into_bounds(self) -> (Self::Cursor, Self::Bound) {
        self.as_slice().into_bounds()
    }
}

impl<'a, T> CursorRange for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type Bound = SliceCursor<'a, T>;

    fn into_bounds(self) -> (Self::Cursor, Self::Bound) {
        self.as_slice().into_bounds()
    }
}

impl<'a, T> CursorRange for &'a mut [T] {
    type Cursor = SliceCursorMut<'a, T>;
    type Bound = Sentinel;

    fn into_bounds(self) -> (Self::Cursor, Self::Bound) {
        let end = Sentinel(self.len());
        (SliceCursorMut::new(self), end)
    }
}

impl<'a, T, const N: usize> CursorRange for &'a mut [T; N] {
    type Cursor = SliceCursorMut<'a, T>;
    type Bound = Sentinel;

    fn into_bounds(self) -> (Self::Cursor, Self::Bound) {
        self.as_mut_slice().into_bounds()
    }
}

impl<'a, T> CursorRange for &'a mut Vec<T> {
    type Cursor = SliceCursorMut<'a, T>;
    type Bound = Sentinel;

    fn into_bounds(self) -> (Self::Cursor, Self::Bound) {
        self.as_mut_slice().into_bounds()
    }
}
