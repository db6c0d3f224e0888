//! Traversal-category simulators
//!
//! Wrappers that expose exactly one capability level of an underlying slice
//! cursor, so each algorithm can be checked against the weakest cursor it
//! claims to accept as well as the strongest.

#![allow(dead_code)]

use numeric_ranges::{
    BackInserter, BidirectionalCursor, Bound, Cursor, ForwardCursor, InputCursor,
    RandomAccessCursor, SizedBound, SliceCursor, SliceCursorMut, Writable,
};

/// Position of a cursor in its underlying slice.
pub trait Base {
    /// Index into the underlying sequence.
    fn base(&self) -> usize;
}

impl<T> Base for SliceCursor<'_, T> {
    fn base(&self) -> usize {
        self.position()
    }
}

impl<T> Base for SliceCursorMut<'_, T> {
    fn base(&self) -> usize {
        self.position()
    }
}

impl<T> Base for BackInserter<'_, T> {
    fn base(&self) -> usize {
        self.written()
    }
}

/// One-pass read cursor: no `Clone`.
#[derive(Debug, PartialEq)]
pub struct InputOnly<C>(pub C);

/// Multi-pass read cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardOnly<C>(pub C);

/// Multi-pass cursor that can step back.
#[derive(Debug, Clone, PartialEq)]
pub struct BidirectionalOnly<C>(pub C);

/// Full random access.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAccessOnly<C>(pub C);

/// Write-only cursor: assign and advance, nothing else.
#[derive(Debug)]
pub struct OutputOnly<C>(pub C);

macro_rules! delegate_read {
    ($($wrapper:ident),*) => {
        $(
            impl<C: Cursor> Cursor for $wrapper<C> {
                fn advance(&mut self) {
                    self.0.advance();
                }
            }

            impl<C: InputCursor> InputCursor for $wrapper<C> {
                type Item = C::Item;
                fn read(&self) -> C::Item {
                    self.0.read()
                }
            }

            impl<C: Base> Base for $wrapper<C> {
                fn base(&self) -> usize {
                    self.0.base()
                }
            }
        )*
    };
}

delegate_read!(InputOnly, ForwardOnly, BidirectionalOnly, RandomAccessOnly);

impl<C: ForwardCursor> ForwardCursor for ForwardOnly<C> {}

impl<C: ForwardCursor> ForwardCursor for BidirectionalOnly<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for BidirectionalOnly<C> {
    fn retreat(&mut self) {
        self.0.retreat();
    }
}

impl<C: ForwardCursor> ForwardCursor for RandomAccessOnly<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for RandomAccessOnly<C> {
    fn retreat(&mut self) {
        self.0.retreat();
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for RandomAccessOnly<C> {
    fn jump(&mut self, n: isize) {
        self.0.jump(n);
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.0.offset_from(&origin.0)
    }
}

impl<C: Cursor> Cursor for OutputOnly<C> {
    fn advance(&mut self) {
        self.0.advance();
    }
}

impl<T, C: Writable<T>> Writable<T> for OutputOnly<C> {
    fn store(&mut self, value: T) {
        self.0.store(value);
    }
}

impl<C: Base> Base for OutputOnly<C> {
    fn base(&self) -> usize {
        self.0.base()
    }
}

/// Bound that only compares positions; never a cursor itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestSentinel(pub usize);

impl<C: Base> Bound<C> for TestSentinel {
    fn is_reached(&self, cursor: &C) -> bool {
        cursor.base() == self.0
    }
}

impl<C: Base> SizedBound<C> for TestSentinel {
    fn remaining(&self, cursor: &C) -> usize {
        self.0.saturating_sub(cursor.base())
    }
}

/// Builds input cursors of one traversal category over a slice.
pub trait InputCategory {
    /// Cursor type exposing this category.
    type Cursor<'a, T>: InputCursor<Item = T> + PartialEq + Base
    where
        T: Clone + 'a;

    /// Short label for assertion messages.
    const NAME: &'static str;

    /// Cursor at index `pos` of `slice`.
    fn at<T: Clone>(slice: &[T], pos: usize) -> Self::Cursor<'_, T>;
}

/// `InputOnly` cursors.
#[derive(Debug)]
pub struct Input;
/// `ForwardOnly` cursors.
#[derive(Debug)]
pub struct Forward;
/// `BidirectionalOnly` cursors.
#[derive(Debug)]
pub struct Bidirectional;
/// `RandomAccessOnly` cursors.
#[derive(Debug)]
pub struct RandomAccess;
/// Unwrapped `SliceCursor`.
#[derive(Debug)]
pub struct Raw;

macro_rules! input_category {
    ($marker:ident, $name:literal, $wrapper:ident) => {
        impl InputCategory for $marker {
            type Cursor<'a, T> = $wrapper<SliceCursor<'a, T>> where T: Clone + 'a;
            const NAME: &'static str = $name;

            fn at<T: Clone>(slice: &[T], pos: usize) -> Self::Cursor<'_, T> {
                $wrapper(SliceCursor::at(slice, pos))
            }
        }
    };
}

input_category!(Input, "input", InputOnly);
input_category!(Forward, "forward", ForwardOnly);
input_category!(Bidirectional, "bidirectional", BidirectionalOnly);
input_category!(RandomAccess, "random-access", RandomAccessOnly);

impl InputCategory for Raw {
    type Cursor<'a, T> = SliceCursor<'a, T> where T: Clone + 'a;
    const NAME: &'static str = "slice";

    fn at<T: Clone>(slice: &[T], pos: usize) -> Self::Cursor<'_, T> {
        SliceCursor::at(slice, pos)
    }
}

/// Builds output cursors of one kind over a mutable slice.
pub trait OutputCategory {
    /// Cursor type exposing this kind.
    type Cursor<'a, T>: Writable<T> + Base
    where
        T: 'a;

    /// Short label for assertion messages.
    const NAME: &'static str;

    /// Cursor at the start of `slice`.
    fn start<T>(slice: &mut [T]) -> Self::Cursor<'_, T>;
}

/// `OutputOnly` cursors.
#[derive(Debug)]
pub struct Output;
/// Unwrapped `SliceCursorMut`.
#[derive(Debug)]
pub struct RawMut;

impl OutputCategory for Output {
    type Cursor<'a, T> = OutputOnly<SliceCursorMut<'a, T>> where T: 'a;
    const NAME: &'static str = "output";

    fn start<T>(slice: &mut [T]) -> Self::Cursor<'_, T> {
        OutputOnly(SliceCursorMut::new(slice))
    }
}

impl OutputCategory for RawMut {
    type Cursor<'a, T> = SliceCursorMut<'a, T> where T: 'a;
    const NAME: &'static str = "slice-mut";

    fn start<T>(slice: &mut [T]) -> Self::Cursor<'_, T> {
        SliceCursorMut::new(slice)
    }
}

/// Record with a numeric field, for projection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct S {
    pub i: i32,
}

/// Wrap plain values into records.
pub fn records(values: &[i32]) -> Vec<S> {
    values.iter().map(|&i| S { i }).collect()
}

/// Consume a result record, keeping only where both cursors stopped.
pub fn positions<I: Base, O: Base>(result: numeric_ranges::InOutResult<I, O>) -> (usize, usize) {
    (result.input.base(), result.output.base())
}
