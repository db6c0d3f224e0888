use crate::cursor::{Bound, CursorRange, Writable};
use crate::ops::Successor;

/// Fill `[first, last)` with `value`, `value + 1`, `value + 2`, …
///
/// Returns the cursor at `last`. An empty range writes nothing and returns
/// `first` unchanged. `value` is only stepped when another position is
/// left to fill, so the last written value may be the type's maximum.
pub fn iota<C, B, T>(mut first: C, last: B, mut value: T) -> C
where
    C: Writable<T>,
    B: Bound<C>,
    T: Successor + Clone,
{
    while !last.is_reached(&first) {
        first.store(value.clone());
        first.advance();
        if last.is_reached(&first) {
            break;
        }
        value.increment();
    }
    first
}

/// [`iota`] over a writable range.
pub fn iota_range<R, T>(range: R, value: T) -> R::Cursor
where
    R: CursorRange,
    R::Cursor: Writable<T>,
    T: Successor + Clone,
{
    let (first, last) = range.into_bounds();
    iota(first, last, value)
}
