use crate::cursor::{Bound, CursorRange, InputCursor};
use crate::ops::{BinaryOperation, Identity, Plus, Projection};

/// Arguments of [`accumulate`]: starting value, fold operation, projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulateOptions<T, Op = Plus, Proj = Identity> {
    /// Starting value of the fold.
    pub init: T,
    /// `op(acc, element)`, applied left to right.
    pub op: Op,
    /// Applied to each element before folding.
    pub proj: Proj,
}

impl<T> AccumulateOptions<T> {
    /// Sum of `init` and the elements.
    pub fn new(init: T) -> Self {
        Self {
            init,
            op: Plus,
            proj: Identity,
        }
    }
}

impl<T: Default> Default for AccumulateOptions<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, Op, Proj> AccumulateOptions<T, Op, Proj> {
    /// Replace the starting value.
    pub fn init(self, init: T) -> Self {
        Self { init, ..self }
    }

    /// Replace the fold operation.
    pub fn op<Op2>(self, op: Op2) -> AccumulateOptions<T, Op2, Proj> {
        AccumulateOptions {
            init: self.init,
            op,
            proj: self.proj,
        }
    }

    /// Replace the projection.
    pub fn proj<Proj2>(self, proj: Proj2) -> AccumulateOptions<T, Op, Proj2> {
        AccumulateOptions {
            init: self.init,
            op: self.op,
            proj,
        }
    }
}

/// Left fold of the projected elements of `[first, last)`.
///
/// `acc = op(acc, proj(element))` for every element in traversal order,
/// starting from `options.init`. An empty range returns `init` unchanged.
pub fn accumulate<C, B, T, Op, Proj>(
    mut first: C,
    last: B,
    options: AccumulateOptions<T, Op, Proj>,
) -> T
where
    C: InputCursor,
    B: Bound<C>,
    Proj: Projection<C::Item>,
    Op: BinaryOperation<T, Proj::Output, Output = T>,
{
    let AccumulateOptions {
        mut init,
        mut op,
        mut proj,
    } = options;

    while !last.is_reached(&first) {
        init = op.apply(init, proj.project(first.read()));
        first.advance();
    }
    init
}

/// [`accumulate`] over a range.
pub fn accumulate_range<R, T, Op, Proj>(range: R, options: AccumulateOptions<T, Op, Proj>) -> T
where
    R: CursorRange,
    R::Cursor: InputCursor,
    Proj: Projection<<R::Cursor as InputCursor>::Item>,
    Op: BinaryOperation<T, Proj::Output, Output = T>,
{
    let (first, last) = range.into_bounds();
    accumulate(first, last, options)
}
