use super::InOutResult;
use crate::cursor::{Bound, CursorRange, InputCursor, OutputCursor};
use crate::ops::{BinaryOperation, Identity, Minus, Projection};

/// Arguments of [`adjacent_difference`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjacentDifferenceOptions<Op = Minus, Proj = Identity> {
    /// `op(current, previous)`.
    pub op: Op,
    /// Applied to each element before differencing.
    pub proj: Proj,
}

impl AdjacentDifferenceOptions {
    /// Subtract each element's predecessor.
    pub fn new() -> Self {
        Self {
            op: Minus,
            proj: Identity,
        }
    }
}

impl<Op, Proj> AdjacentDifferenceOptions<Op, Proj> {
    /// Replace the differencing operation.
    pub fn op<Op2>(self, op: Op2) -> AdjacentDifferenceOptions<Op2, Proj> {
        AdjacentDifferenceOptions {
            op,
            proj: self.proj,
        }
    }

    /// Replace the projection.
    pub fn proj<Proj2>(self, proj: Proj2) -> AdjacentDifferenceOptions<Op, Proj2> {
        AdjacentDifferenceOptions { op: self.op, proj }
    }
}

/// Write the first projected element, then `op(current, previous)` for
/// every following element.
///
/// The previous projected value is kept across iterations and moved into
/// `op` on its last use; neither the input nor the output is read twice.
/// Both returned cursors have advanced once per input element. An empty
/// input returns `first` and `out` without writing.
pub fn adjacent_difference<C, B, O, Op, Proj>(
    mut first: C,
    last: B,
    mut out: O,
    options: AdjacentDifferenceOptions<Op, Proj>,
) -> InOutResult<C, O>
where
    C: InputCursor,
    B: Bound<C>,
    Proj: Projection<C::Item>,
    Proj::Output: Clone,
    Op: BinaryOperation<Proj::Output, Proj::Output>,
    O: OutputCursor<Proj::Output> + OutputCursor<Op::Output>,
{
    let AdjacentDifferenceOptions { mut op, mut proj } = options;

    if last.is_reached(&first) {
        return InOutResult {
            input: first,
            output: out,
        };
    }

    let mut previous = proj.project(first.read());
    OutputCursor::<Proj::Output>::put(&mut out, previous.clone());
    first.advance();

    while !last.is_reached(&first) {
        let current = proj.project(first.read());
        OutputCursor::<Op::Output>::put(&mut out, op.apply(current.clone(), previous));
        previous = current;
        first.advance();
    }

    InOutResult {
        input: first,
        output: out,
    }
}

/// [`adjacent_difference`] over a range.
pub fn adjacent_difference_range<R, O, Op, Proj>(
    range: R,
    out: O,
    options: AdjacentDifferenceOptions<Op, Proj>,
) -> InOutResult<R::Cursor, O>
where
    R: CursorRange,
    R::Cursor: InputCursor,
    Proj: Projection<<R::Cursor as InputCursor>::Item>,
    Proj::Output: Clone,
    Op: BinaryOperation<Proj::Output, Proj::Output>,
    O: OutputCursor<Proj::Output> + OutputCursor<Op::Output>,
{
    let (first, last) = range.into_bounds();
    adjacent_difference(first, last, out, options)
}
