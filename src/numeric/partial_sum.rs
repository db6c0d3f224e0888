use super::InOutResult;
use crate::cursor::{Bound, CursorRange, InputCursor, OutputCursor};
use crate::ops::{BinaryOperation, Identity, Plus, Projection};

/// Arguments of [`partial_sum`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialSumOptions<Op = Plus, Proj = Identity> {
    /// `op(running, element)`.
    pub op: Op,
    /// Applied to each element before it joins the running value.
    pub proj: Proj,
}

impl PartialSumOptions {
    /// Running sum.
    pub fn new() -> Self {
        Self {
            op: Plus,
            proj: Identity,
        }
    }
}

impl<Op, Proj> PartialSumOptions<Op, Proj> {
    /// Replace the running operation.
    pub fn op<Op2>(self, op: Op2) -> PartialSumOptions<Op2, Proj> {
        PartialSumOptions {
            op,
            proj: self.proj,
        }
    }

    /// Replace the projection.
    pub fn proj<Proj2>(self, proj: Proj2) -> PartialSumOptions<Op, Proj2> {
        PartialSumOptions { op: self.op, proj }
    }
}

/// Write the running totals of `[first, last)`.
///
/// `out[0] = proj(e0)`, `out[i] = op(out[i - 1], proj(ei))`. The running
/// value lives in this function, never read back from `out`. Same result
/// record and empty-input behaviour as
/// [`adjacent_difference`](super::adjacent_difference).
pub fn partial_sum<C, B, O, Op, Proj>(
    mut first: C,
    last: B,
    mut out: O,
    options: PartialSumOptions<Op, Proj>,
) -> InOutResult<C, O>
where
    C: InputCursor,
    B: Bound<C>,
    Proj: Projection<C::Item>,
    Proj::Output: Clone,
    Op: BinaryOperation<Proj::Output, Proj::Output, Output = Proj::Output>,
    O: OutputCursor<Proj::Output>,
{
    let PartialSumOptions { mut op, mut proj } = options;

    if last.is_reached(&first) {
        return InOutResult {
            input: first,
            output: out,
        };
    }

    let mut sum = proj.project(first.read());
    out.put(sum.clone());
    first.advance();

    while !last.is_reached(&first) {
        sum = op.apply(sum, proj.project(first.read()));
        out.put(sum.clone());
        first.advance();
    }

    InOutResult {
        input: first,
        output: out,
    }
}

/// [`partial_sum`] over a range.
pub fn partial_sum_range<R, O, Op, Proj>(
    range: R,
    out: O,
    options: PartialSumOptions<Op, Proj>,
) -> InOutResult<R::Cursor, O>
where
    R: CursorRange,
    R::Cursor: InputCursor,
    Proj: Projection<<R::Cursor as InputCursor>::Item>,
    Proj::Output: Clone,
    Op: BinaryOperation<Proj::Output, Proj::Output, Output = Proj::Output>,
    O: OutputCursor<Proj::Output>,
{
    let (first, last) = range.into_bounds();
    partial_sum(first, last, out, options)
}
