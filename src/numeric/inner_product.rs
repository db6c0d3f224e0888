use crate::cursor::{Bound, CursorRange, InputCursor};
use crate::ops::{BinaryOperation, Identity, Multiplies, Plus, Projection};

/// Arguments of [`inner_product`].
///
/// Defaults compute a dot product: `reduce_op` is [`Plus`], `combine_op` is
/// [`Multiplies`], both projections are [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerProductOptions<
    T,
    Op1 = Plus,
    Op2 = Multiplies,
    Proj1 = Identity,
    Proj2 = Identity,
> {
    /// Starting value of the fold.
    pub init: T,
    /// Folds each combined pair into the accumulator.
    pub reduce_op: Op1,
    /// Combines one element of each sequence.
    pub combine_op: Op2,
    /// Applied to elements of the first sequence.
    pub proj1: Proj1,
    /// Applied to elements of the second sequence.
    pub proj2: Proj2,
}

impl<T> InnerProductOptions<T> {
    /// Dot product starting from `init`.
    pub fn new(init: T) -> Self {
        Self {
            init,
            reduce_op: Plus,
            combine_op: Multiplies,
            proj1: Identity,
            proj2: Identity,
        }
    }
}

impl<T, Op1, Op2, Proj1, Proj2> InnerProductOptions<T, Op1, Op2, Proj1, Proj2> {
    /// Replace the outer (folding) operation.
    pub fn reduce_op<O>(self, reduce_op: O) -> InnerProductOptions<T, O, Op2, Proj1, Proj2> {
        InnerProductOptions {
            init: self.init,
            reduce_op,
            combine_op: self.combine_op,
            proj1: self.proj1,
            proj2: self.proj2,
        }
    }

    /// Replace the inner (pairwise) operation.
    pub fn combine_op<O>(self, combine_op: O) -> InnerProductOptions<T, Op1, O, Proj1, Proj2> {
        InnerProductOptions {
            init: self.init,
            reduce_op: self.reduce_op,
            combine_op,
            proj1: self.proj1,
            proj2: self.proj2,
        }
    }

    /// Replace the projection of the first sequence.
    pub fn proj1<P>(self, proj1: P) -> InnerProductOptions<T, Op1, Op2, P, Proj2> {
        InnerProductOptions {
            init: self.init,
            reduce_op: self.reduce_op,
            combine_op: self.combine_op,
            proj1,
            proj2: self.proj2,
        }
    }

    /// Replace the projection of the second sequence.
    pub fn proj2<P>(self, proj2: P) -> InnerProductOptions<T, Op1, Op2, Proj1, P> {
        InnerProductOptions {
            init: self.init,
            reduce_op: self.reduce_op,
            combine_op: self.combine_op,
            proj1: self.proj1,
            proj2,
        }
    }
}

/// Fold two sequences walked in lockstep.
///
/// `acc = reduce_op(acc, combine_op(proj1(a), proj2(b)))` for each aligned
/// pair. Traversal stops as soon as either sequence reaches its bound, so
/// trailing elements of the longer one are never read.
pub fn inner_product<C1, B1, C2, B2, T, Op1, Op2, Proj1, Proj2>(
    mut first1: C1,
    last1: B1,
    mut first2: C2,
    last2: B2,
    options: InnerProductOptions<T, Op1, Op2, Proj1, Proj2>,
) -> T
where
    C1: InputCursor,
    B1: Bound<C1>,
    C2: InputCursor,
    B2: Bound<C2>,
    Proj1: Projection<C1::Item>,
    Proj2: Projection<C2::Item>,
    Op2: BinaryOperation<Proj1::Output, Proj2::Output>,
    Op1: BinaryOperation<T, Op2::Output, Output = T>,
{
    let InnerProductOptions {
        mut init,
        mut reduce_op,
        mut combine_op,
        mut proj1,
        mut proj2,
    } = options;

    while !last1.is_reached(&first1) && !last2.is_reached(&first2) {
        let pair = combine_op.apply(proj1.project(first1.read()), proj2.project(first2.read()));
        init = reduce_op.apply(init, pair);
        first1.advance();
        first2.advance();
    }
    init
}

/// [`inner_product`] over two ranges.
pub fn inner_product_range<R1, R2, T, Op1, Op2, Proj1, Proj2>(
    range1: R1,
    range2: R2,
    options: InnerProductOptions<T, Op1, Op2, Proj1, Proj2>,
) -> T
where
    R1: CursorRange,
    R1::Cursor: InputCursor,
    R2: CursorRange,
    R2::Cursor: InputCursor,
    Proj1: Projection<<R1::Cursor as InputCursor>::Item>,
    Proj2: Projection<<R2::Cursor as InputCursor>::Item>,
    Op2: BinaryOperation<Proj1::Output, Proj2::Output>,
    Op1: BinaryOperation<T, Op2::Output, Output = T>,
{
    let (first1, last1) = range1.into_bounds();
    let (first2, last2) = range2.into_bounds();
    inner_product(first1, last1, first2, last2, options)
}
