//! Sequence-reduction algorithms
//!
//! Five independent leaves sharing one calling convention:
//! - explicit form: `algorithm(first, last, [out,] options)`
//! - range form: `algorithm_range(range, [out,] options)`, which splits the
//!   range with [`CursorRange::into_bounds`](crate::cursor::CursorRange) and
//!   delegates to the explicit form.
//!
//! Each traversal visits its input exactly once, in order, and never reads
//! at or past the bound.

mod accumulate;
mod adjacent_difference;
mod inner_product;
mod iota;
mod partial_sum;

pub use accumulate::{accumulate, accumulate_range, AccumulateOptions};
pub use accumulate::{accumulate as reduce, accumulate_range as reduce_range};
pub use adjacent_difference::{
    adjacent_difference, adjacent_difference_range, AdjacentDifferenceOptions,
};
pub use inner_product::{inner_product, inner_product_range, InnerProductOptions};
pub use inner_product::{
    inner_product as transform_reduce, inner_product_range as transform_reduce_range,
};
pub use iota::{iota, iota_range};
pub use partial_sum::{partial_sum, partial_sum_range, PartialSumOptions};

/// Final input and output positions of a transform algorithm.
///
/// Cursors are handles, so the record owns no storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InOutResult<I, O> {
    /// Input cursor after the last consumed element.
    pub input: I,
    /// Output cursor after the last written element.
    pub output: O,
}

impl<I, O> InOutResult<I, O> {
    /// Split into `(input, output)`.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

/// Result record of [`adjacent_difference`].
pub type AdjacentDifferenceResult<I, O> = InOutResult<I, O>;

/// Result record of [`partial_sum`].
pub type PartialSumResult<I, O> = InOutResult<I, O>;
