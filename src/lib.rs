//! # Range-aware numeric algorithms
//!
//! Generic equivalents of the classic sequence reductions, driven by
//! cursors instead of iterators:
//!
//! 1. **`iota`**: fill a writable range with `v, v+1, v+2, …`
//! 2. **`accumulate` / `reduce`**: left fold with optional projection
//! 3. **`inner_product` / `transform_reduce`**: lockstep fold of two sequences
//! 4. **`adjacent_difference`**: `out[i] = op(e[i], e[i-1])`
//! 5. **`partial_sum`**: `out[i] = op(out[i-1], e[i])`
//!
//! Every algorithm takes either an explicit `(first, last)` pair or a single
//! range (`*_range`), plus an options struct carrying the initial value,
//! operations and projections. Input cursors only need to be one-pass;
//! output cursors only need "assign then advance".
//!
//! ## Usage Example
//!
//! ```
//! use numeric_ranges::{
//!     accumulate_range, adjacent_difference_range, AccumulateOptions,
//!     AdjacentDifferenceOptions, BackInserter,
//! };
//!
//! let values = [15, 10, 6, 3, 1];
//! assert_eq!(accumulate_range(&values, AccumulateOptions::new(0)), 35);
//!
//! let mut deltas: Vec<i32> = Vec::new();
//! adjacent_difference_range(
//!     &values,
//!     BackInserter::new(&mut deltas),
//!     AdjacentDifferenceOptions::new(),
//! );
//! assert_eq!(deltas, [15, -5, -4, -3, -2]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod cursor;    // Traversal capability traits
pub mod numeric;   // The five algorithms
pub mod operation; // Runtime-named operations
pub mod ops;       // Projections, operations, defaults
pub mod sequence;  // Concrete cursors over slices, iterators and vectors

// Re-exports for convenience
pub use cursor::{
    distance, BidirectionalCursor, Bound, Cursor, CursorRange, ForwardCursor, InputCursor,
    OutputCursor, RandomAccessCursor, SizedBound, Writable,
};
pub use numeric::{
    accumulate, accumulate_range, adjacent_difference, adjacent_difference_range,
    inner_product, inner_product_range, iota, iota_range, partial_sum, partial_sum_range,
    reduce, reduce_range, transform_reduce, transform_reduce_range, AccumulateOptions,
    AdjacentDifferenceOptions, AdjacentDifferenceResult, InOutResult, InnerProductOptions,
    PartialSumOptions, PartialSumResult,
};
pub use operation::{Operation, OperationParseError};
pub use ops::{BinaryOperation, Identity, Minus, Multiplies, Plus, Projection, Successor};
pub use sequence::{
    BackInserter, Exhausted, IterCursor, Sentinel, SliceCursor, SliceCursorMut, Subrange,
};
