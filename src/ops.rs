//! Projections, combining operations and their defaults
//!
//! Closures work anywhere a [`Projection`] or [`BinaryOperation`] is
//! expected; the unit structs here are the nameable defaults used by the
//! option types in [`crate::numeric`].

use std::ops::{Add, Mul, Sub};

/// Per-element transform applied before combination.
pub trait Projection<A> {
    /// Projected value.
    type Output;

    /// Map `value` to the value actually combined.
    fn project(&mut self, value: A) -> Self::Output;
}

impl<F, A, B> Projection<A> for F
where
    F: FnMut(A) -> B,
{
    type Output = B;

    #[inline]
    fn project(&mut self, value: A) -> B {
        self(value)
    }
}

/// Binary function folding an accumulator with a projected element.
///
/// No associativity or commutativity is assumed: callers rely on the
/// argument order documented by each algorithm.
pub trait BinaryOperation<L, R> {
    /// Combined value.
    type Output;

    /// Combine `lhs` with `rhs`.
    fn apply(&mut self, lhs: L, rhs: R) -> Self::Output;
}

impl<F, L, R, O> BinaryOperation<L, R> for F
where
    F: FnMut(L, R) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&mut self, lhs: L, rhs: R) -> O {
        self(lhs, rhs)
    }
}

/// Projection returning its argument unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<A> Projection<A> for Identity {
    type Output = A;

    #[inline]
    fn project(&mut self, value: A) -> A {
        value
    }
}

/// `lhs + rhs`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plus;

impl<L: Add<R>, R> BinaryOperation<L, R> for Plus {
    type Output = L::Output;

    #[inline]
    fn apply(&mut self, lhs: L, rhs: R) -> L::Output {
        lhs + rhs
    }
}

/// `lhs - rhs`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minus;

impl<L: Sub<R>, R> BinaryOperation<L, R> for Minus {
    type Output = L::Output;

    #[inline]
    fn apply(&mut self, lhs: L, rhs: R) -> L::Output {
        lhs - rhs
    }
}

/// `lhs * rhs`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplies;

impl<L: Mul<R>, R> BinaryOperation<L, R> for Multiplies {
    type Output = L::Output;

    #[inline]
    fn apply(&mut self, lhs: L, rhs: R) -> L::Output {
        lhs * rhs
    }
}

/// Types with a "next value", stepped in place by `iota`.
pub trait Successor {
    /// Replace `self` with its successor (prefix increment).
    fn increment(&mut self);
}

macro_rules! successor_by_one {
    ($one:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Successor for $ty {
                #[inline]
                fn increment(&mut self) {
                    *self += $one;
                }
            }
        )*
    };
}

successor_by_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
successor_by_one!(1.0 => f32, f64);

impl Successor for char {
    /// Steps to the next Unicode scalar value, skipping the surrogate block.
    ///
    /// # Panics
    ///
    /// Panics when incrementing `char::MAX`.
    fn increment(&mut self) {
        let mut next = *self as u32 + 1;
        if (0xD800..=0xDFFF).contains(&next) {
            next = 0xE000;
        }
        *self = char::from_u32(next).expect("char successor overflowed char::MAX");
    }
}
