//! Named binary operations selectable at runtime
//!
//! Lets callers that only know an operation by name (command-line flags,
//! configuration files) feed it to any algorithm in [`crate::numeric`].

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use thiserror::Error;

use crate::ops::BinaryOperation;

/// Binary operation chosen by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Sub,
    /// `lhs * rhs`
    Mul,
    /// Smaller operand (`lhs` on ties)
    Min,
    /// Larger operand (`lhs` on ties)
    Max,
}

/// Errors produced when parsing an [`Operation`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationParseError {
    /// Name matches no known operation
    #[error("unknown operation `{name}` (expected one of: add, sub, mul, min, max)")]
    Unknown {
        /// Name that failed to parse
        name: String,
    },
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Min,
        Operation::Max,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Min => "min",
            Operation::Max => "max",
        }
    }

    /// Apply the operation to `lhs` and `rhs`, in that order.
    pub fn apply<T>(self, lhs: T, rhs: T) -> T
    where
        T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + PartialOrd,
    {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Sub => lhs - rhs,
            Operation::Mul => lhs * rhs,
            Operation::Min => {
                if rhs < lhs {
                    rhs
                } else {
                    lhs
                }
            }
            Operation::Max => {
                if rhs > lhs {
                    rhs
                } else {
                    lhs
                }
            }
        }
    }
}

impl<T> BinaryOperation<T, T> for Operation
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + PartialOrd,
{
    type Output = T;

    #[inline]
    fn apply(&mut self, lhs: T, rhs: T) -> T {
        Operation::apply(*self, lhs, rhs)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = OperationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "sub" | "minus" | "-" => Ok(Operation::Sub),
            "mul" | "times" | "*" => Ok(Operation::Mul),
            "min" => Ok(Operation::Min),
            "max" => Ok(Operation::Max),
            _ => Err(OperationParseError::Unknown { name: s.to_string() }),
        }
    }
}
