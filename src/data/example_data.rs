//! Operators for common fenwick trees.

use super::*;
use num_traits::{WrappingAdd, WrappingSub};
use std::fmt;
use std::ops::BitXor;

/// Addition, reversed by subtraction.
///
/// Uses wrapping arithmetic, so that `undo(apply(a, b), b) == a` holds
/// even when an intermediate sum overflows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Sum;

impl<T: WrappingAdd + WrappingSub> ReversibleOperator<T> for Sum {
    #[inline]
    fn apply(&self, a: T, b: T) -> T {
        a.wrapping_add(&b)
    }

    #[inline]
    fn undo(&self, c: T, b: T) -> T {
        c.wrapping_sub(&b)
    }
}

impl<T: WrappingAdd + WrappingSub> CommutativeOperator<T> for Sum {}

/// Exclusive or. It is its own inverse, so `apply` and `undo` are the same function.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Xor;

impl<T: BitXor<Output = T>> ReversibleOperator<T> for Xor {
    #[inline]
    fn apply(&self, a: T, b: T) -> T {
        a ^ b
    }

    #[inline]
    fn undo(&self, c: T, b: T) -> T {
        c ^ b
    }
}

impl<T: BitXor<Output = T>> CommutativeOperator<T> for Xor {}

/// An operator made out of two closures.
///
/// Constructing one asserts that `apply` is associative and commutative,
/// and that `undo` reverses it exactly.
///
/// ```
/// use fenwick::{FenwickTree, FnOperator};
///
/// let mul = FnOperator::new(|a: i64, b: i64| a * b, |c: i64, b: i64| c / b);
/// let tree = FenwickTree::build(vec![1, 2, 3, 4], mul);
/// assert_eq!(tree.range_query(2, 3), Ok(12));
/// ```
#[derive(Clone, Copy)]
pub struct FnOperator<A, U> {
    apply: A,
    undo: U,
}

impl<A, U> FnOperator<A, U> {
    pub fn new(apply: A, undo: U) -> Self {
        Self { apply, undo }
    }
}

impl<A, U> fmt::Debug for FnOperator<A, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperator").finish_non_exhaustive()
    }
}

impl<T, A, U> ReversibleOperator<T> for FnOperator<A, U>
where
    A: Fn(T, T) -> T,
    U: Fn(T, T) -> T,
{
    fn apply(&self, a: T, b: T) -> T {
        (self.apply)(a, b)
    }

    fn undo(&self, c: T, b: T) -> T {
        (self.undo)(c, b)
    }
}

impl<T, A, U> CommutativeOperator<T> for FnOperator<A, U>
where
    A: Fn(T, T) -> T,
    U: Fn(T, T) -> T,
{
}
