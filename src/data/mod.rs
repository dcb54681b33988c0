pub mod example_data;

/// This trait represents the way values are combined inside a fenwick tree.
///
/// Some operations are reversible: for addition, `a + b = c`, and the reverse is
/// subtraction, since `c - b = a`. Others, like `max` or `min`, are not, and can't be used here.
///
/// Implementations should satisfy:
/// * `apply` is associative: `apply(apply(a, b), c) == apply(a, apply(b, c))`
/// * `undo` exactly reverses `apply`: `undo(apply(a, b), b) == a`, with no rounding.
///
/// None of these are checked by the tree. If they don't hold, the results of queries
/// are silently wrong.
pub trait ReversibleOperator<T> {
    /// Combine two values. For example: `(a, b) -> a + b`.
    fn apply(&self, a: T, b: T) -> T;

    /// The reverse of [`ReversibleOperator::apply`]. For example: `(c, b) -> c - b`.
    fn undo(&self, c: T, b: T) -> T;
}

/// Marker trait for operators whose `apply` is also commutative.
///
/// Range queries are computed as `undo(prefix(j), prefix(i - 1))`, which only equals the
/// combination of `i..=j` when the order of the two halves of `prefix(j)` doesn't matter.
/// Therefore every method that uses `undo` on prefixes requires this trait.
pub trait CommutativeOperator<T>: ReversibleOperator<T> {}

impl<T, O: ReversibleOperator<T> + ?Sized> ReversibleOperator<T> for &O {
    fn apply(&self, a: T, b: T) -> T {
        (**self).apply(a, b)
    }

    fn undo(&self, c: T, b: T) -> T {
        (**self).undo(c, b)
    }
}

impl<T, O: CommutativeOperator<T> + ?Sized> CommutativeOperator<T> for &O {}
