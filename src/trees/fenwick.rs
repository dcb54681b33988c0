//! Fenwick trees over reversible operators. A fenwick tree stores all its values
//! in one allocation, and supports point updates and prefix queries in O(log N).
//!
//! See [`FenwickTree`]
//!
//! ```
//! use fenwick::SumTree;
//!
//! // data starts at index 1. index 0 is ignored
//! let mut tree: SumTree = SumTree::from(vec![0, 5, 2, 9, -3, 5]);
//! assert_eq!(tree.prefix_query(3), Ok(Some(16)));
//! assert_eq!(tree.range_query(2, 4), Ok(8));
//!
//! tree.update(2, 20).unwrap();
//! assert_eq!(tree.range_query(2, 4), Ok(26));
//! assert_eq!(tree.value_at(2), Ok(20));
//! ```

use crate::data::{CommutativeOperator, ReversibleOperator};
use crate::error::{FenwickError, Result};

/// Isolates the lowest set bit of `i`, i.e., `i & -i`.
#[inline(always)]
const fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// A fenwick tree, generic over the operator used to combine its values.
///
/// Indices are 1-based: logical element `i` lives in `1..=len()`, and slot 0 of the
/// vector the tree is built from is a sentinel that is never read.
/// The index arithmetic depends on this, so it can't be shifted to 0-based indices.
///
/// `data[p]` holds the combination of the logical elements in `p - lowbit(p) + 1..=p`.
///
/// Does not support inserting or removing elements; the length is fixed at construction.
///
/// Equality and hashing compare the whole storage, sentinel slot included, so two trees that
/// answer every query the same way are unequal if they were built with different sentinels.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FenwickTree<T, O> {
    data: Vec<T>,
    op: O,
}

impl<T, O> FenwickTree<T, O> {
    /// The number of logical elements
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Checks if the fenwick tree has no logical elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The operator the tree was built with
    pub fn operator(&self) -> &O {
        &self.op
    }

    /// Returns an error unless `min <= index <= len()`.
    pub(crate) fn check_index(&self, index: usize, min: usize) -> Result<()> {
        let max = self.len();
        if index < min || index > max {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, min, max, "rejected out of bounds index");
            return Err(FenwickError::IndexOutOfBounds { index, min, max });
        }
        Ok(())
    }

    /// Returns an error unless `1 <= start <= end <= len()`.
    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<()> {
        self.check_index(start, 1)?;
        self.check_index(end, 1)?;
        if start > end {
            #[cfg(feature = "tracing")]
            tracing::debug!(start, end, "rejected reversed range");
            return Err(FenwickError::InvalidRange { start, end });
        }
        Ok(())
    }
}

/// impl block for the methods that only need `apply`
impl<T: Clone, O: ReversibleOperator<T>> FenwickTree<T, O> {
    /// Builds a tree out of `initial`. The data starts at index 1, `initial[0]` is ignored.
    ///
    /// An empty vector is accepted, and gives an empty tree.
    ///
    /// O(N)
    pub fn build(initial: Vec<T>, op: O) -> Self {
        let mut data = initial;
        let size = data.len();

        for i in 1..size {
            let parent = i + lowest_bit(i);
            if parent < size {
                let child = data[i].clone();
                data[parent] = op.apply(data[parent].clone(), child);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(len = size.saturating_sub(1), "built fenwick tree");

        Self { data, op }
    }

    /// Combines the logical elements `1..=index`.
    ///
    /// `index` may be `0`, in which case no elements are combined and the result is `None`.
    /// Any other valid index gives `Some`.
    ///
    /// O(log N)
    pub fn prefix_query(&self, index: usize) -> Result<Option<T>> {
        self.check_index(index, 0)?;
        Ok(self.fold_prefix(index))
    }

    /// Combines `delta` into the logical element at `index`,
    /// i.e., the element becomes `apply(element, delta)`.
    ///
    /// For [`crate::Xor`] trees this toggles the element whenever `delta` is `true`.
    ///
    /// O(log N)
    pub fn combine_at(&mut self, index: usize, delta: T) -> Result<()> {
        self.check_index(index, 1)?;
        self.propagate(index, delta);
        Ok(())
    }

    fn fold_prefix(&self, index: usize) -> Option<T> {
        if index == 0 {
            None
        } else {
            Some(self.nonempty_prefix(index))
        }
    }

    /// `index` must be in `1..=len()`.
    fn nonempty_prefix(&self, mut index: usize) -> T {
        // the first visited value seeds the result
        let mut result = self.data[index].clone();
        index -= lowest_bit(index);
        while index > 0 {
            result = self.op.apply(result, self.data[index].clone());
            index -= lowest_bit(index);
        }
        result
    }

    fn propagate(&mut self, mut index: usize, delta: T) {
        let len = self.len();
        while index <= len {
            self.data[index] = self.op.apply(self.data[index].clone(), delta.clone());
            index += lowest_bit(index);
        }
    }
}

/// impl block for the methods that take differences of prefixes
impl<T: Clone, O: CommutativeOperator<T>> FenwickTree<T, O> {
    /// Combines the logical elements `start..=end`, as `undo(prefix(end), prefix(start - 1))`.
    ///
    /// Requires `1 <= start <= end <= len()`.
    ///
    /// O(log N)
    pub fn range_query(&self, start: usize, end: usize) -> Result<T> {
        self.check_range(start, end)?;
        Ok(self.range_unchecked(start, end))
    }

    /// The current logical element at `index`.
    ///
    /// O(log N)
    pub fn value_at(&self, index: usize) -> Result<T> {
        self.check_index(index, 1)?;
        Ok(self.range_unchecked(index, index))
    }

    /// Sets the logical element at `index` to `value`, and recalculates.
    ///
    /// Combines `undo(value, value_at(index))` into the element, which is the change
    /// that turns the old value into the new one.
    ///
    /// O(log N)
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index, 1)?;
        let previous = self.range_unchecked(index, index);
        let delta = self.op.undo(value, previous);
        self.propagate(index, delta);

        #[cfg(feature = "tracing")]
        tracing::trace!(index, "updated fenwick tree");
        Ok(())
    }

    /// The current logical elements, laid out the way [`FenwickTree::build`] expects them:
    /// slot 0 holds the sentinel the tree was built with.
    ///
    /// Building a new tree out of the snapshot gives a tree with the same query results.
    ///
    /// O(N)
    pub fn snapshot(&self) -> Vec<T> {
        let mut values = self.data.clone();
        let size = values.len();

        // undo the build sweep, right to left
        for i in (1..size).rev() {
            let parent = i + lowest_bit(i);
            if parent < size {
                let child = values[i].clone();
                values[parent] = self.op.undo(values[parent].clone(), child);
            }
        }
        values
    }

    /// Both bounds must be in `1..=len()` and ordered.
    fn range_unchecked(&self, start: usize, end: usize) -> T {
        let upto_end = self.nonempty_prefix(end);
        if start > 1 {
            self.op.undo(upto_end, self.nonempty_prefix(start - 1))
        } else {
            upto_end
        }
    }
}

impl<T: Clone, O: ReversibleOperator<T> + Default> From<Vec<T>> for FenwickTree<T, O> {
    /// Builds a tree with the default operator. `initial[0]` is ignored.
    fn from(initial: Vec<T>) -> Self {
        Self::build(initial, O::default())
    }
}
