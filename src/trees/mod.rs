//! The fenwick tree, its common specializations, and structures built on top of it.

pub mod fenwick;
pub mod light_bulbs;

use crate::data::example_data::{Sum, Xor};

pub use fenwick::FenwickTree;
pub use light_bulbs::LightBulbs;

/// A fenwick tree of sums. `Sum` is zero sized, so this compiles down to
/// the same code as a hand-written sum tree.
pub type SumTree<T = i64> = FenwickTree<T, Sum>;

/// A fenwick tree of booleans combined by xor.
pub type XorTree = FenwickTree<bool, Xor>;
