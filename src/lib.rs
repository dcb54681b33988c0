//! Fenwick trees (binary indexed trees) that combine their values with any
//! *reversible* operator: addition, xor, multiplication of nonzero rationals,
//! or any user-defined operator implementing [`ReversibleOperator`].
//!
//! The common cases are [`SumTree`] and [`XorTree`], and [`LightBulbs`] shows how
//! a xor tree gives range toggles with point queries.

pub mod data;
pub mod error;
pub mod trees;

pub use data::example_data::{FnOperator, Sum, Xor};
pub use data::{CommutativeOperator, ReversibleOperator};
pub use error::FenwickError;
pub use trees::{FenwickTree, LightBulbs, SumTree, XorTree};
