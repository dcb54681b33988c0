//! A row of light bulbs that can be toggled a range at a time.
//!
//! Given `n` light bulbs, `toggle(start, end)` flips every bulb in `start..=end`
//! and `is_on(i)` tells whether bulb `i` is on, both in O(log N).
//!
//! Toggling `start..=end` xors `true` into positions `start` and `end + 1` of an [`XorTree`].
//! Every bulb at or after `start` sees one flip in its prefix xor, and every bulb after `end`
//! sees a second one that cancels it. So the prefix xor at `i` is the parity of the toggles
//! covering `i`, xored with the bulb's initial state.

use std::fmt;

use super::XorTree;
use crate::error::Result;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct LightBulbs {
    // bulb `i` is on iff the xor of `1..=i` is true
    tree: XorTree,
}

impl LightBulbs {
    /// Creates the bulbs out of their initial states. The data starts at index 1,
    /// `bulbs[0]` is ignored.
    pub fn new(bulbs: Vec<bool>) -> Self {
        let mut differences = Vec::with_capacity(bulbs.len());
        let mut previous = false;
        for (i, &bulb) in bulbs.iter().enumerate() {
            if i == 0 {
                differences.push(false);
            } else {
                differences.push(bulb ^ previous);
                previous = bulb;
            }
        }
        Self {
            tree: XorTree::from(differences),
        }
    }

    /// `n` bulbs, all of them off.
    pub fn with_len(n: usize) -> Self {
        Self {
            tree: XorTree::from(vec![false; n + 1]),
        }
    }

    /// The number of bulbs
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Flips every bulb in `start..=end`.
    ///
    /// Requires `1 <= start <= end <= len()`. Nothing is flipped if the range is invalid.
    ///
    /// O(log N)
    pub fn toggle(&mut self, start: usize, end: usize) -> Result<()> {
        self.tree.check_range(start, end)?;

        self.tree.combine_at(start, true)?;
        // nothing after the last bulb needs to be flipped back
        if end < self.len() {
            self.tree.combine_at(end + 1, true)?;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(start, end, "toggled light bulbs");
        Ok(())
    }

    /// Whether bulb `index` is on.
    ///
    /// O(log N)
    pub fn is_on(&self, index: usize) -> Result<bool> {
        self.tree.check_index(index, 1)?;
        Ok(self.tree.prefix_query(index)?.unwrap_or(false))
    }

    /// The states of all bulbs, in the layout [`LightBulbs::new`] expects:
    /// slot 0 is an unused `false`.
    ///
    /// O(N)
    pub fn states(&self) -> Vec<bool> {
        let mut states = self.tree.snapshot();
        if let Some(sentinel) = states.first_mut() {
            *sentinel = false;
        }
        for i in 1..states.len() {
            states[i] ^= states[i - 1];
        }
        states
    }
}

/// Prints the bulb positions, and under them `1` for bulbs that are on and `0` for bulbs that are off.
impl fmt::Display for LightBulbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states = self.states();
        for i in 1..states.len() {
            write!(f, "{i}\t")?;
        }
        writeln!(f)?;
        for &on in states.iter().skip(1) {
            f.write_str(if on { "1\t" } else { "0\t" })?;
        }
        writeln!(f)
    }
}
