//! Exhaustive pair-sum search over the current array.

use serde::{Deserialize, Serialize};

/// Find the first pair of indices `(i, j)` with `i < j` whose elements
/// sum to `target`.
///
/// Enumeration order is `i` ascending, `j` ascending from `i + 1`; the
/// first match in that order is returned, so when several pairs sum to
/// the target the result is the lexicographically smallest `(i, j)`.
///
/// Sums are widened to `i16` before comparison. 8-bit wraparound is
/// deliberately NOT applied: `100 + 100` sums to `200`, which can never
/// equal any `i8` target value.
///
/// Arrays of length 0 or 1 have no pairs and always return `None`.
#[must_use]
pub fn find_pair(values: &[i8], target: i8) -> Option<(usize, usize)> {
    let want = i16::from(target);
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if i16::from(values[i]) + i16::from(values[j]) == want {
                return Some((i, j));
            }
        }
    }
    None
}

/// A solved index pair, ready to publish on `/solution`.
///
/// Indices are carried as `i8` to match the wire representation of the
/// array elements themselves. Indices past 127 wrap on the cast; the
/// payload is emitted as-is, unvalidated, like every other message in
/// this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Index of the first element (`i`).
    pub first: i8,
    /// Index of the second element (`j > i`).
    pub second: i8,
}

impl Solution {
    /// Build a solution from raw search indices.
    #[must_use]
    pub fn from_indices(i: usize, j: usize) -> Self {
        Self {
            first: i as i8,
            second: j as i8,
        }
    }

    /// The two-element message payload for the `/solution` channel.
    #[must_use]
    pub fn to_message(self) -> Vec<i8> {
        vec![self.first, self.second]
    }
}
