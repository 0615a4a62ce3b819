//! Circular permutations of a multiset.
//!
//! With repeated symbols, rotation classes are ragged: a periodic
//! arrangement such as `[0,1,0,1]` has fewer distinct rotations than its
//! length, so the neat `nPr / r` quotient of the distinct-symbol case no
//! longer applies. The count comes from the divisor-sum identity in
//! [`count::cyclic_multiset_permutations`]; the arrangements themselves are
//! produced by filtering.
//!
//! # Canonical representatives
//!
//! Linear multiset permutations stream out of an inner
//! [`MultisetPermutations`] generator in ascending lexicographic order. A
//! candidate is emitted only if no rotation of it is lexicographically
//! smaller, i.e. only the least rotation of every class survives. Since the
//! stream itself ascends, the survivors appear in ascending order too, and
//! every class is emitted exactly once per cycle.
//!
//! Only rotations that put a copy of the leading symbol at the front can
//! ever be smaller, so the test first scans for positions holding `v[0]`
//! (any position holding something smaller rejects immediately) and only
//! then compares symbol by symbol.
//!
//! Direct unranking is not offered here: ranks of survivors have no known
//! closed form, so the surface is sequential generation plus a reset.

use crate::count;
use crate::error::Result;
use crate::multiset::MultisetPermutations;

/// Sequential enumerator for circular `r`-permutations of a multiset.
#[derive(Debug)]
pub struct CyclicMultisetPermutations {
    inner: MultisetPermutations,
    total: i64,
}

impl CyclicMultisetPermutations {
    /// Build an enumerator over the rotation classes of `r`-permutations of
    /// the multiset with `frequency[s]` copies of symbol `s`, one canonical
    /// (least-rotation) representative each.
    ///
    /// Negative budgets are clamped to 0, as in
    /// [`MultisetPermutations::new`]. Fails with
    /// [`Error::InvalidRange`](crate::Error::InvalidRange) when `r` exceeds
    /// the clamped total multiplicity or is negative.
    pub fn new(frequency: &[i32], r: i32) -> Result<Self> {
        let total = count::cyclic_multiset_permutations(frequency, r)?;
        let inner = MultisetPermutations::new(frequency, r)?;
        Ok(Self { inner, total })
    }

    /// Total number of rotation classes; fixed at construction.
    #[must_use]
    pub fn total_count(&self) -> i64 {
        self.total
    }

    /// Re-point the enumerator so the next [`successor`](Self::successor)
    /// call produces the first (rank 0) representative again.
    pub fn reset(&mut self) {
        self.inner.jump_to(0);
    }

    /// Produce the next canonical representative, wrapping to the first
    /// after the last.
    pub fn successor(&mut self) -> Vec<i32> {
        loop {
            let v = self.inner.successor();
            if is_least_rotation(&v) {
                return v;
            }
        }
    }
}

/// True when no rotation of `v` is lexicographically smaller than `v`.
fn is_least_rotation(v: &[i32]) -> bool {
    for i in 1..v.len() {
        if v[i] < v[0] {
            return false;
        }
        if v[i] == v[0] {
            let wrap = v.len() - i;
            for j in 0..v.len() {
                let k = if j < wrap { i + j } else { j - wrap };
                if v[k] < v[j] {
                    return false;
                }
                if v[k] > v[j] {
                    break;
                }
            }
        }
    }
    true
}
