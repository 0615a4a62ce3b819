//! Permutations of a multiset: repetition up to a per-symbol budget.
//!
//! The source set is described by a frequency vector: `frequency[s]` copies
//! of symbol `s` are available, and an arrangement may use a symbol as many
//! times as its budget allows. The total is the frequency-vector `nPr` from
//! [`count::multiset_permutations`].
//!
//! # Unranking
//!
//! The factorial number system does not apply once symbols repeat, because
//! prefix blocks are no longer uniform. Instead, each position walks the
//! candidate symbols in increasing order; a candidate is tentatively
//! consumed and the arrangements of the remaining suffix are counted. If
//! the rank falls inside that block the candidate is committed, otherwise
//! the block is subtracted and the walk continues. This costs one multiset
//! count per candidate, `O(r * symbols)` overall.

use crate::count;
use crate::error::Result;
use crate::generator::{Family, Generator};

/// Successor and unranking rules for `r`-permutations of a frequency-vector
/// multiset.
#[derive(Debug, Clone)]
pub struct MultisetPermutationFamily {
    frequency: Vec<i32>,
    r: i32,
}

impl Family for MultisetPermutationFamily {
    fn raise(&self, current: &mut [i32], available: &mut [i32], i: usize) -> bool {
        let at = current[i] as usize;
        let mut f = at + 1;
        while f < available.len() && available[f] == 0 {
            f += 1;
        }
        // the displaced symbol is free again either way
        available[at] += 1;
        if f < available.len() {
            current[i] = f as i32;
            available[f] -= 1;
        }
        current[i] as usize != at
    }

    fn refill(&self, current: &mut [i32], available: &mut [i32], pivot: Option<usize>) {
        let start = pivot.map_or(0, |i| i + 1);
        for j in start..current.len() {
            let mut f = 0usize;
            while f < available.len() && available[f] == 0 {
                f += 1;
            }
            current[j] = f as i32;
            available[f] -= 1;
        }
    }

    fn unrank(&self, rank: i64) -> Vec<i32> {
        if self.r <= 0 {
            return Vec::new();
        }
        let len = self.r as usize;
        let mut out = Vec::with_capacity(len);
        let mut budget = self.frequency.clone();
        let mut r = self.r - 1;
        let mut k = rank;
        for _ in 0..len {
            let mut s = 0usize;
            while s < budget.len() && budget[s] == 0 {
                s += 1;
            }
            loop {
                budget[s] -= 1;
                let block = count::multiset_raw(&budget, r);
                budget[s] += 1;
                if k < block {
                    break;
                }
                k -= block;
                let mut next = s + 1;
                while next < budget.len() && budget[next] == 0 {
                    next += 1;
                }
                if next == budget.len() {
                    break; // out-of-range rank: settle on the last candidate
                }
                s = next;
            }
            out.push(s as i32);
            budget[s] -= 1;
            r -= 1;
        }
        out
    }
}

/// Lexicographic enumerator for `r`-permutations of a multiset.
pub type MultisetPermutations = Generator<MultisetPermutationFamily>;

impl Generator<MultisetPermutationFamily> {
    /// Build an enumerator over the `r`-permutations of the multiset with
    /// `frequency[s]` copies of symbol `s`.
    ///
    /// Negative budgets are clamped to 0 (the symbol is excluded); that is
    /// policy, not an error. Fails with
    /// [`Error::InvalidRange`](crate::Error::InvalidRange) when `r` exceeds
    /// the clamped total multiplicity or is negative.
    pub fn new(frequency: &[i32], r: i32) -> Result<Self> {
        let total = count::multiset_permutations(frequency, r)?;
        let clamped: Vec<i32> = frequency.iter().map(|&f| f.max(0)).collect();
        Ok(Self::from_parts(
            MultisetPermutationFamily {
                frequency: clamped.clone(),
                r,
            },
            clamped,
            total,
        ))
    }
}
