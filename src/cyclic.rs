//! Circular permutations of distinct symbols.
//!
//! Two linear permutations denote the same circular arrangement when one is
//! a rotation of the other. This family enumerates one representative per
//! rotation class: the rotation that starts with the smallest symbol of the
//! class. With all symbols distinct every class has exactly `r` members, so
//! there are `nCPr = nPr / r` representatives, and the first symbol of a
//! representative can never exceed `n - r` (some larger symbol would
//! otherwise be forced in front of a smaller one with no rotation to fix it).
//!
//! Unranking fixes the first symbol by block subtraction over shrinking
//! `nPr` counts, then hands the remaining `r - 1` positions to the linear
//! permutation family on the reduced alphabet above that symbol, shifting
//! the result back up.

use crate::count;
use crate::error::Result;
use crate::generator::{Family, Generator};
use crate::permutation::PermutationFamily;

/// Successor and unranking rules for circular `r`-permutations of `0..n`,
/// represented by the rotation starting at the class minimum.
#[derive(Debug, Clone)]
pub struct CyclicPermutationFamily {
    n: i32,
    r: i32,
    /// Largest symbol admissible at position 0, `n - r`.
    first_max: i32,
}

impl Family for CyclicPermutationFamily {
    fn raise(&self, current: &mut [i32], available: &mut [i32], i: usize) -> bool {
        let at = current[i];
        for f in (at + 1)..self.n {
            if available[f as usize] > 0 {
                // position 0 is capped; a stuck first symbol keeps its slot
                if i > 0 || at < self.first_max {
                    current[i] = f;
                    available[f as usize] -= 1;
                }
                break;
            }
        }
        if i > 0 {
            available[at as usize] += 1;
        }
        current[i] != at
    }

    fn refill(&self, current: &mut [i32], available: &mut [i32], pivot: Option<usize>) {
        if pivot.is_none() {
            // wrap to rank 0: symbols up to the first-position cap come back
            // into play (the stuck first symbol among them)
            for slot in available[..=self.first_max as usize].iter_mut() {
                *slot = 1;
            }
        }
        let start = pivot.map_or(0, |i| i + 1);
        for j in start..current.len() {
            let mut f = 0usize;
            while available[f] == 0 {
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
        let n = (self.n - 1) as i64;
        let r = (self.r - 1) as i64;
        let mut k = rank;
        let mut first = 0i64;
        let mut block = count::falling_raw(n, r);
        while k >= block && first < self.first_max as i64 {
            k -= block;
            first += 1;
            block = count::falling_raw(n - first, r);
        }
        // the tail is a linear sub-problem on the alphabet above `first`
        let tail = PermutationFamily {
            n: self.n - 1 - first as i32,
            r: self.r - 1,
        }
        .unrank(k);
        let shift = first as i32 + 1;
        let mut out = Vec::with_capacity(self.r as usize);
        out.push(first as i32);
        out.extend(tail.iter().map(|&s| s + shift));
        out
    }
}

/// Lexicographic enumerator for circular `r`-permutations of `n` distinct
/// symbols.
pub type CyclicPermutations = Generator<CyclicPermutationFamily>;

impl Generator<CyclicPermutationFamily> {
    /// Build an enumerator over the rotation classes of `r`-permutations of
    /// `0..n`, one canonical representative each.
    ///
    /// Fails with [`Error::InvalidRange`](crate::Error::InvalidRange) when
    /// `r > n`, `r < 0`, or `n < 0`.
    pub fn new(n: i32, r: i32) -> Result<Self> {
        let total = count::cyclic_permutations(n, r)?;
        Ok(Self::from_parts(
            CyclicPermutationFamily {
                n,
                r,
                first_max: n - r,
            },
            vec![1; n.max(0) as usize],
            total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_total_and_bounds() {
        let gen = CyclicPermutations::new(6, 4).unwrap();
        assert_eq!(gen.total_count(), 90);
        let mut seen = HashSet::new();
        for k in 0..90 {
            let v = gen.unrank(k);
            assert_eq!(v.len(), 4);
            assert!(v[0] <= 2);
            assert!(seen.insert(v));
        }
    }

    #[test]
    fn test_representatives_start_at_class_minimum() {
        let gen = CyclicPermutations::new(6, 4).unwrap();
        for k in 0..90 {
            let v = gen.unrank(k);
            assert_eq!(v[0], *v.iter().min().unwrap());
        }
    }

    #[test]
    fn test_successor_matches_unrank() {
        let mut gen = CyclicPermutations::new(6, 4).unwrap();
        for k in 0..gen.total_count() {
            assert_eq!(gen.successor(), gen.unrank(k));
        }
        assert!(gen.was_last());
        // wraps back to rank 0
        assert_eq!(gen.successor(), gen.unrank(0));
    }

    #[test]
    fn test_first_cycle_values() {
        let mut gen = CyclicPermutations::new(4, 3).unwrap();
        assert_eq!(gen.total_count(), 8);
        assert_eq!(gen.successor(), vec![0, 1, 2]);
        assert_eq!(gen.successor(), vec![0, 1, 3]);
        assert_eq!(gen.successor(), vec![0, 2, 1]);
        assert_eq!(gen.successor(), vec![0, 2, 3]);
        assert_eq!(gen.successor(), vec![0, 3, 1]);
        assert_eq!(gen.successor(), vec![0, 3, 2]);
        assert_eq!(gen.successor(), vec![1, 2, 3]);
        assert_eq!(gen.successor(), vec![1, 3, 2]);
        assert!(gen.was_last());
        assert_eq!(gen.successor(), vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(CyclicPermutations::new(3, 5).is_err());
        assert!(CyclicPermutations::new(3, -2).is_err());
    }
}
