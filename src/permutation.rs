//! Linear permutations of distinct symbols.
//!
//! Arrangements of `r` symbols drawn without repetition from `0..n`, in
//! lexicographic order. There are `nPr = n * (n-1) * ... * (n-r+1)` of them.
//!
//! # Unranking
//!
//! Ranks map to permutations through the factorial number system: with a
//! pool of unused symbols kept in ascending order, the rank is repeatedly
//! divided by the size of the block of permutations sharing a prefix. The
//! quotient picks the pool index for the next position; the chosen symbol is
//! removed from the pool (preserving order) and the remainder carries to the
//! next position. Each digit therefore has a shrinking base, `n`, `n-1`, ...
//! down to `n-r+1`.

use crate::count;
use crate::error::Result;
use crate::generator::{Family, Generator};

/// Successor and unranking rules for `r`-permutations of `0..n` without
/// repetition.
#[derive(Debug, Clone)]
pub struct PermutationFamily {
    pub(crate) n: i32,
    pub(crate) r: i32,
}

impl Family for PermutationFamily {
    fn raise(&self, current: &mut [i32], available: &mut [i32], i: usize) -> bool {
        let at = current[i];
        // smallest unused symbol greater than the one at i
        for f in (at + 1)..self.n {
            if available[f as usize] == 1 {
                current[i] = f;
                available[f as usize] -= 1;
                break;
            }
        }
        // the displaced symbol is free again either way
        available[at as usize] += 1;
        current[i] != at
    }

    fn refill(&self, current: &mut [i32], available: &mut [i32], pivot: Option<usize>) {
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
        let len = self.r.max(0) as usize;
        let mut out = Vec::with_capacity(len);
        let mut pool: Vec<i32> = (0..self.n).collect();
        let mut block = count::falling_raw(self.n as i64, self.r as i64);
        let mut k = rank;
        for i in 0..len {
            block /= (self.n - i as i32) as i64;
            let mut at = (k / block) as usize;
            k %= block;
            if at >= pool.len() {
                at = pool.len() - 1; // out-of-range rank: stay in bounds
            }
            out.push(pool.remove(at));
        }
        out
    }
}

/// Lexicographic enumerator for `r`-permutations of `n` distinct symbols.
pub type Permutations = Generator<PermutationFamily>;

impl Generator<PermutationFamily> {
    /// Build an enumerator over the `r`-permutations of `0..n`.
    ///
    /// Fails with [`Error::InvalidRange`](crate::Error::InvalidRange) when
    /// `r > n`, `r < 0`, or `n < 0`, and with
    /// [`Error::Overflow`](crate::Error::Overflow) when `nPr` exceeds `i64`.
    pub fn new(n: i32, r: i32) -> Result<Self> {
        let total = count::permutations(n, r)?;
        Ok(Self::from_parts(
            PermutationFamily { n, r },
            vec![1; n.max(0) as usize],
            total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrank_endpoints() {
        let gen = Permutations::new(5, 3).unwrap();
        assert_eq!(gen.total_count(), 60);
        assert_eq!(gen.unrank(0), vec![0, 1, 2]);
        assert_eq!(gen.unrank(59), vec![4, 3, 2]);
    }

    #[test]
    fn test_successor_sequence() {
        let mut gen = Permutations::new(5, 3).unwrap();
        assert_eq!(gen.successor(), vec![0, 1, 2]);
        assert_eq!(gen.successor(), vec![0, 1, 3]);
        assert_eq!(gen.successor(), vec![0, 1, 4]);
        assert_eq!(gen.successor(), vec![0, 2, 1]);
        assert_eq!(gen.next_rank(), 4);
    }

    #[test]
    fn test_wrap_and_was_last() {
        let mut gen = Permutations::new(5, 3).unwrap();
        gen.jump_to(59);
        assert!(!gen.was_last());
        assert_eq!(gen.successor(), vec![4, 3, 2]);
        assert!(gen.was_last());
        assert!(!gen.was_last()); // reading cleared it
        assert_eq!(gen.successor(), vec![0, 1, 2]);
    }

    #[test]
    fn test_jump_to_out_of_range_is_ignored() {
        let mut gen = Permutations::new(5, 3).unwrap();
        gen.jump_to(17);
        gen.jump_to(-1);
        assert_eq!(gen.next_rank(), 17);
        gen.jump_to(60);
        assert_eq!(gen.next_rank(), 17);
        assert_eq!(gen.successor(), gen.unrank(17));
    }

    #[test]
    fn test_checked_unrank() {
        let gen = Permutations::new(4, 2).unwrap();
        assert_eq!(gen.checked_unrank(0).unwrap(), vec![0, 1]);
        assert!(gen.checked_unrank(12).is_err());
        assert!(gen.checked_unrank(-1).is_err());
    }

    #[test]
    fn test_empty_arrangement() {
        let mut gen = Permutations::new(4, 0).unwrap();
        assert_eq!(gen.total_count(), 1);
        assert_eq!(gen.successor(), Vec::<i32>::new());
        assert!(gen.was_last());
        assert_eq!(gen.successor(), Vec::<i32>::new());
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(Permutations::new(5, -1).is_err());
        assert!(Permutations::new(3, 5).is_err());
        assert!(Permutations::new(-2, 1).is_err());
    }
}
