//! Combinations: ascending `r`-subsets of distinct symbols.
//!
//! A combination is an arrangement whose symbols strictly increase, so each
//! `r`-subset of `0..n` appears exactly once. There are `nCr` of them, and
//! lexicographic order on the ascending representatives matches the usual
//! subset order: `[0,1,2] < [0,1,3] < ... < [n-r..n-1]`.
//!
//! # Unranking
//!
//! The combinatorial number system: the first element is found by
//! subtracting the sizes of the blocks of combinations that share a smaller
//! first element (each block a binomial coefficient of a shrunk
//! sub-problem), then the process repeats on the remainder for the next
//! position. The ascending constraint also collapses the successor's pivot
//! search to a single arithmetic bound check: position `i` can be raised
//! exactly when `current[i] < n - r + i`, because anything larger would
//! leave too few symbols to finish the suffix.

use crate::count;
use crate::error::Result;
use crate::generator::{Family, Generator};

/// Successor and unranking rules for ascending `r`-subsets of `0..n`.
///
/// The hooks never consult the availability pool: with symbols in ascending
/// order, membership is decidable arithmetically.
#[derive(Debug, Clone)]
pub struct CombinationFamily {
    n: i32,
    r: i32,
}

impl Family for CombinationFamily {
    fn raise(&self, current: &mut [i32], _available: &mut [i32], i: usize) -> bool {
        if current[i] < self.n - self.r + i as i32 {
            current[i] += 1;
            true
        } else {
            false
        }
    }

    fn refill(&self, current: &mut [i32], _available: &mut [i32], pivot: Option<usize>) {
        let start = match pivot {
            Some(i) => i + 1,
            None => {
                current[0] = 0;
                1
            }
        };
        for j in start..current.len() {
            current[j] = current[j - 1] + 1;
        }
    }

    fn unrank(&self, rank: i64) -> Vec<i32> {
        if self.r <= 0 {
            return Vec::new();
        }
        let len = self.r as usize;
        let mut out = vec![0i32; len];
        let mut k = rank;
        let mut n = (self.n - 1) as i64;
        let mut r = (self.r - 1) as i64;
        for i in 0..len {
            let mut step = 0i64;
            let mut block = count::binomial_raw(n, r);
            while k >= block && n - step > r {
                k -= block;
                step += 1;
                block = count::binomial_raw(n - step, r);
            }
            out[i] = if i == 0 {
                step as i32
            } else {
                out[i - 1] + 1 + step as i32
            };
            n -= step + 1;
            r -= 1;
        }
        out
    }
}

/// Lexicographic enumerator for `r`-combinations of `n` distinct symbols.
pub type Combinations = Generator<CombinationFamily>;

impl Generator<CombinationFamily> {
    /// Build an enumerator over the ascending `r`-subsets of `0..n`.
    ///
    /// Fails with [`Error::InvalidRange`](crate::Error::InvalidRange) when
    /// `r > n`, `r < 0`, or `n < 0`.
    pub fn new(n: i32, r: i32) -> Result<Self> {
        let total = count::combinations(n, r)?;
        Ok(Self::from_parts(
            CombinationFamily { n, r },
            vec![1; n.max(0) as usize],
            total,
        ))
    }

    /// Compute the combination at `rank` for an arbitrary shape, without
    /// building an enumerator.
    ///
    /// The shape is validated ([`Error::InvalidRange`](crate::Error::InvalidRange));
    /// the rank is not, under the same contract as
    /// [`unrank`](Generator::unrank).
    pub fn at(rank: i64, n: i32, r: i32) -> Result<Vec<i32>> {
        count::combinations(n, r)?;
        Ok(CombinationFamily { n, r }.unrank(rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_successor_ascends() {
        let mut gen = Combinations::new(7, 3).unwrap();
        assert_eq!(gen.total_count(), 35);
        assert_eq!(gen.successor(), vec![0, 1, 2]);
        assert_eq!(gen.successor(), vec![0, 1, 3]);
        let mut prev = vec![0, 1, 3];
        for _ in 2..35 {
            let next = gen.successor();
            assert!(prev < next);
            assert!(next.windows(2).all(|w| w[0] < w[1]));
            prev = next;
        }
        assert_eq!(prev, vec![4, 5, 6]);
        assert!(gen.was_last());
    }

    #[test]
    fn test_jump_then_successor() {
        let mut gen = Combinations::new(7, 3).unwrap();
        gen.jump_to(3);
        let direct = gen.unrank(3);
        assert_eq!(gen.successor(), direct);
        assert_eq!(direct, vec![0, 1, 5]);
    }

    #[test]
    fn test_unrank_endpoints() {
        let gen = Combinations::new(7, 3).unwrap();
        assert_eq!(gen.unrank(0), vec![0, 1, 2]);
        assert_eq!(gen.unrank(34), vec![4, 5, 6]);
    }

    #[test]
    fn test_at_matches_unrank() {
        let gen = Combinations::new(9, 4).unwrap();
        for k in 0..gen.total_count() {
            assert_eq!(Combinations::at(k, 9, 4).unwrap(), gen.unrank(k));
        }
        assert!(Combinations::at(0, 3, 5).is_err());
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            Combinations::new(3, 5),
            Err(Error::InvalidRange { n: 3, r: 5 })
        ));
        assert!(Combinations::new(3, -1).is_err());
    }

    #[test]
    fn test_empty_arrangement() {
        let mut gen = Combinations::new(3, 0).unwrap();
        assert_eq!(gen.total_count(), 1);
        assert_eq!(gen.successor(), Vec::<i32>::new());
    }
}
