//! Closed-form counting of combinatorial arrangements.
//!
//! Everything the enumeration families need to know about "how many" lives
//! here: falling factorials for permutations, binomial coefficients for
//! combinations, and their generalizations to multisets (frequency vectors)
//! and to rotation classes (circular arrangements).
//!
//! # Theory
//!
//! For a set of $n$ distinct symbols:
//! - $nPr = n \cdot (n-1) \cdots (n-r+1)$ linear arrangements of length $r$.
//! - $nCr = nPr / r!$ ascending arrangements (subsets).
//! - $nCPr = nPr / r$ rotation classes of length $r$ (every class has exactly
//!   $r$ members, because distinct symbols admit no periodic arrangement).
//!
//! With repeated symbols the rotation classes are no longer uniform: a
//! periodic arrangement such as `[0,1,0,1]` has only 2 distinct rotations.
//! [`cyclic_multiset_permutations`] therefore splits the arrangements by
//! their smallest period `d` (necessarily a divisor of `r`), counts the
//! length-`d` patterns whose `r/d`-fold repetition fits the per-symbol
//! budget, removes patterns already attributed to proper divisors of `d`,
//! and adds `block / d` classes per divisor.
//!
//! # Overflow
//!
//! The public functions use checked `i64` arithmetic and fail with
//! [`Error::Overflow`] instead of wrapping. Detection is conservative: the
//! binomial routine multiplies before it divides, so an intermediate product
//! may overflow even when the final coefficient would fit. Callers needing
//! counts near `i64::MAX` must bound their inputs.

use crate::error::{Error, Result};

#[inline]
fn check_shape(n: i64, r: i64) -> Result<()> {
    if r > n || r < 0 || n < 0 {
        return Err(Error::InvalidRange { n, r });
    }
    Ok(())
}

fn clamp(frequency: &[i32]) -> Vec<i32> {
    frequency.iter().map(|&f| f.max(0)).collect()
}

fn clamped_sum(frequency: &[i32]) -> i64 {
    frequency.iter().map(|&f| f.max(0) as i64).sum()
}

/// Number of `r`-permutations of `n` distinct symbols (nPr).
///
/// Computed as the falling factorial `(n-r+1) * ... * n`.
pub fn permutations(n: i32, r: i32) -> Result<i64> {
    let (n, r) = (n as i64, r as i64);
    check_shape(n, r)?;
    falling(n, r).ok_or(Error::Overflow { n, r })
}

/// Number of `r`-combinations of `n` distinct symbols (nCr).
pub fn combinations(n: i32, r: i32) -> Result<i64> {
    let (n, r) = (n as i64, r as i64);
    check_shape(n, r)?;
    binomial(n, r).ok_or(Error::Overflow { n, r })
}

/// Number of circular `r`-permutations of `n` distinct symbols (nCPr).
///
/// Each rotation class of `r` distinct symbols has exactly `r` linear
/// representatives, so this is `nPr / r` (and 1 when `r == 0`, the empty
/// arrangement).
pub fn cyclic_permutations(n: i32, r: i32) -> Result<i64> {
    check_shape(n as i64, r as i64)?;
    if r == 0 {
        return Ok(1);
    }
    Ok(permutations(n, r)? / r as i64)
}

/// Number of `r`-permutations of a multiset given by `frequency` (nPr over
/// a frequency vector).
///
/// `frequency[s]` is the maximum multiplicity of symbol `s`; the set
/// cardinality `n` is the sum of the entries. Negative entries are treated
/// as 0 (the symbol is excluded). That clamping is policy, not an error.
pub fn multiset_permutations(frequency: &[i32], r: i32) -> Result<i64> {
    let clamped = clamp(frequency);
    let n: i64 = clamped.iter().map(|&f| f as i64).sum();
    check_shape(n, r as i64)?;
    multiset(&clamped, 0, n, r as i64).ok_or(Error::Overflow { n, r: r as i64 })
}

/// Number of circular `r`-permutations of a multiset given by `frequency`
/// (nCPr over a frequency vector), via the divisor-sum identity described
/// in the module docs.
///
/// Negative entries are clamped to 0, as in [`multiset_permutations`].
pub fn cyclic_multiset_permutations(frequency: &[i32], r: i32) -> Result<i64> {
    if r == 0 {
        return Ok(1);
    }
    let clamped = clamp(frequency);
    let n: i64 = clamped.iter().map(|&f| f as i64).sum();
    check_shape(n, r as i64)?;

    let divs = divisors(r)?;
    // homogeneous[d] = number of length-d patterns whose r/d-fold repetition
    // is feasible and whose smallest period is exactly d
    let mut homogeneous = vec![0i64; r as usize + 1];
    let mut total = 0i64;

    for &d in &divs {
        let budget: Vec<i32> = clamped.iter().map(|&f| f * d / r).collect();
        let m = clamped_sum(&budget);
        if (d as i64) > m {
            continue; // no pattern of period d fits the per-symbol budget
        }
        let mut block =
            multiset(&budget, 0, m, d as i64).ok_or(Error::Overflow { n, r: r as i64 })?;
        for &dd in &divs {
            if dd < d && d % dd == 0 {
                block -= homogeneous[dd as usize];
            }
        }
        homogeneous[d as usize] = block;
        total = total
            .checked_add(block / d as i64)
            .ok_or(Error::Overflow { n, r: r as i64 })?;
    }
    Ok(total)
}

/// All divisors of `n >= 1`, ascending, including 1 and `n` itself.
///
/// Trial division up to the square root; the paired quotients are merged in
/// reverse to keep the result sorted.
pub fn divisors(n: i32) -> Result<Vec<i32>> {
    if n < 1 {
        return Err(Error::InvalidRange {
            n: n as i64,
            r: 1,
        });
    }
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1i32;
    while (d as i64) * (d as i64) <= n as i64 {
        if n % d == 0 {
            low.push(d);
            if d != n / d {
                high.push(n / d);
            }
        }
        d += 1;
    }
    high.reverse();
    low.extend(high);
    Ok(low)
}

/// Falling factorial `(n-r+1) * ... * n`. `None` on overflow, 0 when the
/// shape is infeasible.
fn falling(n: i64, r: i64) -> Option<i64> {
    if r < 0 || n < 0 || r > n {
        return Some(0);
    }
    let mut acc = 1i64;
    for p in (n - r + 1)..=n {
        acc = acc.checked_mul(p)?;
    }
    Some(acc)
}

/// Binomial coefficient by multiply-and-divide-as-you-go: after each
/// multiplication, running factorial terms are divided out as soon as they
/// divide evenly, keeping the accumulator close to the final value.
fn binomial(n: i64, r: i64) -> Option<i64> {
    if r < 0 || n < 0 || r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    let mut acc = 1i64;
    let mut divisor = 1i64;
    for i in (n - r + 1)..=n {
        acc = acc.checked_mul(i)?;
        while divisor <= r && acc % divisor == 0 {
            acc /= divisor;
            divisor += 1;
        }
    }
    Some(acc)
}

/// Multiset permutation count: sum over the number of copies of symbol `i`
/// actually used, of `C(r, used)` placements times the arrangements of the
/// remaining symbols in the remaining positions.
///
/// `n` is the total multiplicity of symbols at index `>= i`.
fn multiset(frequency: &[i32], i: usize, n: i64, r: i64) -> Option<i64> {
    if r == 0 {
        return Some(1);
    }
    let mut total = 0i64;
    let rest = n - frequency[i] as i64;
    let mut used = (frequency[i] as i64).min(r);
    while used >= 0 && rest >= r - used {
        let placements = binomial(r, used)?;
        let tail = multiset(frequency, i + 1, rest, r - used)?;
        total = total.checked_add(placements.checked_mul(tail)?)?;
        used -= 1;
    }
    Some(total)
}

/// Unchecked falling factorial for unranking block arithmetic; saturates at
/// `i64::MAX` instead of erroring. Meaningless for infeasible shapes.
pub(crate) fn falling_raw(n: i64, r: i64) -> i64 {
    falling(n, r).unwrap_or(i64::MAX)
}

/// Unchecked binomial coefficient for unranking block arithmetic; saturates
/// at `i64::MAX` instead of erroring. 0 for infeasible shapes.
pub(crate) fn binomial_raw(n: i64, r: i64) -> i64 {
    binomial(n, r).unwrap_or(i64::MAX)
}

/// Unchecked multiset permutation count for unranking block arithmetic.
/// Entries of `frequency` must be non-negative.
pub(crate) fn multiset_raw(frequency: &[i32], r: i32) -> i64 {
    let n: i64 = frequency.iter().map(|&f| f as i64).sum();
    if r < 0 || r as i64 > n {
        return 0;
    }
    multiset(frequency, 0, n, r as i64).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_counts() {
        assert_eq!(permutations(5, 3).unwrap(), 60);
        assert_eq!(permutations(5, 0).unwrap(), 1);
        assert_eq!(permutations(0, 0).unwrap(), 1);
        assert_eq!(permutations(20, 20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_combination_counts() {
        assert_eq!(combinations(7, 3).unwrap(), 35);
        assert_eq!(combinations(7, 0).unwrap(), 1);
        assert_eq!(combinations(7, 7).unwrap(), 1);
        assert_eq!(combinations(52, 5).unwrap(), 2_598_960);
    }

    #[test]
    fn test_cyclic_counts() {
        assert_eq!(cyclic_permutations(6, 4).unwrap(), 90);
        assert_eq!(cyclic_permutations(6, 0).unwrap(), 1);
        // full-length circular permutations: (n-1)!
        assert_eq!(cyclic_permutations(5, 5).unwrap(), 24);
    }

    #[test]
    fn test_multiset_counts() {
        assert_eq!(multiset_permutations(&[3, 2, 1], 4).unwrap(), 38);
        assert_eq!(multiset_permutations(&[1, 1, 1], 3).unwrap(), 6);
        assert_eq!(multiset_permutations(&[3, 2, 1], 0).unwrap(), 1);
        // distinct symbols reduce to the falling factorial
        assert_eq!(
            multiset_permutations(&[1, 1, 1, 1, 1], 3).unwrap(),
            permutations(5, 3).unwrap()
        );
    }

    #[test]
    fn test_cyclic_multiset_counts() {
        assert_eq!(cyclic_multiset_permutations(&[3, 3, 1], 3).unwrap(), 8);
        assert_eq!(cyclic_multiset_permutations(&[3, 3, 1], 0).unwrap(), 1);
        // distinct symbols agree with the scalar formula
        assert_eq!(
            cyclic_multiset_permutations(&[1, 1, 1, 1, 1, 1], 4).unwrap(),
            cyclic_permutations(6, 4).unwrap()
        );
        // two symbols, two copies each: the classes are 0011 and 0101
        assert_eq!(cyclic_multiset_permutations(&[2, 2], 4).unwrap(), 2);
    }

    #[test]
    fn test_negative_frequencies_clamp_to_zero() {
        assert_eq!(
            multiset_permutations(&[3, -2, 1], 3).unwrap(),
            multiset_permutations(&[3, 0, 1], 3).unwrap()
        );
        assert_eq!(
            cyclic_multiset_permutations(&[2, -7, 2], 4).unwrap(),
            cyclic_multiset_permutations(&[2, 0, 2], 4).unwrap()
        );
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            combinations(3, 5),
            Err(Error::InvalidRange { n: 3, r: 5 })
        ));
        assert!(matches!(permutations(5, -1), Err(Error::InvalidRange { .. })));
        assert!(matches!(permutations(-1, 0), Err(Error::InvalidRange { .. })));
        assert!(matches!(
            multiset_permutations(&[1, 1], 3),
            Err(Error::InvalidRange { n: 2, r: 3 })
        ));
        // negative entries vanish before the range check
        assert!(matches!(
            multiset_permutations(&[2, -9], 3),
            Err(Error::InvalidRange { n: 2, r: 3 })
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            permutations(21, 21),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(permutations(20, 20).unwrap() % 1000, 0);
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(1).unwrap(), vec![1]);
        assert_eq!(divisors(9).unwrap(), vec![1, 3, 9]);
        assert_eq!(divisors(7).unwrap(), vec![1, 7]);
        assert!(divisors(0).is_err());
    }
}
