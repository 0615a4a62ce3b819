//! Shared cursor machinery for lexicographic enumeration.
//!
//! Every arrangement family obeys the same contract: arrangements of a fixed
//! length `r` over the symbols `0..n`, ordered lexicographically, indexed by
//! a 0-based rank, with the successor of the last arrangement wrapping back
//! to the first. [`Generator`] owns the cursor state and drives the shared
//! successor algorithm; a [`Family`] supplies the three operations that
//! differ between families.
//!
//! # Theory
//!
//! The successor of an arrangement is found in two phases:
//!
//! 1. *Pivot scan.* Walk positions from the last toward the first, asking the
//!    family to replace the symbol there with the smallest admissible symbol
//!    strictly greater than it ([`Family::raise`]). The first position where
//!    that succeeds is the pivot.
//! 2. *Refill.* Fill every position after the pivot with the smallest
//!    feasible completion ([`Family::refill`]). If no pivot exists the
//!    previous arrangement was the lexicographic maximum, and the refill
//!    resets the whole arrangement to rank 0.
//!
//! Because phase 1 changes exactly one position to the nearest larger
//! admissible symbol and phase 2 minimizes the suffix, consecutive calls emit
//! arrangements in strictly increasing lexicographic order, visiting each
//! rank exactly once per cycle.
//!
//! Direct access by rank ([`Generator::unrank`]) bypasses the cursor
//! entirely; each family implements it with positional number systems
//! (factorial, combinatorial, or their multiset generalizations) in `O(r)`
//! or `O(r * symbols)` time.

use crate::error::{Error, Result};

/// The operations that distinguish one arrangement family from another.
///
/// `current` is the arrangement being mutated in place and `available` the
/// remaining multiplicity of each symbol. Implementations must keep the two
/// consistent on every exit path that reports a change.
pub trait Family {
    /// Try to replace `current[i]` with the smallest admissible symbol
    /// strictly greater than it, honoring `available` and leaving enough
    /// symbols to fill the suffix. Returns true if the position changed.
    fn raise(&self, current: &mut [i32], available: &mut [i32], i: usize) -> bool;

    /// Fill every position after `pivot` with the lexicographically smallest
    /// feasible completion, consuming from `available`. `None` means no
    /// position could be raised: reset the entire arrangement to rank 0.
    fn refill(&self, current: &mut [i32], available: &mut [i32], pivot: Option<usize>);

    /// Compute the arrangement at `rank` directly, without cursor state.
    ///
    /// No range validation is performed; see [`Generator::unrank`].
    fn unrank(&self, rank: i64) -> Vec<i32>;
}

/// A cycling lexicographic enumerator over one arrangement family.
///
/// The cursor is a single-owner mutable state: callers needing concurrent
/// enumeration construct one generator per thread (construction is cheap).
/// Only [`Generator::unrank`] and [`Generator::checked_unrank`] leave the
/// cursor untouched and take `&self`.
pub struct Generator<F: Family> {
    family: F,
    /// Maximum multiplicity per symbol; immutable after construction.
    frequency: Vec<i32>,
    total: i64,
    next_rank: i64,
    was_last: bool,
    current: Vec<i32>,
    available: Vec<i32>,
}

impl<F: Family> std::fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("total", &self.total)
            .field("next_rank", &self.next_rank)
            .field("current", &self.current)
            .finish()
    }
}

impl<F: Family> Generator<F> {
    /// Assemble a generator with its cursor parked so that the first
    /// [`successor`](Self::successor) call produces rank 0: the current
    /// arrangement is the lexicographic maximum (rank `total - 1`).
    pub(crate) fn from_parts(family: F, frequency: Vec<i32>, total: i64) -> Self {
        let current = family.unrank(total - 1);
        let mut available = frequency.clone();
        for &s in &current {
            available[s as usize] -= 1;
        }
        Self {
            family,
            frequency,
            total,
            next_rank: 0,
            was_last: false,
            current,
            available,
        }
    }

    /// Total number of arrangements in this family; fixed at construction.
    #[must_use]
    pub fn total_count(&self) -> i64 {
        self.total
    }

    /// Rank of the arrangement the next [`successor`](Self::successor) call
    /// will produce.
    #[must_use]
    pub fn next_rank(&self) -> i64 {
        self.next_rank
    }

    /// True exactly once, immediately after a successor call produced the
    /// arrangement at rank `total_count() - 1`.
    ///
    /// Reading clears the flag: two consecutive calls with no intervening
    /// successor return true then false.
    pub fn was_last(&mut self) -> bool {
        std::mem::take(&mut self.was_last)
    }

    /// Re-point the cursor so the next [`successor`](Self::successor) call
    /// produces the arrangement at `rank`.
    ///
    /// A rank outside `[0, total_count() - 1]` is silently ignored; nothing
    /// is mutated. This deliberately differs in strictness from
    /// [`unrank`](Self::unrank).
    pub fn jump_to(&mut self, rank: i64) {
        if rank < 0 || rank >= self.total {
            return;
        }
        self.next_rank = rank;
        let prev = if rank == 0 { self.total - 1 } else { rank - 1 };
        self.current = self.family.unrank(prev);
        self.available.copy_from_slice(&self.frequency);
        for &s in &self.current {
            self.available[s as usize] -= 1;
        }
    }

    /// Produce the lexicographic successor of the last produced arrangement,
    /// wrapping to rank 0 after the maximum.
    pub fn successor(&mut self) -> Vec<i32> {
        self.next_rank += 1;
        if self.next_rank == self.total {
            self.next_rank = 0;
        }
        self.was_last = self.next_rank == 0;

        if self.current.is_empty() {
            return Vec::new();
        }

        let mut pivot = None;
        for i in (0..self.current.len()).rev() {
            if self.family.raise(&mut self.current, &mut self.available, i) {
                pivot = Some(i);
                break;
            }
        }
        self.family
            .refill(&mut self.current, &mut self.available, pivot);

        self.current.clone()
    }

    /// Compute the arrangement at `rank` without touching the cursor.
    ///
    /// No range check is performed, keeping the per-position cost free of an
    /// extra branch; a rank outside `[0, total_count() - 1]` yields a
    /// meaningless (but well-formed, panic-free) arrangement. Use
    /// [`checked_unrank`](Self::checked_unrank) for untrusted ranks.
    #[must_use]
    pub fn unrank(&self, rank: i64) -> Vec<i32> {
        self.family.unrank(rank)
    }

    /// Range-validated variant of [`unrank`](Self::unrank).
    pub fn checked_unrank(&self, rank: i64) -> Result<Vec<i32>> {
        if rank < 0 || rank >= self.total {
            return Err(Error::RankOutOfRange(rank));
        }
        Ok(self.family.unrank(rank))
    }
}
