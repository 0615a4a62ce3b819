//! # Ranked Combinatorial Arrangements
//!
//! *Every arrangement has an address.*
//!
//! ## Intuition First
//!
//! Imagine a phone book of every possible arrangement: all 60 ways to line
//! up 3 of 5 people, all 35 ways to pick 3 of 7 colors, all 90 ways to seat
//! 4 of 6 guests at a round table. The book is sorted, so each entry has a
//! page number. This crate is that phone book without the paper: it can
//! open the book to any page directly (unranking), flip to the next page in
//! constant-ish time (succession), and tell you how thick the book is
//! (counting), all without ever materializing the other pages.
//!
//! ## The Problem
//!
//! Generating arrangements one by one is easy; the hard part is the
//! *bijection* between arrangements and their positions:
//! - **Enumerate-to-index**: reaching rank $k$ by iterating costs $O(k)$,
//!   hopeless when counts reach billions.
//! - **Index arithmetic**: positional number systems with non-uniform bases
//!   (factorial, combinatorial, and their multiset generalizations) reach
//!   rank $k$ in $O(r)$, but the successor algorithm must agree with the
//!   same arithmetic digit for digit, or the two access paths drift apart.
//!
//! ## Historical Context
//!
//! ```text
//! 1888  Laisant     Factorial number system: integers <-> permutations
//! 1892  MacMahon    Necklace counting by divisor sums
//! 1927  Macaulay    Combinatorial number system for k-subsets
//! 1937  Polya       Systematic counting under rotation groups
//! 1960  Lehmer      "Teaching combinatorial tricks to a computer"
//! 2011  Knuth       TAOCP 4A: generating all tuples and permutations
//! ```
//!
//! ## Mathematical Formulation
//!
//! Each family fixes a set of arrangements $A$ and enumerates it in
//! lexicographic order, defining a bijection $\mathrm{rank}: A \to
//! \{0, \dots, |A|-1\}$. The operations are:
//! - `total_count()`: $|A|$.
//! - `unrank(k)`: $\mathrm{rank}^{-1}(k)$, computed digit by digit.
//! - `successor()`: the next arrangement in the order, cycling past the end.
//!
//! For circular families, $A$ contains one representative per rotation
//! class: the rotation that is lexicographically least.
//!
//! ## Complexity Analysis
//!
//! - **Succession**: amortized $O(r)$ per call (pivot scan plus refill).
//! - **Unranking**: $O(r)$ for distinct symbols, $O(r \cdot \sigma)$ counting
//!   calls for multisets over $\sigma$ symbol kinds.
//! - **Space**: one cursor of $O(r + \sigma)$ per generator; unranking
//!   allocates only its result and scratch.
//!
//! ## What Could Go Wrong
//!
//! 1. **Counts overflow**: $20!$ fits in an `i64`, $21!$ does not. The
//!    counting functions detect this and fail with [`Error::Overflow`]
//!    rather than wrapping.
//! 2. **Unranking is unchecked**: `unrank` skips range validation by
//!    contract and returns garbage for out-of-range ranks; `checked_unrank`
//!    is the validated door.
//! 3. **Cursors are not shareable**: a generator is one mutable cursor.
//!    Construct one per thread; only `unrank` is safe on a shared reference.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`Permutations`]**: `r`-permutations of `n` distinct symbols.
//! - **[`Combinations`]**: ascending `r`-subsets of `n` distinct symbols.
//! - **[`CyclicPermutations`]**: rotation classes of `r`-permutations.
//! - **[`MultisetPermutations`]**: permutations with per-symbol budgets.
//! - **[`CyclicMultisetPermutations`]**: rotation classes with budgets,
//!   by canonical filtering.
//! - **[`count`]**: the closed-form counting behind all of the above.
//!
//! ## References
//!
//! - Lehmer, D. H. (1960). "Teaching combinatorial tricks to a computer."
//! - Knuth, D. E. (2011). "The Art of Computer Programming, Vol. 4A."
//! - Ruskey, F. (2003). "Combinatorial Generation." (working notes)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combination;
pub mod count;
pub mod cyclic;
pub mod cyclic_multiset;
pub mod error;
pub mod generator;
pub mod multiset;
pub mod permutation;

pub use combination::Combinations;
pub use cyclic::CyclicPermutations;
pub use cyclic_multiset::CyclicMultisetPermutations;
pub use error::Error;
pub use generator::{Family, Generator};
pub use multiset::MultisetPermutations;
pub use permutation::Permutations;
