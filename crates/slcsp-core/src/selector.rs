//! Ranked selection over rate lists.
//!
//! Ranking is positional: equal rates are not collapsed, so each plan
//! occupies its own rank. Two plans at 40.00 have a lowest of 40.00 and a
//! second-lowest of 40.00.

use rust_decimal::Decimal;

/// The `n`-th smallest rate (1 = lowest), counting duplicates.
///
/// Returns `None` when `n` is zero or exceeds the number of rates. The
/// caller's slice is left untouched.
pub fn nth_lowest(n: usize, rates: &[Decimal]) -> Option<Decimal> {
    let index = n.checked_sub(1)?;
    let mut sorted = rates.to_vec();
    sorted.sort_unstable();
    sorted.get(index).copied()
}
