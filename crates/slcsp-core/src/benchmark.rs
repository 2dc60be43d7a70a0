use rust_decimal::{Decimal, RoundingStrategy};
use slcsp_model::{BenchmarkRate, PlanRecord, RateArea, UnresolvedReason};
use tracing::debug;

use crate::lookup::rates_in_area;
use crate::selector::nth_lowest;

/// Rank of the benchmark plan: second-lowest.
pub const BENCHMARK_RANK: usize = 2;

/// Round half-to-even to two places and always print two decimals.
pub fn format_rate(rate: Decimal) -> String {
    let mut rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded.to_string()
}

/// Second-lowest rate in `rate_area` among `plans`, formatted.
///
/// `plans` should already be narrowed to the benchmark tier.
pub fn benchmark_rate(rate_area: &RateArea, plans: &[PlanRecord]) -> BenchmarkRate {
    let rates = rates_in_area(rate_area, plans);
    match nth_lowest(BENCHMARK_RANK, &rates) {
        Some(rate) => BenchmarkRate::Rate(format_rate(rate)),
        None => {
            debug!(
                rate_area = %rate_area,
                available = rates.len(),
                "not enough rates for benchmark"
            );
            BenchmarkRate::Unresolved(UnresolvedReason::InsufficientRates {
                available: rates.len(),
            })
        }
    }
}
