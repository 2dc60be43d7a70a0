//! Per-ZIP benchmark computation over fully loaded tables.

use slcsp_model::{
    BenchmarkRate, MetalLevel, PlanRecord, TargetTable, UnresolvedReason, ZipRateAreaRecord,
};
use tracing::{debug, info_span};

use crate::benchmark::benchmark_rate;
use crate::plan_filter::filter_by_metal;
use crate::resolver::resolve_rate_areas;

/// Outcome counts for one computation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rows: usize,
    pub resolved: usize,
    pub no_rate_area: usize,
    pub ambiguous: usize,
    pub insufficient: usize,
}

impl RunStats {
    pub fn from_rates(rates: &[BenchmarkRate]) -> Self {
        let mut stats = Self {
            rows: rates.len(),
            ..Self::default()
        };
        for rate in rates {
            match rate {
                BenchmarkRate::Rate(_) => stats.resolved += 1,
                BenchmarkRate::Unresolved(UnresolvedReason::NoRateArea) => stats.no_rate_area += 1,
                BenchmarkRate::Unresolved(UnresolvedReason::AmbiguousRateArea { .. }) => {
                    stats.ambiguous += 1;
                }
                BenchmarkRate::Unresolved(UnresolvedReason::InsufficientRates { .. }) => {
                    stats.insufficient += 1;
                }
            }
        }
        stats
    }

    pub fn unresolved(&self) -> usize {
        self.rows - self.resolved
    }
}

/// Benchmark for one ZIP against plans already narrowed to one tier.
///
/// Only a ZIP with exactly one distinct rate area gets a rate.
pub fn rate_for_zip(
    zip: &str,
    tier_plans: &[PlanRecord],
    zips: &[ZipRateAreaRecord],
) -> BenchmarkRate {
    let areas = resolve_rate_areas(zip, zips);
    match areas.as_slice() {
        [area] => {
            let rate = benchmark_rate(area, tier_plans);
            debug!(zip, rate_area = %area, rate = rate.as_field(), "resolved");
            rate
        }
        [] => {
            debug!(zip, "no rate area");
            BenchmarkRate::Unresolved(UnresolvedReason::NoRateArea)
        }
        many => {
            debug!(zip, count = many.len(), "ambiguous rate area");
            BenchmarkRate::Unresolved(UnresolvedReason::AmbiguousRateArea { count: many.len() })
        }
    }
}

/// One outcome per ZIP, in input order. Duplicate ZIPs are computed again.
pub fn compute_rates_for_zips<'a, I>(
    zipcodes: I,
    plans: &[PlanRecord],
    zips: &[ZipRateAreaRecord],
    metal: MetalLevel,
) -> Vec<BenchmarkRate>
where
    I: IntoIterator<Item = &'a str>,
{
    let tier_plans = filter_by_metal(metal.as_str(), plans);
    debug!(metal = %metal, plans = tier_plans.len(), "filtered plans by metal level");
    zipcodes
        .into_iter()
        .map(|zip| rate_for_zip(zip, &tier_plans, zips))
        .collect()
}

/// Benchmark rates for every row of the target list, in row order.
pub fn compute_rates(
    targets: &TargetTable,
    plans: &[PlanRecord],
    zips: &[ZipRateAreaRecord],
    metal: MetalLevel,
) -> Vec<BenchmarkRate> {
    let span = info_span!("compute", metal = %metal, rows = targets.len());
    let _guard = span.enter();
    compute_rates_for_zips(targets.zipcodes(), plans, zips, metal)
}
