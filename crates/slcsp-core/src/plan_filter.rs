use slcsp_model::PlanRecord;

/// Plans whose metal level is exactly `metal` (case-sensitive).
pub fn filter_by_metal(metal: &str, plans: &[PlanRecord]) -> Vec<PlanRecord> {
    plans
        .iter()
        .filter(|plan| plan.metal_level == metal)
        .cloned()
        .collect()
}
