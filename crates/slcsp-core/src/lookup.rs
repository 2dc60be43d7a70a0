use rust_decimal::Decimal;
use slcsp_model::{PlanRecord, RateArea};

/// Every rate offered in `rate_area`, duplicates kept, in table order.
///
/// `plans` should already be narrowed to one metal tier.
pub fn rates_in_area(rate_area: &RateArea, plans: &[PlanRecord]) -> Vec<Decimal> {
    plans
        .iter()
        .filter(|plan| &plan.rate_area == rate_area)
        .map(|plan| plan.rate)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(state: &str, area: u32, rate: i64) -> PlanRecord {
        PlanRecord::new(RateArea::new(state, area), "Silver", Decimal::from(rate))
    }

    fn plans() -> Vec<PlanRecord> {
        vec![
            plan("OK", 1, 10),
            plan("OK", 2, 20),
            plan("OK", 5, 5),
            plan("IL", 5, 15),
            plan("IL", 5, 25),
        ]
    }

    #[test]
    fn returns_multiple_rates() {
        assert_eq!(
            rates_in_area(&RateArea::new("IL", "5"), &plans()),
            vec![Decimal::from(15), Decimal::from(25)]
        );
    }

    #[test]
    fn returns_a_single_rate() {
        assert_eq!(
            rates_in_area(&RateArea::new("OK", "2"), &plans()),
            vec![Decimal::from(20)]
        );
    }

    #[test]
    fn unknown_area_is_empty() {
        assert!(rates_in_area(&RateArea::new("IL", "1"), &plans()).is_empty());
    }

    #[test]
    fn keeps_duplicate_rates() {
        let plans = vec![plan("AR", 2, 40), plan("AR", 2, 40)];
        assert_eq!(rates_in_area(&RateArea::new("AR", 2), &plans).len(), 2);
    }
}
