use slcsp_model::{RateArea, ZipRateAreaRecord};

/// Distinct rate areas a ZIP belongs to, in first-seen table order.
///
/// An unknown ZIP yields an empty list.
pub fn resolve_rate_areas(zip: &str, zips: &[ZipRateAreaRecord]) -> Vec<RateArea> {
    let mut areas: Vec<RateArea> = Vec::new();
    for record in zips.iter().filter(|record| record.zipcode == zip) {
        if !areas.contains(&record.rate_area) {
            areas.push(record.rate_area.clone());
        }
    }
    areas
}
