use std::collections::BTreeMap;

use serde::Serialize;

use crate::records::{Category, RegistrationRecord, School};

use super::NA;

/// Per-category registration counts with school-tagged sub-counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct CategoryMetric {
    pub count: u64,
    pub soet: u64,
    pub sop: u64,
    pub soa: u64,
}

/// Per-event registration counts with a gender split, used for popularity
/// ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct EventPopularity {
    pub name: String,
    pub count: u64,
    pub male: u64,
    pub female: u64,
    pub other: u64,
}

/// Demographic breakdowns over a registration snapshot.
///
/// Unlike revenue, these counts are per registration row: team members have
/// their own rows and their own demographic attributes, so nothing is
/// deduplicated here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Demographics {
    /// Lower-cased gender string to count; missing genders bucket as `n/a`.
    /// Values sum to the snapshot length.
    pub gender_breakdown: BTreeMap<String, u64>,
    /// Department name to count; missing departments bucket as `N/A`.
    pub department_breakdown: BTreeMap<String, u64>,
    pub cultural: CategoryMetric,
    pub sports: CategoryMetric,
    pub technical: CategoryMetric,
    /// Sorted descending by count.
    pub event_popularity: Vec<EventPopularity>,
}

/// Computes all demographic breakdowns in a single pass over the snapshot.
pub fn compute_demographics(registrations: &[RegistrationRecord]) -> Demographics {
    let mut demo = Demographics::default();
    let mut popularity_order: Vec<String> = Vec::new();
    let mut popularity: std::collections::HashMap<String, EventPopularity> =
        std::collections::HashMap::new();

    for reg in registrations {
        let profile = reg.profile.as_ref();

        let gender = profile
            .and_then(|p| p.gender.as_deref())
            .map(str::to_lowercase)
            .unwrap_or_else(|| NA.to_lowercase());
        *demo.gender_breakdown.entry(gender.clone()).or_insert(0) += 1;

        let department = profile
            .and_then(|p| p.department.clone())
            .unwrap_or_else(|| NA.to_string());
        *demo.department_breakdown.entry(department).or_insert(0) += 1;

        if let Some(category) = reg.category() {
            let metric = match category {
                Category::Cultural => &mut demo.cultural,
                Category::Sports => &mut demo.sports,
                Category::Technical => &mut demo.technical,
            };
            metric.count += 1;
            match profile
                .and_then(|p| p.school.as_deref())
                .and_then(School::detect)
            {
                Some(School::Soet) => metric.soet += 1,
                Some(School::Sop) => metric.sop += 1,
                Some(School::Soa) => metric.soa += 1,
                None => {}
            }
        }

        let event_name = reg
            .event
            .as_ref()
            .and_then(|e| e.name.clone())
            .unwrap_or_else(|| NA.to_string());
        let entry = popularity.entry(event_name.clone()).or_insert_with(|| {
            popularity_order.push(event_name.clone());
            EventPopularity {
                name: event_name,
                count: 0,
                male: 0,
                female: 0,
                other: 0,
            }
        });
        entry.count += 1;
        match gender.as_str() {
            "male" => entry.male += 1,
            "female" => entry.female += 1,
            _ => entry.other += 1,
        }
    }

    // First-seen order, then a stable sort for the descending ranking.
    demo.event_popularity = popularity_order
        .into_iter()
        .filter_map(|name| popularity.remove(&name))
        .collect();
    demo.event_popularity.sort_by(|a, b| b.count.cmp(&a.count));

    demo
}
