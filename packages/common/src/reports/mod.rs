//! Pure aggregation and report generation over a registration snapshot.
//!
//! Every function here is synchronous, side-effect-free, and total: missing
//! nested fields degrade to `N/A`/`0` substitution, and the empty snapshot
//! produces valid (header-only or skeleton) output. Counters are local to a
//! single invocation, so repeated calls on the same snapshot are identical.

pub mod csv;
pub mod demographics;
pub mod nba;
pub mod participants;
pub mod payments;
pub mod revenue;

pub use csv::{Column, Row, escape_field, rows_to_csv};
pub use demographics::{CategoryMetric, Demographics, EventPopularity, compute_demographics};
pub use nba::{CategoryStats, category_stats, generate_nba_csv};
pub use participants::{
    INDIVIDUAL_COLUMNS, TEAM_COLUMNS, individual_participants_rows, team_participants_rows,
};
pub use payments::{PAYMENT_COLUMNS, payment_rows};
pub use revenue::{compute_revenue, payer_rows, revenue_by_event, revenue_by_mode};

use crate::records::{Category, RegistrationRecord};

/// The substitution value for missing string fields in report cells.
pub(crate) const NA: &str = "N/A";

/// Groups registrations by category (fixed `Category::ALL` order), then by
/// event id in first-seen order within each category.
///
/// Rows whose event is missing or whose category does not parse are
/// excluded; they have no place in a category-grouped report.
pub(crate) fn group_by_category_event(
    registrations: &[RegistrationRecord],
) -> Vec<(Category, Vec<Vec<&RegistrationRecord>>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let mut order: Vec<i32> = Vec::new();
            let mut groups: std::collections::HashMap<i32, Vec<&RegistrationRecord>> =
                std::collections::HashMap::new();
            for reg in registrations {
                if reg.category() != Some(category) {
                    continue;
                }
                let Some(event_id) = reg.event_id() else {
                    continue;
                };
                if !groups.contains_key(&event_id) {
                    order.push(event_id);
                }
                groups.entry(event_id).or_default().push(reg);
            }
            let event_groups = order
                .into_iter()
                .map(|id| groups.remove(&id).unwrap_or_default())
                .collect();
            (category, event_groups)
        })
        .collect()
}

/// Formats a fee/amount for report cells. Whole amounts print without a
/// fractional part (`250`, not `250.0`). Sums over an empty payer set can
/// produce `-0.0`, which must still render as `0`.
pub(crate) fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    format!("{amount}")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::records::{EventRecord, ProfileRecord, RegistrationRecord, TeamMemberRecord};
    use crate::status::{PaymentMode, RegistrationStatus};

    pub fn event(id: i32, name: &str, category: &str, subcategory: &str, fee: f64) -> EventRecord {
        EventRecord {
            id,
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            subcategory: Some(subcategory.to_string()),
            fee: Some(fee),
            min_team_size: Some(1),
            max_team_size: Some(6),
        }
    }

    pub fn profile(id: i32, name: &str) -> ProfileRecord {
        ProfileRecord {
            id,
            full_name: Some(name.to_string()),
            roll_number: Some(format!("R{id:04}")),
            college_email: Some(format!("{}@college.edu", name.to_lowercase().replace(' ', "."))),
            gender: Some("Male".to_string()),
            school: Some("SOET".to_string()),
            department: Some("CSE".to_string()),
            program: Some("B.Tech".to_string()),
            year_of_study: Some(2),
            phone: Some("9000000000".to_string()),
        }
    }

    pub fn member(profile_id: i32, name: &str) -> TeamMemberRecord {
        TeamMemberRecord {
            profile_id: Some(profile_id),
            name: Some(name.to_string()),
            email: Some(format!("{}@college.edu", name.to_lowercase().replace(' ', "."))),
            roll_number: Some(format!("R{profile_id:04}")),
            ..Default::default()
        }
    }

    pub fn registration(
        id: i32,
        event: EventRecord,
        profile: ProfileRecord,
        status: RegistrationStatus,
    ) -> RegistrationRecord {
        RegistrationRecord {
            id,
            status: Some(status),
            payment_mode: Some(PaymentMode::Cash),
            transaction_id: None,
            registered_at: Some(Utc.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap()),
            profile: Some(profile),
            event: Some(event),
            team_members: Vec::new(),
        }
    }

    pub fn leader(
        id: i32,
        event: EventRecord,
        profile: ProfileRecord,
        members: Vec<TeamMemberRecord>,
    ) -> RegistrationRecord {
        RegistrationRecord {
            team_members: members,
            ..registration(id, event, profile, RegistrationStatus::Confirmed)
        }
    }
}
