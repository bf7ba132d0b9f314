//! Assembles the in-memory registration snapshot that the aggregation and
//! report code in `common` consumes.
//!
//! Registrations are fetched with keyset pagination and joined in batches;
//! stored vocabulary strings parse tolerantly, so an unknown status or
//! payment mode degrades to `None` instead of failing the whole snapshot.

use std::collections::HashMap;

use common::{
    EventRecord, PaymentMode, ProfileRecord, RegistrationRecord, RegistrationStatus,
    TeamMemberRecord,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::instrument;

const PAGE_SIZE: u64 = 1000;
/// Caps snapshot size so a runaway table cannot exhaust memory.
const MAX_ROWS: usize = 50_000;

use crate::entity::{event, profile, registration, team_member};

fn parse_status(s: &str) -> Option<RegistrationStatus> {
    s.parse().ok()
}

fn parse_mode(s: &str) -> Option<PaymentMode> {
    s.parse().ok()
}

fn event_record(m: event::Model) -> EventRecord {
    EventRecord {
        id: m.id,
        name: Some(m.name),
        category: Some(m.category),
        subcategory: Some(m.subcategory),
        fee: m.fee,
        min_team_size: m.min_team_size,
        max_team_size: m.max_team_size,
    }
}

fn profile_record(m: profile::Model) -> ProfileRecord {
    ProfileRecord {
        id: m.id,
        full_name: m.full_name,
        roll_number: m.roll_number,
        college_email: m.college_email,
        gender: m.gender,
        school: m.school,
        department: m.department,
        program: m.program,
        year_of_study: m.year_of_study,
        phone: m.phone,
    }
}

fn member_record(m: team_member::Model) -> TeamMemberRecord {
    TeamMemberRecord {
        profile_id: m.profile_id,
        name: m.name,
        email: m.email,
        college_email: m.college_email,
        roll_number: m.roll_number,
        gender: m.gender,
        school: m.school,
        department: m.department,
        year_of_study: m.year_of_study,
        phone: m.phone,
    }
}

/// Groups member entries under their leader's registration id, preserving
/// fetch order within each team.
fn group_members(pairs: Vec<(i32, TeamMemberRecord)>) -> HashMap<i32, Vec<TeamMemberRecord>> {
    let mut grouped: HashMap<i32, Vec<TeamMemberRecord>> = HashMap::new();
    for (registration_id, member) in pairs {
        grouped.entry(registration_id).or_default().push(member);
    }
    grouped
}

/// Loads the full registration snapshot, joined with events, profiles, and
/// team member lists.
#[instrument(skip(db))]
pub async fn load_registrations(db: &DatabaseConnection) -> Result<Vec<RegistrationRecord>, DbErr> {
    let mut rows: Vec<registration::Model> = Vec::new();
    let mut last_id = 0;
    loop {
        let batch = registration::Entity::find()
            .filter(registration::Column::Id.gt(last_id))
            .order_by_asc(registration::Column::Id)
            .limit(PAGE_SIZE)
            .all(db)
            .await?;
        let full_page = batch.len() as u64 == PAGE_SIZE;
        if let Some(last) = batch.last() {
            last_id = last.id;
        }
        rows.extend(batch);
        if !full_page {
            break;
        }
        if rows.len() >= MAX_ROWS {
            tracing::warn!(rows = rows.len(), "registration snapshot hit the row cap");
            break;
        }
    }

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut event_ids: Vec<i32> = rows.iter().map(|r| r.event_id).collect();
    event_ids.sort_unstable();
    event_ids.dedup();
    let events: HashMap<i32, EventRecord> = event::Entity::find()
        .filter(event::Column::Id.is_in(event_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, event_record(m)))
        .collect();

    let mut profile_ids: Vec<i32> = rows.iter().map(|r| r.profile_id).collect();
    profile_ids.sort_unstable();
    profile_ids.dedup();
    let profiles: HashMap<i32, ProfileRecord> = profile::Entity::find()
        .filter(profile::Column::Id.is_in(profile_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, profile_record(m)))
        .collect();

    let registration_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    let member_pairs: Vec<(i32, TeamMemberRecord)> = team_member::Entity::find()
        .filter(team_member::Column::RegistrationId.is_in(registration_ids))
        .order_by_asc(team_member::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.registration_id, member_record(m)))
        .collect();
    let mut members = group_members(member_pairs);

    Ok(rows
        .into_iter()
        .map(|row| RegistrationRecord {
            id: row.id,
            status: parse_status(&row.status),
            payment_mode: row.payment_mode.as_deref().and_then(parse_mode),
            transaction_id: row.transaction_id,
            registered_at: Some(row.created_at),
            profile: profiles.get(&row.profile_id).cloned(),
            event: events.get(&row.event_id).cloned(),
            team_members: members.remove(&row.id).unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_parsing_is_tolerant() {
        assert_eq!(parse_status("confirmed"), Some(RegistrationStatus::Confirmed));
        assert_eq!(parse_status("pending"), Some(RegistrationStatus::Pending));
        assert_eq!(parse_status("archived"), None);
        assert_eq!(parse_mode("online"), Some(PaymentMode::Online));
        assert_eq!(parse_mode(""), None);
    }

    #[test]
    fn group_members_keys_by_leader_row() {
        let m = |name: &str| TeamMemberRecord {
            name: Some(name.to_string()),
            ..Default::default()
        };
        let grouped = group_members(vec![(1, m("a")), (2, m("b")), (1, m("c"))]);
        assert_eq!(grouped[&1].len(), 2);
        assert_eq!(grouped[&1][0].name.as_deref(), Some("a"));
        assert_eq!(grouped[&1][1].name.as_deref(), Some("c"));
        assert_eq!(grouped[&2].len(), 1);
        assert!(!grouped.contains_key(&3));
    }
}
