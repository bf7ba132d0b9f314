use crate::records::{ProfileRecord, RegistrationRecord, TeamMemberRecord};

use super::csv::{Column, Row};
use super::{NA, group_by_category_event};

/// Individual participants report, grouped by category then event.
pub const INDIVIDUAL_COLUMNS: &[Column] = &[
    Column { key: "event_no", label: "Event No" },
    Column { key: "event_name", label: "Event Name" },
    Column { key: "member_no", label: "Member No" },
    Column { key: "roll_number", label: "Roll Number" },
    Column { key: "name", label: "Name" },
    Column { key: "email", label: "Email" },
    Column { key: "school", label: "School" },
    Column { key: "department", label: "Department" },
    Column { key: "year_of_study", label: "Year of Study" },
    Column { key: "gender", label: "Gender" },
    Column { key: "phone", label: "Phone" },
    Column { key: "category", label: "Category" },
];

/// Team participants report: as above plus a team number column.
pub const TEAM_COLUMNS: &[Column] = &[
    Column { key: "event_no", label: "Event No" },
    Column { key: "event_name", label: "Event Name" },
    Column { key: "team_no", label: "Team No" },
    Column { key: "member_no", label: "Member No" },
    Column { key: "roll_number", label: "Roll Number" },
    Column { key: "name", label: "Name" },
    Column { key: "email", label: "Email" },
    Column { key: "school", label: "School" },
    Column { key: "department", label: "Department" },
    Column { key: "year_of_study", label: "Year of Study" },
    Column { key: "gender", label: "Gender" },
    Column { key: "phone", label: "Phone" },
    Column { key: "category", label: "Category" },
];

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NA.to_string(),
    }
}

fn event_name(reg: &RegistrationRecord) -> String {
    or_na(reg.event.as_ref().and_then(|e| e.name.as_deref()))
}

fn insert_profile_cells(row: &mut Row, profile: Option<&ProfileRecord>) {
    row.insert("roll_number", or_na(profile.and_then(|p| p.roll_number.as_deref())));
    row.insert("name", or_na(profile.and_then(|p| p.full_name.as_deref())));
    row.insert("email", or_na(profile.and_then(|p| p.college_email.as_deref())));
    row.insert("school", or_na(profile.and_then(|p| p.school.as_deref())));
    row.insert("department", or_na(profile.and_then(|p| p.department.as_deref())));
    row.insert(
        "year_of_study",
        profile
            .and_then(|p| p.year_of_study)
            .map(|y| y.to_string())
            .unwrap_or_else(|| NA.to_string()),
    );
    row.insert("gender", or_na(profile.and_then(|p| p.gender.as_deref())));
    row.insert("phone", or_na(profile.and_then(|p| p.phone.as_deref())));
}

fn insert_member_cells(row: &mut Row, member: &TeamMemberRecord) {
    row.insert("roll_number", or_na(member.roll_number.as_deref()));
    row.insert("name", or_na(member.name.as_deref()));
    // Member entries store a contact email; older rows only carry the
    // college address.
    row.insert(
        "email",
        or_na(member.email.as_deref().or(member.college_email.as_deref())),
    );
    row.insert("school", or_na(member.school.as_deref()));
    row.insert("department", or_na(member.department.as_deref()));
    row.insert(
        "year_of_study",
        member
            .year_of_study
            .map(|y| y.to_string())
            .unwrap_or_else(|| NA.to_string()),
    );
    row.insert("gender", or_na(member.gender.as_deref()));
    row.insert("phone", or_na(member.phone.as_deref()));
}

/// One row per registration, grouped by category (fixed order) then event
/// (first-seen order). `Event No`/`Event Name` fill only on each group's
/// first row for the grouped human-readable layout; the event counter and
/// per-group member numbers restart on every invocation.
///
/// No subcategory filter is applied here; callers exporting a solo-only
/// report pre-filter the snapshot to Individual events.
pub fn individual_participants_rows(registrations: &[RegistrationRecord]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut event_no = 0u32;
    for (category, event_groups) in group_by_category_event(registrations) {
        for group in event_groups {
            event_no += 1;
            for (i, reg) in group.iter().enumerate() {
                let mut row = Row::new();
                if i == 0 {
                    row.insert("event_no", event_no.to_string());
                    row.insert("event_name", event_name(reg));
                }
                row.insert("member_no", (i + 1).to_string());
                insert_profile_cells(&mut row, reg.profile.as_ref());
                row.insert("category", category.as_str().to_string());
                rows.push(row);
            }
        }
    }
    rows
}

/// One block per team: the leader as member 1 (from its own profile), then
/// each member-list entry as members 2, 3, …
///
/// Non-leader rows present in the snapshot are skipped — members are
/// reconstructed from the leader's list, not read from their own rows.
/// `Team No` fills only on a team's first row and restarts per event group;
/// `Event No`/`Event Name` fill only on the first row of a group's first
/// team.
pub fn team_participants_rows(registrations: &[RegistrationRecord]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut event_no = 0u32;
    for (category, event_groups) in group_by_category_event(registrations) {
        for group in event_groups {
            let teams: Vec<&&RegistrationRecord> =
                group.iter().filter(|reg| reg.is_leader()).collect();
            if teams.is_empty() {
                continue;
            }
            event_no += 1;
            for (team_idx, leader) in teams.iter().enumerate() {
                let mut row = Row::new();
                if team_idx == 0 {
                    row.insert("event_no", event_no.to_string());
                    row.insert("event_name", event_name(leader));
                }
                row.insert("team_no", (team_idx + 1).to_string());
                row.insert("member_no", "1".to_string());
                insert_profile_cells(&mut row, leader.profile.as_ref());
                row.insert("category", category.as_str().to_string());
                rows.push(row);

                for (member_idx, member) in leader.team_members.iter().enumerate() {
                    let mut row = Row::new();
                    row.insert("member_no", (member_idx + 2).to_string());
                    insert_member_cells(&mut row, member);
                    row.insert("category", category.as_str().to_string());
                    rows.push(row);
                }
            }
        }
    }
    rows
}
