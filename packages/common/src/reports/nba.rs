use crate::records::{Category, RegistrationRecord, Subcategory};
use crate::status::RegistrationStatus;

use super::csv::escape_field;

/// Per-category accreditation counts (solo vs. team side by side).
///
/// Solo "actual participation" counts confirmed rows only, while team
/// counts are not status-filtered: a team is counted once formed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub solo_events: u64,
    pub team_events: u64,
    pub total_events: u64,
    pub solo_registered: u64,
    pub solo_actual: u64,
    pub team_count: u64,
    pub team_participants: u64,
    pub total_participants: u64,
}

/// Accreditation counts for one category. Solo figures come from
/// Individual-subcategory rows, team figures from Group-subcategory leader
/// rows (members contribute through their leader's list, never their own
/// rows). `total_participants` pairs confirmed solo rows with all team
/// participants.
pub fn category_stats(registrations: &[RegistrationRecord], category: Category) -> CategoryStats {
    let mut stats = CategoryStats::default();
    let mut solo_event_ids: Vec<i32> = Vec::new();
    let mut team_event_ids: Vec<i32> = Vec::new();

    for reg in registrations {
        if reg.category() != Some(category) {
            continue;
        }
        let Some(event_id) = reg.event_id() else {
            continue;
        };
        match reg.subcategory() {
            Some(Subcategory::Individual) => {
                if !solo_event_ids.contains(&event_id) {
                    solo_event_ids.push(event_id);
                }
                stats.solo_registered += 1;
                if reg.status == Some(RegistrationStatus::Confirmed) {
                    stats.solo_actual += 1;
                }
            }
            Some(Subcategory::Group) => {
                if !team_event_ids.contains(&event_id) {
                    team_event_ids.push(event_id);
                }
                if reg.is_leader() {
                    stats.team_count += 1;
                    stats.team_participants += 1 + reg.team_members.len() as u64;
                }
            }
            None => {}
        }
    }

    stats.solo_events = solo_event_ids.len() as u64;
    stats.team_events = team_event_ids.len() as u64;
    stats.total_events = stats.solo_events + stats.team_events;
    stats.total_participants = stats.solo_actual + stats.team_participants;
    stats
}

fn push_line(out: &mut Vec<String>, fields: &[&str]) {
    out.push(
        fields
            .iter()
            .map(|f| escape_field(f))
            .collect::<Vec<_>>()
            .join(","),
    );
}

fn push_category_block(out: &mut Vec<String>, category: Category, stats: &CategoryStats) {
    out.push(category.as_str().to_uppercase());
    out.push(String::new());
    push_line(out, &["SR NO", "PARTICULARS", "REGISTERED", "ACTUAL PARTICIPATION", ""]);
    push_line(
        out,
        &["1", "EVENTS", &stats.solo_events.to_string(), &stats.solo_events.to_string(), ""],
    );
    push_line(
        out,
        &["2", "PARTICIPANTS", &stats.solo_registered.to_string(), &stats.solo_actual.to_string(), ""],
    );
    out.push(String::new());
    push_line(out, &["TEAMS", ""]);
    push_line(out, &["NO OF EVENTS", &stats.team_events.to_string(), ""]);
    push_line(out, &["NO OF TEAMS", &stats.team_count.to_string(), ""]);
    push_line(out, &["NO OF PARTICIPANTS", &stats.team_participants.to_string(), ""]);
    out.push(String::new());
    push_line(
        out,
        &[
            "TOTAL EVENTS",
            &format!("{} + {} = {}", stats.solo_events, stats.team_events, stats.total_events),
            "",
        ],
    );
    push_line(
        out,
        &[
            "TOTAL PARTICIPANTS",
            &format!(
                "{} + {} = {}",
                stats.solo_actual, stats.team_participants, stats.total_participants
            ),
            "",
        ],
    );
    out.push(String::new());
    out.push(String::new());
}

/// The full accreditation report as finished CSV text: one human-readable
/// block per category (fixed order), then the summary table with a `TOTAL`
/// row. Every count derives from [`category_stats`], so the empty snapshot
/// yields the same block skeleton with all-zero figures.
pub fn generate_nba_csv(registrations: &[RegistrationRecord]) -> String {
    let all: Vec<(Category, CategoryStats)> = Category::ALL
        .iter()
        .map(|&c| (c, category_stats(registrations, c)))
        .collect();

    let mut out: Vec<String> = Vec::new();
    for (category, stats) in &all {
        push_category_block(&mut out, *category, stats);
    }

    push_line(&mut out, &["NBA REQUIREMENTS", ""]);
    push_line(&mut out, &["SR NO", "EVENT", "NO OF EVENT", "NO OF TEAMS", "PARTICIPANTS", "Registered"]);
    for (i, (category, stats)) in all.iter().enumerate() {
        push_line(
            &mut out,
            &[
                &(i + 1).to_string(),
                &category.as_str().to_uppercase(),
                &stats.total_events.to_string(),
                &stats.team_count.to_string(),
                &stats.total_participants.to_string(),
                &(stats.solo_registered + stats.team_participants).to_string(),
            ],
        );
    }
    let events: u64 = all.iter().map(|(_, s)| s.total_events).sum();
    let teams: u64 = all.iter().map(|(_, s)| s.team_count).sum();
    let participants: u64 = all.iter().map(|(_, s)| s.total_participants).sum();
    push_line(
        &mut out,
        &[
            "TOTAL",
            "",
            &events.to_string(),
            &teams.to_string(),
            &participants.to_string(),
            "",
        ],
    );

    out.join("\n")
}
