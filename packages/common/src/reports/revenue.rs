use crate::records::RegistrationRecord;

use super::NA;

/// Returns true when `reg` is a non-leader row whose registrant appears in
/// another registration's member list **for the same event**.
///
/// Team membership is scoped per event: a person can be billed as a leader
/// or individual in one event while being a fee-exempt member in another.
fn is_covered_by_team(reg: &RegistrationRecord, all: &[RegistrationRecord]) -> bool {
    if reg.is_leader() {
        return false;
    }
    let (Some(event_id), Some(profile_id)) = (reg.event_id(), reg.profile_id()) else {
        return false;
    };
    all.iter().any(|other| {
        other.id != reg.id
            && other.event_id() == Some(event_id)
            && other
                .team_members
                .iter()
                .any(|m| m.profile_id == Some(profile_id))
    })
}

/// The leader/member partition: keeps exactly one charged row per team (the
/// leader) plus every true individual registration.
///
/// This is the single source of truth for revenue attribution; every
/// revenue figure and the payment ledger derive from this partition. The
/// result is independent of input ordering since membership lookups scan
/// the whole collection.
pub fn payer_rows(registrations: &[RegistrationRecord]) -> Vec<&RegistrationRecord> {
    registrations
        .iter()
        .filter(|reg| !is_covered_by_team(reg, registrations))
        .collect()
}

/// Total revenue: event fees summed once per team (leader row) or
/// individual. Missing events contribute 0. Folding from a literal zero
/// keeps the empty snapshot at `0.0` rather than the `-0.0` an empty
/// `f64` sum produces.
pub fn compute_revenue(registrations: &[RegistrationRecord]) -> f64 {
    payer_rows(registrations)
        .iter()
        .fold(0.0, |total, r| total + r.fee())
}

/// Revenue segmented by payment mode, in first-seen order. Rows without a
/// payment mode fall into an `N/A` bucket.
pub fn revenue_by_mode(registrations: &[RegistrationRecord]) -> Vec<(String, f64)> {
    mode_totals(&payer_rows(registrations))
}

/// Revenue segmented by event, sorted descending by amount.
pub fn revenue_by_event(registrations: &[RegistrationRecord]) -> Vec<(String, f64)> {
    event_totals(&payer_rows(registrations))
}

/// Per-mode totals over an already-computed payer partition.
pub(crate) fn mode_totals(payers: &[&RegistrationRecord]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for payer in payers {
        let mode = payer
            .payment_mode
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NA.to_string());
        match totals.iter_mut().find(|(m, _)| *m == mode) {
            Some((_, amount)) => *amount += payer.fee(),
            None => totals.push((mode, payer.fee())),
        }
    }
    totals
}

/// Per-event totals over an already-computed payer partition, descending by
/// amount (stable, so ties keep first-seen order).
pub(crate) fn event_totals(payers: &[&RegistrationRecord]) -> Vec<(String, f64)> {
    let mut order: Vec<Option<i32>> = Vec::new();
    let mut totals: Vec<(String, f64)> = Vec::new();
    for payer in payers {
        let key = payer.event_id();
        match order.iter().position(|k| *k == key) {
            Some(idx) => totals[idx].1 += payer.fee(),
            None => {
                order.push(key);
                let name = payer
                    .event
                    .as_ref()
                    .and_then(|e| e.name.clone())
                    .unwrap_or_else(|| NA.to_string());
                totals.push((name, payer.fee()));
            }
        }
    }
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::*;
    use crate::status::RegistrationStatus;

    #[test]
    fn member_rows_never_add_to_the_total() {
        let group = || event(1, "Street Play", "Cultural", "Group", 600.0);
        let regs = vec![
            // Leader with two members (profiles 11 and 12).
            leader(1, group(), profile(10, "Lead"), vec![member(11, "M1"), member(12, "M2")]),
            // The members' own rows for the same event.
            registration(2, group(), profile(11, "M1"), RegistrationStatus::Confirmed),
            registration(3, group(), profile(12, "M2"), RegistrationStatus::Confirmed),
        ];

        assert_eq!(compute_revenue(&regs), 600.0);
        assert_eq!(compute_revenue(&regs[..1]), 600.0);
        assert_eq!(payer_rows(&regs).len(), 1);
    }

    #[test]
    fn result_is_order_independent() {
        let group = || event(1, "Street Play", "Cultural", "Group", 600.0);
        let mut regs = vec![
            registration(2, group(), profile(11, "M1"), RegistrationStatus::Confirmed),
            leader(1, group(), profile(10, "Lead"), vec![member(11, "M1")]),
        ];
        assert_eq!(compute_revenue(&regs), 600.0);
        regs.reverse();
        assert_eq!(compute_revenue(&regs), 600.0);
    }

    #[test]
    fn team_membership_does_not_leak_across_events() {
        let quiz = || event(1, "Quiz", "Technical", "Group", 300.0);
        let dance = || event(2, "Group Dance", "Cultural", "Group", 400.0);
        let regs = vec![
            // Profile 11 is a member of the quiz team...
            leader(1, quiz(), profile(10, "Lead"), vec![member(11, "Dual")]),
            registration(2, quiz(), profile(11, "Dual"), RegistrationStatus::Confirmed),
            // ...but leads their own dance team, and must be billed for it.
            leader(3, dance(), profile(11, "Dual"), vec![member(12, "Other")]),
        ];
        assert_eq!(compute_revenue(&regs), 700.0);
    }

    #[test]
    fn individuals_and_missing_events_are_handled() {
        let regs = vec![
            registration(
                1,
                event(1, "Solo Sing", "Cultural", "Individual", 150.0),
                profile(1, "A"),
                RegistrationStatus::Pending,
            ),
            crate::records::RegistrationRecord {
                id: 2,
                ..Default::default()
            },
        ];
        // No team anywhere: both rows are payers, the event-less one at fee 0.
        assert_eq!(payer_rows(&regs).len(), 2);
        assert_eq!(compute_revenue(&regs), 150.0);
    }

    #[test]
    fn empty_input_yields_plain_zero() {
        let total = compute_revenue(&[]);
        assert_eq!(total, 0.0);
        // A -0.0 total would leak a minus sign into serialized output.
        assert_eq!(format!("{total}"), "0");
        assert!(revenue_by_mode(&[]).is_empty());
        assert!(revenue_by_event(&[]).is_empty());
    }

    #[test]
    fn segmentation_uses_the_same_partition() {
        let group = || event(1, "Street Play", "Cultural", "Group", 600.0);
        let solo = || event(2, "Solo Sing", "Cultural", "Individual", 150.0);
        let mut lead = leader(1, group(), profile(10, "Lead"), vec![member(11, "M1")]);
        lead.payment_mode = Some(crate::status::PaymentMode::Online);
        let regs = vec![
            lead,
            registration(2, group(), profile(11, "M1"), RegistrationStatus::Confirmed),
            registration(3, solo(), profile(12, "S"), RegistrationStatus::Confirmed),
        ];

        let by_mode = revenue_by_mode(&regs);
        assert_eq!(by_mode, vec![("online".to_string(), 600.0), ("cash".to_string(), 150.0)]);

        let by_event = revenue_by_event(&regs);
        assert_eq!(
            by_event,
            vec![("Street Play".to_string(), 600.0), ("Solo Sing".to_string(), 150.0)]
        );

        let total: f64 = by_mode.iter().map(|(_, a)| a).sum();
        assert_eq!(total, compute_revenue(&regs));
    }
}
