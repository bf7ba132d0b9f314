use crate::records::RegistrationRecord;

use super::csv::{Column, Row};
use super::revenue::{event_totals, mode_totals, payer_rows};
use super::{NA, format_amount};

/// Payment ledger: one row per charged registration, followed by summary
/// blocks.
pub const PAYMENT_COLUMNS: &[Column] = &[
    Column { key: "event_no", label: "Event No" },
    Column { key: "event_name", label: "Event Name" },
    Column { key: "type", label: "Registration Type" },
    Column { key: "name", label: "Participant Name" },
    Column { key: "transaction_id", label: "Transaction ID" },
    Column { key: "mode", label: "Payment Mode" },
    Column { key: "amount", label: "Amount" },
    Column { key: "status", label: "Status" },
    Column { key: "date", label: "Payment Date" },
];

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NA.to_string(),
    }
}

fn ledger_row(event_no: Option<u32>, reg: &RegistrationRecord) -> Row {
    let mut row = Row::new();
    if let Some(n) = event_no {
        row.insert("event_no", n.to_string());
        row.insert(
            "event_name",
            or_na(reg.event.as_ref().and_then(|e| e.name.as_deref())),
        );
    }
    row.insert(
        "type",
        if reg.is_leader() { "Team" } else { "Individual" }.to_string(),
    );
    row.insert(
        "name",
        or_na(reg.profile.as_ref().and_then(|p| p.full_name.as_deref())),
    );
    row.insert("transaction_id", or_na(reg.transaction_id.as_deref()));
    row.insert(
        "mode",
        reg.payment_mode
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NA.to_string()),
    );
    row.insert("amount", format_amount(reg.fee()));
    row.insert(
        "status",
        reg.status
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| NA.to_string()),
    );
    row.insert(
        "date",
        reg.registered_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NA.to_string()),
    );
    row
}

fn marker_row(label: &str) -> Row {
    let mut row = Row::new();
    row.insert("event_no", label.to_string());
    row
}

fn summary_row(label: String, amount: f64) -> Row {
    let mut row = Row::new();
    row.insert("event_name", label);
    row.insert("amount", format_amount(amount));
    row
}

/// Ledger rows over the payer partition (one row per team via its leader,
/// plus every individual), grouped by event in first-seen order, followed
/// by per-mode and per-event summary blocks and a grand total.
///
/// Demographic reports count every row; this one deliberately does not, so
/// the ledger total always matches [`super::compute_revenue`].
pub fn payment_rows(registrations: &[RegistrationRecord]) -> Vec<Row> {
    let payers = payer_rows(registrations);

    let mut order: Vec<Option<i32>> = Vec::new();
    for payer in &payers {
        if !order.contains(&payer.event_id()) {
            order.push(payer.event_id());
        }
    }

    let mut rows = Vec::new();
    for (idx, key) in order.iter().enumerate() {
        let group: Vec<&&RegistrationRecord> =
            payers.iter().filter(|p| p.event_id() == *key).collect();
        for (i, reg) in group.iter().enumerate() {
            let event_no = (i == 0).then(|| (idx + 1) as u32);
            rows.push(ledger_row(event_no, reg));
        }
    }

    rows.push(Row::new());
    rows.push(Row::new());
    rows.push(marker_row("PAYMENT MODE SUMMARY"));
    for (mode, amount) in mode_totals(&payers) {
        rows.push(summary_row(mode, amount));
    }

    rows.push(Row::new());
    rows.push(marker_row("EVENT REVENUE SUMMARY"));
    for (name, amount) in event_totals(&payers) {
        rows.push(summary_row(name, amount));
    }

    rows.push(Row::new());
    let total = payers.iter().fold(0.0, |acc, p| acc + p.fee());
    let mut total_row = marker_row("TOTAL REVENUE");
    total_row.insert("amount", format_amount(total));
    rows.push(total_row);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::compute_revenue;
    use crate::reports::fixtures::*;
    use crate::status::{PaymentMode, RegistrationStatus};

    fn cell<'a>(row: &'a Row, key: &str) -> &'a str {
        row.get(key).map(String::as_str).unwrap_or("")
    }

    fn snapshot() -> Vec<RegistrationRecord> {
        let play = || event(1, "Street Play", "Cultural", "Group", 600.0);
        let solo = || event(2, "Solo Sing", "Cultural", "Individual", 150.0);
        let mut lead = leader(1, play(), profile(10, "Lead"), vec![member(11, "M1")]);
        lead.payment_mode = Some(PaymentMode::Online);
        lead.transaction_id = Some("TXN-77".to_string());
        vec![
            lead,
            registration(2, play(), profile(11, "M1"), RegistrationStatus::Confirmed),
            registration(3, solo(), profile(12, "S"), RegistrationStatus::Pending),
        ]
    }

    #[test]
    fn members_do_not_appear_in_the_ledger() {
        let rows = payment_rows(&snapshot());
        let names: Vec<&str> = rows.iter().map(|r| cell(r, "name")).collect();
        assert!(names.contains(&"Lead"));
        assert!(names.contains(&"S"));
        assert!(!names.contains(&"M1"));
    }

    #[test]
    fn ledger_rows_carry_payment_details() {
        let rows = payment_rows(&snapshot());
        assert_eq!(cell(&rows[0], "event_no"), "1");
        assert_eq!(cell(&rows[0], "event_name"), "Street Play");
        assert_eq!(cell(&rows[0], "type"), "Team");
        assert_eq!(cell(&rows[0], "transaction_id"), "TXN-77");
        assert_eq!(cell(&rows[0], "mode"), "online");
        assert_eq!(cell(&rows[0], "amount"), "600");
        assert_eq!(cell(&rows[0], "date"), "2025-02-14");
        assert_eq!(cell(&rows[1], "event_no"), "2");
        assert_eq!(cell(&rows[1], "type"), "Individual");
        assert_eq!(cell(&rows[1], "status"), "pending");
        assert_eq!(cell(&rows[1], "transaction_id"), "N/A");
    }

    #[test]
    fn summary_totals_match_the_revenue_figure() {
        let regs = snapshot();
        let rows = payment_rows(&regs);
        let total_row = rows
            .iter()
            .find(|r| cell(r, "event_no") == "TOTAL REVENUE")
            .unwrap();
        assert_eq!(cell(total_row, "amount"), format_amount(compute_revenue(&regs)));

        let mode_start = rows
            .iter()
            .position(|r| cell(r, "event_no") == "PAYMENT MODE SUMMARY")
            .unwrap();
        let mode_sum: f64 = rows[mode_start + 1..]
            .iter()
            .take_while(|r| !r.is_empty())
            .map(|r| cell(r, "amount").parse::<f64>().unwrap())
            .sum();
        assert_eq!(mode_sum, compute_revenue(&regs));
    }

    #[test]
    fn empty_snapshot_yields_only_summary_skeleton() {
        let rows = payment_rows(&[]);
        let markers: Vec<&str> = rows
            .iter()
            .map(|r| cell(r, "event_no"))
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(
            markers,
            vec!["PAYMENT MODE SUMMARY", "EVENT REVENUE SUMMARY", "TOTAL REVENUE"]
        );
        let total_row = rows.last().unwrap();
        assert_eq!(cell(total_row, "amount"), "0");
    }

    #[test]
    fn event_less_payers_are_still_listed() {
        let regs = vec![RegistrationRecord { id: 1, ..Default::default() }];
        let rows = payment_rows(&regs);
        assert_eq!(cell(&rows[0], "event_name"), "N/A");
        assert_eq!(cell(&rows[0], "amount"), "0");
    }
}
