use std::collections::HashMap;

/// One column of a tabular report: `key` addresses cells in a [`Row`],
/// `label` is the human-readable header text.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

/// One report row: column key to cell value. Absent keys serialize as empty
/// cells (used for the grouped-layout blanking of repeated event columns).
pub type Row = HashMap<&'static str, String>;

/// Escapes a single CSV field (RFC 4180 style): quote-wrap when the field
/// contains a comma, quote, or line break, doubling embedded quotes.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serializes header descriptors plus rows into CSV text.
pub fn rows_to_csv(columns: &[Column], rows: &[Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| escape_field(c.label))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|c| escape_field(row.get(c.key).map(String::as_str).unwrap_or("")))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[Column] = &[
        Column { key: "name", label: "Name" },
        Column { key: "remark", label: "Remark" },
    ];

    #[test]
    fn escape_field_passes_plain_text_through() {
        assert_eq!(escape_field("Solo Dance"), "Solo Dance");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn escape_field_quotes_commas_and_newlines() {
        assert_eq!(escape_field("Dance, Solo"), "\"Dance, Solo\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn escape_field_doubles_embedded_quotes() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn rows_to_csv_emits_header_and_blank_cells() {
        let mut row = Row::new();
        row.insert("name", "A, B".to_string());
        let csv = rows_to_csv(COLUMNS, &[row, Row::new()]);
        assert_eq!(csv, "Name,Remark\n\"A, B\",\n,");
    }

    #[test]
    fn empty_input_still_produces_a_header() {
        assert_eq!(rows_to_csv(COLUMNS, &[]), "Name,Remark");
    }
}
