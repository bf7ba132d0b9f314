use chrono::NaiveDate;

/// Builds a dated export filename: `<report>_<YYYY-MM-DD>.csv`.
///
/// The report name is sanitized to lowercase ASCII alphanumerics and
/// underscores so the value is always safe inside a Content-Disposition
/// header.
pub fn export_filename(report: &str, date: NaiveDate) -> String {
    let safe: String = report
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}.csv", safe, date.format("%Y-%m-%d"))
}

/// Content-Disposition value for a CSV attachment.
pub fn csv_attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}
