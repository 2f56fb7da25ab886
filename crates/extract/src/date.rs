use chrono::{Local, NaiveDate};

// Candidate patterns, in priority order: numeric slash/dash dates, then
// textual month names, then ISO.
re!(re_date_numeric, r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b");
re!(re_date_textual,
    r"(?i)\b((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2},?\s+\d{2,4})\b");
re!(re_date_iso, r"\b(\d{4}-\d{2}-\d{2})\b");

// Known formats, tried in order against the comma-stripped candidate.
// Two-digit-year forms come first: chrono's `%Y` happily accepts a bare
// two-digit year, which would otherwise land `1/5/25` in the year 25.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y", "%m/%d/%Y", "%m-%d-%y", "%m-%d-%Y", "%Y-%m-%d", "%b %d %y", "%b %d %Y",
    "%B %d %Y",
];

/// Find and normalize the purchase date, never returning an empty string.
///
/// The whole text is searched for the first date-like substring. A candidate
/// that parses under one of the known formats is normalized to `YYYY-MM-DD`;
/// one that parses under none is returned verbatim — a deliberate lossy
/// fallback over erroring. With no candidate at all, the processing date is
/// returned.
pub fn extract_date(text: &str) -> String {
    for pattern in [re_date_numeric(), re_date_textual(), re_date_iso()] {
        if let Some(caps) = pattern.captures(text) {
            let candidate = caps[1].to_string();
            return normalize_candidate(&candidate).unwrap_or(candidate);
        }
    }

    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn normalize_candidate(candidate: &str) -> Option<String> {
    let cleaned = candidate.replace(',', "");
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
}
