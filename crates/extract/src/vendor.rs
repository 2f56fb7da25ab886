use spendtrackr_core::UNKNOWN_VENDOR;

use crate::lexicon::{CATEGORY_DIRECTORY, KNOWN_VENDORS};
use crate::normalize::standardize_vendor_name;

/// Header region: vendor names sit at the top of a receipt.
const HEADER_WINDOW: usize = 10;
/// The looser last-resort scan narrows the window to cut false positives
/// from promotional and address lines.
const FALLBACK_WINDOW: usize = 5;
const MAX_VENDOR_LEN: usize = 50;

// A line that is nothing but digits, whitespace, and date/price punctuation.
re!(re_noise_line, r"^[\d\s\-/.$]+$");

/// Locate a vendor name in the receipt header, never returning an empty
/// string.
///
/// Precedence: a known-vendor directory hit returns the canonical display
/// form immediately; a category-directory hit returns the matching header
/// line, normalized; otherwise the first plausible line in the narrowed
/// window is normalized; failing everything, the sentinel.
pub fn extract_vendor(text: &str) -> String {
    let header: Vec<&str> = text
        .lines()
        .take(HEADER_WINDOW)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for line in &header {
        let haystack = line.to_lowercase().replace('\'', "");
        if let Some((_, display)) = KNOWN_VENDORS.iter().find(|(key, _)| haystack.contains(key)) {
            return (*display).to_string();
        }
    }

    for line in &header {
        let haystack = line.to_lowercase();
        if CATEGORY_DIRECTORY.iter().any(|(key, _)| haystack.contains(key)) {
            return standardize_vendor_name(&truncate(line, MAX_VENDOR_LEN));
        }
    }

    for line in text.lines().take(FALLBACK_WINDOW).map(str::trim) {
        if line.len() > 3 && !re_noise_line().is_match(line) {
            return standardize_vendor_name(&truncate(line, MAX_VENDOR_LEN));
        }
    }

    UNKNOWN_VENDOR.to_string()
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vendor_returns_canonical_display() {
        let text = "Welcome to MCDONALDS #1234\n123 Main St\nTotal $8.99";
        assert_eq!(extract_vendor(text), "McDonald's");
    }

    #[test]
    fn apostrophes_stripped_before_matching() {
        assert_eq!(extract_vendor("McDonald's Restaurant\n..."), "McDonald's");
        assert_eq!(extract_vendor("TRADER JOE'S #552\n..."), "Trader Joe's");
    }

    #[test]
    fn first_known_vendor_line_wins() {
        let text = "STARBUCKS\nInside Target Store\nTotal $5.00";
        assert_eq!(extract_vendor(text), "Starbucks");
    }

    #[test]
    fn known_vendor_only_sought_in_header() {
        // Line 11 is outside the header window.
        let mut lines = vec!["x"; 10];
        lines.push("WALMART");
        let text = lines.join("\n");
        assert_ne!(extract_vendor(&text), "Walmart");
    }

    #[test]
    fn category_key_line_normalized_and_truncated() {
        // "pizza hut" is a directory key but not a known-vendor key variant
        // matching this noisy line, so the line itself comes back, cased.
        let text = "PIZZA HUT EXPRESS LOCATION 42\n456 Oak Ave";
        assert_eq!(extract_vendor(text), "Pizza Hut Express Location 42");
    }

    #[test]
    fn fallback_takes_first_plausible_line() {
        let text = "corner bistro\n789 Elm St\n$12.00";
        assert_eq!(extract_vendor(text), "Corner Bistro");
    }

    #[test]
    fn fallback_skips_noise_lines() {
        let text = "123-456\n$9.99\n01/02/2026\nJOE'S GARAGE\nmore";
        assert_eq!(extract_vendor(text), "Joe's Garage");
    }

    #[test]
    fn fallback_line_truncated_to_fifty_chars() {
        let long = "a very long promotional establishment banner line that keeps going";
        let got = extract_vendor(long);
        assert!(got.chars().count() <= 50);
    }

    #[test]
    fn unknown_vendor_sentinel() {
        assert_eq!(extract_vendor(""), UNKNOWN_VENDOR);
        assert_eq!(extract_vendor("$1.00\n123\n..."), UNKNOWN_VENDOR);
    }
}
