use spendtrackr_core::UNKNOWN_VENDOR;

use crate::lexicon::{KNOWN_VENDORS, LOWERCASE_WORDS, PREFIX_RULES, UPPERCASE_WORDS};

/// Canonicalize a raw vendor string into display casing.
///
/// Apostrophes are stripped for directory matching only. A directory hit
/// (exact first, then substring, in directory order) returns the canonical
/// display form; anything else goes through smart title-casing. The result
/// is stable under re-application.
pub fn standardize_vendor_name(raw: &str) -> String {
    let stripped = raw.replace('\'', "");
    let key = stripped.trim().to_lowercase();
    if key.is_empty() {
        return UNKNOWN_VENDOR.to_string();
    }

    if let Some((_, display)) = KNOWN_VENDORS.iter().find(|(k, _)| *k == key) {
        return (*display).to_string();
    }
    if let Some((_, display)) = KNOWN_VENDORS.iter().find(|(k, _)| key.contains(k)) {
        return (*display).to_string();
    }

    smart_title_case(raw.trim())
}

fn smart_title_case(name: &str) -> String {
    let words: Vec<String> = name
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if UPPERCASE_WORDS.contains(&lower.as_str()) {
                word.to_uppercase()
            } else if let Some(cased) = apply_prefix_rules(&lower) {
                cased
            } else if i > 0 && LOWERCASE_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(word)
            }
        })
        .collect();
    words.join(" ")
}

fn apply_prefix_rules(lower: &str) -> Option<String> {
    PREFIX_RULES.iter().find_map(|(prefix, cased)| {
        lower
            .strip_prefix(prefix)
            .filter(|rest| !rest.is_empty())
            .map(|rest| format!("{cased}{}", capitalize(rest)))
    })
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_exact_match_returns_display_form() {
        assert_eq!(standardize_vendor_name("mcdonald's"), "McDonald's");
        assert_eq!(standardize_vendor_name("MCDONALDS"), "McDonald's");
        assert_eq!(standardize_vendor_name("cvs"), "CVS");
    }

    #[test]
    fn directory_substring_match_returns_display_form() {
        assert_eq!(standardize_vendor_name("walmart supercenter 88"), "Walmart");
        assert_eq!(standardize_vendor_name("STARBUCKS STORE #100"), "Starbucks");
    }

    #[test]
    fn title_casing_plain_words() {
        assert_eq!(standardize_vendor_name("corner deli and grill"), "Corner Deli and Grill");
    }

    #[test]
    fn lowercase_word_capitalized_when_first() {
        assert_eq!(standardize_vendor_name("the corner store"), "The Corner Store");
    }

    #[test]
    fn acronyms_fully_uppercased() {
        assert_eq!(standardize_vendor_name("joe's bbq shack"), "Joe's BBQ Shack");
    }

    #[test]
    fn mc_prefix_rewritten() {
        assert_eq!(standardize_vendor_name("mcgill hardware"), "McGill Hardware");
    }

    #[test]
    fn empty_input_returns_sentinel() {
        assert_eq!(standardize_vendor_name(""), UNKNOWN_VENDOR);
        assert_eq!(standardize_vendor_name("   "), UNKNOWN_VENDOR);
        assert_eq!(standardize_vendor_name("'"), UNKNOWN_VENDOR);
    }

    #[test]
    fn idempotent_on_directory_matches() {
        for (_, display) in KNOWN_VENDORS {
            let once = standardize_vendor_name(display);
            assert_eq!(standardize_vendor_name(&once), once, "not stable for '{display}'");
        }
    }

    #[test]
    fn idempotent_on_title_cased_names() {
        for name in ["corner deli and grill", "McGill Hardware", "joe's bbq shack"] {
            let once = standardize_vendor_name(name);
            assert_eq!(standardize_vendor_name(&once), once);
        }
    }
}
