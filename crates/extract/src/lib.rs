//! Receipt field extraction and classification.
//!
//! Turns one noisy multi-line OCR string into a structured [`ReceiptRecord`]:
//! total amount, purchase date, vendor name, and spending category. Every
//! extractor is a pure function of its input plus the static reference
//! tables in [`lexicon`]; nothing here performs I/O, and nothing here fails —
//! low-quality input degrades to documented defaults instead.

use spendtrackr_core::ReceiptRecord;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod classify;
pub mod date;
pub mod lexicon;
pub mod normalize;
pub mod total;
pub mod vendor;

pub use classify::classify_category;
pub use date::extract_date;
pub use normalize::standardize_vendor_name;
pub use total::extract_total;
pub use vendor::extract_vendor;

/// Run the full pipeline over one receipt's OCR text.
///
/// The three extractors run independently on the same text; the extracted
/// vendor (already display-cased) and the original text feed the classifier.
pub fn analyze(text: &str) -> ReceiptRecord {
    let total = extract_total(text);
    let date = extract_date(text);
    let vendor = extract_vendor(text);
    let category = classify_category(&vendor, text);

    ReceiptRecord { total, date, vendor, category }
}
