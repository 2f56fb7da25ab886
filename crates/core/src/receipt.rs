use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The structured result of analyzing one receipt's OCR text.
///
/// Every field is always populated: `total` is the only nullable field
/// (absent when no amount-like pattern exists anywhere in the text), while
/// `date`, `vendor`, and `category` degrade to documented defaults instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptRecord {
    /// Final paid amount, when one could be located.
    pub total: Option<Decimal>,
    /// Purchase date in `YYYY-MM-DD` form, or the raw matched substring when
    /// it fit no known format, or the processing date when absent entirely.
    pub date: String,
    /// Display-cased vendor name, `"Unknown Vendor"` when unrecoverable.
    pub vendor: String,
    pub category: Category,
}

/// Sentinel vendor for receipts whose header yields no usable name.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_all_four_fields() {
        let record = ReceiptRecord {
            total: Some(Decimal::new(1234, 2)),
            date: "2026-01-23".to_string(),
            vendor: "Starbucks".to_string(),
            category: Category::Food,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2026-01-23");
        assert_eq!(json["vendor"], "Starbucks");
        assert_eq!(json["category"], "food");
        assert!(json.get("total").is_some());
    }

    #[test]
    fn total_may_be_absent() {
        let record = ReceiptRecord {
            total: None,
            date: "2026-01-23".to_string(),
            vendor: UNKNOWN_VENDOR.to_string(),
            category: Category::Other,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["total"].is_null());
    }
}
