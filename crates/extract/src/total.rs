use rust_decimal::Decimal;
use std::str::FromStr;

// Pattern families, in priority order. Receipts print either `1.23` or the
// European `1,23`; both decimal shapes are accepted and normalized.
re!(re_labeled_amount,
    r"(?i)\b(?:total|grand\s+total|amount\s+due|balance\s+due|total\s+due)\s*[:$]?\s*\$?\s*(\d+[.,]\d{2})");
re!(re_keyword_amount,
    r"(?i)\b(?:total|grand\s+total)\s+(\d+[.,]\d{2})");
re!(re_trailing_amount,
    r"\$\s*(\d+[.,]\d{2})\s*$");
re!(re_any_amount,
    r"\$?\s*(\d+[.,]\d{2})");

/// Find the most likely final paid amount in the receipt text.
///
/// Lines are scanned bottom-up — the grand total is conventionally the last
/// monetary figure printed. Within a line, an explicitly labeled amount beats
/// a bare keyword-adjacent one, which beats a trailing `$x.yy`. When no line
/// carries a keyword at all, the largest amount anywhere in the text wins:
/// the biggest figure on a receipt is almost always the total, not a line
/// item.
pub fn extract_total(text: &str) -> Option<Decimal> {
    for line in text.lines().rev() {
        let line = line.trim();
        for pattern in [re_labeled_amount(), re_keyword_amount(), re_trailing_amount()] {
            if let Some(caps) = pattern.captures(line) {
                // Unparsable numeric groups are skipped, not fatal.
                if let Some(amount) = parse_amount(&caps[1]) {
                    return Some(amount);
                }
            }
        }
    }

    re_any_amount()
        .captures_iter(text)
        .filter_map(|caps| parse_amount(&caps[1]))
        .max()
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.replace(',', ".")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn labeled_total_wins() {
        let text = "AMAZON\nItem 1   $10.00\nItem 2   $15.00\nTotal    $25.00";
        assert_eq!(extract_total(text), Some(dec("25.00")));
    }

    #[test]
    fn labeled_variants_recognized() {
        assert_eq!(extract_total("Amount Due: $19.99"), Some(dec("19.99")));
        assert_eq!(extract_total("BALANCE DUE 7.50"), Some(dec("7.50")));
        assert_eq!(extract_total("Grand Total $101.25"), Some(dec("101.25")));
        assert_eq!(extract_total("total $12.34"), Some(dec("12.34")));
    }

    #[test]
    fn bottom_most_labeled_line_wins() {
        let text = "Subtotal lines\nTotal $10.00\nmore items\nTotal $14.00";
        assert_eq!(extract_total(text), Some(dec("14.00")));
    }

    #[test]
    fn comma_decimal_separator_normalized() {
        assert_eq!(extract_total("TOTAL 12,34"), Some(dec("12.34")));
    }

    #[test]
    fn trailing_amount_used_when_no_label() {
        let text = "COFFEE SHOP\nlatte and scone $9.25";
        assert_eq!(extract_total(text), Some(dec("9.25")));
    }

    #[test]
    fn fallback_returns_maximum_amount() {
        // No keyword and no line-final amount: the largest figure wins.
        let text = "STORE\ncoupon $5.00 applied\nitem $42.10 (x2)\nfee $3.00 waived";
        assert_eq!(extract_total(text), Some(dec("42.10")));
    }

    #[test]
    fn no_amount_yields_none() {
        assert_eq!(extract_total("no numbers here"), None);
        assert_eq!(extract_total(""), None);
    }

    #[test]
    fn amounts_without_two_decimals_ignored() {
        assert_eq!(extract_total("qty 3 x 2"), None);
    }
}
