use spendtrackr_core::Category;

use crate::lexicon::{
    CATEGORY_DIRECTORY, FOOD_ITEM_KEYWORDS, FOOD_VENDOR_KEYWORDS, KNOWN_FOOD_VENDORS,
    MIXED_RETAILERS,
};

/// Assign exactly one category to a receipt.
///
/// The rule order is a deliberate tie-break; the first satisfied rule wins:
///
/// 1. Mixed-retailer override — a big-box, pharmacy, dollar, or convenience
///    chain cannot be classified by name alone, so the receipt body decides
///    between food and retail. This outranks the category directory.
/// 2. Category directory lookup on the vendor name.
/// 3. Food keyword in the vendor name ("grill", "bakery", ...).
/// 4. Curated food brand name in the vendor name.
/// 5. Any single food-item keyword in the receipt body.
/// 6. `Other`.
///
/// All matching is case-insensitive substring containment.
pub fn classify_category(vendor: &str, receipt_text: &str) -> Category {
    let name = vendor.to_lowercase();

    if MIXED_RETAILERS.iter().any(|m| name.contains(m)) {
        return if contains_food_item(receipt_text) {
            Category::Food
        } else {
            Category::Retail
        };
    }

    if let Some((_, category)) = CATEGORY_DIRECTORY.iter().find(|(key, _)| name.contains(key)) {
        return *category;
    }

    if FOOD_VENDOR_KEYWORDS.iter().any(|k| name.contains(k)) {
        return Category::Food;
    }

    if KNOWN_FOOD_VENDORS.iter().any(|k| name.contains(k)) {
        return Category::Food;
    }

    if contains_food_item(receipt_text) {
        return Category::Food;
    }

    Category::Other
}

fn contains_food_item(receipt_text: &str) -> bool {
    let body = receipt_text.to_lowercase();
    FOOD_ITEM_KEYWORDS.iter().any(|item| body.contains(item))
}
