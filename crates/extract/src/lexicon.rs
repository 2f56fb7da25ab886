//! Static reference tables backing vendor recognition and classification.
//!
//! Every table is an explicitly ordered slice scanned front to back with
//! case-insensitive `contains` semantics, so the first textual hit wins.
//! Keep more specific keys ahead of shorter ones that could shadow them.
//! Known-vendor keys are lowercase with apostrophes stripped, matching how
//! candidate lines are prepared before lookup.

use spendtrackr_core::Category;

// ── Vendor-name substring → category ─────────────────────────────────────────

pub const CATEGORY_DIRECTORY: &[(&str, Category)] = &[
    // Fast food
    ("mcdonald", Category::Food),
    ("burger king", Category::Food),
    ("wendy", Category::Food),
    ("taco bell", Category::Food),
    ("chick-fil-a", Category::Food),
    ("subway", Category::Food),
    ("chipotle", Category::Food),
    ("kfc", Category::Food),
    ("popeyes", Category::Food),
    ("dairy queen", Category::Food),
    ("little caesars", Category::Food),
    ("domino", Category::Food),
    ("papa john", Category::Food),
    ("pizza hut", Category::Food),
    // Coffee
    ("starbucks", Category::Food),
    ("dunkin", Category::Food),
    ("peet", Category::Food),
    ("caribou coffee", Category::Food),
    ("tim horton", Category::Food),
    // Groceries
    ("kroger", Category::Food),
    ("whole foods", Category::Food),
    ("trader joe", Category::Food),
    ("safeway", Category::Food),
    ("aldi", Category::Food),
    ("publix", Category::Food),
    ("wegmans", Category::Food),
    ("food lion", Category::Food),
    ("harris teeter", Category::Food),
    ("sprouts", Category::Food),
    ("albertsons", Category::Food),
    ("winco", Category::Food),
    // Gas
    ("shell", Category::Gas),
    ("exxon", Category::Gas),
    ("chevron", Category::Gas),
    ("bp", Category::Gas),
    ("mobil", Category::Gas),
    ("speedway", Category::Gas),
    ("sunoco", Category::Gas),
    ("marathon", Category::Gas),
    ("valero", Category::Gas),
    ("phillips 66", Category::Gas),
    ("citgo", Category::Gas),
    // Retail (big-box names also appear in MIXED_RETAILERS, which is
    // consulted first by the classifier; these keys still drive the vendor
    // extractor's header scan)
    ("target", Category::Retail),
    ("walmart", Category::Retail),
    ("costco", Category::Retail),
    ("amazon", Category::Retail),
    ("best buy", Category::Retail),
    ("home depot", Category::Retail),
    ("lowe", Category::Retail),
    ("ikea", Category::Retail),
    ("apple store", Category::Retail),
    ("staples", Category::Retail),
    ("office depot", Category::Retail),
    ("macy", Category::Retail),
    ("nordstrom", Category::Retail),
    ("kohl", Category::Retail),
    ("tj maxx", Category::Retail),
    ("marshalls", Category::Retail),
    ("old navy", Category::Retail),
    ("gamestop", Category::Retail),
    // Pharmacy chains (folded into retail; also mixed retailers)
    ("cvs", Category::Retail),
    ("walgreens", Category::Retail),
    ("rite aid", Category::Retail),
    ("duane reade", Category::Retail),
    // Entertainment
    ("amc theatre", Category::Entertainment),
    ("amc", Category::Entertainment),
    ("regal", Category::Entertainment),
    ("cinemark", Category::Entertainment),
    ("netflix", Category::Entertainment),
    ("spotify", Category::Entertainment),
    ("hulu", Category::Entertainment),
    ("ticketmaster", Category::Entertainment),
    ("fandango", Category::Entertainment),
    ("stubhub", Category::Entertainment),
    ("dave & buster", Category::Entertainment),
];

// ── Mixed retailers ──────────────────────────────────────────────────────────

/// Chains that sell both food and general merchandise. Name alone cannot
/// classify these; the classifier inspects the receipt body instead.
pub const MIXED_RETAILERS: &[&str] = &[
    "target",
    "walmart",
    "wal-mart",
    "costco",
    "sam's club",
    "sams club",
    "cvs",
    "walgreens",
    "rite aid",
    "duane reade",
    "dollar general",
    "dollar tree",
    "family dollar",
    "7-eleven",
    "circle k",
    "meijer",
    "kmart",
    "big lots",
];

// ── Known vendor names (recognition key → display form) ──────────────────────

pub const KNOWN_VENDORS: &[(&str, &str)] = &[
    ("mcdonalds", "McDonald's"),
    ("burger king", "Burger King"),
    ("wendys", "Wendy's"),
    ("taco bell", "Taco Bell"),
    ("chick-fil-a", "Chick-fil-A"),
    ("chickfila", "Chick-fil-A"),
    ("subway", "Subway"),
    ("chipotle", "Chipotle"),
    ("shell", "Shell"),
    ("exxon", "Exxon"),
    ("chevron", "Chevron"),
    ("bp", "BP"),
    ("mobil", "Mobil"),
    ("speedway", "Speedway"),
    ("target", "Target"),
    ("walmart", "Walmart"),
    ("costco", "Costco"),
    ("amazon", "Amazon"),
    ("best buy", "Best Buy"),
    ("kroger", "Kroger"),
    ("whole foods", "Whole Foods"),
    ("trader joes", "Trader Joe's"),
    ("safeway", "Safeway"),
    ("aldi", "Aldi"),
    ("publix", "Publix"),
    ("starbucks", "Starbucks"),
    ("dunkin", "Dunkin"),
    ("peets", "Peet's"),
    ("cvs", "CVS"),
    ("walgreens", "Walgreens"),
    ("rite aid", "Rite Aid"),
    ("home depot", "Home Depot"),
    ("lowes", "Lowe's"),
    ("7-eleven", "7-Eleven"),
    ("circle k", "Circle K"),
];

// ── Food vocabularies ────────────────────────────────────────────────────────

/// Vendor-name substrings that mark a food establishment.
pub const FOOD_VENDOR_KEYWORDS: &[&str] = &[
    "restaurant",
    "steakhouse",
    "smokehouse",
    "chophouse",
    "pizzeria",
    "trattoria",
    "brasserie",
    "taqueria",
    "cantina",
    "brewery",
    "bakery",
    "bistro",
    "diner",
    "grill",
    "deli",
    "cafe",
    "caffe",
    "eatery",
    "tavern",
    "kitchen",
    "buffet",
    "espresso",
    "coffee",
    "donut",
    "doughnut",
    "bagel",
    "burger",
    "pizza",
    "sushi",
    "ramen",
    "noodle",
    "pho ",
    "bbq",
    "barbecue",
    "wings",
    "juice",
    "smoothie",
    "ice cream",
    "gelato",
    "frozen yogurt",
];

/// Curated food brands whose names carry no generic food keyword.
pub const KNOWN_FOOD_VENDORS: &[&str] = &[
    "panera",
    "five guys",
    "shake shack",
    "in-n-out",
    "panda express",
    "olive garden",
    "applebee",
    "outback",
    "denny",
    "ihop",
    "waffle house",
    "cracker barrel",
    "red lobster",
    "buffalo wild wings",
    "jimmy john",
    "jersey mike",
    "qdoba",
    "culver",
    "zaxby",
    "bojangles",
    "raising cane",
    "wingstop",
    "sweetgreen",
    "cava",
];

/// Line-item substrings that mark a food purchase in the receipt body.
/// One hit anywhere is sufficient for the classifier — keep entries long
/// enough not to hide inside ordinary English words.
pub const FOOD_ITEM_KEYWORDS: &[&str] = &[
    "bagel",
    "coffee",
    "latte",
    "espresso",
    "cappuccino",
    "sandwich",
    "burger",
    "fries",
    "pizza",
    "salad",
    "soup",
    "burrito",
    "taco",
    "donut",
    "doughnut",
    "muffin",
    "croissant",
    "waffle",
    "pancake",
    "bacon",
    "sausage",
    "chicken",
    "turkey",
    "produce",
    "lettuce",
    "tomato",
    "potato",
    "onion",
    "banana",
    "avocado",
    "broccoli",
    "spinach",
    "cereal",
    "granola",
    "yogurt",
    "cheese",
    "milk",
    "eggs",
    "bread",
    "pasta",
    "sushi",
    "juice",
    "smoothie",
    "candy",
    "chocolate",
    "cookie",
    "ice cream",
    "gelato",
];

// ── Casing tables ────────────────────────────────────────────────────────────

/// Acronyms rendered fully uppercase by the title-caser.
pub const UPPERCASE_WORDS: &[&str] = &["cvs", "bp", "kfc", "bbq", "ihop", "amc", "usa", "nyc"];

/// Words kept lowercase mid-title (never as the first word).
pub const LOWERCASE_WORDS: &[&str] = &[
    "and", "or", "of", "the", "a", "an", "at", "by", "for", "in", "on", "to",
];

/// Name prefixes with a forced casing; the remainder of the word is
/// capitalized separately ("mcdonalds" → "McDonalds").
pub const PREFIX_RULES: &[(&str, &str)] = &[("mc", "Mc")];
