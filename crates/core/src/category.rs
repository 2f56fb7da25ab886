use serde::{Deserialize, Serialize};

/// Spending classification assigned to a receipt.
///
/// This is a closed set: every directory entry maps into one of these tags,
/// and unclassifiable receipts fall back to `Other` rather than erroring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Gas,
    Retail,
    Entertainment,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Food => write!(f, "food"),
            Category::Gas => write!(f, "gas"),
            Category::Retail => write!(f, "retail"),
            Category::Entertainment => write!(f, "entertainment"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Category::Food),
            "gas" => Ok(Category::Gas),
            "retail" => Ok(Category::Retail),
            "entertainment" => Ok(Category::Entertainment),
            "other" => Ok(Category::Other),
            other => Err(format!("Unknown category: '{other}'")),
        }
    }
}
