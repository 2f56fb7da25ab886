pub mod category;
pub mod receipt;

pub use category::Category;
pub use receipt::{ReceiptRecord, UNKNOWN_VENDOR};
