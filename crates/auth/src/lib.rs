//! PIN verification with per-client lockout.
//!
//! The attempt tracker is an explicit keyed store owned by whoever holds the
//! [`RateLimiter`] — typically shared server state — rather than a process
//! global, so tests and multi-tenant embedding stay straightforward.

pub mod pin;
pub mod rate_limit;

pub use pin::{issue_token, verify_pin};
pub use rate_limit::{Decision, RateLimiter, MAX_ATTEMPTS, LOCKOUT_DURATION};
