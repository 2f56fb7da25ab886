use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Failed attempts allowed before a client is locked out.
pub const MAX_ATTEMPTS: u32 = 8;
/// How long a locked-out client must wait.
pub const LOCKOUT_DURATION: Duration = Duration::from_secs(300);

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { attempts_remaining: u32 },
    Locked { retry_after_secs: u64 },
}

#[derive(Debug, Default)]
struct AttemptState {
    attempts: u32,
    lockout_until: Option<Instant>,
}

/// Keyed attempt tracker: client identifier → failed-attempt count and
/// lockout expiry. Lockout expiry resets the counter; successful
/// authentication resets it immediately.
#[derive(Debug)]
pub struct RateLimiter {
    max_attempts: u32,
    lockout: Duration,
    clients: HashMap<String, AttemptState>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS, LOCKOUT_DURATION)
    }
}

impl RateLimiter {
    pub fn new(max_attempts: u32, lockout: Duration) -> Self {
        Self { max_attempts, lockout, clients: HashMap::new() }
    }

    /// Whether `client` may attempt authentication right now.
    pub fn check(&mut self, client: &str) -> Decision {
        self.check_at(client, Instant::now())
    }

    /// Record the outcome of an authentication attempt for `client`.
    pub fn record(&mut self, client: &str, success: bool) {
        self.record_at(client, success, Instant::now())
    }

    fn check_at(&mut self, client: &str, now: Instant) -> Decision {
        let state = self.clients.entry(client.to_string()).or_default();

        if let Some(until) = state.lockout_until {
            if until > now {
                let retry_after_secs = (until - now).as_secs();
                return Decision::Locked { retry_after_secs };
            }
            // Lockout expired.
            state.attempts = 0;
            state.lockout_until = None;
        }

        Decision::Allowed { attempts_remaining: self.max_attempts.saturating_sub(state.attempts) }
    }

    fn record_at(&mut self, client: &str, success: bool, now: Instant) {
        let lockout = self.lockout;
        let max_attempts = self.max_attempts;
        let state = self.clients.entry(client.to_string()).or_default();

        if success {
            state.attempts = 0;
            state.lockout_until = None;
        } else {
            state.attempts += 1;
            if state.attempts >= max_attempts {
                state.lockout_until = Some(now + lockout);
            }
        }
    }
}
