use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Compare a submitted PIN against the configured one.
///
/// Both sides are hashed first so the comparison cost does not depend on
/// where the strings diverge.
pub fn verify_pin(submitted: &str, expected: &str) -> bool {
    Sha256::digest(submitted.as_bytes()) == Sha256::digest(expected.as_bytes())
}

/// Session token handed out after a successful PIN check:
/// `sha256("<pin>-<unix_ts>-spendtrackr")`, first 32 hex chars.
pub fn issue_token(pin: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    issue_token_at(pin, now)
}

fn issue_token_at(pin: &str, unix_ts: u64) -> String {
    let digest = Sha256::digest(format!("{pin}-{unix_ts}-spendtrackr").as_bytes());
    hex::encode(digest)[..32].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_pins_verify() {
        assert!(verify_pin("1234", "1234"));
    }

    #[test]
    fn mismatched_pins_fail() {
        assert!(!verify_pin("1234", "4321"));
        assert!(!verify_pin("", "4321"));
        assert!(!verify_pin("123", "1234"));
    }

    #[test]
    fn token_is_32_hex_chars() {
        let token = issue_token("1234");
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn token_depends_on_pin_and_time() {
        assert_ne!(issue_token_at("1234", 100), issue_token_at("9999", 100));
        assert_ne!(issue_token_at("1234", 100), issue_token_at("1234", 101));
        assert_eq!(issue_token_at("1234", 100), issue_token_at("1234", 100));
    }
}
