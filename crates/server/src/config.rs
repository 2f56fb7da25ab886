use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read once from the environment at startup.
///
/// Every credential is optional: a missing one degrades the endpoints that
/// need it to a structured error response instead of preventing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub ocr_api_key: Option<String>,
    pub gmail_address: Option<String>,
    pub gmail_app_password: Option<String>,
    pub notification_email: Option<String>,
    pub app_pin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let bind = env::var("BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));
        Self {
            bind,
            ocr_api_key: non_empty(env::var("OCR_SPACE_API_KEY").ok()),
            gmail_address: non_empty(env::var("GMAIL_ADDRESS").ok()),
            gmail_app_password: non_empty(env::var("GMAIL_APP_PASSWORD").ok()),
            notification_email: non_empty(env::var("RECEIPT_NOTIFICATION_EMAIL").ok()),
            app_pin: non_empty(env::var("APP_PIN").ok()),
        }
    }

    pub fn ocr_configured(&self) -> bool {
        self.ocr_api_key.is_some()
    }

    pub fn gmail_configured(&self) -> bool {
        self.gmail_address.is_some() && self.gmail_app_password.is_some()
    }

    pub fn recipient_configured(&self) -> bool {
        self.notification_email.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
