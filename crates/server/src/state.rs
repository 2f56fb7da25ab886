use std::sync::Arc;

use spendtrackr_auth::RateLimiter;
use spendtrackr_email::Mailer;
use spendtrackr_ocr::OcrBackend;
use tokio::sync::Mutex;

use crate::config::Config;

/// Shared handler state. The rate limiter is the only mutable piece and is
/// guarded by a single mutex — PIN attempts are rare and short.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ocr: Option<Arc<dyn OcrBackend>>,
    pub mailer: Option<Arc<Mailer>>,
    pub limiter: Arc<Mutex<RateLimiter>>,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let ocr = config
            .ocr_api_key
            .as_ref()
            .map(|key| Arc::new(spendtrackr_ocr::OcrSpaceClient::new(key.clone())) as Arc<dyn OcrBackend>);

        let mailer = match (&config.gmail_address, &config.gmail_app_password, &config.notification_email)
        {
            (Some(address), Some(password), Some(recipient)) => Some(Arc::new(Mailer::gmail(
                address.clone(),
                password.clone(),
                recipient.clone(),
            )?)),
            _ => None,
        };

        Ok(Self {
            config: Arc::new(config),
            ocr,
            mailer,
            limiter: Arc::new(Mutex::new(RateLimiter::default())),
        })
    }
}
