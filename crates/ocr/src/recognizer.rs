use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR service timeout")]
    Timeout,
    #[error("OCR service error: {0}")]
    Service(String),
    #[error("OCR processing failed: {0}")]
    Processing(String),
    #[error("no text found in image")]
    NoText,
}

/// Abstraction over an OCR backend.
/// Implementations accept a `data:` URL image payload and return the
/// recognized multi-line text.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    async fn recognize(&self, image_data_url: &str) -> Result<String, OcrError>;
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns a pre-set string — lets the HTTP layer and extraction pipeline be
/// exercised without a live OCR service.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl OcrBackend for MockRecognizer {
    async fn recognize(&self, _image_data_url: &str) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_preset_text() {
        let r = MockRecognizer::new("STARBUCKS\n$5.50");
        assert_eq!(r.recognize("data:image/jpeg;base64,xxxx").await.unwrap(), "STARBUCKS\n$5.50");
    }

    #[tokio::test]
    async fn mock_ignores_image_content() {
        let r = MockRecognizer::new("hello");
        assert_eq!(r.recognize("").await.unwrap(), "hello");
        assert_eq!(r.recognize("anything").await.unwrap(), "hello");
    }
}
