use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::recognizer::{OcrBackend, OcrError};

/// OCR.space parse endpoint.
pub const OCR_SPACE_URL: &str = "https://api.ocr.space/parse/image";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the hosted OCR.space recognition API.
pub struct OcrSpaceClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OcrSpaceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, OCR_SPACE_URL)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction");
        Self { http, api_key: api_key.into(), endpoint: endpoint.into() }
    }
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored_on_processing: bool,
    /// The service reports this as either a string or a list of strings.
    #[serde(rename = "ErrorMessage", default)]
    error_message: serde_json::Value,
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<ParsedResult>,
}

#[derive(Debug, Deserialize)]
struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

impl ParseResponse {
    fn error_text(&self) -> String {
        match &self.error_message {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            _ => "unknown error".to_string(),
        }
    }
}

#[async_trait]
impl OcrBackend for OcrSpaceClient {
    async fn recognize(&self, image_data_url: &str) -> Result<String, OcrError> {
        // Engine 2 handles receipt layouts better than the default.
        let form = [
            ("apikey", self.api_key.as_str()),
            ("base64Image", image_data_url),
            ("language", "eng"),
            ("isOverlayRequired", "false"),
            ("detectOrientation", "true"),
            ("scale", "true"),
            ("OCREngine", "2"),
        ];

        let response = self
            .http
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let response = response.error_for_status().map_err(classify_reqwest_error)?;
        let parsed: ParseResponse = response.json().await.map_err(classify_reqwest_error)?;

        if parsed.is_errored_on_processing {
            return Err(OcrError::Processing(parsed.error_text()));
        }
        if parsed.parsed_results.is_empty() {
            return Err(OcrError::NoText);
        }

        let text = parsed
            .parsed_results
            .iter()
            .map(|r| r.parsed_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        tracing::debug!(chars = text.len(), "ocr.space recognition complete");
        Ok(text)
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> OcrError {
    if err.is_timeout() {
        OcrError::Timeout
    } else {
        OcrError::Service(err.to_string())
    }
}

/// Prefix bare base64 with a `data:` URL header the way OCR.space expects.
pub fn ensure_data_url(image: &str, media_type: &str) -> String {
    if image.starts_with("data:") {
        image.to_string()
    } else {
        format!("data:{media_type};base64,{image}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_passthrough() {
        let url = "data:image/png;base64,abcd";
        assert_eq!(ensure_data_url(url, "image/jpeg"), url);
    }

    #[test]
    fn bare_base64_gets_prefixed() {
        assert_eq!(
            ensure_data_url("abcd", "image/jpeg"),
            "data:image/jpeg;base64,abcd"
        );
    }

    #[test]
    fn error_text_from_string() {
        let parsed: ParseResponse = serde_json::from_str(
            r#"{"IsErroredOnProcessing":true,"ErrorMessage":"bad image"}"#,
        )
        .unwrap();
        assert!(parsed.is_errored_on_processing);
        assert_eq!(parsed.error_text(), "bad image");
    }

    #[test]
    fn error_text_from_list() {
        let parsed: ParseResponse = serde_json::from_str(
            r#"{"IsErroredOnProcessing":true,"ErrorMessage":["one","two"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.error_text(), "one; two");
    }

    #[test]
    fn parsed_results_join() {
        let parsed: ParseResponse = serde_json::from_str(
            r#"{"ParsedResults":[{"ParsedText":"STARBUCKS"},{"ParsedText":"Total $5.50"}]}"#,
        )
        .unwrap();
        let text = parsed
            .parsed_results
            .iter()
            .map(|r| r.parsed_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(text, "STARBUCKS\nTotal $5.50");
    }
}
