//! Receipt notification delivery over Gmail SMTP.
//!
//! One message per analyzed receipt: the subject carries the amount and the
//! date (`$2.67   1/23/2026`, three spaces between), the body is empty, and
//! the photographed receipt rides along as a JPEG attachment.

use base64::Engine;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use rust_decimal::Decimal;
use thiserror::Error;

const GMAIL_SMTP_SERVER: &str = "smtp.gmail.com";

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("invalid attachment content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),
    #[error("receipt image is not valid base64: {0}")]
    ImageDecode(#[from] base64::DecodeError),
}

/// Sends receipt notifications from a Gmail account to a fixed recipient.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Mailer {
    /// STARTTLS transport against Gmail's submission port, authenticated
    /// with an app password.
    pub fn gmail(
        address: impl Into<String>,
        app_password: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Result<Self, EmailError> {
        let address = address.into();
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(GMAIL_SMTP_SERVER)?
            .credentials(Credentials::new(address.clone(), app_password.into()))
            .build();
        Ok(Self { transport, from: address, to: recipient.into() })
    }

    /// Send one receipt notification.
    ///
    /// `image_base64` may carry a `data:` URL prefix; it is stripped before
    /// decoding.
    pub async fn send_receipt(
        &self,
        amount: Decimal,
        date: &str,
        image_base64: &str,
    ) -> Result<(), EmailError> {
        let message = build_receipt_message(&self.from, &self.to, amount, date, image_base64)?;
        self.transport.send(message).await?;
        tracing::info!(to = %self.to, %date, "receipt notification sent");
        Ok(())
    }

    pub fn recipient(&self) -> &str {
        &self.to
    }
}

fn build_receipt_message(
    from: &str,
    to: &str,
    amount: Decimal,
    date: &str,
    image_base64: &str,
) -> Result<Message, EmailError> {
    let formatted_date = format_date_no_leading_zeros(date);
    let subject = format!("${amount:.2}   {formatted_date}");
    let filename = format!("receipt_{}.jpg", formatted_date.replace('/', "-"));

    // Strip a data-URL prefix if present.
    let raw = image_base64.split_once(',').map_or(image_base64, |(_, body)| body);
    let image_bytes = base64::engine::general_purpose::STANDARD.decode(raw.trim())?;

    let attachment =
        Attachment::new(filename).body(image_bytes, ContentType::parse("image/jpeg")?);

    Ok(Message::builder()
        .from(from.parse()?)
        .to(to.parse()?)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(String::new()))
                .singlepart(attachment),
        )?)
}

/// `YYYY-MM-DD` → `M/D/YYYY` with no leading zeros; anything that does not
/// look like an ISO date passes through unchanged.
pub fn format_date_no_leading_zeros(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    if let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) {
        if let (Ok(month), Ok(day)) = (month.parse::<u32>(), day.parse::<u32>()) {
            return format!("{month}/{day}/{year}");
        }
    }
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // A 1x1 white JPEG is overkill for these tests; any payload decodes.
    const IMAGE_B64: &str = "aGVsbG8gcmVjZWlwdA==";

    #[test]
    fn date_loses_leading_zeros() {
        assert_eq!(format_date_no_leading_zeros("2026-01-23"), "1/23/2026");
        assert_eq!(format_date_no_leading_zeros("2026-11-05"), "11/5/2026");
    }

    #[test]
    fn malformed_date_passes_through() {
        assert_eq!(format_date_no_leading_zeros("23/01/2026"), "23/01/2026");
        assert_eq!(format_date_no_leading_zeros("no date"), "no date");
    }

    #[test]
    fn message_builds_with_subject_and_attachment() {
        let amount = Decimal::from_str("2.67").unwrap();
        let message =
            build_receipt_message("me@gmail.com", "you@example.com", amount, "2026-01-23", IMAGE_B64)
                .unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(rendered.contains("$2.67   1/23/2026"));
        assert!(rendered.contains("receipt_1-23-2026.jpg"));
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        let amount = Decimal::from_str("10.00").unwrap();
        let with_prefix = format!("data:image/jpeg;base64,{IMAGE_B64}");
        assert!(build_receipt_message("me@gmail.com", "you@example.com", amount, "2026-02-01", &with_prefix)
            .is_ok());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let amount = Decimal::from_str("1.00").unwrap();
        let err =
            build_receipt_message("me@gmail.com", "you@example.com", amount, "2026-02-01", "!!!")
                .unwrap_err();
        assert!(matches!(err, EmailError::ImageDecode(_)));
    }

    #[test]
    fn amount_formatted_to_two_decimals() {
        let amount = Decimal::from_str("5").unwrap();
        let message =
            build_receipt_message("me@gmail.com", "you@example.com", amount, "2026-01-02", IMAGE_B64)
                .unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(rendered.contains("$5.00   1/2/2026"));
    }
}
