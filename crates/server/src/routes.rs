use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use spendtrackr_auth::{issue_token, verify_pin, Decision};
use spendtrackr_ocr::{ensure_data_url, OcrError};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/health", get(health))
        .route("/api/send-email", post(send_email))
        .route("/api/send-email/health", get(send_email_health))
        .route("/api/verify-pin", post(verify_pin_endpoint))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiResponse = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiResponse {
    (status, Json(json!({ "success": false, "error": message.into() })))
}

// ── /api/analyze ──────────────────────────────────────────────────────────────

async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let Some(ocr) = &state.ocr else {
        return api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "OCR_SPACE_API_KEY not configured. Get a free key at ocr.space",
        );
    };

    let Ok(Json(body)) = body else {
        return api_error(StatusCode::BAD_REQUEST, "No image data provided");
    };
    let Some(image) = body.get("image").and_then(Value::as_str) else {
        return api_error(StatusCode::BAD_REQUEST, "No image data provided");
    };
    let media_type = body
        .get("media_type")
        .and_then(Value::as_str)
        .unwrap_or("image/jpeg");

    let text = match ocr.recognize(&ensure_data_url(image, media_type)).await {
        Ok(text) => text,
        Err(OcrError::Timeout) => {
            return api_error(StatusCode::GATEWAY_TIMEOUT, "OCR service timeout. Please try again.")
        }
        Err(err @ OcrError::Service(_)) => {
            return api_error(StatusCode::BAD_GATEWAY, err.to_string())
        }
        Err(err) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    let record = spendtrackr_extract::analyze(&text);
    tracing::info!(vendor = %record.vendor, category = %record.category, "receipt analyzed");

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "total": record.total.and_then(|d| d.to_f64()),
                "vendor": record.vendor,
                "date": record.date,
                "category": record.category,
            }
        })),
    )
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let configured = state.config.ocr_configured();
    Json(json!({
        "status": if configured { "ok" } else { "missing_api_key" },
        "ocr_configured": configured,
    }))
}

// ── /api/send-email ───────────────────────────────────────────────────────────

async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    if !state.config.gmail_configured() {
        return api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email not configured. Missing GMAIL_ADDRESS or GMAIL_APP_PASSWORD.",
        );
    }
    if !state.config.recipient_configured() {
        return api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "No recipient configured. Missing RECEIPT_NOTIFICATION_EMAIL.",
        );
    }
    let Some(mailer) = &state.mailer else {
        return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Email transport unavailable");
    };

    let Ok(Json(body)) = body else {
        return api_error(StatusCode::BAD_REQUEST, "No data provided");
    };
    let amount = body.get("amount").and_then(Value::as_f64);
    let date = body.get("date").and_then(Value::as_str);
    let (Some(amount), Some(date)) = (amount, date) else {
        return api_error(StatusCode::BAD_REQUEST, "Missing required fields: amount and date");
    };
    let Some(image) = body.get("image").and_then(Value::as_str) else {
        return api_error(StatusCode::BAD_REQUEST, "No receipt image provided");
    };
    let Some(amount) = Decimal::from_f64(amount) else {
        return api_error(StatusCode::BAD_REQUEST, "Invalid amount");
    };

    match mailer.send_receipt(amount, date, image).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": format!("Email sent to {}", mailer.recipient()),
            })),
        ),
        Err(err) => {
            tracing::error!(error = %err, "receipt email failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

async fn send_email_health(State(state): State<AppState>) -> Json<Value> {
    let gmail = state.config.gmail_configured();
    let recipient = state.config.recipient_configured();
    Json(json!({
        "status": if gmail && recipient { "ok" } else { "not_configured" },
        "gmail_configured": gmail,
        "recipient_configured": recipient,
    }))
}

// ── /api/verify-pin ───────────────────────────────────────────────────────────

async fn verify_pin_endpoint(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let client = client_ip(&headers);

    let mut limiter = state.limiter.lock().await;
    if let Decision::Locked { retry_after_secs } = limiter.check(&client) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "success": false,
                "error": format!("Too many attempts. Try again in {retry_after_secs} seconds."),
                "lockout_remaining": retry_after_secs,
            })),
        );
    }

    let Ok(Json(body)) = body else {
        return api_error(StatusCode::BAD_REQUEST, "Invalid JSON");
    };
    let submitted = body.get("pin").and_then(Value::as_str).unwrap_or("");

    let Some(expected) = &state.config.app_pin else {
        return api_error(StatusCode::INTERNAL_SERVER_ERROR, "PIN not configured on server");
    };

    let is_valid = verify_pin(submitted, expected);
    limiter.record(&client, is_valid);

    if is_valid {
        (
            StatusCode::OK,
            Json(json!({ "success": true, "token": issue_token(expected) })),
        )
    } else {
        let attempts_remaining = match limiter.check(&client) {
            Decision::Allowed { attempts_remaining } => attempts_remaining,
            Decision::Locked { .. } => 0,
        };
        tracing::warn!(%client, "incorrect PIN attempt");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "success": false,
                "error": "Incorrect PIN",
                "attempts_remaining": attempts_remaining,
            })),
        )
    }
}

/// Client identifier for rate limiting: first hop of `x-forwarded-for`,
/// else `x-real-ip`, else a shared bucket.
fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
