//! Webhook transmission headers and acknowledgement body.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::CheckoutError;
use crate::domain::webhook::WebhookTransmission;

pub const AUTH_ALGO_HEADER: &str = "paypal-auth-algo";
pub const CERT_URL_HEADER: &str = "paypal-cert-url";
pub const TRANSMISSION_ID_HEADER: &str = "paypal-transmission-id";
pub const TRANSMISSION_SIG_HEADER: &str = "paypal-transmission-sig";
pub const TRANSMISSION_TIME_HEADER: &str = "paypal-transmission-time";

/// Reads the signature headers. Every one of them is required.
pub fn transmission_from_headers(headers: &HeaderMap) -> Result<WebhookTransmission, CheckoutError> {
    let read = |name: &'static str| -> Result<String, CheckoutError> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CheckoutError::validation(name, format!("Missing {} header", name)))
    };

    Ok(WebhookTransmission {
        auth_algo: read(AUTH_ALGO_HEADER)?,
        cert_url: read(CERT_URL_HEADER)?,
        transmission_id: read(TRANSMISSION_ID_HEADER)?,
        transmission_sig: read(TRANSMISSION_SIG_HEADER)?,
        transmission_time: read(TRANSMISSION_TIME_HEADER)?,
    })
}

/// 200 body for an accepted delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookAckResponse {
    pub received: bool,
    pub event_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn full_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        for name in [
            AUTH_ALGO_HEADER,
            CERT_URL_HEADER,
            TRANSMISSION_ID_HEADER,
            TRANSMISSION_SIG_HEADER,
            TRANSMISSION_TIME_HEADER,
        ] {
            headers.insert(name, HeaderValue::from_static("value"));
        }
        headers
    }

    #[test]
    fn reads_all_headers() {
        let transmission = transmission_from_headers(&full_headers()).unwrap();
        assert_eq!(transmission.transmission_id, "value");
    }

    #[test]
    fn missing_header_is_named() {
        let mut headers = full_headers();
        headers.remove(TRANSMISSION_SIG_HEADER);
        let err = transmission_from_headers(&headers).unwrap_err();
        assert!(matches!(err, CheckoutError::ValidationFailed { ref field, .. } if field == TRANSMISSION_SIG_HEADER));
    }
}
