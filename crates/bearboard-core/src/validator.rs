//! Shared-secret API key validation.
//!
//! The serverless side of the key check: one secret, one comparison.
//! [`KeyValidator::handle`] reproduces the function's HTTP contract
//! (CORS preflight, malformed bodies, 200/401) so it can be hosted behind
//! any HTTP front end or exercised locally from the CLI.

use serde::{Deserialize, Serialize};

/// Environment variable holding the shared secret.
pub const SECRET_ENV: &str = "SECRET_API_KEY";

/// Request body sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub x_api_key: Option<String>,
}

/// Response body returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub authorized: bool,
    pub message: String,
}

impl ValidationResponse {
    fn authorized() -> Self {
        Self {
            authorized: true,
            message: "Success".to_string(),
        }
    }

    fn denied(message: &str) -> Self {
        Self {
            authorized: false,
            message: message.to_string(),
        }
    }
}

/// HTTP-shaped reply from the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorReply {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl ValidatorReply {
    fn json(status: u16, response: &ValidationResponse) -> Self {
        Self {
            status,
            headers: vec![
                ("Access-Control-Allow-Origin", "*"),
                ("Content-Type", "application/json"),
            ],
            body: serde_json::to_string(response).unwrap_or_default(),
        }
    }

    fn preflight() -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Access-Control-Allow-Origin", "*"),
                ("Access-Control-Allow-Headers", "Content-Type"),
                ("Access-Control-Allow-Methods", "OPTIONS,POST"),
            ],
            body: String::new(),
        }
    }

    /// Parsed body, if this reply carries one.
    pub fn response(&self) -> Option<ValidationResponse> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Compares presented keys against one shared secret.
///
/// Comparison goes through BLAKE3 digests, whose equality is constant-time.
#[derive(Clone)]
pub struct KeyValidator {
    secret: Option<blake3::Hash>,
}

impl KeyValidator {
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self {
            secret: Some(blake3::hash(secret.as_ref().as_bytes())),
        }
    }

    /// Validator reading [`SECRET_ENV`]. With the variable unset nothing
    /// is ever authorized.
    pub fn from_env() -> Self {
        match std::env::var(SECRET_ENV) {
            Ok(secret) => Self::new(secret),
            Err(_) => {
                tracing::warn!("{} is not set; every key will be rejected", SECRET_ENV);
                Self { secret: None }
            }
        }
    }

    pub fn is_authorized(&self, key: Option<&str>) -> bool {
        match (&self.secret, key) {
            (Some(secret), Some(key)) => *secret == blake3::hash(key.as_bytes()),
            _ => false,
        }
    }

    /// Handle one HTTP request to the validation function.
    pub fn handle(&self, method: &str, body: Option<&str>) -> ValidatorReply {
        if method.eq_ignore_ascii_case("OPTIONS") {
            return ValidatorReply::preflight();
        }

        let body = body.filter(|b| !b.is_empty()).unwrap_or("{}");
        let request: serde_json::Value = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("Rejecting malformed validation body: {}", e);
                let denied = ValidationResponse::denied("Malformed request body");
                return ValidatorReply::json(400, &denied);
            }
        };

        // Anything but a string key is well-formed but can never match.
        let key = request.get("x_api_key").and_then(serde_json::Value::as_str);
        let authorized = self.is_authorized(key);
        tracing::debug!(
            key_len = key.map(str::len).unwrap_or(0),
            authorized,
            "Validation request"
        );

        if authorized {
            ValidatorReply::json(200, &ValidationResponse::authorized())
        } else {
            ValidatorReply::json(401, &ValidationResponse::denied("Invalid API Key"))
        }
    }
}

impl std::fmt::Debug for KeyValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyValidator")
            .field("configured", &self.secret.is_some())
            .finish()
    }
}
