use crate::errors::ApiError;
use crate::forms;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in every token issued by the server. The client may send
/// arbitrary profile fields along with the email at sign-in; they are carried
/// through the token untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,

    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiry (Unix timestamp, seconds), one day after issuance.
    pub exp: i64,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub fn issue(session: &forms::SessionStart, secret: &str) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        email: session.email.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::days(1)).timestamp(),
        extra: session.extra.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign token: {:?}", err);
        ApiError::Internal
    })
}

pub fn verify(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized)
}
