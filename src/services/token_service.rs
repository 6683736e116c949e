use crate::utils::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Credentials live for one hour; validity is signature + expiry only,
/// recomputed on every verification. There is no revocation list.
const TOKEN_TTL_HOURS: i64 = 1;

/// Decoded credential payload. `email` is the identity the gates act on;
/// any other fields the caller signed ride along untouched in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub iat: usize,
    pub exp: usize,
}

/// Body of POST /jwt. Arbitrary extra fields are preserved in the token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

pub(crate) fn token_secret() -> String {
    std::env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

/// Signs the claims with the process-wide secret and a 1-hour expiry.
pub fn issue_token(request: TokenRequest) -> Result<String, AppError> {
    let now = Utc::now();
    let mut extra = request.extra;
    // Timestamps are always service-assigned, even if the caller sent some
    extra.remove("iat");
    extra.remove("exp");

    let claims = Claims {
        email: request.email,
        extra,
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(token_secret().as_ref()),
    )
    .map_err(|e| AppError::Token(e.to_string()))
}

/// Checks signature and expiry. Every failure mode (malformed token, bad
/// signature, elapsed expiry) collapses to `Unauthorized`; a missing
/// credential never reaches this function.
pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(token_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}
