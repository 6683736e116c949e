use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::bson::oid::ObjectId;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Missing, malformed, wrongly-signed, or expired credential.
    Unauthorized,
    /// Valid credential but insufficient role or identity mismatch.
    Forbidden,
    /// Path parameter that is not a valid store identifier.
    InvalidId(String),
    /// Underlying store operation failed.
    Database(String),
    /// Credential signing failed (misconfigured secret).
    Token(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized access"),
            AppError::Forbidden => write!(f, "forbidden access"),
            AppError::InvalidId(id) => write!(f, "invalid identifier: {}", id),
            AppError::Database(msg) => write!(f, "database error: {}", msg),
            AppError::Token(msg) => write!(f, "token error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.to_string() }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::Database(error.to_string())
    }
}

/// Single identifier-construction path for every id-keyed operation.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}
