pub mod admin;
pub mod auth;

pub use admin::AdminMiddleware;
pub use auth::AuthMiddleware;

use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::ResponseError;

use crate::utils::AppError;

/// Short-circuits a gated request with the error's structured response,
/// without ever invoking the wrapped handler.
pub(crate) fn short_circuit<B>(req: ServiceRequest, error: AppError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(error.error_response()).map_into_right_body()
}
