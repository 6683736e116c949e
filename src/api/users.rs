use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;

use crate::database::MongoDB;
use crate::models::{NewUser, User};
use crate::services::{token_service::Claims, user_service};
use crate::utils::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user records", body = [User]),
        (status = 401, description = "Missing or invalid credential"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /users");

    match user_service::list_users(&db).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// Self-only: the queried email must equal the caller's own authenticated
/// identity, regardless of role.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Identity to check; must be the caller's own")),
    responses(
        (status = 200, description = "Whether the identity holds the admin role", body = AdminStatus),
        (status = 401, description = "Missing or invalid credential"),
        (status = 403, description = "Queried identity is not the caller's own")
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_admin(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> HttpResponse {
    let email = path.into_inner();
    log::info!("👤 GET /users/admin/{}", email);

    if email != user.email {
        log::warn!("⚠️ Identity mismatch: {} asked about {}", user.email, email);
        return AppError::Forbidden.error_response();
    }

    match user_service::is_admin(&db, &email).await {
        Ok(admin) => HttpResponse::Ok().json(AdminStatus { admin }),
        Err(e) => {
            log::error!("❌ Admin lookup failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Insert outcome, or a no-op marker when the identity already exists")
    )
)]
pub async fn register_user(db: web::Data<MongoDB>, body: web::Json<NewUser>) -> HttpResponse {
    log::info!("📝 POST /users - email: {}", body.email);

    match user_service::register_user(&db, body.into_inner()).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ Registration failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Store identifier of the user to promote")),
    responses(
        (status = 200, description = "Update outcome; matchedCount is 0 when the target does not exist"),
        (status = 400, description = "Malformed identifier"),
        (status = 401, description = "Missing or invalid credential"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn promote_admin(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("⬆️ PATCH /users/admin/{}", id);

    match user_service::promote_to_admin(&db, &id).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ Promotion failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Store identifier of the user to delete")),
    responses(
        (status = 200, description = "Delete outcome"),
        (status = 400, description = "Malformed identifier"),
        (status = 401, description = "Missing or invalid credential"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_user(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /users/{}", id);

    match user_service::delete_user(&db, &id).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ User deletion failed: {}", e);
            e.error_response()
        }
    }
}
