use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::database::MongoDB;
use crate::services::{token_service::Claims, user_service};
use crate::utils::AppError;

/// Authorization gate. Must be composed after `AuthMiddleware`: it reads
/// the claims that gate attached, resolves the claimed email to a stored
/// user record (exactly one lookup, no caching across requests), and
/// short-circuits with 403 unless that user's role is "admin".
pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Composition contract: the auth gate runs first and attaches
            // the claims. A bare request still fails closed.
            let email = req.extensions().get::<Claims>().map(|c| c.email.clone());
            let Some(email) = email else {
                return Ok(super::short_circuit(req, AppError::Unauthorized));
            };

            let Some(db) = req.app_data::<web::Data<MongoDB>>().cloned() else {
                return Ok(super::short_circuit(
                    req,
                    AppError::Database("store handle not configured".to_string()),
                ));
            };

            match user_service::is_admin(&db, &email).await {
                Ok(true) => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Ok(false) => Ok(super::short_circuit(req, AppError::Forbidden)),
                Err(e) => Ok(super::short_circuit(req, e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::AuthMiddleware;
    use crate::models::NewUser;
    use crate::services::token_service::{self, TokenRequest};
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::{test, App, HttpResponse};
    use mongodb::Client;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(&uri).await.unwrap();
        MongoDB::with_client(client, "quantumAssetTestDB")
    }

    async fn secret() -> HttpResponse {
        HttpResponse::Ok().body("only admins see this")
    }

    fn bearer_for(email: &str) -> String {
        let token = token_service::issue_token(TokenRequest {
            email: email.to_string(),
            extra: serde_json::Map::new(),
        })
        .unwrap();
        format!("Bearer {}", token)
    }

    macro_rules! gated_app {
        ($db:expr) => {
            test::init_service(
                App::new().app_data(web::Data::new($db)).service(
                    // wrap() order is reversed at runtime: the auth gate
                    // registered last runs first
                    web::resource("/secret")
                        .wrap(AdminMiddleware)
                        .wrap(AuthMiddleware)
                        .route(web::get().to(secret)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn request_without_credential_is_unauthorized_before_any_lookup() {
        // Lazy client: nothing here talks to a real server.
        let app = gated_app!(test_db().await);
        let req = test::TestRequest::get().uri("/secret").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn non_admin_identity_is_forbidden() {
        let db = test_db().await;
        let email = format!(
            "plain-{}@example.com",
            chrono::Utc::now().timestamp_micros()
        );
        user_service::register_user(
            &db,
            NewUser {
                email: email.clone(),
                name: None,
            },
        )
        .await
        .unwrap();

        let app = gated_app!(db);
        let req = test::TestRequest::get()
            .uri("/secret")
            .insert_header((AUTHORIZATION, bearer_for(&email)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 403);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "forbidden access");
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn unknown_identity_is_forbidden() {
        let db = test_db().await;
        let app = gated_app!(db);
        let req = test::TestRequest::get()
            .uri("/secret")
            .insert_header((AUTHORIZATION, bearer_for("ghost@example.com")))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 403);
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn admin_identity_passes_through() {
        let db = test_db().await;
        let email = format!(
            "admin-{}@example.com",
            chrono::Utc::now().timestamp_micros()
        );
        let outcome = user_service::register_user(
            &db,
            NewUser {
                email: email.clone(),
                name: None,
            },
        )
        .await
        .unwrap();
        user_service::promote_to_admin(&db, &outcome.inserted_id.unwrap())
            .await
            .unwrap();

        let app = gated_app!(db);
        let req = test::TestRequest::get()
            .uri("/secret")
            .insert_header((AUTHORIZATION, bearer_for(&email)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
    }
}
