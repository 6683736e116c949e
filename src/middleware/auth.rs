use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::services::token_service;
use crate::utils::AppError;

/// Authentication gate. Requires `Authorization: Bearer <token>` and a
/// credential that verifies; otherwise the request short-circuits with
/// 401 before the handler runs. On success the decoded claims are
/// attached to the request for extraction via `web::ReqData<Claims>`.
/// No store access.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .map(str::to_owned);

        let claims = match token.map(|t| token_service::verify_token(&t)) {
            Some(Ok(claims)) => claims,
            // Absent and invalid credentials are both 401; the handler
            // never runs either way.
            Some(Err(_)) | None => {
                let res = super::short_circuit(req, AppError::Unauthorized);
                return Box::pin(async move { Ok(res) });
            }
        };

        req.extensions_mut().insert(claims);

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token_service::{Claims, TokenRequest};
    use actix_web::{test, web, App, HttpResponse};

    async fn whoami(user: web::ReqData<Claims>) -> HttpResponse {
        HttpResponse::Ok().body(user.email.clone())
    }

    macro_rules! guarded_app {
        () => {
            test::init_service(App::new().service(
                web::resource("/whoami")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(whoami)),
            ))
            .await
        };
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = guarded_app!();
        let req = test::TestRequest::get().uri("/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "unauthorized access");
    }

    #[actix_web::test]
    async fn non_bearer_header_is_unauthorized() {
        let app = guarded_app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, "Basic YWxhZGRpbg=="))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn garbage_token_is_unauthorized() {
        let app = guarded_app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, "Bearer not.a.token"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn expired_token_is_unauthorized() {
        use chrono::{Duration, Utc};
        use jsonwebtoken::{encode, EncodingKey, Header};

        let now = Utc::now();
        let claims = Claims {
            email: "alice@example.com".to_string(),
            extra: serde_json::Map::new(),
            iat: (now - Duration::hours(2)).timestamp() as usize,
            exp: (now - Duration::hours(1)).timestamp() as usize,
        };
        let stale = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(token_service::token_secret().as_ref()),
        )
        .unwrap();

        let app = guarded_app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {}", stale)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "unauthorized access");
    }

    #[actix_web::test]
    async fn tampered_token_is_unauthorized() {
        let mut token = token_service::issue_token(TokenRequest {
            email: "alice@example.com".to_string(),
            extra: serde_json::Map::new(),
        })
        .unwrap();
        token.pop();
        token.push('x');

        let app = guarded_app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn valid_token_reaches_the_handler_with_claims() {
        let token = token_service::issue_token(TokenRequest {
            email: "alice@example.com".to_string(),
            extra: serde_json::Map::new(),
        })
        .unwrap();

        let app = guarded_app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let body = test::read_body(res).await;
        assert_eq!(body, "alice@example.com");
    }
}
