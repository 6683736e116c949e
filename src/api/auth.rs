use actix_web::{web, HttpResponse, ResponseError};

use crate::services::token_service::{self, TokenRequest, TokenResponse};

#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed credential for the supplied claims", body = TokenResponse),
        (status = 500, description = "Signing failed")
    )
)]
pub async fn issue_token(request: web::Json<TokenRequest>) -> HttpResponse {
    log::info!("🔐 POST /jwt - email: {}", request.email);

    match token_service::issue_token(request.into_inner()) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(e) => {
            log::error!("❌ Token issuance failed: {}", e);
            e.error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token_service;
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn issued_token_encodes_the_posted_claims() {
        let app = test::init_service(
            App::new().route("/jwt", web::post().to(issue_token)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!({ "email": "alice@example.com", "name": "Alice" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        let claims = token_service::verify_token(body["token"].as_str().unwrap()).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.extra.get("name"), Some(&json!("Alice")));
    }

    #[actix_web::test]
    async fn claims_without_an_identity_are_rejected() {
        let app = test::init_service(
            App::new().route("/jwt", web::post().to(issue_token)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!({ "name": "nobody" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);
    }
}
