use actix_web::{HttpResponse, Responder};

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn server_status() -> impl Responder {
    HttpResponse::Ok().body("Quantum Asset Management Server is running!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, web, App};

    #[actix_web::test]
    async fn liveness_is_plain_text() {
        let app = actix_web::test::init_service(
            App::new().route("/", web::get().to(server_status)),
        )
        .await;
        let req = actix_web::test::TestRequest::get().uri("/").to_request();
        let res = actix_web::test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, "Quantum Asset Management Server is running!");
    }
}
