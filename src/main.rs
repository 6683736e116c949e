mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use middleware::{AdminMiddleware, AuthMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Quantum Asset Management Server...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        // Route-level wrap() order is reversed at runtime: the auth gate
        // registered last always runs before the admin gate.
        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness
            .route("/", web::get().to(api::health::server_status))
            // Credential issuance
            .route("/jwt", web::post().to(api::auth::issue_token))
            // Users
            .service(
                web::resource("/users")
                    .route(
                        web::get()
                            .to(api::users::list_users)
                            .wrap(AdminMiddleware)
                            .wrap(AuthMiddleware),
                    )
                    .route(web::post().to(api::users::register_user)),
            )
            .service(
                web::resource("/users/admin/{email}")
                    .route(
                        web::get()
                            .to(api::users::check_admin)
                            .wrap(AuthMiddleware),
                    )
                    .route(
                        web::patch()
                            .to(api::users::promote_admin)
                            .wrap(AdminMiddleware)
                            .wrap(AuthMiddleware),
                    ),
            )
            .service(
                web::resource("/users/{id}").route(
                    web::delete()
                        .to(api::users::delete_user)
                        .wrap(AdminMiddleware)
                        .wrap(AuthMiddleware),
                ),
            )
            // Assets
            .service(
                web::resource("/assets")
                    .route(web::get().to(api::assets::list_assets))
                    .route(
                        web::post()
                            .to(api::assets::create_asset)
                            .wrap(AdminMiddleware)
                            .wrap(AuthMiddleware),
                    ),
            )
            .service(
                web::resource("/assets/{id}")
                    .route(web::get().to(api::assets::get_asset))
                    .route(web::put().to(api::assets::replace_asset))
                    .route(web::delete().to(api::assets::delete_asset)),
            )
            // MyAssets
            .service(
                web::resource("/myassets")
                    .route(web::get().to(api::my_assets::list_my_assets))
                    .route(web::post().to(api::my_assets::create_my_asset)),
            )
            .route(
                "/myassets/{id}",
                web::delete().to(api::my_assets::delete_my_asset),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
