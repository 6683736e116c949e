use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MongoDB;
use crate::models::{Asset, AssetInput};
use crate::services::asset_service;

#[utoipa::path(
    get,
    path = "/assets",
    tag = "Assets",
    responses(
        (status = 200, description = "All asset records", body = [Asset])
    )
)]
pub async fn list_assets(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📦 GET /assets");

    match asset_service::list_assets(&db).await {
        Ok(assets) => HttpResponse::Ok().json(assets),
        Err(e) => {
            log::error!("❌ Error listing assets: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/assets",
    tag = "Assets",
    request_body = AssetInput,
    responses(
        (status = 200, description = "Insert outcome"),
        (status = 401, description = "Missing or invalid credential"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_asset(db: web::Data<MongoDB>, body: web::Json<AssetInput>) -> HttpResponse {
    log::info!("📝 POST /assets - name: {}", body.name);

    match asset_service::create_asset(&db, body.into_inner()).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ Asset creation failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "Assets",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "The asset, or null when absent", body = Asset),
        (status = 400, description = "Malformed identifier")
    )
)]
pub async fn get_asset(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔍 GET /assets/{}", id);

    match asset_service::get_asset(&db, &id).await {
        Ok(asset) => HttpResponse::Ok().json(asset),
        Err(e) => {
            log::error!("❌ Asset lookup failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "Assets",
    params(("id" = String, Path, description = "Store identifier")),
    request_body = AssetInput,
    responses(
        (status = 200, description = "Upsert outcome; a fresh identifier creates the record"),
        (status = 400, description = "Malformed identifier")
    )
)]
pub async fn replace_asset(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<AssetInput>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("♻️ PUT /assets/{}", id);

    match asset_service::replace_asset(&db, &id, body.into_inner()).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ Asset replace failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "Assets",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "Delete outcome"),
        (status = 400, description = "Malformed identifier")
    )
)]
pub async fn delete_asset(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /assets/{}", id);

    match asset_service::delete_asset(&db, &id).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ Asset deletion failed: {}", e);
            e.error_response()
        }
    }
}
