use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::database::MongoDB;
use crate::models::{MyAsset, MyAssetInput};
use crate::services::my_asset_service;

#[derive(Debug, Deserialize)]
pub struct MyAssetsQuery {
    pub email: String,
}

#[utoipa::path(
    get,
    path = "/myassets",
    tag = "MyAssets",
    params(("email" = String, Query, description = "Partition key; trusted as supplied")),
    responses(
        (status = 200, description = "My-asset records for the email", body = [MyAsset]),
        (status = 400, description = "Missing email query parameter")
    )
)]
pub async fn list_my_assets(
    db: web::Data<MongoDB>,
    query: web::Query<MyAssetsQuery>,
) -> HttpResponse {
    log::info!("📋 GET /myassets - email: {}", query.email);

    match my_asset_service::list_by_email(&db, &query.email).await {
        Ok(my_assets) => HttpResponse::Ok().json(my_assets),
        Err(e) => {
            log::error!("❌ Error listing my-assets: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/myassets",
    tag = "MyAssets",
    request_body = MyAssetInput,
    responses(
        (status = 200, description = "Insert outcome")
    )
)]
pub async fn create_my_asset(
    db: web::Data<MongoDB>,
    body: web::Json<MyAssetInput>,
) -> HttpResponse {
    log::info!("📝 POST /myassets - email: {}, name: {}", body.email, body.name);

    match my_asset_service::create_my_asset(&db, body.into_inner()).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ My-asset creation failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/myassets/{id}",
    tag = "MyAssets",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "Delete outcome"),
        (status = 400, description = "Malformed identifier")
    )
)]
pub async fn delete_my_asset(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /myassets/{}", id);

    match my_asset_service::delete_my_asset(&db, &id).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::error!("❌ My-asset deletion failed: {}", e);
            e.error_response()
        }
    }
}
