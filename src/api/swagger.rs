use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quantum Asset Management API",
        version = "1.0.0",
        description = "CRUD API for inventory assets, per-user my-assets, and the user/role directory.\n\n**Authentication:** admin-gated endpoints require a JWT Bearer token obtained from `POST /jwt`.\n\n**Roles:** exactly one elevated role exists (`admin`); it is granted via `PATCH /users/admin/{id}` and never revoked independently."
    ),
    paths(
        // Auth
        crate::api::auth::issue_token,

        // Health
        crate::api::health::server_status,

        // Users
        crate::api::users::list_users,
        crate::api::users::check_admin,
        crate::api::users::register_user,
        crate::api::users::promote_admin,
        crate::api::users::delete_user,

        // Assets
        crate::api::assets::list_assets,
        crate::api::assets::create_asset,
        crate::api::assets::get_asset,
        crate::api::assets::replace_asset,
        crate::api::assets::delete_asset,

        // MyAssets
        crate::api::my_assets::list_my_assets,
        crate::api::my_assets::create_my_asset,
        crate::api::my_assets::delete_my_asset,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::NewUser,
            crate::models::Asset,
            crate::models::AssetInput,
            crate::models::MyAsset,
            crate::models::MyAssetInput,
            crate::models::InsertOutcome,
            crate::models::UpdateOutcome,
            crate::models::DeleteOutcome,
            crate::services::token_service::TokenRequest,
            crate::services::token_service::TokenResponse,
            crate::api::users::AdminStatus,
        )
    ),
    tags(
        (name = "Auth", description = "Credential issuance. Signs caller-supplied claims with a 1-hour expiry."),
        (name = "Health", description = "Liveness endpoint."),
        (name = "Users", description = "User directory and role management. Listing, promotion, and deletion are admin-gated."),
        (name = "Assets", description = "Inventory assets. Creation is admin-gated; reads, replace, and delete are open."),
        (name = "MyAssets", description = "Per-user asset records partitioned by a caller-supplied email."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter the token returned by POST /jwt"))
                        .build(),
                ),
            );
        }
    }
}
