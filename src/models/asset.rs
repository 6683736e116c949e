use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inventory item. Readable by anyone; creation is admin-gated.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Asset {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serde_oid::serialize",
        default
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub image: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub price: f64,
    pub date: String,
}

/// Typed insert/replace body. Exactly these six fields make it into the
/// store; anything else the caller sends is dropped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssetInput {
    pub name: String,
    pub image: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub price: f64,
    pub date: String,
}

impl From<AssetInput> for Asset {
    fn from(input: AssetInput) -> Self {
        Self {
            id: None,
            name: input.name,
            image: input.image,
            quantity: input.quantity,
            asset_type: input.asset_type,
            price: input.price,
            date: input.date,
        }
    }
}
