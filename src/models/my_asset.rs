use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Asset-shaped record scoped to one user's email. The email is a
/// caller-supplied partition key; it is not cross-checked against the
/// authenticated identity (see DESIGN.md).
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MyAsset {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serde_oid::serialize",
        default
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub email: String,
    pub name: String,
    pub image: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub price: f64,
    pub date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MyAssetInput {
    pub email: String,
    pub name: String,
    pub image: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub price: f64,
    pub date: String,
}

impl From<MyAssetInput> for MyAsset {
    fn from(input: MyAssetInput) -> Self {
        Self {
            id: None,
            email: input.email,
            name: input.name,
            image: input.image,
            quantity: input.quantity,
            asset_type: input.asset_type,
            price: input.price,
            date: input.date,
        }
    }
}
