use crate::database::{MongoDB, MY_ASSETS_COLLECTION};
use crate::models::{DeleteOutcome, InsertOutcome, MyAsset, MyAssetInput};
use crate::utils::{parse_object_id, AppError};
use futures::TryStreamExt;
use mongodb::bson::doc;

/// Listing is partitioned by the caller-supplied email only; there is no
/// cross-check against the authenticated identity (see DESIGN.md).
pub async fn list_by_email(db: &MongoDB, email: &str) -> Result<Vec<MyAsset>, AppError> {
    let my_assets: Vec<MyAsset> = db
        .collection::<MyAsset>(MY_ASSETS_COLLECTION)
        .find(doc! { "email": email })
        .await?
        .try_collect()
        .await?;
    Ok(my_assets)
}

pub async fn create_my_asset(db: &MongoDB, input: MyAssetInput) -> Result<InsertOutcome, AppError> {
    let result = db
        .collection::<MyAsset>(MY_ASSETS_COLLECTION)
        .insert_one(MyAsset::from(input))
        .await?;
    Ok(result.into())
}

pub async fn delete_my_asset(db: &MongoDB, id: &str) -> Result<DeleteOutcome, AppError> {
    let result = db
        .collection::<MyAsset>(MY_ASSETS_COLLECTION)
        .delete_one(doc! { "_id": parse_object_id(id)? })
        .await?;
    Ok(result.into())
}
