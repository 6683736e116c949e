use crate::database::{MongoDB, ASSETS_COLLECTION};
use crate::models::{Asset, AssetInput, DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::utils::{parse_object_id, AppError};
use futures::TryStreamExt;
use mongodb::bson::doc;

pub async fn list_assets(db: &MongoDB) -> Result<Vec<Asset>, AppError> {
    let assets: Vec<Asset> = db
        .collection::<Asset>(ASSETS_COLLECTION)
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    Ok(assets)
}

pub async fn create_asset(db: &MongoDB, input: AssetInput) -> Result<InsertOutcome, AppError> {
    let result = db
        .collection::<Asset>(ASSETS_COLLECTION)
        .insert_one(Asset::from(input))
        .await?;
    Ok(result.into())
}

pub async fn get_asset(db: &MongoDB, id: &str) -> Result<Option<Asset>, AppError> {
    let asset = db
        .collection::<Asset>(ASSETS_COLLECTION)
        .find_one(doc! { "_id": parse_object_id(id)? })
        .await?;
    Ok(asset)
}

/// Full-document replace keyed by identifier, creating the record when it
/// does not exist. Only the six asset fields are written; the typed body
/// already dropped anything else the caller sent.
pub async fn replace_asset(
    db: &MongoDB,
    id: &str,
    input: AssetInput,
) -> Result<UpdateOutcome, AppError> {
    let result = db
        .collection::<Asset>(ASSETS_COLLECTION)
        .update_one(
            doc! { "_id": parse_object_id(id)? },
            doc! { "$set": {
                "name": &input.name,
                "image": &input.image,
                "quantity": input.quantity,
                "type": &input.asset_type,
                "price": input.price,
                "date": &input.date,
            }},
        )
        .upsert(true)
        .await?;
    Ok(result.into())
}

pub async fn delete_asset(db: &MongoDB, id: &str) -> Result<DeleteOutcome, AppError> {
    let result = db
        .collection::<Asset>(ASSETS_COLLECTION)
        .delete_one(doc! { "_id": parse_object_id(id)? })
        .await?;
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use mongodb::Client;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(&uri).await.unwrap();
        MongoDB::with_client(client, "quantumAssetTestDB")
    }

    fn laptop_input() -> AssetInput {
        AssetInput {
            name: "Laptop".to_string(),
            image: "laptop.png".to_string(),
            quantity: 3,
            asset_type: "electronics".to_string(),
            price: 999.5,
            date: "2024-01-15".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn created_asset_round_trips_by_returned_identifier() {
        let db = test_db().await;

        let outcome = create_asset(&db, laptop_input()).await.unwrap();
        let id = outcome.inserted_id.unwrap();

        let fetched = get_asset(&db, &id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Laptop");
        assert_eq!(fetched.image, "laptop.png");
        assert_eq!(fetched.quantity, 3);
        assert_eq!(fetched.asset_type, "electronics");
        assert_eq!(fetched.price, 999.5);
        assert_eq!(fetched.date, "2024-01-15");

        delete_asset(&db, &id).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn upserting_an_unknown_identifier_creates_the_record() {
        let db = test_db().await;
        let fresh_id = ObjectId::new().to_hex();

        let outcome = replace_asset(&db, &fresh_id, laptop_input()).await.unwrap();
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.upserted_id.as_deref(), Some(fresh_id.as_str()));

        let fetched = get_asset(&db, &fresh_id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Laptop");

        let deleted = delete_asset(&db, &fresh_id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);
    }

    #[tokio::test]
    async fn malformed_identifier_fails_every_id_keyed_operation() {
        let db = test_db().await;
        assert!(matches!(
            get_asset(&db, "nope").await,
            Err(AppError::InvalidId(_))
        ));
        assert!(matches!(
            replace_asset(&db, "nope", laptop_input()).await,
            Err(AppError::InvalidId(_))
        ));
        assert!(matches!(
            delete_asset(&db, "nope").await,
            Err(AppError::InvalidId(_))
        ));
    }
}
