use crate::database::{MongoDB, USERS_COLLECTION};
use crate::models::{DeleteOutcome, InsertOutcome, NewUser, UpdateOutcome, User};
use crate::utils::{parse_object_id, AppError};
use futures::TryStreamExt;
use mongodb::bson::doc;

pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, AppError> {
    let users: Vec<User> = db
        .collection::<User>(USERS_COLLECTION)
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    Ok(users)
}

pub async fn find_by_email(db: &MongoDB, email: &str) -> Result<Option<User>, AppError> {
    let user = db
        .collection::<User>(USERS_COLLECTION)
        .find_one(doc! { "email": email })
        .await?;
    Ok(user)
}

/// False when the user record does not exist at all.
pub async fn is_admin(db: &MongoDB, email: &str) -> Result<bool, AppError> {
    let user = find_by_email(db, email).await?;
    Ok(matches!(user, Some(u) if u.is_admin()))
}

/// Idempotent by email: an existing identity yields a no-op marker with
/// `insertedId: null` and no write.
pub async fn register_user(db: &MongoDB, new_user: NewUser) -> Result<InsertOutcome, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    if collection
        .find_one(doc! { "email": &new_user.email })
        .await?
        .is_some()
    {
        return Ok(InsertOutcome::already_exists("user already exists"));
    }

    let result = collection.insert_one(User::from(new_user)).await?;
    Ok(result.into())
}

/// Unconditional role set by store identifier. A missing target simply
/// reports `matchedCount: 0`; there is no existence check and no demotion
/// counterpart anywhere in the API.
pub async fn promote_to_admin(db: &MongoDB, id: &str) -> Result<UpdateOutcome, AppError> {
    let result = db
        .collection::<User>(USERS_COLLECTION)
        .update_one(
            doc! { "_id": parse_object_id(id)? },
            doc! { "$set": { "role": "admin" } },
        )
        .await?;
    Ok(result.into())
}

/// No cascade: the user's assets and my-assets are left untouched.
pub async fn delete_user(db: &MongoDB, id: &str) -> Result<DeleteOutcome, AppError> {
    let result = db
        .collection::<User>(USERS_COLLECTION)
        .delete_one(doc! { "_id": parse_object_id(id)? })
        .await?;
    Ok(result.into())
}
