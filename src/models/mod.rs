pub mod asset;
pub mod my_asset;
pub mod outcome;
pub mod user;

pub use asset::*;
pub use my_asset::*;
pub use outcome::*;
pub use user::*;

/// Serializes an optional `ObjectId` as its 24-char hex form so responses
/// carry plain string identifiers instead of extended-JSON `$oid` objects.
pub(crate) mod serde_oid {
    use mongodb::bson::oid::ObjectId;
    use serde::Serializer;

    pub fn serialize<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => serializer.serialize_str(&id.to_hex()),
            None => serializer.serialize_none(),
        }
    }
}
