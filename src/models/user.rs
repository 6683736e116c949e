use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Directory entry for an authenticated identity. `role` is absent for
/// regular users and `"admin"` for elevated ones; there is no other role.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct User {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serde_oid::serialize",
        default
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Self-registration body. Role is never caller-supplied; promotion is a
/// separate admin-gated operation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            id: None,
            email: new_user.email,
            name: new_user.name,
            role: None,
        }
    }
}
