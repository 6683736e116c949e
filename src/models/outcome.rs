use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use utoipa::ToSchema;

/// Typed mirror of the driver's insert result, camelCase on the wire like
/// the other outcome descriptors below.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inserted_id: Option<String>,
}

impl InsertOutcome {
    /// No-op success marker for idempotent registration of an existing
    /// identity. `insertedId` is explicitly null, never omitted.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            inserted_id: None,
        }
    }
}

impl From<InsertOneResult> for InsertOutcome {
    fn from(result: InsertOneResult) -> Self {
        Self {
            message: None,
            inserted_id: result.inserted_id.as_object_id().map(|id| id.to_hex()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .as_ref()
                .and_then(|id| id.as_object_id())
                .map(|id| id.to_hex()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}
