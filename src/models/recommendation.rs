use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// One user's endorsement of another user's query, stored in the `recommend`
/// collection. Submissions are stored verbatim; the named fields are the
/// ones the listing filters match on. `queries_id` keeps the parent query id
/// as the hex string the client sent, and the denormalized display context
/// travels in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_object_id_as_hex",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub queries_id: Option<String>,
    /// Email of the endorsing user.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendation_email: Option<String>,
    /// Email of the target query's owner.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
