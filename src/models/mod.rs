mod query;
mod recommendation;
pub mod user;

pub use query::*;
pub use recommendation::*;
pub use user::*;

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

// Documents go out with their `_id` as the plain hex string the client works
// with, not the extended-JSON `{"$oid": ...}` form.
pub(crate) fn serialize_object_id_as_hex<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.serialize_str(&id.to_hex()),
        None => serializer.serialize_none(),
    }
}
