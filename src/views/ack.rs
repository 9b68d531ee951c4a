use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde_derive::Serialize;

// Response mirrors of the driver acknowledgments, matching the field names
// the MongoDB wire protocol exposes to JavaScript clients.

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
    pub matched_count: u64,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

fn id_hex(id: &Bson) -> Option<String> {
    id.as_object_id().map(|id| id.to_hex())
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id_hex(&result.inserted_id),
        }
    }
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().and_then(id_hex),
            upserted_count: result.upserted_id.is_some() as u64,
            matched_count: result.matched_count,
        }
    }
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acks_serialize_in_camel_case() {
        let ack = UpdateAck {
            acknowledged: true,
            modified_count: 1,
            upserted_id: None,
            upserted_count: 0,
            matched_count: 1,
        };

        let json = serde_json::to_value(&ack).expect("Failed to serialize ack");
        assert_eq!(
            serde_json::json!({
                "acknowledged": true,
                "modifiedCount": 1,
                "upsertedId": null,
                "upsertedCount": 0,
                "matchedCount": 1
            }),
            json
        );
    }

    #[test]
    fn delete_of_nothing_reports_zero_documents() {
        let json = serde_json::to_value(DeleteAck {
            acknowledged: true,
            deleted_count: 0,
        })
        .expect("Failed to serialize ack");

        assert_eq!(0, json["deletedCount"]);
    }
}
