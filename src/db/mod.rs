pub mod queries;
pub mod recommend;

use crate::errors::ApiError;
use mongodb::bson::oid::ObjectId;

pub(crate) fn object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(format!("malformed identifier: {id}")))
}

pub(crate) fn store_error(err: mongodb::error::Error) -> ApiError {
    tracing::error!("Failed to execute database operation: {:?}", err);
    ApiError::ServiceUnavailable("database operation failed".to_string())
}
