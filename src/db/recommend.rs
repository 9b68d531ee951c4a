use super::{object_id, store_error};
use crate::errors::ApiError;
use crate::models;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Collection, Database};
use tracing::Instrument;

const COLLECTION: &str = "recommend";

fn collection(db: &Database) -> Collection<models::Recommendation> {
    db.collection::<models::Recommendation>(COLLECTION)
}

pub async fn insert(
    db: &Database,
    recommendation: models::Recommendation,
) -> Result<InsertOneResult, ApiError> {
    let query_span = tracing::info_span!("Saving new recommendation into the database.");
    async {
        collection(db)
            .insert_one(&recommendation)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}

pub async fn fetch_all(db: &Database) -> Result<Vec<models::Recommendation>, ApiError> {
    let query_span = tracing::info_span!("Fetch all recommendations.");
    async {
        let cursor = collection(db).find(doc! {}).await.map_err(store_error)?;

        cursor.try_collect().await.map_err(store_error)
    }
    .instrument(query_span)
    .await
}

/// Recommendations a user has made for others.
pub async fn fetch_by_endorser(
    db: &Database,
    email: &str,
) -> Result<Vec<models::Recommendation>, ApiError> {
    let query_span = tracing::info_span!("Fetch recommendations by endorser.");
    async {
        let cursor = collection(db)
            .find(doc! { "recommendationEmail": email })
            .await
            .map_err(store_error)?;

        cursor.try_collect().await.map_err(store_error)
    }
    .instrument(query_span)
    .await
}

/// Recommendations made against a user's own queries.
pub async fn fetch_by_target_owner(
    db: &Database,
    email: &str,
) -> Result<Vec<models::Recommendation>, ApiError> {
    let query_span = tracing::info_span!("Fetch recommendations by target owner.");
    async {
        let cursor = collection(db)
            .find(doc! { "email": email })
            .await
            .map_err(store_error)?;

        cursor.try_collect().await.map_err(store_error)
    }
    .instrument(query_span)
    .await
}

// The parent query id is stored as the hex string the client sent, so no
// ObjectId conversion happens here.
pub async fn fetch_by_query(
    db: &Database,
    queries_id: &str,
) -> Result<Vec<models::Recommendation>, ApiError> {
    let query_span = tracing::info_span!("Fetch recommendations by parent query.");
    async {
        let cursor = collection(db)
            .find(doc! { "queriesId": queries_id })
            .await
            .map_err(store_error)?;

        cursor.try_collect().await.map_err(store_error)
    }
    .instrument(query_span)
    .await
}

pub async fn delete(db: &Database, id: &str) -> Result<DeleteResult, ApiError> {
    let filter = doc! { "_id": object_id(id)? };
    let query_span = tracing::info_span!("Deleting recommendation.");
    async {
        collection(db)
            .delete_one(filter)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}
