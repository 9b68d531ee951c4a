use super::{object_id, store_error};
use crate::errors::ApiError;
use crate::forms;
use crate::models;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};
use tracing::Instrument;

const COLLECTION: &str = "queries";

fn collection(db: &Database) -> Collection<models::Query> {
    db.collection::<models::Query>(COLLECTION)
}

/// Case-insensitive substring filter on the product name; an empty or absent
/// search term selects everything.
pub fn search_filter(search: Option<&str>) -> Document {
    match search {
        Some(term) if !term.is_empty() => doc! {
            "productName": { "$regex": term, "$options": "i" }
        },
        _ => Document::new(),
    }
}

pub async fn fetch_all(
    db: &Database,
    search: Option<&str>,
) -> Result<Vec<models::Query>, ApiError> {
    let query_span = tracing::info_span!("Fetch queries.");
    async {
        let cursor = collection(db)
            .find(search_filter(search))
            .await
            .map_err(store_error)?;

        cursor.try_collect().await.map_err(store_error)
    }
    .instrument(query_span)
    .await
}

pub async fn fetch_by_owner(db: &Database, email: &str) -> Result<Vec<models::Query>, ApiError> {
    let query_span = tracing::info_span!("Fetch queries by owner email.");
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

pub async fn fetch(db: &Database, id: &str) -> Result<Option<models::Query>, ApiError> {
    let filter = doc! { "_id": object_id(id)? };
    let query_span = tracing::info_span!("Fetch query by id.");
    async {
        collection(db)
            .find_one(filter)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}

pub async fn insert(db: &Database, query: models::Query) -> Result<InsertOneResult, ApiError> {
    let query_span = tracing::info_span!("Saving new query into the database.");
    async {
        collection(db)
            .insert_one(&query)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}

/// Whole-record replacement of the editable field set; creates the document
/// under the given id when it does not exist yet.
pub async fn replace(
    db: &Database,
    id: &str,
    form: &forms::Query,
) -> Result<UpdateResult, ApiError> {
    let filter = doc! { "_id": object_id(id)? };
    // Absent fields are written as null, matching what the JavaScript driver
    // stores for an incomplete submission.
    let update = doc! {
        "$set": {
            "productName": form.product_name.clone(),
            "productBrand": form.product_brand.clone(),
            "queryTitle": form.query_title.clone(),
            "boycottingDetails": form.boycotting_details.clone(),
            "imageURL": form.image_url.clone(),
        },
    };
    let query_span = tracing::info_span!("Replacing query fields.");
    async {
        collection(db)
            .update_one(filter, update)
            .upsert(true)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}

/// Single atomic counter mutation; an absent counter behaves as zero and no
/// floor is applied, so the count can go negative.
pub async fn adjust_recommendation_count(
    db: &Database,
    id: &str,
    delta: i32,
) -> Result<UpdateResult, ApiError> {
    let filter = doc! { "_id": object_id(id)? };
    let update = doc! { "$inc": { "recommendationCount": delta } };
    let query_span = tracing::info_span!("Adjusting recommendation count.");
    async {
        collection(db)
            .update_one(filter, update)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}

pub async fn delete(db: &Database, id: &str) -> Result<DeleteResult, ApiError> {
    let filter = doc! { "_id": object_id(id)? };
    let query_span = tracing::info_span!("Deleting query.");
    async {
        collection(db)
            .delete_one(filter)
            .await
            .map_err(store_error)
    }
    .instrument(query_span)
    .await
}
