use crate::db;
use crate::errors::ApiError;
use crate::middleware::authentication::require_owner;
use crate::models;
use actix_web::{get, web, Responder};
use mongodb::Database;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

#[tracing::instrument(name = "List queries.")]
#[get("")]
pub async fn list_handler(
    params: web::Query<ListParams>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let queries = db::queries::fetch_all(db.get_ref(), params.search.as_deref()).await?;

    Ok(web::Json(queries))
}

#[tracing::instrument(name = "List queries by owner.")]
#[get("/email/{email}")]
pub async fn owner_list_handler(
    user: Option<web::ReqData<Arc<models::User>>>,
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let email = path.into_inner().0;
    require_owner(user.map(web::ReqData::into_inner), &email)?;

    let queries = db::queries::fetch_by_owner(db.get_ref(), &email).await?;

    Ok(web::Json(queries))
}

// An unknown id is not an error here: the client receives `null` and treats
// it as absence.
#[tracing::instrument(name = "Get query.")]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let query = db::queries::fetch(db.get_ref(), &id).await?;

    Ok(web::Json(query))
}
