use crate::db;
use crate::errors::ApiError;
use crate::middleware::authentication::require_owner;
use crate::models;
use actix_web::{get, web, Responder};
use mongodb::Database;
use std::sync::Arc;

#[tracing::instrument(name = "List all recommendations.")]
#[get("")]
pub async fn list_handler(db: web::Data<Database>) -> Result<impl Responder, ApiError> {
    let recommendations = db::recommend::fetch_all(db.get_ref()).await?;

    Ok(web::Json(recommendations))
}

#[tracing::instrument(name = "List recommendations made by a user.")]
#[get("/myRecommrnd/{email}")]
pub async fn endorser_list_handler(
    user: Option<web::ReqData<Arc<models::User>>>,
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let email = path.into_inner().0;
    require_owner(user.map(web::ReqData::into_inner), &email)?;

    let recommendations = db::recommend::fetch_by_endorser(db.get_ref(), &email).await?;

    Ok(web::Json(recommendations))
}

#[tracing::instrument(name = "List recommendations made for a user.")]
#[get("/RecommendForMe/{email}")]
pub async fn target_list_handler(
    user: Option<web::ReqData<Arc<models::User>>>,
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let email = path.into_inner().0;
    require_owner(user.map(web::ReqData::into_inner), &email)?;

    let recommendations = db::recommend::fetch_by_target_owner(db.get_ref(), &email).await?;

    Ok(web::Json(recommendations))
}

#[tracing::instrument(name = "List recommendations for a query.")]
#[get("/{queries_id}")]
pub async fn by_query_list_handler(
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let queries_id = path.into_inner().0;
    let recommendations = db::recommend::fetch_by_query(db.get_ref(), &queries_id).await?;

    Ok(web::Json(recommendations))
}
