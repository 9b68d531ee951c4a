use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::views;
use actix_web::{patch, put, web, Responder};
use mongodb::Database;

#[tracing::instrument(name = "Replace query fields.")]
#[put("/{id}")]
pub async fn replace_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::Query>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let result = db::queries::replace(db.get_ref(), &id, &form).await?;

    Ok(web::Json(views::UpdateAck::from(result)))
}

#[tracing::instrument(name = "Increment recommendation count.")]
#[patch("/{id}")]
pub async fn increment_count_handler(
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let result = db::queries::adjust_recommendation_count(db.get_ref(), &id, 1).await?;

    Ok(web::Json(views::UpdateAck::from(result)))
}

#[tracing::instrument(name = "Decrement recommendation count.")]
#[patch("/desRecom/{id}")]
pub async fn decrement_count_handler(
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let result = db::queries::adjust_recommendation_count(db.get_ref(), &id, -1).await?;

    Ok(web::Json(views::UpdateAck::from(result)))
}
