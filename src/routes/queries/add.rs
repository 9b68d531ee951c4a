use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::views;
use actix_web::{post, web, Responder};
use mongodb::Database;

#[tracing::instrument(name = "Add query.")]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::Query>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let result = db::queries::insert(db.get_ref(), form.into_inner().into()).await?;

    Ok(web::Json(views::InsertAck::from(result)))
}
