use crate::db;
use crate::errors::ApiError;
use crate::views;
use actix_web::{delete, web, Responder};
use mongodb::Database;

#[tracing::instrument(name = "Delete recommendation.")]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let result = db::recommend::delete(db.get_ref(), &id).await?;

    Ok(web::Json(views::DeleteAck::from(result)))
}
