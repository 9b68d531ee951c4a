use crate::db;
use crate::errors::ApiError;
use crate::views;
use actix_web::{delete, web, Responder};
use mongodb::Database;

// No ownership check here: any caller who can reach the route may delete any
// record. Matches the deployed client contract.
#[tracing::instrument(name = "Delete query.")]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let result = db::queries::delete(db.get_ref(), &id).await?;

    Ok(web::Json(views::DeleteAck::from(result)))
}
