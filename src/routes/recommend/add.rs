use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::views;
use actix_web::{post, web, Responder};
use mongodb::Database;

// The parent query's counter is not touched here; the client follows up with
// the dedicated PATCH on the query.
#[tracing::instrument(name = "Add recommendation.")]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::Recommendation>,
    db: web::Data<Database>,
) -> Result<impl Responder, ApiError> {
    let result = db::recommend::insert(db.get_ref(), form.into_inner().into()).await?;

    Ok(web::Json(views::InsertAck::from(result)))
}
